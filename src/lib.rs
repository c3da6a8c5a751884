//! fretlib — scale and fretboard layout library for guitar and bass diagrams.
//!
//! Given a root, a scale, a tuning and a few display toggles, computes which
//! notes of the scale fall on which string/fret positions and hands the grid
//! to a renderer (SVG or plain text).
//!
//! # Example
//! ```no_run
//! use fretlib::{build_diagram, render_diagram_to_svg, FretboardRequest};
//!
//! let request = FretboardRequest::from_json(r#"{"root": "A", "scale": "minorPent"}"#).unwrap();
//! let diagram = build_diagram(&request).unwrap();
//! println!("Scale: {:?}", diagram.scale.notes);
//! let svg = render_diagram_to_svg(&diagram);
//! ```

pub mod engine;
pub mod error;
pub mod model;
pub mod renderer;
pub mod request;
pub mod tables;

#[cfg(target_os = "android")]
pub mod android;

pub use engine::{
    chord_list, chord_quality, compute_scale, degree_and_chord_labels, effective_root, layout,
    scale_labels, scale_notes, validate_fret_count, MAX_FRET_COUNT,
};
pub use error::{FretError, Result};
pub use model::*;
pub use renderer::{
    render_diagram_to_svg, render_diagram_to_text, DiagramRenderer, SvgRenderer, TextRenderer,
};
pub use request::{
    build_diagram, BoardConfig, FretProfile, FretboardRequest, ResolvedRequest, RootInput,
    ScaleRequest,
};
pub use tables::{catalog, find_scale, find_tuning, Catalog};

/// Parse a JSON request and compute its diagram.
pub fn build_diagram_from_json(request_json: &str) -> Result<Diagram> {
    build_diagram(&FretboardRequest::from_json(request_json)?)
}

/// Convert a diagram to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn diagram_to_json(diagram: &Diagram) -> Result<String> {
    Ok(serde_json::to_string_pretty(diagram)?)
}

/// Parse a JSON request and return the computed diagram as JSON.
pub fn layout_request_to_json(request_json: &str) -> Result<String> {
    diagram_to_json(&build_diagram_from_json(request_json)?)
}

/// Parse a JSON request and render it directly to SVG.
pub fn render_request_to_svg(request_json: &str) -> Result<String> {
    Ok(render_diagram_to_svg(&build_diagram_from_json(request_json)?))
}

/// Parse a JSON request and render it as a plain-text grid.
pub fn render_request_to_text(request_json: &str) -> Result<String> {
    Ok(render_diagram_to_text(&build_diagram_from_json(request_json)?))
}

/// Selector options (roots, scales, tunings per instrument) as JSON.
pub fn catalog_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&catalog())?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// # Safety
/// `ptr` must be null or a valid null-terminated C string.
unsafe fn request_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn into_c_string(result: Result<String>) -> *mut c_char {
    match result {
        Ok(s) => CString::new(s).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a JSON request to SVG and return it as a C string.
/// Returns null if the request is malformed or names an unknown key.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// `request_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_svg(request_json: *const c_char) -> *mut c_char {
    match unsafe { request_str(request_json) } {
        Some(json) => into_c_string(render_request_to_svg(json)),
        None => std::ptr::null_mut(),
    }
}

/// Compute the diagram for a JSON request and return it as JSON.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// `request_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_layout_json(request_json: *const c_char) -> *mut c_char {
    match unsafe { request_str(request_json) } {
        Some(json) => into_c_string(layout_request_to_json(json)),
        None => std::ptr::null_mut(),
    }
}

/// Selector catalog as JSON.
/// The caller must free the returned string with `fretlib_free_string`.
#[no_mangle]
pub extern "C" fn fretlib_catalog_json() -> *mut c_char {
    into_c_string(catalog_json())
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
