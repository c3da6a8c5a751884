//! Rendering tests — build diagrams from JSON requests and render them.

use fretlib::{
    build_diagram, catalog, layout_request_to_json, render_request_to_svg,
    render_request_to_text, Diagram, DiagramRenderer, FretError, FretboardRequest, SvgRenderer,
    TextRenderer,
};
use pretty_assertions::assert_eq;
use std::ffi::{CStr, CString};
use std::path::PathBuf;

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn diagram(json: &str) -> Diagram {
    build_diagram(&FretboardRequest::from_json(json).unwrap()).unwrap()
}

#[test]
fn render_a_minor_pentatonic_svg() {
    let svg = render_request_to_svg(r#"{"root": "A", "scale": "minorPent", "showChords": true}"#)
        .expect("Failed to render A minor pentatonic");

    // Basic SVG structure checks
    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert!(svg.contains("viewBox="), "SVG should have viewBox");
    assert!(svg.contains("A Pentatónica Menor"), "SVG should contain title");

    // Strings and frets
    assert!(svg.contains("<line"), "SVG should contain lines (strings and frets)");

    // Note discs, with at least one highlighted root
    assert!(svg.contains(r#"class="note root""#));
    assert!(svg.contains(r#"class="note""#));

    // Chord panel in the compact profile
    assert!(svg.contains("Acordes por grado:"));
    assert!(svg.contains(">I: A<"));
    assert!(svg.contains(">II: C<"));

    // Write to file for visual inspection
    let out = output_dir().join("a-minor-pentatonic.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered a-minor-pentatonic.svg ({} bytes)", svg.len());
}

#[test]
fn svg_has_one_disc_per_scale_cell() {
    let d = diagram(r#"{"instrument": "bass", "root": "E", "scale": "majorPent", "profile": "full"}"#);
    let populated = d
        .board
        .strings
        .iter()
        .flat_map(|s| s.cells.iter())
        .filter(|c| c.in_scale)
        .count();
    let svg = SvgRenderer.render(&d);
    assert_eq!(svg.matches("<circle").count(), populated);
    assert!(!svg.contains("Acordes por grado:"), "full profile has no chord panel");
}

#[test]
fn svg_marks_inlay_frets() {
    let svg = render_request_to_svg(r#"{"profile": "full"}"#).unwrap();
    assert!(svg.contains(">•<"));
    assert!(svg.contains(">••<"));
    // Fret-number row runs 0..=24.
    assert!(svg.contains(">24<"));
    assert!(!svg.contains(">25<"));
}

#[test]
fn text_grid_brackets_roots() {
    let text = render_request_to_text(r#"{"root": "A", "scale": "minorPent"}"#).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "A Pentatónica Menor");
    // Title, fret numbers, markers, then six strings.
    assert_eq!(lines.len(), 9);
    assert!(lines[3].starts_with("E   |"));
    assert!(lines[7].starts_with("A   |"));
    assert!(lines[7].contains("[A]"));
}

#[test]
fn text_grid_columns_stay_aligned_with_long_labels() {
    // Bracketed Latin sharps and diminished chord names are the widest cells.
    let requests = [
        r#"{"root": "G#", "scale": "chromatic", "notation": "latin"}"#,
        r#"{"root": "D", "scale": "chromatic", "relative": "minor", "showChords": true}"#,
        r#"{"root": "C", "scale": "chromatic", "showDegrees": true, "profile": "full"}"#,
    ];
    for request in requests {
        let text = render_request_to_text(request).unwrap();
        let rows: Vec<&str> = text.lines().filter(|l| l.contains('|')).collect();
        assert_eq!(rows.len(), 6, "{request}");

        let bars = |row: &str| -> Vec<usize> {
            row.char_indices().filter(|&(_, c)| c == '|').map(|(i, _)| i).collect()
        };
        let first = bars(rows[0]);
        for row in &rows {
            assert_eq!(bars(row), first, "{request}: {row}");
        }
    }

    let text = render_request_to_text(r#"{"root": "G#", "scale": "chromatic", "notation": "latin"}"#)
        .unwrap();
    assert!(text.contains("[Sol#]"));
    let text = render_request_to_text(
        r#"{"root": "D", "scale": "chromatic", "relative": "minor", "showChords": true}"#,
    )
    .unwrap();
    assert!(text.contains("C#dim"));
    assert!(text.contains("[Bm]"));
}

#[test]
fn text_renderer_titles_in_active_notation() {
    let d = diagram(r#"{"root": "D", "scale": "dorian", "notation": "latin", "showChords": true}"#);
    let text = TextRenderer.render(&d);
    assert!(text.contains("Re Dórico"));
    assert!(text.contains("Acordes por grado: I: D  II: Em"));
}

#[test]
fn layout_json_round_trips() {
    let json = layout_request_to_json(r#"{"root": "E", "scale": "phrygian"}"#).unwrap();
    let parsed: Diagram = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, diagram(r#"{"root": "E", "scale": "phrygian"}"#));
}

#[test]
fn bad_requests_surface_errors() {
    assert!(matches!(
        render_request_to_svg(r#"{"scale": "nope"}"#),
        Err(FretError::InvalidScaleKey(_))
    ));
    assert!(matches!(
        render_request_to_svg(r#"{"root": "H"}"#),
        Err(FretError::InvalidNoteName(_))
    ));
    assert!(matches!(render_request_to_svg("not json"), Err(FretError::Request(_))));
}

#[test]
fn catalog_lists_selectors_in_table_order() {
    let catalog = catalog();
    assert_eq!(catalog.roots.len(), 12);
    assert_eq!(catalog.roots[1].name, "C#");
    assert_eq!(catalog.roots[1].latin_name, "Do#");
    assert_eq!(catalog.scales.first().map(|s| s.key), Some("ionian"));
    assert_eq!(catalog.scales.last().map(|s| s.key), Some("chromatic"));

    let bass = &catalog.instruments[1];
    let texts: Vec<&str> = bass.tunings.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        ["Afinación estándar (E A D G)", "Drop D (D A D G)", "5 cuerdas (B E A D G)"]
    );
}

#[test]
fn ffi_render_returns_svg_and_null_on_error() {
    let request = CString::new(r#"{"root": "G", "scale": "ionian"}"#).unwrap();
    let ptr = unsafe { fretlib::fretlib_render_svg(request.as_ptr()) };
    assert!(!ptr.is_null());
    let svg = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
    unsafe { fretlib::fretlib_free_string(ptr) };
    assert!(svg.starts_with("<svg"));

    let bad = CString::new(r#"{"tuning": "open"}"#).unwrap();
    let ptr = unsafe { fretlib::fretlib_render_svg(bad.as_ptr()) };
    assert!(ptr.is_null());

    let ptr = unsafe { fretlib::fretlib_render_svg(std::ptr::null()) };
    assert!(ptr.is_null());
}

#[test]
fn ffi_catalog_is_json() {
    let ptr = fretlib::fretlib_catalog_json();
    assert!(!ptr.is_null());
    let json = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap().to_string();
    unsafe { fretlib::fretlib_free_string(ptr) };
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["scales"].as_array().map(|a| a.len()), Some(13));
}
