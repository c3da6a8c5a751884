//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge. Requests and
//! results cross the boundary as JSON strings; any error becomes `null`.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::{catalog_json, layout_request_to_json, render_request_to_svg, Result};

fn to_jstring(env: &mut JNIEnv, result: Result<String>) -> jstring {
    match result {
        Ok(s) => match env.new_string(&s) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a JSON fretboard request to SVG.
///
/// Called from Kotlin as:
///   external fun renderSvg(requestJson: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_renderSvg(
    mut env: JNIEnv,
    _class: JClass,
    request_json: JString,
) -> jstring {
    let json: String = match env.get_string(&request_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };
    let result = render_request_to_svg(&json);
    to_jstring(&mut env, result)
}

/// Compute the diagram for a JSON request and return it as JSON.
///
/// Called from Kotlin as:
///   external fun layoutJson(requestJson: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_layoutJson(
    mut env: JNIEnv,
    _class: JClass,
    request_json: JString,
) -> jstring {
    let json: String = match env.get_string(&request_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };
    let result = layout_request_to_json(&json);
    to_jstring(&mut env, result)
}

/// Selector options for populating the pickers.
///
/// Called from Kotlin as:
///   external fun catalogJson(): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_catalogJson(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    to_jstring(&mut env, catalog_json())
}
