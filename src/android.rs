//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JByteArray, JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{defaults, field_to_json, render_bytes_to_svg};

/// Render stored field JSON bytes to SVG.
///
/// Called from Kotlin as:
///   external fun renderBytes(data: ByteArray, width: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_coachcrowe_app_FieldLib_renderBytes(
    mut env: JNIEnv,
    _class: JClass,
    data: JByteArray,
    width: jfloat,
) -> jstring {
    let bytes = match env.convert_byte_array(&data) {
        Ok(b) => b,
        Err(_) => return std::ptr::null_mut(),
    };

    let w = if width > 0.0 { Some(width as f64) } else { None };

    match render_bytes_to_svg(&bytes, w) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::warn!("renderBytes: {e}");
            std::ptr::null_mut()
        }
    }
}

/// JSON payload of a built-in field.
///
/// Called from Kotlin as:
///   external fun defaultField(name: String): String?
#[no_mangle]
pub extern "system" fn Java_com_coachcrowe_app_FieldLib_defaultField(
    mut env: JNIEnv,
    _class: JClass,
    name: JString,
) -> jstring {
    let name: String = match env.get_string(&name) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match defaults::by_name(&name).and_then(|model| field_to_json(&model)) {
        Ok(json) => match env.new_string(&json) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}
