//! fieldlib — sports field geometry and rendering library for CoachCrowe.
//!
//! A field (basketball or football, half or full) is stored as a JSON
//! payload of dimensionless ratios plus colors. This crate decodes that
//! payload, derives the absolute geometry for a target width, and renders it
//! to styled vector paths or SVG.
//!
//! # Example
//! ```
//! use fieldlib::{decode, defaults, encode, render_field_to_svg, FieldModel, RenderConfig};
//!
//! let bytes = encode(&FieldModel::from(defaults::half_basketball())).unwrap();
//! let model = decode(&bytes).unwrap();
//! let svg = render_field_to_svg(&model, &RenderConfig::with_width(300.0));
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod config;
pub mod defaults;
pub mod error;
pub mod geometry;
pub mod model;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use config::{DeviceMetrics, RenderConfig};
pub use error::FieldError;
pub use model::*;
pub use renderer::{render_field, render_field_to_svg, FieldDrawing, Shape, Style};

/// Decode a stored field payload. Fails only on malformed or
/// schema-incompatible input.
pub fn decode(data: &[u8]) -> Result<FieldModel, FieldError> {
    FieldModel::from_slice(data)
}

/// Encode a field model into the stored JSON payload.
pub fn encode(model: &FieldModel) -> Result<Vec<u8>, FieldError> {
    model.to_vec()
}

/// Convert a field model to a pretty JSON string.
/// Useful for passing data across FFI boundaries.
pub fn field_to_json(model: &FieldModel) -> Result<String, FieldError> {
    serde_json::to_string_pretty(model).map_err(FieldError::Encode)
}

/// Decode a stored payload and render it to SVG.
///
/// `width` sets the SVG width in user units. Pass `None` to use the
/// default; on phones, pass the component width from [`DeviceMetrics`].
pub fn render_bytes_to_svg(data: &[u8], width: Option<f64>) -> Result<String, FieldError> {
    let model = decode(data)?;
    Ok(render_field_to_svg(&model, &RenderConfig::from_option(width)))
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

fn into_c_string(s: String) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

/// Decode field JSON bytes and return SVG as a C string.
/// Returns null if the payload cannot be decoded; the caller shows its
/// placeholder in that case. Free the result with `fieldlib_free_string`.
///
/// `width` sets the SVG width in user units. Pass 0.0 to use the default.
///
/// # Safety
/// `data` must point to `len` valid bytes.
#[no_mangle]
pub unsafe extern "C" fn fieldlib_render_bytes(
    data: *const u8,
    len: usize,
    width: f64,
) -> *mut c_char {
    if data.is_null() || len == 0 {
        return std::ptr::null_mut();
    }
    let bytes = unsafe { std::slice::from_raw_parts(data, len) };

    let w = if width > 0.0 { Some(width) } else { None };

    match render_bytes_to_svg(bytes, w) {
        Ok(svg) => into_c_string(svg),
        Err(e) => {
            log::warn!("fieldlib_render_bytes: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Return the JSON payload of a built-in field, e.g. `"half-basketball"`.
/// Free the result with `fieldlib_free_string`.
///
/// # Safety
/// `name` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fieldlib_default_field(name: *const c_char) -> *mut c_char {
    if name.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(name) };
    let name = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match defaults::by_name(name).and_then(|model| field_to_json(&model)) {
        Ok(json) => into_c_string(json),
        Err(e) => {
            log::warn!("fieldlib_default_field: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by fieldlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fieldlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fieldlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
