//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for using panelvp from other
//! languages. Advisory diagnostics are not returned; they go to the `log`
//! facade of the host process.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use crate::render::JsonFormat;
use crate::{parse_file, parse_str, render, Converter};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct PanelvpResult {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `panelvp_free_result`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `panelvp_free_result`.
    pub error: *mut c_char,
}

impl PanelvpResult {
    fn success(data: String) -> Self {
        Self {
            success: true,
            data: CString::new(data).unwrap_or_default().into_raw(),
            error: ptr::null_mut(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

fn json_format(pretty: bool) -> JsonFormat {
    if pretty {
        JsonFormat::Pretty
    } else {
        JsonFormat::Compact
    }
}

/// Convert a source document file to the viewport JSON array.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `panelvp_free_result`.
#[no_mangle]
pub unsafe extern "C" fn panelvp_convert_file(path: *const c_char, pretty: bool) -> PanelvpResult {
    if path.is_null() {
        return PanelvpResult::error("Path cannot be null".to_string());
    }

    let path_str = match CStr::from_ptr(path).to_str() {
        Ok(s) => s,
        Err(_) => return PanelvpResult::error("Invalid UTF-8 path".to_string()),
    };

    match convert_file_internal(Path::new(path_str), json_format(pretty)) {
        Ok(json) => PanelvpResult::success(json),
        Err(e) => PanelvpResult::error(e.to_string()),
    }
}

fn convert_file_internal(path: &Path, format: JsonFormat) -> crate::Result<String> {
    let doc = parse_file(path)?;
    let result = Converter::default().convert(&doc)?;
    render::to_json(&result.pages, format)
}

/// Convert source document JSON text to the viewport JSON array.
///
/// # Safety
///
/// The `json` must be a valid null-terminated UTF-8 string.
/// The returned result must be freed with `panelvp_free_result`.
#[no_mangle]
pub unsafe extern "C" fn panelvp_convert_json(json: *const c_char, pretty: bool) -> PanelvpResult {
    if json.is_null() {
        return PanelvpResult::error("JSON cannot be null".to_string());
    }

    let json_str = match CStr::from_ptr(json).to_str() {
        Ok(s) => s,
        Err(_) => return PanelvpResult::error("Invalid UTF-8 JSON".to_string()),
    };

    match convert_json_internal(json_str, json_format(pretty)) {
        Ok(output) => PanelvpResult::success(output),
        Err(e) => PanelvpResult::error(e.to_string()),
    }
}

fn convert_json_internal(json: &str, format: JsonFormat) -> crate::Result<String> {
    let doc = parse_str(json)?;
    let result = Converter::default().convert(&doc)?;
    render::to_json(&result.pages, format)
}

/// Free a result returned by any panelvp function.
///
/// # Safety
///
/// The `result` must have been returned by a panelvp function.
/// This function should only be called once per result.
#[no_mangle]
pub unsafe extern "C" fn panelvp_free_result(result: PanelvpResult) {
    if !result.data.is_null() {
        drop(CString::from_raw(result.data));
    }
    if !result.error.is_null() {
        drop(CString::from_raw(result.error));
    }
}

/// Get the version of the panelvp library.
///
/// The returned string is statically allocated and should not be freed.
#[no_mangle]
pub extern "C" fn panelvp_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_json_null_pointer() {
        let result = unsafe { panelvp_convert_json(ptr::null(), false) };
        assert!(!result.success);
        assert!(!result.error.is_null());
        unsafe { panelvp_free_result(result) };
    }

    #[test]
    fn test_convert_json_fatal_error() {
        let input = CString::new(
            r#"{"id": 1, "page_count": 2, "pages": [], "is_rtl": false, "viewport_count": 0}"#,
        )
        .unwrap();
        let result = unsafe { panelvp_convert_json(input.as_ptr(), false) };
        assert!(!result.success);
        let message = unsafe { CStr::from_ptr(result.error) }.to_str().unwrap().to_string();
        assert!(message.contains("Page count"));
        unsafe { panelvp_free_result(result) };
    }

    #[test]
    fn test_convert_json_empty_book() {
        let input = CString::new(
            r#"{"id": 1, "page_count": 0, "pages": [], "is_rtl": true, "viewport_count": 0}"#,
        )
        .unwrap();
        let result = unsafe { panelvp_convert_json(input.as_ptr(), false) };
        assert!(result.success);
        let data = unsafe { CStr::from_ptr(result.data) }.to_str().unwrap().to_string();
        assert_eq!(data, "[]");
        unsafe { panelvp_free_result(result) };
    }

    #[test]
    fn test_version() {
        let version = unsafe { CStr::from_ptr(panelvp_version()) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }
}
