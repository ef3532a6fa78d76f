//! Greeting and string processing.

use std::ffi::c_char;

use super::strings::{borrow_str, string_call};
use crate::bridge;

/// Writes the greeting to `*out`.
///
/// # Safety
/// - `out` must be null or valid for a pointer write
/// - the string written to `*out` must be freed with `nb_string_free()`
///
/// # Returns
/// 0 on success, 1 if `out` is null.
#[no_mangle]
pub unsafe extern "C" fn nb_greet(out: *mut *mut c_char) -> i32 {
    string_call(out, || Ok(bridge::greet()))
}

/// Processes `input` and writes the result to `*out`.
///
/// `input` is only read during the call and is never freed by the library.
///
/// # Safety
/// - `input` must be null or a valid NUL-terminated string
/// - `out` must be null or valid for a pointer write
/// - the string written to `*out` must be freed with `nb_string_free()`
///
/// # Returns
/// 0 on success, 1 if `input` or `out` is null or `input` is not UTF-8.
#[no_mangle]
pub unsafe extern "C" fn nb_process_text(input: *const c_char, out: *mut *mut c_char) -> i32 {
    string_call(out, || {
        let text = borrow_str(input)?;
        Ok(bridge::process_text(text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::nb_string_free;
    use std::ffi::CStr;
    use std::ptr;

    unsafe fn take(out: *mut c_char) -> String {
        let text = CStr::from_ptr(out).to_str().unwrap().to_owned();
        nb_string_free(out);
        text
    }

    #[test]
    fn test_greet() {
        let mut out: *mut c_char = ptr::null_mut();
        unsafe {
            assert_eq!(nb_greet(&mut out), 0);
            assert_eq!(take(out), bridge::GREETING);
        }
    }

    #[test]
    fn test_process_text() {
        let mut out: *mut c_char = ptr::null_mut();
        unsafe {
            assert_eq!(nb_process_text(c"world".as_ptr(), &mut out), 0);
            assert_eq!(take(out), "Processed in Rust: world [Length: 5]");
        }
    }

    #[test]
    fn test_process_null_input() {
        let mut out: *mut c_char = ptr::null_mut();
        unsafe {
            assert_eq!(nb_process_text(ptr::null(), &mut out), 1);
        }
        assert!(out.is_null());
    }
}
