//! Outgoing string ownership and the shared call wrapper.

use std::ffi::{c_char, CStr, CString};
use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use crate::error::{BridgeError, BridgeResult, ErrorCode};
use crate::logging;

/// Releases a string returned by any `nb_*` function.
///
/// # Safety
/// - `s` must have been returned by this library, or be null
/// - `s` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn nb_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Borrows a caller string for the duration of the call.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for `'a`.
pub(crate) unsafe fn borrow_str<'a>(ptr: *const c_char) -> BridgeResult<&'a str> {
    if ptr.is_null() {
        return Err(BridgeError::invalid_argument("input text is null"));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|e| BridgeError::invalid_argument(format!("input is not UTF-8: {e}")))
}

/// Runs `op` and stores its string result in `*out`.
///
/// # Safety
/// `out` must be null or valid for a pointer write.
///
/// # Returns
/// An `ErrorCode` value. On failure `*out` is null.
pub(crate) unsafe fn string_call<F>(out: *mut *mut c_char, op: F) -> i32
where
    F: FnOnce() -> BridgeResult<String>,
{
    logging::init_default();
    if out.is_null() {
        return ErrorCode::InvalidArgument.into();
    }
    *out = std::ptr::null_mut();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| -> BridgeResult<CString> {
        let text = op()?;
        CString::new(text).map_err(|e| BridgeError::internal(e.to_string()))
    }));
    let result = match outcome {
        Ok(result) => result,
        Err(_) => Err(BridgeError::internal("panic in native bridge")),
    };

    match result {
        Ok(text) => {
            *out = text.into_raw();
            ErrorCode::Ok.into()
        }
        Err(err) => {
            warn!("native call failed: {err}");
            err.code().into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_free_null() {
        unsafe {
            // Should not crash
            nb_string_free(ptr::null_mut());
        }
    }

    #[test]
    fn test_borrow_str() {
        unsafe {
            assert_eq!(borrow_str(c"hello".as_ptr()).unwrap(), "hello");
            assert!(matches!(
                borrow_str(ptr::null()),
                Err(BridgeError::InvalidArgument(_))
            ));
            let bad = [0xffu8, 0xfe, 0];
            assert!(matches!(
                borrow_str(bad.as_ptr().cast()),
                Err(BridgeError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_string_call_null_out() {
        unsafe {
            assert_eq!(string_call(ptr::null_mut(), || Ok("x".into())), 1);
        }
    }

    #[test]
    fn test_string_call_interior_nul() {
        let mut out: *mut c_char = ptr::null_mut();
        unsafe {
            assert_eq!(string_call(&mut out, || Ok("a\0b".into())), 3);
        }
        assert!(out.is_null());
    }

    #[test]
    fn test_string_call_panic() {
        let mut out: *mut c_char = ptr::null_mut();
        unsafe {
            let status = string_call(&mut out, || -> BridgeResult<String> { panic!("boom") });
            assert_eq!(status, 3);
        }
        assert!(out.is_null());
    }
}
