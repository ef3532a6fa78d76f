//! Host identification.

use std::ffi::c_char;

use super::strings::string_call;
use crate::bridge;

/// Writes the five-line system description to `*out`.
///
/// # Safety
/// - `out` must be null or valid for a pointer write
/// - the string written to `*out` must be freed with `nb_string_free()`
///
/// # Returns
/// 0 on success, 1 if `out` is null, 2 if the OS query failed.
#[no_mangle]
pub unsafe extern "C" fn nb_system_info(out: *mut *mut c_char) -> i32 {
    string_call(out, || Ok(bridge::system_info()?.to_string()))
}
