//! Library initialisation.

use std::ffi::c_char;

use super::strings::borrow_str;
use crate::config::BridgeConfig;
use crate::error::ErrorCode;
use crate::logging;

/// Installs logging with an optional tag and level directive.
///
/// Only the first initialisation takes effect. Any later `nb_*` call
/// initialises with the defaults if this was never called.
///
/// # Safety
/// - `log_tag` and `log_level` must each be null or a valid NUL-terminated string
///
/// # Returns
/// 0 on success, 1 if either string is not UTF-8.
#[no_mangle]
pub unsafe extern "C" fn nb_init(log_tag: *const c_char, log_level: *const c_char) -> i32 {
    let mut config = BridgeConfig::default();
    if !log_tag.is_null() {
        match borrow_str(log_tag) {
            Ok(tag) => config = config.with_log_tag(tag),
            Err(_) => return ErrorCode::InvalidArgument.into(),
        }
    }
    if !log_level.is_null() {
        match borrow_str(log_level) {
            Ok(level) => config = config.with_log_level(level),
            Err(_) => return ErrorCode::InvalidArgument.into(),
        }
    }
    logging::init(&config);
    ErrorCode::Ok.into()
}
