//! C ABI layer for non-JVM callers.
//!
//! These functions are thin wrappers around the `bridge` module. They handle
//! null checks, C string conversion and status codes.
//!
//! String results are written to an out-pointer and must be released with
//! `nb_string_free()`. Status codes are the values of `ErrorCode`.
//!
//! Logging is installed on first use. Call `nb_init()` first to choose the
//! log tag or level.

pub mod lifecycle;
pub mod simple;
pub mod strings;
pub mod system;
pub mod text;

pub use lifecycle::nb_init;
pub use simple::nb_add;
pub use strings::nb_string_free;
pub use system::nb_system_info;
pub use text::{nb_greet, nb_process_text};
