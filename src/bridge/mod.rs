//! Core bridge operations.
//!
//! Plain Rust with no FFI types. The `java` and `ffi` surfaces are thin
//! wrappers that convert arguments, call into here and convert results back.

pub mod math;
pub mod system;
pub mod text;

pub use math::add;
pub use system::{system_info, SystemInfo};
pub use text::{greet, process_text, GREETING, PROCESSED_PREFIX};
