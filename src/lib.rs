//! Native Bridge - native interop demonstration library
//!
//! Exposes four small operations (greeting, addition, string processing and
//! host identification) to a JVM through JNI and to C callers through a C ABI.
//!
//! The logic lives in `bridge`. The `java` and `ffi` modules are the two
//! foreign surfaces over it.

pub mod bridge;
pub mod config;
pub mod error;
pub mod ffi;
pub mod java;
pub mod logging;

pub use bridge::{add, greet, process_text, system_info, SystemInfo};
pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult, ErrorCode};
