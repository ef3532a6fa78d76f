//! Greeting and string processing.

use tracing::info;

pub const GREETING: &str = "Hello from Rust! JNI is working perfectly!";

pub const PROCESSED_PREFIX: &str = "Processed in Rust: ";

pub fn greet() -> String {
    info!("getGreetingFromNative called");
    GREETING.to_owned()
}

/// Wraps `input` with the processing prefix and its length.
///
/// The length is in bytes of the UTF-8 encoding, not characters.
pub fn process_text(input: &str) -> String {
    info!("processString called with: {input}");
    format!("{PROCESSED_PREFIX}{input} [Length: {}]", input.len())
}
