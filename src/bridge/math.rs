//! Integer arithmetic.

use tracing::info;

/// Adds two numbers, wrapping on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    info!("addTwoNumbers called with a={a}, b={b}");
    let result = a.wrapping_add(b);
    info!("addTwoNumbers result: {result}");
    result
}
