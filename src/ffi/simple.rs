//! Integer addition.

use crate::{bridge, logging};

/// Adds two numbers, wrapping on overflow.
#[no_mangle]
pub extern "C" fn nb_add(a: i32, b: i32) -> i32 {
    logging::init_default();
    bridge::add(a, b)
}
