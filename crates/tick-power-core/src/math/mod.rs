//! # Mathematical Functions
//!
//! Fixed-width words for runtime evaluation and the high-precision engine
//! used offline to derive table constants.

pub mod big_int;
pub mod precision;

// Re-export commonly used items
pub use big_int::*;
pub use precision::{HpReal, Precision};
