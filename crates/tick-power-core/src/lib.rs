//! # Tick Power Core
//!
//! Fixed-point powers of the tick ratio 1.0001. This crate contains:
//!
//! - A high-precision binary fixed-point engine for offline derivation
//! - The shift policy and generator for the per-bit constant tables
//! - A validator that re-derives every word through logarithms
//! - Frozen tables for 128-bit and 256-bit words
//! - A binary-exponentiation price evaluator for |tick| <= 2^20 - 1
//!
//! ## Feature Flags
//!
//! - `serde`: Enables serialization of table types and the JSON artifact

pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod math;
pub mod table;

// Re-export commonly used items
pub use constants::*;
pub use errors::{CoreResult, ErrorKind, TickPowerError};
pub use evaluator::PriceEvaluator;
pub use math::{HpReal, Precision, U256, U512};
pub use table::{
    BitIndex, BitRange, ConstantTableGenerator, GeneratorConfig, PowerConstant, PowerTable,
    ShiftPolicy, Sign, ValidationReport, Validator, WidthPolicy,
};
