//! # Tick Power Constants
//!
//! Fundamental constants for the 1.0001 tick ladder:
//! - The base ratio as an exact fraction
//! - Tick and bit-index bounds
//! - Fixed-point width and margin parameters

// ============================================================================
// Base Ratio
// ============================================================================

/// Numerator of the per-tick price ratio (1.0001 = 10001 / 10000)
pub const BASE_NUMERATOR: u64 = 10_001;

/// Denominator of the per-tick price ratio
pub const BASE_DENOMINATOR: u64 = 10_000;

// ============================================================================
// Tick Bounds
// ============================================================================

/// Number of bits in the magnitude of the largest supported tick
pub const BIT_COUNT: usize = 20;

/// Maximum tick magnitude: 2^20 - 1
pub const MAX_TICK: i32 = (1 << BIT_COUNT) - 1;

/// Minimum tick
pub const MIN_TICK: i32 = -MAX_TICK;

/// Bit indices below this value keep the base shift for the positive sign.
/// base^(2^12) is still below 2, so the integer part of the constant is 1.
pub const FIRST_GROWING_BIT: usize = 13;

// ============================================================================
// Fixed-Point Layout
// ============================================================================

/// Unused high bits left above the most significant set bit of every word
pub const MARGIN_BITS: u32 = 1;

/// Width of the evaluator accumulator in bits
pub const ACCUMULATOR_BITS: u32 = 512;

/// Extra precision bits the engine needs beyond twice the word width
pub const PRECISION_GUARD_BITS: u32 = 96;

/// The validator accepts a log2 deviation of 2^-(W - TOLERANCE_SLACK_BITS)
pub const TOLERANCE_SLACK_BITS: u32 = 4;

/// Fractional digits shown for prices and log2 values in diagnostic rows
pub const DISPLAY_DIGITS: usize = 25;

/// Default fractional shift for the log_1.0001(2) constant
pub const LOG_BASE_TWO_SHIFT: u32 = 232;
