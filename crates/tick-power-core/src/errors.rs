//! # Core Error Types
//!
//! Errors raised while deriving, validating and evaluating power tables.
//! Every variant maps onto one [`ErrorKind`] so callers can tell generation
//! defects apart from recoverable range failures.

use thiserror::Error;

use crate::table::{Sign, WidthPolicy};

/// Broad classification of a [`TickPowerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Engine precision or evaluator setup cannot produce a trustworthy table
    Configuration,
    /// A word does not fit its width, or the shift policy regressed
    Overflow,
    /// Runtime input outside the supported domain
    Range,
    /// Programming error against the fixed-size table contract
    Contract,
}

/// Errors for table generation, validation and evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickPowerError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Insufficient precision: {actual} bits, at least {required} required")]
    InsufficientPrecision { required: u32, actual: u32 },

    #[error("Log2 check failed for {sign} bit {bit_index}: deviation ~2^{deviation_log2}, tolerance 2^-{tolerance_bits}")]
    ToleranceExceeded {
        sign: Sign,
        bit_index: u8,
        deviation_log2: i64,
        tolerance_bits: u32,
    },

    #[error("Decimal magnitude mismatch for {sign} boundary: expansion gives 10^{from_digits}, logarithm gives 10^{from_log}")]
    DecimalMagnitudeMismatch {
        sign: Sign,
        from_digits: i64,
        from_log: i64,
    },

    #[error("Canonical shift {shift} too large (max {max})")]
    CanonicalShiftTooLarge { shift: u32, max: u32 },

    // ========================================================================
    // Overflow Errors
    // ========================================================================
    #[error("Encoded word for {sign} bit {bit_index} has {bits} bits, width is {width}")]
    EncodedOverflow {
        sign: Sign,
        bit_index: u8,
        bits: u64,
        width: WidthPolicy,
    },

    #[error("Shift regression for {sign} bit {bit_index}: shift {shift}, expected {expected}")]
    ShiftRegression {
        sign: Sign,
        bit_index: u8,
        shift: u32,
        expected: u32,
    },

    #[error("Math overflow")]
    MathOverflow,

    #[error("Division by zero")]
    DivisionByZero,

    // ========================================================================
    // Range Errors
    // ========================================================================
    #[error("Tick {0} out of range")]
    TickOutOfRange(i32),

    #[error("Price out of range")]
    PriceOutOfRange,

    // ========================================================================
    // Contract Errors
    // ========================================================================
    #[error("Bit index {0} out of range")]
    BitIndexOutOfRange(u8),

    #[error("Invalid bit range {first}..={last}")]
    InvalidBitRange { first: u8, last: u8 },

    #[error("Table is missing {sign} bit {bit_index}")]
    IncompleteTable { sign: Sign, bit_index: u8 },

    #[error("Width mismatch: expected {expected}, found {found}")]
    WidthMismatch {
        expected: WidthPolicy,
        found: WidthPolicy,
    },

    #[error("Invalid hex word: {0}")]
    InvalidHex(String),
}

impl TickPowerError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InsufficientPrecision { .. }
            | Self::ToleranceExceeded { .. }
            | Self::DecimalMagnitudeMismatch { .. }
            | Self::CanonicalShiftTooLarge { .. } => ErrorKind::Configuration,
            Self::EncodedOverflow { .. }
            | Self::ShiftRegression { .. }
            | Self::MathOverflow
            | Self::DivisionByZero => ErrorKind::Overflow,
            Self::TickOutOfRange(_) | Self::PriceOutOfRange => ErrorKind::Range,
            Self::BitIndexOutOfRange(_)
            | Self::InvalidBitRange { .. }
            | Self::IncompleteTable { .. }
            | Self::WidthMismatch { .. }
            | Self::InvalidHex(_) => ErrorKind::Contract,
        }
    }

    /// Whether a generated table must be discarded
    pub fn blocks_freezing(&self) -> bool {
        matches!(self.kind(), ErrorKind::Configuration | ErrorKind::Overflow)
    }
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, TickPowerError>;
