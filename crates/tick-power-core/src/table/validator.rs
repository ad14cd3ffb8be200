//! # Table Validator
//!
//! Re-derives every generated word through logarithms before a table may be
//! frozen. Checks, per entry:
//! - headroom: the word has `W - 1` or `W` significant bits
//! - log2: `log2(value)` is within `2^-(W - 4)` of
//!   `shift + sign * 2^i * log2(1.0001)`
//!
//! and, for the bit-19 boundary of each sign, that the decimal magnitude
//! of `1.0001^(±2^19)` read off its expansion agrees with the logarithm, and
//! that the boundary shift agrees with the one implied by the logarithm.
//! The validator works from its own [`Precision`] so it can audit a
//! generator configured differently.

use tracing::{debug, info, warn};

use crate::constants::TOLERANCE_SLACK_BITS;
use crate::errors::{CoreResult, TickPowerError};
use crate::math::big_int::u256_to_biguint;
use crate::math::precision::{HpReal, Precision};
use crate::table::generator::{base_power, base_ratio, ConstantTableGenerator};
use crate::table::shift_policy::ShiftPolicy;
use crate::table::types::{BitIndex, PowerConstant, Sign, WidthPolicy};

/// Outcome of the log2 check for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCheck {
    pub sign: Sign,
    pub bit_index: BitIndex,
    pub shift: u32,
    /// log2 of the encoded word
    pub measured_log2: HpReal,
    /// shift + sign * 2^i * log2(1.0001)
    pub expected_log2: HpReal,
    pub deviation: HpReal,
}

/// Outcome of the boundary cross-check for one sign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryCheck {
    pub sign: Sign,
    /// floor(log10(1.0001^(±2^19)))
    pub decimal_exponent: i64,
    /// Shift implied by floor(±2^19 * log2(1.0001))
    pub expected_shift: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub width: WidthPolicy,
    pub entries: Vec<EntryCheck>,
    pub boundaries: Vec<BoundaryCheck>,
}

impl ValidationReport {
    pub fn entry(&self, sign: Sign, bit: BitIndex) -> Option<&EntryCheck> {
        self.entries
            .iter()
            .find(|check| check.sign == sign && check.bit_index == bit)
    }

    /// floor(log2) of the largest deviation seen, None if all were exact
    pub fn max_deviation_log2(&self) -> Option<i64> {
        self.entries
            .iter()
            .filter_map(|check| check.deviation.floor_log2())
            .max()
    }
}

#[derive(Debug, Clone)]
pub struct Validator {
    width: WidthPolicy,
    precision: Precision,
    log2_base: HpReal,
    log10_base: HpReal,
}

impl Validator {
    pub fn new(width: WidthPolicy, precision: Precision) -> CoreResult<Self> {
        let required = ConstantTableGenerator::required_precision(width);
        if precision.bits() < required {
            return Err(TickPowerError::InsufficientPrecision {
                required,
                actual: precision.bits(),
            });
        }
        let base = base_ratio(Sign::Positive, precision)?;
        let log2_base = base.log2().ok_or(TickPowerError::MathOverflow)?;
        let log10_base = base.log10().ok_or(TickPowerError::MathOverflow)?;
        Ok(Self {
            width,
            precision,
            log2_base,
            log10_base,
        })
    }

    pub fn width(&self) -> WidthPolicy {
        self.width
    }

    /// Accepted deviation is 2^-tolerance_bits
    pub fn tolerance_bits(&self) -> u32 {
        self.width.bits() - TOLERANCE_SLACK_BITS
    }

    /// sign * 2^bit * log2(1.0001)
    fn exponent_log2(&self, sign: Sign, bit: BitIndex) -> HpReal {
        self.log2_base
            .mul_i64(sign.factor() * i64::from(bit.exponent()))
    }

    pub fn check_entry(&self, entry: &PowerConstant) -> CoreResult<EntryCheck> {
        if entry.width != self.width {
            return Err(TickPowerError::WidthMismatch {
                expected: self.width,
                found: entry.width,
            });
        }

        let bits = entry.value.bits() as u32;
        let width_bits = self.width.bits();
        if bits > width_bits {
            return Err(TickPowerError::EncodedOverflow {
                sign: entry.sign,
                bit_index: entry.bit_index.get(),
                bits: u64::from(bits),
                width: self.width,
            });
        }
        // most significant bit must sit at W - 2 (or W - 1)
        let target_bits = ShiftPolicy::base_shift(self.width) + 1;
        if bits < target_bits {
            return Err(TickPowerError::ShiftRegression {
                sign: entry.sign,
                bit_index: entry.bit_index.get(),
                shift: entry.shift,
                expected: entry.shift + (target_bits - bits),
            });
        }

        let measured_log2 = HpReal::from_integer(&u256_to_biguint(&entry.value), self.precision)
            .log2()
            .ok_or(TickPowerError::MathOverflow)?;
        let expected_log2 = HpReal::from_i64(i64::from(entry.shift), self.precision)
            .add(&self.exponent_log2(entry.sign, entry.bit_index));
        let deviation = measured_log2.sub(&expected_log2).abs();

        let tolerance_bits = self.tolerance_bits();
        if let Some(deviation_log2) = deviation.floor_log2() {
            if deviation_log2 >= -i64::from(tolerance_bits) {
                warn!(
                    sign = %entry.sign,
                    bit = entry.bit_index.get(),
                    deviation_log2,
                    "log2 check out of tolerance"
                );
                return Err(TickPowerError::ToleranceExceeded {
                    sign: entry.sign,
                    bit_index: entry.bit_index.get(),
                    deviation_log2,
                    tolerance_bits,
                });
            }
        }

        debug!(sign = %entry.sign, bit = entry.bit_index.get(), "log2 check passed");
        Ok(EntryCheck {
            sign: entry.sign,
            bit_index: entry.bit_index,
            shift: entry.shift,
            measured_log2,
            expected_log2,
            deviation,
        })
    }

    /// Cross-check the magnitude of 1.0001^(±2^19) two independent ways
    pub fn check_boundary(&self, sign: Sign) -> CoreResult<BoundaryCheck> {
        let bit = BitIndex::MAX;
        let exponent = sign.factor() * i64::from(bit.exponent());

        let from_digits = base_power(sign, bit, self.precision)?
            .decimal_exponent()
            .ok_or(TickPowerError::MathOverflow)?;
        let from_log = self
            .log10_base
            .mul_i64(exponent)
            .floor_i64()
            .ok_or(TickPowerError::MathOverflow)?;
        if from_digits != from_log {
            return Err(TickPowerError::DecimalMagnitudeMismatch {
                sign,
                from_digits,
                from_log,
            });
        }

        let floor_log2 = self
            .exponent_log2(sign, bit)
            .floor_i64()
            .ok_or(TickPowerError::MathOverflow)?;
        let expected_shift = ShiftPolicy::shift_for_magnitude(self.width, floor_log2).ok_or(
            TickPowerError::EncodedOverflow {
                sign,
                bit_index: bit.get(),
                bits: (i64::from(self.width.bits()) + floor_log2).max(0) as u64,
                width: self.width,
            },
        )?;

        Ok(BoundaryCheck {
            sign,
            decimal_exponent: from_digits,
            expected_shift,
        })
    }

    /// Validate a batch of entries; any failure blocks freezing
    pub fn check(&self, entries: &[PowerConstant]) -> CoreResult<ValidationReport> {
        let checks = entries
            .iter()
            .map(|entry| self.check_entry(entry))
            .collect::<CoreResult<Vec<_>>>()?;

        let mut boundaries = Vec::new();
        for sign in Sign::ALL {
            let Some(entry) = entries
                .iter()
                .find(|entry| entry.sign == sign && entry.bit_index == BitIndex::MAX)
            else {
                continue;
            };
            let boundary = self.check_boundary(sign)?;
            if entry.shift != boundary.expected_shift {
                return Err(TickPowerError::ShiftRegression {
                    sign,
                    bit_index: BitIndex::MAX.get(),
                    shift: entry.shift,
                    expected: boundary.expected_shift,
                });
            }
            boundaries.push(boundary);
        }

        let report = ValidationReport {
            width: self.width,
            entries: checks,
            boundaries,
        };
        info!(
            width = %self.width,
            entries = report.entries.len(),
            boundaries = report.boundaries.len(),
            max_deviation_log2 = ?report.max_deviation_log2(),
            "table validated"
        );
        Ok(report)
    }
}
