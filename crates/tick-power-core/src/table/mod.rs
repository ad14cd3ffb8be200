//! # Power Tables
//!
//! Derivation, validation and storage of the per-bit constants
//! `floor(1.0001^(±2^i) * 2^shift)` used by the price evaluator.

pub mod format;
pub(crate) mod frozen;
pub mod generator;
pub mod shift_policy;
pub mod types;
pub mod validator;

pub use generator::{
    base_power, base_ratio, log_base_of_two, max_price_magnitude, ConstantTableGenerator,
    GeneratorConfig, PriceMagnitude,
};
pub use shift_policy::ShiftPolicy;
pub use types::{BitIndex, BitRange, PowerConstant, Sign, WidthPolicy};
pub use validator::{BoundaryCheck, EntryCheck, ValidationReport, Validator};

use crate::constants::BIT_COUNT;
use crate::errors::{CoreResult, TickPowerError};
use frozen::FrozenWord;

/// A complete, immutable table: one entry per (sign, bit)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerTable {
    width: WidthPolicy,
    positive: [PowerConstant; BIT_COUNT],
    negative: [PowerConstant; BIT_COUNT],
}

impl PowerTable {
    /// Assemble a table from generated entries. Order is irrelevant but
    /// every (sign, bit) pair must be present.
    pub fn from_entries(width: WidthPolicy, entries: &[PowerConstant]) -> CoreResult<Self> {
        if let Some(entry) = entries.iter().find(|entry| entry.width != width) {
            return Err(TickPowerError::WidthMismatch {
                expected: width,
                found: entry.width,
            });
        }

        let lookup = |sign: Sign, bit: BitIndex| -> CoreResult<PowerConstant> {
            entries
                .iter()
                .find(|entry| entry.sign == sign && entry.bit_index == bit)
                .copied()
                .ok_or(TickPowerError::IncompleteTable {
                    sign,
                    bit_index: bit.get(),
                })
        };

        let mut positive = Vec::with_capacity(BIT_COUNT);
        let mut negative = Vec::with_capacity(BIT_COUNT);
        for bit in BitIndex::all() {
            positive.push(lookup(Sign::Positive, bit)?);
            negative.push(lookup(Sign::Negative, bit)?);
        }

        Ok(Self {
            width,
            positive: collect_row(positive)?,
            negative: collect_row(negative)?,
        })
    }

    /// The checked-in table for `width`
    pub fn frozen(width: WidthPolicy) -> Self {
        let (positive, negative) = match width {
            WidthPolicy::Full => (&frozen::FULL_POSITIVE, &frozen::FULL_NEGATIVE),
            WidthPolicy::Half => (&frozen::HALF_POSITIVE, &frozen::HALF_NEGATIVE),
        };
        let thaw = |sign: Sign, words: &[FrozenWord; BIT_COUNT]| -> [PowerConstant; BIT_COUNT] {
            std::array::from_fn(|i| PowerConstant {
                bit_index: BitIndex(i as u8),
                sign,
                width,
                shift: words[i].shift,
                value: words[i].value,
            })
        };
        Self {
            width,
            positive: thaw(Sign::Positive, positive),
            negative: thaw(Sign::Negative, negative),
        }
    }

    pub fn width(&self) -> WidthPolicy {
        self.width
    }

    pub fn entry(&self, sign: Sign, bit: BitIndex) -> &PowerConstant {
        &self.row(sign)[bit.as_usize()]
    }

    pub fn row(&self, sign: Sign) -> &[PowerConstant; BIT_COUNT] {
        match sign {
            Sign::Positive => &self.positive,
            Sign::Negative => &self.negative,
        }
    }

    /// Every entry, positive row first
    pub fn entries(&self) -> impl Iterator<Item = &PowerConstant> {
        self.positive.iter().chain(self.negative.iter())
    }
}

fn collect_row(row: Vec<PowerConstant>) -> CoreResult<[PowerConstant; BIT_COUNT]> {
    row.try_into().map_err(|_| TickPowerError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::precision::Precision;

    #[test]
    fn test_generated_tables_match_frozen() {
        for width in [WidthPolicy::Half, WidthPolicy::Full] {
            let generator = ConstantTableGenerator::new(width, Precision::default()).unwrap();
            let validator = Validator::new(width, Precision::default()).unwrap();
            let (table, _) = generator.build_table(&validator).unwrap();
            assert_eq!(table, PowerTable::frozen(width), "{width} table drifted");
        }
    }

    #[test]
    fn test_frozen_tables_validate() {
        for width in [WidthPolicy::Half, WidthPolicy::Full] {
            let table = PowerTable::frozen(width);
            let entries: Vec<_> = table.entries().copied().collect();
            let validator = Validator::new(width, Precision::default()).unwrap();
            assert!(validator.check(&entries).is_ok());
        }
    }

    #[test]
    fn test_from_entries_order_insensitive() {
        let table = PowerTable::frozen(WidthPolicy::Half);
        let mut entries: Vec<_> = table.entries().copied().collect();
        entries.reverse();
        assert_eq!(PowerTable::from_entries(WidthPolicy::Half, &entries).unwrap(), table);
    }

    #[test]
    fn test_from_entries_rejects_gaps_and_mixed_widths() {
        let table = PowerTable::frozen(WidthPolicy::Full);
        let mut entries: Vec<_> = table.entries().copied().collect();
        entries.retain(|e| !(e.sign == Sign::Negative && e.bit_index == BitIndex(7)));
        assert_eq!(
            PowerTable::from_entries(WidthPolicy::Full, &entries),
            Err(TickPowerError::IncompleteTable {
                sign: Sign::Negative,
                bit_index: 7
            })
        );
        assert!(matches!(
            PowerTable::from_entries(WidthPolicy::Half, &entries),
            Err(TickPowerError::WidthMismatch { .. })
        ));
    }

    #[test]
    fn test_entry_lookup() {
        let table = PowerTable::frozen(WidthPolicy::Full);
        let entry = table.entry(Sign::Negative, BitIndex::MAX);
        assert_eq!(entry.shift, 330);
        assert_eq!(entry.exponent(), -524_288);
        assert_eq!(table.entries().count(), 2 * BIT_COUNT);
    }
}
