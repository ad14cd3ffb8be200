//! # Constant Table Generator
//!
//! Derives `floor(1.0001^(sign * 2^i) * 2^shift)` for every requested
//! (sign, bit) with the shift chosen by [`ShiftPolicy`].
//!
//! Negative constants start from the exact fraction 10000/10001 and are
//! squared up directly, never obtained by inverting the positive word, so
//! both directions carry the same truncation behaviour.

use num_bigint::BigUint;
use tracing::{debug, info};

use crate::constants::{
    BASE_DENOMINATOR, BASE_NUMERATOR, BIT_COUNT, PRECISION_GUARD_BITS,
};
use crate::errors::{CoreResult, TickPowerError};
use crate::math::big_int::u256_from_biguint;
use crate::math::precision::{ln2, HpReal, Precision};
use crate::table::shift_policy::ShiftPolicy;
use crate::table::types::{BitIndex, BitRange, PowerConstant, Sign, WidthPolicy};
use crate::table::validator::{ValidationReport, Validator};
use crate::table::PowerTable;

/// The per-tick ratio raised to `sign`: 10001/10000 or 10000/10001
pub fn base_ratio(sign: Sign, precision: Precision) -> CoreResult<HpReal> {
    let (numerator, denominator) = match sign {
        Sign::Positive => (BASE_NUMERATOR, BASE_DENOMINATOR),
        Sign::Negative => (BASE_DENOMINATOR, BASE_NUMERATOR),
    };
    HpReal::from_ratio(numerator, denominator, precision).ok_or(TickPowerError::DivisionByZero)
}

/// 1.0001^(sign * 2^bit) at the given precision
pub fn base_power(sign: Sign, bit: BitIndex, precision: Precision) -> CoreResult<HpReal> {
    Ok(base_ratio(sign, precision)?.pow_two_exponent(u32::from(bit.get())))
}

/// floor(log_1.0001(2) * 2^shift), the scale factor for converting a
/// fixed-point log2 price back into ticks
pub fn log_base_of_two(shift: u32, precision: Precision) -> CoreResult<BigUint> {
    let ln_base = base_ratio(Sign::Positive, precision)?
        .ln()
        .ok_or(TickPowerError::MathOverflow)?;
    ln2(precision)
        .checked_div(&ln_base)
        .and_then(|ratio| ratio.floor_scaled(shift))
        .ok_or(TickPowerError::MathOverflow)
}

/// Magnitude of the largest price the tick range approaches, 1.0001^(2^20)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceMagnitude {
    pub log2: HpReal,
    pub log10: HpReal,
}

pub fn max_price_magnitude(precision: Precision) -> CoreResult<PriceMagnitude> {
    let base = base_ratio(Sign::Positive, precision)?;
    let exponent = 1i64 << BIT_COUNT;
    let log2 = base.log2().ok_or(TickPowerError::MathOverflow)?.mul_i64(exponent);
    let log10 = base.log10().ok_or(TickPowerError::MathOverflow)?.mul_i64(exponent);
    Ok(PriceMagnitude { log2, log10 })
}

/// Which entries to generate and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub width: WidthPolicy,
    pub signs: Vec<Sign>,
    pub bits: BitRange,
    pub precision: Precision,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: WidthPolicy::Full,
            signs: Sign::ALL.to_vec(),
            bits: BitRange::full(),
            precision: Precision::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn generator(&self) -> CoreResult<ConstantTableGenerator> {
        ConstantTableGenerator::new(self.width, self.precision)
    }

    /// Generate every entry the configuration names, signs outermost
    pub fn generate(&self) -> CoreResult<Vec<PowerConstant>> {
        self.generator()?.generate_range(&self.signs, self.bits)
    }
}

/// Derives table words for one width policy at one precision
#[derive(Debug, Clone)]
pub struct ConstantTableGenerator {
    width: WidthPolicy,
    precision: Precision,
    policy: ShiftPolicy,
}

impl ConstantTableGenerator {
    /// Create a generator, rejecting precisions too coarse for `width`
    pub fn new(width: WidthPolicy, precision: Precision) -> CoreResult<Self> {
        let required = Self::required_precision(width);
        if precision.bits() < required {
            return Err(TickPowerError::InsufficientPrecision {
                required,
                actual: precision.bits(),
            });
        }
        Self::new_unchecked(width, precision)
    }

    /// Create a generator without the precision floor. Words derived this
    /// way must still pass the [`Validator`] before they can be frozen.
    pub fn new_unchecked(width: WidthPolicy, precision: Precision) -> CoreResult<Self> {
        let policy = ShiftPolicy::derive(width, precision)?;
        Ok(Self {
            width,
            precision,
            policy,
        })
    }

    /// Fractional bits needed so rounding noise stays far below the word
    pub const fn required_precision(width: WidthPolicy) -> u32 {
        2 * width.bits() + PRECISION_GUARD_BITS
    }

    pub fn width(&self) -> WidthPolicy {
        self.width
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn policy(&self) -> &ShiftPolicy {
        &self.policy
    }

    /// The real value a table word encodes
    pub fn exact_power(&self, sign: Sign, bit: BitIndex) -> CoreResult<HpReal> {
        base_power(sign, bit, self.precision)
    }

    /// Derive one table word
    pub fn generate(&self, sign: Sign, bit: BitIndex) -> CoreResult<PowerConstant> {
        let shift = self.policy.shift(sign, bit);
        let encoded = self
            .exact_power(sign, bit)?
            .floor_scaled(shift)
            .ok_or(TickPowerError::MathOverflow)?;

        let bits = encoded.bits();
        if bits > u64::from(self.width.bits()) {
            return Err(TickPowerError::EncodedOverflow {
                sign,
                bit_index: bit.get(),
                bits,
                width: self.width,
            });
        }
        let value = u256_from_biguint(&encoded).ok_or(TickPowerError::MathOverflow)?;

        debug!(%sign, bit = bit.get(), shift, bits, "generated power constant");
        Ok(PowerConstant {
            bit_index: bit,
            sign,
            width: self.width,
            shift,
            value,
        })
    }

    pub fn generate_range(&self, signs: &[Sign], bits: BitRange) -> CoreResult<Vec<PowerConstant>> {
        let mut entries = Vec::with_capacity(signs.len() * BIT_COUNT);
        for &sign in signs {
            for bit in bits.iter() {
                entries.push(self.generate(sign, bit)?);
            }
        }
        Ok(entries)
    }

    /// Generate both signs over every bit, validate, and freeze
    pub fn build_table(&self, validator: &Validator) -> CoreResult<(PowerTable, ValidationReport)> {
        let entries = self.generate_range(&Sign::ALL, BitRange::full())?;
        let report = validator.check(&entries)?;
        let table = PowerTable::from_entries(self.width, &entries)?;
        info!(
            width = %self.width,
            precision_bits = self.precision.bits(),
            entries = entries.len(),
            "power table frozen"
        );
        Ok((table, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::big_int::U256;

    fn full() -> ConstantTableGenerator {
        ConstantTableGenerator::new(WidthPolicy::Full, Precision::default()).unwrap()
    }

    #[test]
    fn test_bit_zero_full_positive() {
        let entry = full().generate(Sign::Positive, BitIndex(0)).unwrap();
        assert_eq!(entry.shift, 254);
        let expected = U256::from_str_radix(
            "4001a36e2eb1c432ca57a786c226809d495182a9930be0ded288ce703afb7e90",
            16,
        )
        .unwrap();
        assert_eq!(entry.value, expected);
    }

    #[test]
    fn test_bit_nineteen_both_signs() {
        let generator = full();
        let positive = generator.generate(Sign::Positive, BitIndex::MAX).unwrap();
        assert_eq!(positive.shift, 179);
        assert_eq!(
            positive.value,
            U256::from_str_radix(
                "63631f2b9f4cdc5887acb0d7265658fcc939a994dc0b710b1c5ac172b2329ec7",
                16
            )
            .unwrap()
        );
        let negative = generator.generate(Sign::Negative, BitIndex::MAX).unwrap();
        assert_eq!(negative.shift, 330);
        assert_eq!(
            negative.value,
            U256::from_str_radix(
                "526cd3b9eb098b48c78a05ecb747340a7212a03e3ffb8bee0b85d4c67a5a738f",
                16
            )
            .unwrap()
        );
    }

    #[test]
    fn test_every_word_uses_w_minus_one_bits() {
        for width in [WidthPolicy::Half, WidthPolicy::Full] {
            let generator = ConstantTableGenerator::new(width, Precision::default()).unwrap();
            let entries = generator.generate_range(&Sign::ALL, BitRange::full()).unwrap();
            assert_eq!(entries.len(), 2 * BIT_COUNT);
            for entry in entries {
                assert_eq!(entry.value.bits() as u32, width.bits() - 1);
            }
        }
    }

    #[test]
    fn test_insufficient_precision_rejected() {
        let result = ConstantTableGenerator::new(WidthPolicy::Full, Precision::new(300));
        assert_eq!(
            result.unwrap_err(),
            TickPowerError::InsufficientPrecision {
                required: 608,
                actual: 300
            }
        );
    }

    #[test]
    fn test_config_subrange() {
        let config = GeneratorConfig {
            width: WidthPolicy::Half,
            signs: vec![Sign::Negative],
            bits: BitRange::new(13, 19).unwrap(),
            precision: Precision::from_decimal_digits(1000),
        };
        let entries = config.generate().unwrap();
        assert_eq!(entries.len(), 7);
        assert!(entries.iter().all(|e| e.sign == Sign::Negative));
        assert_eq!(entries[0].bit_index, BitIndex(13));
        assert_eq!(entries[6].shift, 202);
    }

    #[test]
    fn test_log_base_of_two() {
        let p = Precision::default();
        assert_eq!(log_base_of_two(0, p).unwrap(), BigUint::from(6931u32));
        assert_eq!(
            log_base_of_two(64, p).unwrap(),
            BigUint::parse_bytes(b"1b13d180eb882abba642", 16).unwrap()
        );
    }

    #[test]
    fn test_max_price_magnitude() {
        let magnitude = max_price_magnitude(Precision::default()).unwrap();
        // 1.0001^(2^20) ~= 2^151.27 ~= 10^45.54
        assert_eq!(magnitude.log2.floor_i64(), Some(151));
        assert_eq!(magnitude.log10.floor_i64(), Some(45));
    }
}
