//! # Shift Policy
//!
//! Chooses the fractional bit count of every table word. The word for
//! `v = 1.0001^(sign * 2^i)` is `floor(v * 2^shift)`; picking
//!
//! ```text
//! shift = (W - 1 - MARGIN_BITS) - floor(log2 v)
//! ```
//!
//! puts its most significant set bit at `W - 2`, one margin bit below the
//! top of the register. For the positive sign this is
//! `W + (marginBits - ceil(log2(v * 2^W)))` with `marginBits = W - 1`.
//!
//! `floor(log2 v)` is derived from the high-precision engine once per
//! policy. Up to bit 12 the positive constant stays below 2, so the shift
//! sits at the base shift `W - 2`; from bit 13 on the integer part grows
//! and the shift falls (254, 253, 252, 250, 245, 236, 217, 179 for the full
//! policy over bits 12..=19). Negative constants mirror this upwards.

use tracing::debug;

use crate::constants::{BIT_COUNT, MARGIN_BITS};
use crate::errors::{CoreResult, TickPowerError};
use crate::math::precision::Precision;
use crate::table::generator::base_power;
use crate::table::types::{BitIndex, Sign, WidthPolicy};

/// Per-(sign, bit) fractional shifts for one width policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftPolicy {
    width: WidthPolicy,
    positive: [u32; BIT_COUNT],
    negative: [u32; BIT_COUNT],
}

impl ShiftPolicy {
    /// Derive every shift from the magnitude of its constant
    pub fn derive(width: WidthPolicy, precision: Precision) -> CoreResult<Self> {
        let mut positive = [0u32; BIT_COUNT];
        let mut negative = [0u32; BIT_COUNT];

        for sign in Sign::ALL {
            for bit in BitIndex::all() {
                let magnitude = base_power(sign, bit, precision)?
                    .floor_log2()
                    .ok_or(TickPowerError::MathOverflow)?;
                let shift = Self::shift_for_magnitude(width, magnitude).ok_or(
                    TickPowerError::EncodedOverflow {
                        sign,
                        bit_index: bit.get(),
                        bits: (i64::from(width.bits()) + magnitude).max(0) as u64,
                        width,
                    },
                )?;
                match sign {
                    Sign::Positive => positive[bit.as_usize()] = shift,
                    Sign::Negative => negative[bit.as_usize()] = shift,
                }
            }
        }

        debug!(%width, ?positive, ?negative, "derived shift policy");
        Ok(Self {
            width,
            positive,
            negative,
        })
    }

    /// Shift of a word whose real value has the given floor(log2).
    /// None if no non-negative shift keeps the word inside `width`.
    pub fn shift_for_magnitude(width: WidthPolicy, floor_log2: i64) -> Option<u32> {
        let shift = i64::from(Self::base_shift(width)) - floor_log2;
        u32::try_from(shift).ok()
    }

    /// Shift of a constant in [1, 2): the full register minus the margin
    /// bit and the integer bit. Also the bit position every word's most
    /// significant set bit lands on.
    pub const fn base_shift(width: WidthPolicy) -> u32 {
        width.bits() - 1 - MARGIN_BITS
    }

    pub fn width(&self) -> WidthPolicy {
        self.width
    }

    pub fn shift(&self, sign: Sign, bit: BitIndex) -> u32 {
        match sign {
            Sign::Positive => self.positive[bit.as_usize()],
            Sign::Negative => self.negative[bit.as_usize()],
        }
    }

    /// All shifts for one sign, indexed by bit
    pub fn shifts(&self, sign: Sign) -> &[u32; BIT_COUNT] {
        match sign {
            Sign::Positive => &self.positive,
            Sign::Negative => &self.negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIRST_GROWING_BIT;

    #[test]
    fn test_full_policy_matches_known_boundaries() {
        let policy = ShiftPolicy::derive(WidthPolicy::Full, Precision::default()).unwrap();
        let positive = policy.shifts(Sign::Positive);
        assert_eq!(
            &positive[12..],
            &[254, 253, 252, 250, 245, 236, 217, 179]
        );
        let negative = policy.shifts(Sign::Negative);
        assert_eq!(
            &negative[12..],
            &[255, 256, 257, 259, 264, 273, 292, 330]
        );
    }

    #[test]
    fn test_low_bits_keep_base_shift() {
        for width in [WidthPolicy::Half, WidthPolicy::Full] {
            let policy = ShiftPolicy::derive(width, Precision::default()).unwrap();
            for bit in BitIndex::all().take(FIRST_GROWING_BIT) {
                assert_eq!(policy.shift(Sign::Positive, bit), ShiftPolicy::base_shift(width));
                assert_eq!(policy.shift(Sign::Negative, bit), ShiftPolicy::base_shift(width) + 1);
            }
        }
        assert_eq!(ShiftPolicy::base_shift(WidthPolicy::Full), 254);
        assert_eq!(ShiftPolicy::base_shift(WidthPolicy::Half), 126);
    }

    #[test]
    fn test_high_bits_strictly_monotonic() {
        for width in [WidthPolicy::Half, WidthPolicy::Full] {
            let policy = ShiftPolicy::derive(width, Precision::default()).unwrap();
            let positive = policy.shifts(Sign::Positive);
            let negative = policy.shifts(Sign::Negative);
            for i in FIRST_GROWING_BIT..BIT_COUNT {
                assert!(positive[i] < positive[i - 1], "positive bit {i}");
                assert!(negative[i] > negative[i - 1], "negative bit {i}");
            }
        }
    }

    #[test]
    fn test_half_policy_is_full_minus_128() {
        let full = ShiftPolicy::derive(WidthPolicy::Full, Precision::default()).unwrap();
        let half = ShiftPolicy::derive(WidthPolicy::Half, Precision::default()).unwrap();
        for sign in Sign::ALL {
            for bit in BitIndex::all() {
                assert_eq!(full.shift(sign, bit), half.shift(sign, bit) + 128);
            }
        }
    }

    #[test]
    fn test_shift_for_magnitude_rejects_huge_values() {
        assert_eq!(ShiftPolicy::shift_for_magnitude(WidthPolicy::Half, 126), Some(0));
        assert_eq!(ShiftPolicy::shift_for_magnitude(WidthPolicy::Half, 127), None);
    }
}
