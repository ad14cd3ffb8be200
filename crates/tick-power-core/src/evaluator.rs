//! # Price Evaluator
//!
//! Computes `1.0001^tick` as a fixed-point integer scaled by `2^C` using
//! binary exponentiation over a frozen [`PowerTable`]:
//!
//! ```text
//! P = 2^C
//! for each set bit i of |tick|:
//!     P = floor(P * table[sign][i].value / 2^table[sign][i].shift)
//! ```
//!
//! Every step truncates. The product is formed in a 1024-bit register and
//! the accumulator is 512 bits wide, since `1.0001^(±(2^20 - 1))` spans
//! roughly ±151 binary orders of magnitude around `2^C`.

use tracing::debug;

use crate::constants::{ACCUMULATOR_BITS, MAX_TICK, MIN_TICK};
use crate::errors::{CoreResult, TickPowerError};
use crate::math::big_int::{mul_shr, U512};
use crate::table::{BitIndex, PowerTable, Sign};

/// Read-only evaluator over one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceEvaluator {
    table: PowerTable,
    canonical_shift: u32,
}

impl PriceEvaluator {
    /// Evaluator with the canonical shift equal to the table width
    pub fn new(table: PowerTable) -> Self {
        let canonical_shift = table.width().bits();
        Self {
            table,
            canonical_shift,
        }
    }

    /// Evaluator with an explicit canonical shift, rejected when the largest
    /// positive result could leave the accumulator
    pub fn with_canonical_shift(table: PowerTable, canonical_shift: u32) -> CoreResult<Self> {
        let max = Self::max_canonical_shift(&table);
        if canonical_shift > max {
            return Err(TickPowerError::CanonicalShiftTooLarge {
                shift: canonical_shift,
                max,
            });
        }
        Ok(Self {
            table,
            canonical_shift,
        })
    }

    /// Largest C for which evaluate(MAX_TICK) fits the accumulator.
    /// Each positive step grows P by at most bits(value) - shift bits.
    pub fn max_canonical_shift(table: &PowerTable) -> u32 {
        let growth: i64 = table
            .row(Sign::Positive)
            .iter()
            .map(|entry| entry.value.bits() as i64 - i64::from(entry.shift))
            .sum();
        (i64::from(ACCUMULATOR_BITS) - 1 - growth.max(0)).max(0) as u32
    }

    pub fn table(&self) -> &PowerTable {
        &self.table
    }

    pub fn canonical_shift(&self) -> u32 {
        self.canonical_shift
    }

    /// 2^C, the result for tick 0
    pub fn one(&self) -> U512 {
        U512::one() << self.canonical_shift
    }

    /// floor-accumulated 1.0001^tick * 2^C.
    ///
    /// The result is a 512-bit word, not a `W`-bit one: `1.0001^(±(2^20 - 1))`
    /// spans about ±151 binary orders around `2^C`.
    pub fn evaluate(&self, tick: i32) -> CoreResult<U512> {
        if !(MIN_TICK..=MAX_TICK).contains(&tick) {
            return Err(TickPowerError::TickOutOfRange(tick));
        }
        let sign = Sign::of_tick(tick);
        let magnitude = tick.unsigned_abs();

        let mut price = self.one();
        for bit in BitIndex::all() {
            if magnitude & bit.exponent() != 0 {
                let entry = self.table.entry(sign, bit);
                price = mul_shr(price, entry.value, entry.shift)?;
            }
        }
        Ok(price)
    }

    /// Greatest tick whose price does not exceed `price`
    pub fn tick_at_price(&self, price: U512) -> CoreResult<i32> {
        if price < self.evaluate(MIN_TICK)? || price > self.evaluate(MAX_TICK)? {
            return Err(TickPowerError::PriceOutOfRange);
        }

        // evaluate(low) <= price throughout
        let mut low = MIN_TICK;
        let mut high = MAX_TICK;
        while low < high {
            let mid = low + (high - low + 1) / 2;
            if self.evaluate(mid)? <= price {
                low = mid;
            } else {
                high = mid - 1;
            }
        }
        debug!(tick = low, "resolved tick from price");
        Ok(low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::WidthPolicy;

    fn hex(text: &str) -> U512 {
        U512::from_str_radix(text, 16).unwrap()
    }

    fn full() -> PriceEvaluator {
        PriceEvaluator::new(PowerTable::frozen(WidthPolicy::Full))
    }

    fn half() -> PriceEvaluator {
        PriceEvaluator::new(PowerTable::frozen(WidthPolicy::Half))
    }

    #[test]
    fn test_tick_zero_is_one() {
        assert_eq!(full().evaluate(0).unwrap(), U512::one() << 256u32);
        assert_eq!(half().evaluate(0).unwrap(), U512::one() << 128u32);
    }

    #[test]
    fn test_single_bit_matches_renormalized_entry() {
        for evaluator in [full(), half()] {
            let c = evaluator.canonical_shift();
            for bit in BitIndex::all() {
                let tick = bit.exponent() as i32;
                let positive = evaluator.table().entry(Sign::Positive, bit);
                assert_eq!(evaluator.evaluate(tick).unwrap(), positive.renormalized(c));
                let negative = evaluator.table().entry(Sign::Negative, bit);
                assert_eq!(evaluator.evaluate(-tick).unwrap(), negative.renormalized(c));
            }
        }
    }

    #[test]
    fn test_known_vectors_full() {
        let evaluator = full();
        assert_eq!(
            evaluator.evaluate(MAX_TICK).unwrap(),
            hex("9a534e905cd84f9b4656b1c88008ee0cfee4b52ef0c8fed4a782486f1cc1b848a4d2d687f9d8d005d23bb2054228ba415a182c")
        );
        assert_eq!(
            evaluator.evaluate(MIN_TICK).unwrap(),
            hex("1a8a93d2ec0d01859cbe01ab99a")
        );
        assert_eq!(
            evaluator.evaluate(12345).unwrap(),
            hex("36fbb08907d27d7c55d642b5b8332f1dce2cb9dddd3bfc26da80bc6c055624088")
        );
        assert_eq!(
            evaluator.evaluate(-12345).unwrap(),
            hex("4a7edb420fc2b5b7add94e1e3721ece06eb9acf05f8215be7da93feb21d60501")
        );
        assert_eq!(
            evaluator.evaluate(887272).unwrap(),
            hex("fffb12cdf1087799c03e5a811a7aaa0ac062cc6fc7ce0a031bb586d90073c16820e1f479d98171ae7c5bda4bb2035a0b")
        );
        assert_eq!(
            evaluator.evaluate(-887272).unwrap(),
            hex("10004ed4a54c54e3853f8398883ca4789")
        );
    }

    #[test]
    fn test_known_vectors_half() {
        let evaluator = half();
        assert_eq!(
            evaluator.evaluate(12345).unwrap(),
            hex("36fbb08907d27d7c55d642b5b8332f1ac")
        );
        assert_eq!(
            evaluator.evaluate(-12345).unwrap(),
            hex("4a7edb420fc2b5b7add94e1e3721ecdd")
        );
        assert_eq!(
            evaluator.evaluate(MAX_TICK).unwrap(),
            hex("9a534e905cd84f9b4656b1c88008edf32751c32410049e9fb2e1089d8d36bc74d347e1")
        );
        // below 2^-128 the half register truncates to nothing
        assert_eq!(evaluator.evaluate(-887272).unwrap(), U512::one());
        assert_eq!(evaluator.evaluate(MIN_TICK).unwrap(), U512::zero());
    }

    #[test]
    fn test_out_of_range_ticks() {
        let evaluator = full();
        assert_eq!(
            evaluator.evaluate(1 << 20),
            Err(TickPowerError::TickOutOfRange(1 << 20))
        );
        assert_eq!(
            evaluator.evaluate(-(1 << 20)),
            Err(TickPowerError::TickOutOfRange(-(1 << 20)))
        );
        assert!(evaluator.evaluate(i32::MIN).is_err());
        assert!(evaluator.evaluate(MAX_TICK).is_ok());
    }

    #[test]
    fn test_canonical_shift_limit() {
        let table = PowerTable::frozen(WidthPolicy::Full);
        assert_eq!(PriceEvaluator::max_canonical_shift(&table), 345);
        assert!(PriceEvaluator::with_canonical_shift(table.clone(), 345).is_ok());
        assert_eq!(
            PriceEvaluator::with_canonical_shift(table.clone(), 346),
            Err(TickPowerError::CanonicalShiftTooLarge { shift: 346, max: 345 })
        );

        let widest = PriceEvaluator::with_canonical_shift(table, 345).unwrap();
        assert!(widest.evaluate(MAX_TICK).unwrap().bits() <= ACCUMULATOR_BITS as usize);
    }

    #[test]
    fn test_small_canonical_shift() {
        let table = PowerTable::frozen(WidthPolicy::Full);
        let evaluator = PriceEvaluator::with_canonical_shift(table, 0).unwrap();
        // every step floors, so products below 2 never leave 1
        assert_eq!(evaluator.evaluate(6932).unwrap(), U512::one());
        assert_eq!(evaluator.evaluate(-1).unwrap(), U512::zero());
    }

    #[test]
    fn test_tick_at_price() {
        let evaluator = full();
        assert_eq!(evaluator.tick_at_price(evaluator.one()).unwrap(), 0);
        let price = evaluator.evaluate(-12345).unwrap();
        assert_eq!(evaluator.tick_at_price(price).unwrap(), -12345);
        assert_eq!(evaluator.tick_at_price(price + U512::one()).unwrap(), -12345);
        assert_eq!(evaluator.tick_at_price(price - U512::one()).unwrap(), -12346);
        assert_eq!(
            evaluator.tick_at_price(U512::zero()),
            Err(TickPowerError::PriceOutOfRange)
        );
        let top = evaluator.evaluate(MAX_TICK).unwrap();
        assert_eq!(evaluator.tick_at_price(top).unwrap(), MAX_TICK);
        assert_eq!(
            evaluator.tick_at_price(top + U512::one()),
            Err(TickPowerError::PriceOutOfRange)
        );
    }

    #[test]
    fn test_evaluator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PriceEvaluator>();
    }
}
