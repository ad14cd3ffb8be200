//! Property-based tests for the price evaluator.
//! Compares evaluator output against a high-precision reference and checks
//! ordering and inverse relations across the whole tick domain.

use num_bigint::BigUint;
use proptest::prelude::*;
use tick_power_core::math::big_int::u512_to_biguint;
use tick_power_core::table::base_ratio;
use tick_power_core::{PowerTable, Precision, PriceEvaluator, Sign, WidthPolicy, MAX_TICK, MIN_TICK};

// ============================================================================
// Helpers
// ============================================================================

fn evaluator(width: WidthPolicy) -> PriceEvaluator {
    PriceEvaluator::new(PowerTable::frozen(width))
}

fn width_policy() -> impl Strategy<Value = WidthPolicy> {
    prop_oneof![Just(WidthPolicy::Half), Just(WidthPolicy::Full)]
}

/// floor(1.0001^tick * 2^shift) from the high-precision engine
fn reference(tick: i32, shift: u32) -> BigUint {
    let precision = Precision::default();
    base_ratio(Sign::of_tick(tick), precision)
        .unwrap()
        .powi(u64::from(tick.unsigned_abs()))
        .floor_scaled(shift)
        .unwrap()
}

fn abs_diff(a: &BigUint, b: &BigUint) -> BigUint {
    if a > b {
        a - b
    } else {
        b - a
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Each multiply loses less than a few units in the last place of the
    /// accumulator, relative to the running value
    #[test]
    fn prop_matches_high_precision_reference(
        width in width_policy(),
        tick in MIN_TICK..=MAX_TICK,
    ) {
        let evaluator = evaluator(width);
        let shift = evaluator.canonical_shift();
        let actual = u512_to_biguint(&evaluator.evaluate(tick).unwrap());
        let expected = reference(tick, shift);

        let steps = tick.unsigned_abs().count_ones();
        let bound = BigUint::from(8 * steps) * ((&expected >> shift) + 1u32);
        prop_assert!(
            abs_diff(&actual, &expected) <= bound,
            "tick {} off by more than {}", tick, bound
        );
    }

    /// evaluate(t) * evaluate(-t) stays close to 2^(2C)
    #[test]
    fn prop_inverse_symmetry(width in width_policy(), tick in 0..=MAX_TICK) {
        let evaluator = evaluator(width);
        let up = u512_to_biguint(&evaluator.evaluate(tick).unwrap());
        let down = u512_to_biguint(&evaluator.evaluate(-tick).unwrap());
        let unity = BigUint::from(1u8) << (2 * evaluator.canonical_shift());

        let steps = tick.unsigned_abs().count_ones().max(1);
        let bound = BigUint::from(16 * steps) * (&up + &down);
        prop_assert!(abs_diff(&(&up * &down), &unity) <= bound);
    }

    #[test]
    fn prop_monotonic_in_tick(width in width_policy(), tick in MIN_TICK..MAX_TICK) {
        let evaluator = evaluator(width);
        let lower = evaluator.evaluate(tick).unwrap();
        let upper = evaluator.evaluate(tick + 1).unwrap();
        match width {
            // the half register floors very small prices to equal values
            WidthPolicy::Half => prop_assert!(lower <= upper),
            WidthPolicy::Full => prop_assert!(lower < upper),
        }
    }

    #[test]
    fn prop_tick_at_price_inverts_evaluate(tick in MIN_TICK..=MAX_TICK) {
        let evaluator = evaluator(WidthPolicy::Full);
        let price = evaluator.evaluate(tick).unwrap();
        prop_assert_eq!(evaluator.tick_at_price(price).unwrap(), tick);
    }

    #[test]
    fn prop_out_of_range_ticks_rejected(
        width in width_policy(),
        excess in 1i32..1_000_000,
        negative in any::<bool>(),
    ) {
        let tick = if negative { MIN_TICK - excess } else { MAX_TICK + excess };
        prop_assert!(evaluator(width).evaluate(tick).is_err());
    }
}
