//! # High-Precision Reals
//!
//! Binary fixed-point reals on arbitrary-precision integers, used offline to
//! derive and check table constants. A value is `raw / 2^bits` where `bits`
//! comes from an explicit [`Precision`]; nothing here reads global state, so
//! derivations at different precisions can run side by side.
//!
//! Every operation truncates toward negative infinity. With the default
//! 1024 fractional bits the accumulated error after twenty squarings stays
//! hundreds of bits below anything a 256-bit table word can see.

use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, Sign as BigSign};
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Fractional bit count of the high-precision engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Precision {
    bits: u32,
}

impl Precision {
    /// Default working precision (about 308 decimal digits)
    pub const DEFAULT_BITS: u32 = 1024;

    pub const fn new(bits: u32) -> Self {
        Self { bits }
    }

    /// Precision holding at least `digits` significant decimal digits
    pub fn from_decimal_digits(digits: u32) -> Self {
        // log2(10) ~= 3.32193
        let bits = (u64::from(digits) * 332_193).div_ceil(100_000);
        Self::new(u32::try_from(bits).unwrap_or(u32::MAX))
    }

    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Approximate number of decimal digits carried
    pub fn decimal_digits(&self) -> u32 {
        (u64::from(self.bits) * 30_103 / 100_000) as u32
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BITS)
    }
}

/// Signed binary fixed-point real: `raw / 2^precision.bits()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HpReal {
    raw: BigInt,
    precision: Precision,
}

impl HpReal {
    fn from_raw(raw: BigInt, precision: Precision) -> Self {
        Self { raw, precision }
    }

    fn frac_bits(&self) -> usize {
        self.precision.bits as usize
    }

    pub fn zero(precision: Precision) -> Self {
        Self::from_raw(BigInt::zero(), precision)
    }

    pub fn one(precision: Precision) -> Self {
        Self::from_raw(BigInt::one() << precision.bits as usize, precision)
    }

    /// floor(numerator / denominator) at the given precision
    pub fn from_ratio(numerator: u64, denominator: u64, precision: Precision) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let raw = (BigInt::from(numerator) << precision.bits as usize) / BigInt::from(denominator);
        Some(Self::from_raw(raw, precision))
    }

    pub fn from_integer(value: &BigUint, precision: Precision) -> Self {
        Self::from_raw(
            BigInt::from_biguint(BigSign::Plus, value.clone()) << precision.bits as usize,
            precision,
        )
    }

    pub fn from_i64(value: i64, precision: Precision) -> Self {
        Self::from_raw(BigInt::from(value) << precision.bits as usize, precision)
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn is_positive(&self) -> bool {
        self.raw.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.raw.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self::from_raw(self.raw.abs(), self.precision)
    }

    pub fn neg(&self) -> Self {
        Self::from_raw(-&self.raw, self.precision)
    }

    pub fn add(&self, other: &Self) -> Self {
        debug_assert_eq!(self.precision, other.precision);
        Self::from_raw(&self.raw + &other.raw, self.precision)
    }

    pub fn sub(&self, other: &Self) -> Self {
        debug_assert_eq!(self.precision, other.precision);
        Self::from_raw(&self.raw - &other.raw, self.precision)
    }

    pub fn mul(&self, other: &Self) -> Self {
        debug_assert_eq!(self.precision, other.precision);
        Self::from_raw((&self.raw * &other.raw) >> self.frac_bits(), self.precision)
    }

    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Division, None when `other` is zero
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        debug_assert_eq!(self.precision, other.precision);
        if other.raw.is_zero() {
            return None;
        }
        Some(Self::from_raw(
            (&self.raw << self.frac_bits()) / &other.raw,
            self.precision,
        ))
    }

    pub fn mul_i64(&self, factor: i64) -> Self {
        Self::from_raw(&self.raw * factor, self.precision)
    }

    /// Exact multiplication by 2^exponent (floored when exponent is negative)
    pub fn mul_pow2(&self, exponent: i64) -> Self {
        let raw = if exponent >= 0 {
            &self.raw << exponent as usize
        } else {
            &self.raw >> exponent.unsigned_abs() as usize
        };
        Self::from_raw(raw, self.precision)
    }

    /// self^(2^k) by k successive squarings
    pub fn pow_two_exponent(&self, k: u32) -> Self {
        (0..k).fold(self.clone(), |acc, _| acc.square())
    }

    /// self^n by square-and-multiply
    pub fn powi(&self, mut n: u64) -> Self {
        let mut result = Self::one(self.precision);
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = result.mul(&base);
            }
            n >>= 1;
            if n > 0 {
                base = base.square();
            }
        }
        result
    }

    /// Largest integer not above the value
    pub fn floor(&self) -> BigInt {
        &self.raw >> self.frac_bits()
    }

    pub fn floor_i64(&self) -> Option<i64> {
        self.floor().to_i64()
    }

    /// floor(log2(self)), None unless positive
    pub fn floor_log2(&self) -> Option<i64> {
        if !self.is_positive() {
            return None;
        }
        Some(self.raw.bits() as i64 - 1 - i64::from(self.precision.bits))
    }

    /// floor(self * 2^shift) as an unsigned integer, None if negative
    pub fn floor_scaled(&self, shift: u32) -> Option<BigUint> {
        if self.is_negative() {
            return None;
        }
        let scaled = self.mul_pow2(i64::from(shift)).floor();
        scaled.to_biguint()
    }

    /// Natural logarithm, None unless positive
    pub fn ln(&self) -> Option<Self> {
        let k = self.floor_log2()?;
        // mantissa m = self / 2^k lies in [1, 2)
        let mantissa = self.mul_pow2(-k);
        let one = Self::one(self.precision);
        let z = mantissa.sub(&one).checked_div(&mantissa.add(&one))?;
        let ln_mantissa = atanh(&z).mul_i64(2);
        Some(ln_mantissa.add(&ln2(self.precision).mul_i64(k)))
    }

    pub fn log2(&self) -> Option<Self> {
        self.ln()?.checked_div(&ln2(self.precision))
    }

    pub fn log10(&self) -> Option<Self> {
        let ln10 = Self::from_i64(10, self.precision).ln()?;
        self.ln()?.checked_div(&ln10)
    }

    /// floor(log10(self)) read off the decimal expansion, None unless positive
    pub fn decimal_exponent(&self) -> Option<i64> {
        if !self.is_positive() {
            return None;
        }
        let integer = self.floor();
        if !integer.is_zero() {
            return Some(integer.to_string().len() as i64 - 1);
        }
        let one = BigInt::one() << self.frac_bits();
        let mut raw = self.raw.clone();
        let mut exponent = 0i64;
        while raw < one {
            raw *= 10u32;
            exponent -= 1;
        }
        Some(exponent)
    }

    /// Decimal rendering truncated to `digits` fractional digits
    pub fn to_decimal_string(&self, digits: usize) -> String {
        let magnitude = self.raw.abs();
        let mask = (BigInt::one() << self.frac_bits()) - 1;
        let integer = &magnitude >> self.frac_bits();
        let mut fraction = &magnitude & &mask;

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&integer.to_string());
        if digits > 0 {
            out.push('.');
            for _ in 0..digits {
                fraction *= 10u32;
                let digit = &fraction >> self.frac_bits();
                out.push_str(&digit.to_string());
                fraction &= &mask;
            }
        }
        out
    }

    /// Decimal rendering rounded half-up to `digits` fractional digits
    pub fn to_rounded_decimal_string(&self, digits: usize) -> String {
        let scale = num_traits::pow(BigInt::from(10u32), digits);
        let half = match self.frac_bits() {
            0 => BigInt::zero(),
            bits => BigInt::one() << (bits - 1),
        };
        let scaled = (self.raw.abs() * scale + half) >> self.frac_bits();
        let text = format!("{:0>width$}", scaled.to_string(), width = digits + 1);
        let (integer, fraction) = text.split_at(text.len() - digits);

        let mut out = String::new();
        if self.is_negative() && !scaled.is_zero() {
            out.push('-');
        }
        out.push_str(integer);
        if digits > 0 {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

impl PartialOrd for HpReal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HpReal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

/// atanh(z) = z + z^3/3 + z^5/5 + ... for |z| < 1
fn atanh(z: &HpReal) -> HpReal {
    let z_squared = z.square();
    let mut power = z.clone();
    let mut sum = HpReal::zero(z.precision);
    let mut denominator = 1i64;
    loop {
        let term = &power.raw / BigInt::from(denominator);
        if term.is_zero() {
            break;
        }
        sum.raw += term;
        power = power.mul(&z_squared);
        denominator += 2;
    }
    sum
}

/// ln(2) = 2 * atanh(1/3)
pub fn ln2(precision: Precision) -> HpReal {
    let third = HpReal::from_raw((BigInt::one() << precision.bits as usize) / 3, precision);
    atanh(&third).mul_i64(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Precision = Precision::new(256);

    fn close(a: &HpReal, b: &HpReal, tolerance_bits: i64) -> bool {
        let diff = a.sub(b).abs();
        match diff.floor_log2() {
            None => true,
            Some(log) => log < -tolerance_bits,
        }
    }

    #[test]
    fn test_from_decimal_digits() {
        assert_eq!(Precision::from_decimal_digits(1000).bits(), 3322);
        assert_eq!(Precision::from_decimal_digits(300).bits(), 997);
        // saturates instead of wrapping
        assert_eq!(Precision::from_decimal_digits(u32::MAX).bits(), u32::MAX);
        assert_eq!(Precision::default().decimal_digits(), 308);
    }

    #[test]
    fn test_ln2_digits() {
        let ln2 = ln2(P);
        assert_eq!(
            ln2.to_decimal_string(30),
            "0.693147180559945309417232121458"
        );
    }

    #[test]
    fn test_log2_of_powers_of_two() {
        for k in [-7i64, 0, 1, 5, 64] {
            let x = HpReal::one(P).mul_pow2(k);
            let log = x.log2().unwrap();
            assert!(close(&log, &HpReal::from_i64(k, P), 200), "log2(2^{k})");
        }
    }

    #[test]
    fn test_ln_of_non_positive() {
        assert!(HpReal::zero(P).ln().is_none());
        assert!(HpReal::from_i64(-3, P).ln().is_none());
    }

    #[test]
    fn test_powi_matches_squaring() {
        let base = HpReal::from_ratio(10_001, 10_000, P).unwrap();
        let by_squaring = base.pow_two_exponent(10);
        let by_powi = base.powi(1024);
        assert!(close(&by_squaring, &by_powi, 230));
    }

    #[test]
    fn test_floor_log2() {
        assert_eq!(HpReal::from_i64(1, P).floor_log2(), Some(0));
        assert_eq!(HpReal::from_i64(3, P).floor_log2(), Some(1));
        assert_eq!(HpReal::from_ratio(1, 3, P).unwrap().floor_log2(), Some(-2));
        assert_eq!(HpReal::zero(P).floor_log2(), None);
    }

    #[test]
    fn test_decimal_exponent() {
        assert_eq!(HpReal::from_i64(999, P).decimal_exponent(), Some(2));
        assert_eq!(HpReal::from_i64(1000, P).decimal_exponent(), Some(3));
        assert_eq!(HpReal::from_ratio(1, 8, P).unwrap().decimal_exponent(), Some(-1));
        assert_eq!(HpReal::from_ratio(1, 1024, P).unwrap().decimal_exponent(), Some(-4));
    }

    #[test]
    fn test_decimal_string() {
        let x = HpReal::from_ratio(5, 4, P).unwrap();
        assert_eq!(x.to_decimal_string(6), "1.250000");
        let y = HpReal::from_ratio(1, 8, P).unwrap().neg();
        assert_eq!(y.to_decimal_string(4), "-0.1250");
    }

    #[test]
    fn test_rounded_decimal_string() {
        let x = HpReal::from_ratio(10_001, 10_000, P).unwrap();
        assert_eq!(x.to_decimal_string(6), "1.000099");
        assert_eq!(x.to_rounded_decimal_string(6), "1.000100");
        let y = HpReal::from_ratio(2, 3, P).unwrap().neg();
        assert_eq!(y.to_rounded_decimal_string(3), "-0.667");
        assert_eq!(HpReal::from_i64(42, P).to_rounded_decimal_string(0), "42");
    }

    #[test]
    fn test_floor_scaled() {
        let x = HpReal::from_ratio(10_001, 10_000, P).unwrap();
        assert_eq!(x.floor_scaled(0), Some(BigUint::from(1u8)));
        // floor(1.0001 * 2^20) = 1048680
        assert_eq!(x.floor_scaled(20), Some(BigUint::from(1_048_680u32)));
        assert_eq!(x.neg().floor_scaled(4), None);
    }
}
