//! Fixed-width words for table entries and the evaluator accumulator
//!
//! Table words are at most 256 bits. The accumulator is 512 bits and every
//! multiply goes through a 1024-bit intermediate before the renormalizing
//! right shift, so a step can never lose high bits.

use num_bigint::BigUint;

use crate::errors::{CoreResult, TickPowerError};

#[allow(clippy::manual_div_ceil, clippy::assign_op_pattern)]
mod uint_impl {
    use uint::construct_uint;

    construct_uint! {
        /// 256-bit unsigned integer.
        pub struct U256(4);
    }

    construct_uint! {
        /// 512-bit unsigned integer.
        pub struct U512(8);
    }

    construct_uint! {
        /// 1024-bit unsigned integer.
        pub struct U1024(16);
    }
}

pub use uint_impl::{U1024, U256, U512};

/// Zero-extend a 256-bit word to 1024 bits
pub fn widen_u256(value: U256) -> U1024 {
    let mut limbs = [0u64; 16];
    limbs[..4].copy_from_slice(&value.0);
    U1024(limbs)
}

/// Zero-extend a 512-bit word to 1024 bits
pub fn widen_u512(value: U512) -> U1024 {
    let mut limbs = [0u64; 16];
    limbs[..8].copy_from_slice(&value.0);
    U1024(limbs)
}

/// Zero-extend a 256-bit word to 512 bits
pub fn u256_to_u512(value: U256) -> U512 {
    let mut limbs = [0u64; 8];
    limbs[..4].copy_from_slice(&value.0);
    U512(limbs)
}

/// Truncate a 1024-bit word to 512 bits, returning None if high bits are set
pub fn narrow_to_u512(value: U1024) -> Option<U512> {
    if value.0[8..].iter().any(|&limb| limb != 0) {
        return None;
    }
    let mut limbs = [0u64; 8];
    limbs.copy_from_slice(&value.0[..8]);
    Some(U512(limbs))
}

/// Multiply the accumulator by a table word and shift right, flooring
/// result = floor(acc * word / 2^shift)
pub fn mul_shr(acc: U512, word: U256, shift: u32) -> CoreResult<U512> {
    let product = widen_u512(acc)
        .checked_mul(widen_u256(word))
        .ok_or(TickPowerError::MathOverflow)?;
    narrow_to_u512(product >> shift).ok_or(TickPowerError::MathOverflow)
}

/// Convert an arbitrary-precision integer into a 256-bit word
pub fn u256_from_biguint(value: &BigUint) -> Option<U256> {
    let digits = value.to_u64_digits();
    if digits.len() > 4 {
        return None;
    }
    let mut limbs = [0u64; 4];
    limbs[..digits.len()].copy_from_slice(&digits);
    Some(U256(limbs))
}

/// Convert little-endian 64-bit limbs into an arbitrary-precision integer
pub fn biguint_from_limbs(limbs: &[u64]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::default(), |acc, &limb| (acc << 64u32) + BigUint::from(limb))
}

/// Convert a 256-bit word into an arbitrary-precision integer
pub fn u256_to_biguint(value: &U256) -> BigUint {
    biguint_from_limbs(&value.0)
}

/// Convert a 512-bit word into an arbitrary-precision integer
pub fn u512_to_biguint(value: &U512) -> BigUint {
    biguint_from_limbs(&value.0)
}
