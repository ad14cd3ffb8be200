//! Table data model: signs, width policies, bit indices and entries

use std::fmt;
use std::str::FromStr;

use crate::constants::BIT_COUNT;
use crate::errors::{CoreResult, TickPowerError};
use crate::math::big_int::{u256_to_u512, U256, U512};

/// Direction of the exponent `sign * 2^bit_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub const ALL: [Sign; 2] = [Sign::Positive, Sign::Negative];

    /// Sign of a tick; zero counts as positive
    pub fn of_tick(tick: i32) -> Self {
        if tick < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    pub fn factor(&self) -> i64 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Positive => "positive",
            Sign::Negative => "negative",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" | "pos" | "+" => Ok(Sign::Positive),
            "negative" | "neg" | "-" => Ok(Sign::Negative),
            other => Err(format!("unknown sign: {other}")),
        }
    }
}

/// Fixed-point register width for encoded words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WidthPolicy {
    /// 128-bit words
    Half,
    /// 256-bit words
    Full,
}

impl WidthPolicy {
    pub const fn bits(&self) -> u32 {
        match self {
            WidthPolicy::Half => 128,
            WidthPolicy::Full => 256,
        }
    }

    /// Hex digits in a zero-padded serialized word
    pub const fn hex_digits(&self) -> usize {
        (self.bits() / 4) as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WidthPolicy::Half => "half",
            WidthPolicy::Full => "full",
        }
    }
}

impl fmt::Display for WidthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "half" | "128" => Ok(WidthPolicy::Half),
            "full" | "256" => Ok(WidthPolicy::Full),
            other => Err(format!("unknown width policy: {other}")),
        }
    }
}

/// Bit position within the 20-bit tick magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitIndex(pub(crate) u8);

impl BitIndex {
    pub const MAX: BitIndex = BitIndex(BIT_COUNT as u8 - 1);

    pub fn new(index: u8) -> CoreResult<Self> {
        if usize::from(index) >= BIT_COUNT {
            return Err(TickPowerError::BitIndexOutOfRange(index));
        }
        Ok(Self(index))
    }

    pub const fn get(&self) -> u8 {
        self.0
    }

    pub const fn as_usize(&self) -> usize {
        self.0 as usize
    }

    /// The exponent magnitude 2^index this bit stands for
    pub const fn exponent(&self) -> u32 {
        1 << self.0
    }

    pub fn all() -> impl Iterator<Item = BitIndex> {
        (0..BIT_COUNT as u8).map(BitIndex)
    }
}

impl fmt::Display for BitIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive range of bit indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    first: BitIndex,
    last: BitIndex,
}

impl BitRange {
    pub fn new(first: u8, last: u8) -> CoreResult<Self> {
        if first > last {
            return Err(TickPowerError::InvalidBitRange { first, last });
        }
        Ok(Self {
            first: BitIndex::new(first)?,
            last: BitIndex::new(last)?,
        })
    }

    pub fn full() -> Self {
        Self {
            first: BitIndex(0),
            last: BitIndex::MAX,
        }
    }

    pub fn first(&self) -> BitIndex {
        self.first
    }

    pub fn last(&self) -> BitIndex {
        self.last
    }

    pub fn contains(&self, bit: BitIndex) -> bool {
        self.first <= bit && bit <= self.last
    }

    pub fn iter(&self) -> impl Iterator<Item = BitIndex> {
        (self.first.0..=self.last.0).map(BitIndex)
    }
}

impl Default for BitRange {
    fn default() -> Self {
        Self::full()
    }
}

/// One table entry: `value = floor(1.0001^(sign * 2^bit_index) * 2^shift)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerConstant {
    pub bit_index: BitIndex,
    pub sign: Sign,
    pub width: WidthPolicy,
    pub shift: u32,
    pub value: U256,
}

impl PowerConstant {
    /// Signed exponent `sign * 2^bit_index`
    pub fn exponent(&self) -> i64 {
        self.sign.factor() * i64::from(self.bit_index.exponent())
    }

    /// The encoded word re-expressed at another fractional shift, flooring
    pub fn renormalized(&self, shift: u32) -> U512 {
        let wide = u256_to_u512(self.value);
        if shift >= self.shift {
            wide << (shift - self.shift)
        } else {
            wide >> (self.shift - shift)
        }
    }
}
