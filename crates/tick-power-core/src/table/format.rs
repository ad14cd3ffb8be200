//! # Table Formats
//!
//! Renderings of a [`PowerTable`]:
//! - zero-padded big-endian hex words
//! - a serde artifact for interchange (feature `serde`)
//! - diagnostic rows for human inspection
//! - a Rust module of `FrozenWord` arrays, the format of the checked-in tables

use crate::constants::DISPLAY_DIGITS;
use crate::errors::{CoreResult, TickPowerError};
use crate::math::big_int::U256;
use crate::math::precision::Precision;
use crate::table::generator::base_power;
use crate::table::types::{BitIndex, PowerConstant, Sign, WidthPolicy};
use crate::table::validator::ValidationReport;
use crate::table::PowerTable;

// ============================================================================
// Hex Words
// ============================================================================

/// Lowercase hex, zero-padded to `W / 4` digits.
/// A word wider than `W` is a caller bug; release builds print all 64 digits.
pub fn to_hex(value: &U256, width: WidthPolicy) -> String {
    debug_assert!(
        value.bits() as u32 <= width.bits(),
        "{}-bit word does not fit the {width} width",
        value.bits()
    );
    let full: String = value
        .0
        .iter()
        .rev()
        .map(|limb| format!("{limb:016x}"))
        .collect();
    let digits = width.hex_digits();
    let (high, low) = full.split_at(full.len() - digits);
    if high.bytes().all(|b| b == b'0') {
        low.to_string()
    } else {
        full
    }
}

/// Parse a hex word, with or without `0x`, rejecting values wider than `W`
pub fn from_hex(text: &str, width: WidthPolicy) -> CoreResult<U256> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() || digits.len() > 64 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TickPowerError::InvalidHex(text.to_string()));
    }
    let value = U256::from_str_radix(&digits.to_ascii_lowercase(), 16)
        .map_err(|_| TickPowerError::InvalidHex(text.to_string()))?;
    if value.bits() as u32 > width.bits() {
        return Err(TickPowerError::InvalidHex(text.to_string()));
    }
    Ok(value)
}

// ============================================================================
// Serde Artifact
// ============================================================================

#[cfg(feature = "serde")]
mod artifact {
    use serde::{Deserialize, Serialize};

    use super::{from_hex, to_hex};
    use crate::errors::CoreResult;
    use crate::table::types::{BitIndex, PowerConstant, Sign, WidthPolicy};
    use crate::table::validator::Validator;
    use crate::table::PowerTable;

    /// One serialized table word
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ArtifactEntry {
        pub sign: Sign,
        pub bit_index: u8,
        pub shift: u32,
        /// Zero-padded hex word
        pub value: String,
    }

    /// Interchange form of a [`PowerTable`]
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TableArtifact {
        pub width: WidthPolicy,
        pub entries: Vec<ArtifactEntry>,
    }

    impl TableArtifact {
        /// Parse, validate and reassemble the table. Every word is re-checked
        /// for width, and the shifts and words must pass `validator`.
        pub fn into_table(self, validator: &Validator) -> CoreResult<PowerTable> {
            let width = self.width;
            let entries = self
                .entries
                .into_iter()
                .map(|entry| {
                    Ok(PowerConstant {
                        bit_index: BitIndex::new(entry.bit_index)?,
                        sign: entry.sign,
                        width,
                        shift: entry.shift,
                        value: from_hex(&entry.value, width)?,
                    })
                })
                .collect::<CoreResult<Vec<_>>>()?;
            validator.check(&entries)?;
            PowerTable::from_entries(width, &entries)
        }
    }

    impl PowerTable {
        pub fn to_artifact(&self) -> TableArtifact {
            TableArtifact {
                width: self.width(),
                entries: self
                    .entries()
                    .map(|entry| ArtifactEntry {
                        sign: entry.sign,
                        bit_index: entry.bit_index.get(),
                        shift: entry.shift,
                        value: to_hex(&entry.value, self.width()),
                    })
                    .collect(),
            }
        }
    }
}

#[cfg(feature = "serde")]
pub use artifact::{ArtifactEntry, TableArtifact};

// ============================================================================
// Diagnostic Rows
// ============================================================================

/// One human-readable line per table entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRow {
    pub sign: Sign,
    pub bit_index: BitIndex,
    /// 2^bit_index
    pub exponent: u32,
    /// 1.0001^(sign * 2^bit_index), rounded to 25 fractional digits
    pub price: String,
    pub hex: String,
    /// log2 of the encoded word, present when the table was validated
    pub log2: Option<String>,
}

pub fn diagnostic_rows(
    entries: &[PowerConstant],
    report: Option<&ValidationReport>,
    precision: Precision,
) -> CoreResult<Vec<DiagnosticRow>> {
    entries
        .iter()
        .map(|entry| {
            let price = base_power(entry.sign, entry.bit_index, precision)?
                .to_rounded_decimal_string(DISPLAY_DIGITS);
            let log2 = report
                .and_then(|report| report.entry(entry.sign, entry.bit_index))
                .map(|check| check.measured_log2.to_rounded_decimal_string(DISPLAY_DIGITS));
            Ok(DiagnosticRow {
                sign: entry.sign,
                bit_index: entry.bit_index,
                exponent: entry.bit_index.exponent(),
                price,
                hex: to_hex(&entry.value, entry.width),
                log2,
            })
        })
        .collect()
}

/// Render rows grouped by sign, each group under a header line
pub fn render_diagnostics(rows: &[DiagnosticRow]) -> String {
    let with_log2 = rows.iter().any(|row| row.log2.is_some());
    let mut out = String::new();
    for sign in Sign::ALL {
        let group: Vec<_> = rows.iter().filter(|row| row.sign == sign).collect();
        if group.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("# {sign}\n"));
        out.push_str("pow of 2\tbp exponent\tprice\thex shifted price");
        if with_log2 {
            out.push_str("\tlog2");
        }
        out.push('\n');
        for row in group {
            out.push_str(&format!(
                "{}\t{}{}\t{}\t0x{}",
                row.bit_index,
                if sign == Sign::Negative { "-" } else { "" },
                row.exponent,
                row.price,
                row.hex
            ));
            if let Some(log2) = &row.log2 {
                out.push_str(&format!("\t{log2}"));
            }
            out.push('\n');
        }
    }
    out
}

// ============================================================================
// Rust Module
// ============================================================================

const MODULE_HEADER: &str = "\
//! Frozen power tables for both width policies.
//!
//! Generated by `tick-power-gen --format rust`; do not edit by hand.
//! Limbs are little-endian.

use crate::constants::BIT_COUNT;
use crate::math::big_int::U256;

#[derive(Debug, Clone, Copy)]
pub(crate) struct FrozenWord {
    pub shift: u32,
    pub value: U256,
}
";

fn const_name(width: WidthPolicy, sign: Sign) -> String {
    format!("{}_{}", width.as_str(), sign.as_str()).to_ascii_uppercase()
}

/// Emit a Rust module holding each table as `FrozenWord` arrays
pub fn render_rust_module(tables: &[&PowerTable]) -> String {
    let mut out = String::from(MODULE_HEADER);
    for table in tables {
        for sign in Sign::ALL {
            out.push_str(&format!(
                "\npub(crate) const {}: [FrozenWord; BIT_COUNT] = [\n",
                const_name(table.width(), sign)
            ));
            for entry in table.row(sign) {
                let limbs = entry
                    .value
                    .0
                    .iter()
                    .map(|limb| format!("0x{limb:016x}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!(
                    "    FrozenWord {{ shift: {}, value: U256([{limbs}]) }},\n",
                    entry.shift
                ));
            }
            out.push_str("];\n");
        }
    }
    out
}
