//! BCH checksum over GF(32).
//!
//! The checksum is the remainder of the hrp-expanded symbol sequence modulo the
//! code's generator polynomial, computed one 5-bit symbol at a time in a 30-bit
//! accumulator. Each generator below is the polynomial multiplied by `x^i`
//! (for `i` in 0..5) and reduced into the field, so XOR-ing it in is the same
//! as subtracting the corresponding multiple of the generator.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of symbols in a checksum.
pub const CHECKSUM_LENGTH: usize = 6;

const GENERATORS: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Low 25 bits: what survives a 5-bit left shift inside a 30-bit accumulator.
const SHIFT_MASK: u32 = 0x01ff_ffff;

/// Checksum flavour, identified by the constant the residue must equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// BIP-173
    #[default]
    Bech32,
    /// BIP-350
    Bech32m,
}

impl Variant {
    /// The value `polymod` must produce over a valid string.
    pub const fn constant(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc8_30a3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Bech32 => "bech32",
            Variant::Bech32m => "bech32m",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bech32" => Ok(Variant::Bech32),
            "bech32m" => Ok(Variant::Bech32m),
            _ => Err(format!(
                "Unknown checksum variant: {} (expected bech32 or bech32m)",
                s
            )),
        }
    }
}

/// Computes the polymod residue of a 5-bit symbol sequence.
///
/// Values wider than 5 bits are not rejected here; callers only pass symbols
/// produced by the charset or by [`hrp_expand`].
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & SHIFT_MASK) << 5) ^ u32::from(v);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Expands a human-readable part into symbols for checksumming.
///
/// High 3 bits of each byte, a zero, then the low 5 bits of each byte.
/// Callers lower-case the hrp first.
pub fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut expanded = Vec::with_capacity(bytes.len() * 2 + 1);
    expanded.extend(bytes.iter().map(|b| b >> 5));
    expanded.push(0);
    expanded.extend(bytes.iter().map(|b| b & 0x1f));
    expanded
}

/// Computes the six checksum symbols for `hrp` and `data`.
pub fn create_checksum(hrp: &str, data: &[u8], variant: Variant) -> [u8; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let residue = polymod(&values) ^ variant.constant();

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = ((residue >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Checks data whose last six symbols are the checksum.
pub fn verify_checksum(hrp: &str, data_with_checksum: &[u8], variant: Variant) -> bool {
    residue(hrp, data_with_checksum) == variant.constant()
}

/// Returns the variant whose constant matches, if any.
pub fn detect_variant(hrp: &str, data_with_checksum: &[u8]) -> Option<Variant> {
    match residue(hrp, data_with_checksum) {
        r if r == Variant::Bech32.constant() => Some(Variant::Bech32),
        r if r == Variant::Bech32m.constant() => Some(Variant::Bech32m),
        _ => None,
    }
}

fn residue(hrp: &str, data_with_checksum: &[u8]) -> u32 {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data_with_checksum);
    polymod(&values)
}
