//! Encoding and decoding of complete Bech32 strings.
//!
//! A Bech32 string is `<hrp>1<data><checksum>`, written entirely in one case.
//! The human-readable part may itself contain `1`; the separator is always the
//! last one in the string.

use crate::core::charset::{SEPARATOR, char_to_value, value_to_char};
use crate::encoders::algorithms::checksum::{
    CHECKSUM_LENGTH, Variant, create_checksum, detect_variant, verify_checksum,
};
use crate::encoders::algorithms::errors::{DecodeError, EncodeError, HrpProblem};

/// Maximum length of an encoded string, separator and checksum included.
pub const MAX_LENGTH: usize = 90;

/// Shortest possible string: one hrp character, separator, checksum.
pub const MIN_LENGTH: usize = 8;

/// Maximum length of a human-readable part.
pub const MAX_HRP_LENGTH: usize = 83;

/// Result of decoding when the checksum variant is not known in advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Human-readable part, in the case it was written
    pub hrp: String,
    /// 5-bit data values, checksum removed
    pub data: Vec<u8>,
    /// Which checksum constant the string satisfied
    pub variant: Variant,
}

/// Encodes `hrp` and 5-bit `data` with the original Bech32 checksum.
///
/// The output is upper case when the hrp is upper case, lower case otherwise.
///
/// # Example
///
/// ```
/// let encoded = bech32_text::encode("a", &[]).unwrap();
/// assert_eq!(encoded, "a12uel5l");
/// assert_eq!(bech32_text::encode("A", &[]).unwrap(), "A12UEL5L");
/// ```
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, EncodeError> {
    encode_with_variant(hrp, data, Variant::Bech32)
}

/// Encodes with an explicit checksum variant.
pub fn encode_with_variant(hrp: &str, data: &[u8], variant: Variant) -> Result<String, EncodeError> {
    check_hrp(hrp, Some(MAX_HRP_LENGTH)).map_err(|reason| EncodeError::InvalidHrp {
        hrp: hrp.to_string(),
        reason,
    })?;

    let has_lower = hrp.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hrp.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(EncodeError::InvalidCase);
    }

    if let Some(position) = data.iter().position(|&v| v > 31) {
        return Err(EncodeError::InvalidDataValue {
            value: data[position],
            position,
        });
    }

    let length = hrp.len() + 1 + data.len() + CHECKSUM_LENGTH;
    if length > MAX_LENGTH {
        return Err(EncodeError::ExceedsLengthLimit {
            length,
            max: MAX_LENGTH,
        });
    }

    let hrp_lower = hrp.to_ascii_lowercase();
    let checksum = create_checksum(&hrp_lower, data, variant);

    let mut result = String::with_capacity(length);
    result.push_str(&hrp_lower);
    result.push(SEPARATOR);
    // Values were range-checked above and the checksum is 5-bit by construction
    result.extend(data.iter().chain(checksum.iter()).filter_map(|&v| value_to_char(v)));

    if has_upper {
        result.make_ascii_uppercase();
    }

    Ok(result)
}

/// Decodes a Bech32 string into its human-readable part and 5-bit data.
///
/// The hrp is returned exactly as written, so an upper-case string yields an
/// upper-case hrp. The six checksum values are stripped from the data.
///
/// # Example
///
/// ```
/// let (hrp, data) = bech32_text::decode("A12UEL5L").unwrap();
/// assert_eq!(hrp, "A");
/// assert!(data.is_empty());
/// ```
pub fn decode(s: &str) -> Result<(String, Vec<u8>), DecodeError> {
    decode_with_variant(s, Variant::Bech32)
}

/// Decodes against a specific checksum variant.
pub fn decode_with_variant(s: &str, variant: Variant) -> Result<(String, Vec<u8>), DecodeError> {
    let (hrp, mut values) = parse(s, MAX_LENGTH)?;
    if !verify_checksum(&hrp.to_ascii_lowercase(), &values, variant) {
        return Err(DecodeError::InvalidChecksum);
    }
    values.truncate(values.len() - CHECKSUM_LENGTH);
    Ok((hrp.to_string(), values))
}

/// Decodes without the 90-character limit.
///
/// Some protocols (BOLT-11 invoices among them) reuse the Bech32 checksum for
/// strings far longer than BIP-173 allows. Every other rule still applies.
pub fn decode_no_limit(s: &str) -> Result<(String, Vec<u8>), DecodeError> {
    let (hrp, mut values) = parse(s, usize::MAX)?;
    if !verify_checksum(&hrp.to_ascii_lowercase(), &values, Variant::Bech32) {
        return Err(DecodeError::InvalidChecksum);
    }
    values.truncate(values.len() - CHECKSUM_LENGTH);
    Ok((hrp.to_string(), values))
}

/// Decodes a string with either checksum variant and reports which matched.
pub fn decode_generic(s: &str) -> Result<Decoded, DecodeError> {
    let (hrp, mut values) = parse(s, MAX_LENGTH)?;
    let variant =
        detect_variant(&hrp.to_ascii_lowercase(), &values).ok_or(DecodeError::InvalidChecksum)?;
    values.truncate(values.len() - CHECKSUM_LENGTH);
    Ok(Decoded {
        hrp: hrp.to_string(),
        data: values,
        variant,
    })
}

/// Structural validation shared by every decoder.
///
/// Returns the hrp slice and all symbol values after the separator, checksum
/// included. The checksum itself is not checked here.
fn parse(s: &str, max_length: usize) -> Result<(&str, Vec<u8>), DecodeError> {
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(DecodeError::InvalidCase);
    }

    let length = s.len();
    if !(MIN_LENGTH..=max_length).contains(&length) {
        return Err(DecodeError::ExceedsLengthLimit {
            length,
            min: MIN_LENGTH,
            max: max_length,
        });
    }

    let separator = s.rfind(SEPARATOR).ok_or(DecodeError::MissingSeparator)?;
    let hrp = &s[..separator];
    check_hrp(hrp, None).map_err(|reason| DecodeError::InvalidHrp {
        hrp: hrp.to_string(),
        reason,
    })?;

    let data_start = separator + SEPARATOR.len_utf8();
    let data = &s[data_start..];
    if data.len() < CHECKSUM_LENGTH {
        return Err(DecodeError::InvalidDataLength {
            length: data.chars().count(),
        });
    }

    let values = data
        .char_indices()
        .map(|(offset, c)| {
            char_to_value(c).ok_or(DecodeError::InvalidCharacter {
                char: c,
                position: data_start + offset,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    Ok((hrp, values))
}

/// Checks that every byte of `hrp` is printable ASCII (33..=126).
fn check_hrp(hrp: &str, max_length: Option<usize>) -> Result<(), HrpProblem> {
    if hrp.is_empty() {
        return Err(HrpProblem::Empty);
    }
    if let Some(max) = max_length
        && hrp.len() > max
    {
        return Err(HrpProblem::TooLong {
            length: hrp.len(),
            max,
        });
    }
    match hrp.bytes().position(|b| !(33..=126).contains(&b)) {
        Some(position) => Err(HrpProblem::InvalidByte {
            byte: hrp.as_bytes()[position],
            position,
        }),
        None => Ok(()),
    }
}
