//! Byte-oriented helpers.
//!
//! These combine bit regrouping with encoding so callers holding raw bytes do
//! not have to convert to 5-bit values themselves.

use crate::{Bech32Error, convert_bits, decode, encode};

/// Converts bytes to 5-bit groups (zero-padded) and encodes them.
///
/// # Example
/// ```
/// use bech32_text::convenience::{decode_to_base256, encode_from_base256};
///
/// let encoded = encode_from_base256("tb", b"hello").unwrap();
/// assert_eq!(encoded, "tb1dpjkcmr0ux9ljh");
///
/// let (hrp, bytes) = decode_to_base256(&encoded).unwrap();
/// assert_eq!(hrp, "tb");
/// assert_eq!(bytes, b"hello");
/// ```
pub fn encode_from_base256(hrp: &str, bytes: &[u8]) -> Result<String, Bech32Error> {
    let values = convert_bits(bytes, 8, 5, true)?;
    Ok(encode(hrp, &values)?)
}

/// Decodes a string and converts its 5-bit data back to bytes.
///
/// Fails with [`ConvertError::InvalidPadding`](crate::ConvertError::InvalidPadding)
/// if the data does not end on zero padding.
pub fn decode_to_base256(s: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    let (hrp, values) = decode(s)?;
    let bytes = convert_bits(&values, 5, 8, false)?;
    Ok((hrp, bytes))
}
