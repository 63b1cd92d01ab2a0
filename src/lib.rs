//! Bech32 (BIP-173) checksummed text encoding.
//!
//! Converts a human-readable prefix plus a sequence of 5-bit values into a
//! single-case string with a 6-character BCH checksum, and back. Bit
//! regrouping between byte and 5-bit domains is exposed as [`convert_bits`].
//!
//! # Example
//!
//! ```
//! use bech32_text::{convert_bits, decode, encode};
//!
//! let program = [0x75, 0x1e, 0x76, 0xe8];
//! let mut data = vec![0u8];
//! data.extend(convert_bits(&program, 8, 5, true).unwrap());
//!
//! let encoded = encode("bc", &data).unwrap();
//! let (hrp, decoded) = decode(&encoded).unwrap();
//! assert_eq!(hrp, "bc");
//! assert_eq!(decoded, data);
//! ```

mod core;
mod encoders;

pub mod convenience;
pub mod prelude;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::charset::{CHARSET, SEPARATOR, char_to_value, value_to_char};
pub use crate::core::config::{HrpConfig, HrpRegistry, ResolvedHrp, Settings};
pub use crate::encoders::algorithms::checksum::{
    CHECKSUM_LENGTH, create_checksum, detect_variant, hrp_expand, polymod, verify_checksum,
};
pub use crate::encoders::algorithms::{
    Bech32Error, ConvertError, DecodeError, EncodeError, HrpProblem, Variant, convert_bits,
};
pub use crate::encoders::encoding::{
    Decoded, MAX_HRP_LENGTH, MAX_LENGTH, MIN_LENGTH, decode, decode_generic, decode_no_limit,
    decode_with_variant, encode, encode_with_variant,
};

#[cfg(test)]
mod tests;
