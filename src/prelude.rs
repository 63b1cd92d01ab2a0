//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use bech32_text::prelude::*;
//!
//! let encoded = encode_from_base256("tb", b"hello").unwrap();
//! let (hrp, bytes) = decode_to_base256(&encoded).unwrap();
//! assert_eq!((hrp.as_str(), bytes.as_slice()), ("tb", &b"hello"[..]));
//! ```

pub use crate::{
    Bech32Error,
    ConvertError,
    DecodeError,
    Decoded,
    EncodeError,
    // Config
    HrpRegistry,
    Variant,
    // Byte helpers
    convenience::{decode_to_base256, encode_from_base256},
    // Core encoding/decoding
    convert_bits,
    decode,
    decode_generic,
    encode,
    encode_with_variant,
};
