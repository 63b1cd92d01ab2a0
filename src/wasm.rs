//! WebAssembly bindings for bech32-text
//!
//! Provides a JavaScript-friendly API for encoding and decoding.

use wasm_bindgen::prelude::*;

use crate::{Bech32Error, DecodeError, EncodeError, Variant};

/// Error type for WASM operations
#[wasm_bindgen]
#[derive(Debug)]
pub struct WasmError {
    message: String,
}

#[wasm_bindgen]
impl WasmError {
    /// Get the error message
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<String> for WasmError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<EncodeError> for WasmError {
    fn from(err: EncodeError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<DecodeError> for WasmError {
    fn from(err: DecodeError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<Bech32Error> for WasmError {
    fn from(err: Bech32Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Result of decoding, as seen from JavaScript
#[wasm_bindgen]
pub struct DecodedBytes {
    hrp: String,
    data: Vec<u8>,
    variant: Variant,
}

#[wasm_bindgen]
impl DecodedBytes {
    #[wasm_bindgen(getter)]
    pub fn hrp(&self) -> String {
        self.hrp.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn data(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// `"bech32"` or `"bech32m"`
    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> String {
        self.variant.as_str().to_string()
    }
}

/// Encode raw bytes under `hrp`
///
/// # Arguments
///
/// * `hrp` - Human-readable part
/// * `data` - Bytes, regrouped to 5-bit values with zero padding
/// * `variant` - `"bech32"` (default) or `"bech32m"`
#[wasm_bindgen]
pub fn encode_bytes(hrp: &str, data: &[u8], variant: Option<String>) -> Result<String, WasmError> {
    let variant = match variant {
        Some(name) => name.parse::<Variant>()?,
        None => Variant::Bech32,
    };
    let values = crate::convert_bits(data, 8, 5, true).map_err(Bech32Error::from)?;
    Ok(crate::encode_with_variant(hrp, &values, variant)?)
}

/// Decode a Bech32 or Bech32m string back to bytes
#[wasm_bindgen]
pub fn decode_bytes(encoded: &str) -> Result<DecodedBytes, WasmError> {
    let decoded = crate::decode_generic(encoded)?;
    let data = crate::convert_bits(&decoded.data, 5, 8, false).map_err(Bech32Error::from)?;
    Ok(DecodedBytes {
        hrp: decoded.hrp,
        data,
        variant: decoded.variant,
    })
}

/// Returns true if `encoded` is a valid Bech32 or Bech32m string
#[wasm_bindgen]
pub fn is_valid(encoded: &str) -> bool {
    crate::decode_generic(encoded).is_ok()
}
