pub mod checksum;
pub mod convert;
pub mod errors;

pub use checksum::Variant;
pub use convert::convert_bits;
pub use errors::{Bech32Error, ConvertError, DecodeError, EncodeError, HrpProblem};
