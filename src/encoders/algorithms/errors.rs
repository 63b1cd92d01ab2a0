use std::fmt;

/// Errors that can occur while encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The human-readable part is empty, too long, or has a byte outside 33..=126
    InvalidHrp { hrp: String, reason: HrpProblem },
    /// The human-readable part mixes upper- and lower-case letters
    InvalidCase,
    /// A data value does not fit in 5 bits
    InvalidDataValue { value: u8, position: usize },
    /// The encoded string would exceed the maximum length
    ExceedsLengthLimit { length: usize, max: usize },
}

/// Errors that can occur while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input mixes upper- and lower-case letters
    InvalidCase,
    /// The input is shorter than the minimum or longer than the maximum
    ExceedsLengthLimit { length: usize, min: usize, max: usize },
    /// No separator character was found
    MissingSeparator,
    /// The human-readable part is empty or has a byte outside 33..=126
    InvalidHrp { hrp: String, reason: HrpProblem },
    /// Fewer characters follow the separator than the checksum needs
    InvalidDataLength { length: usize },
    /// A character outside the alphabet in the data or checksum
    InvalidCharacter { char: char, position: usize },
    /// The checksum does not verify
    InvalidChecksum,
}

/// Errors that can occur while regrouping bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Group widths must be between 1 and 8 bits
    InvalidBitGroups { from_bits: u8, to_bits: u8 },
    /// An input value is wider than `from_bits`
    InvalidDataValue { value: u8, position: usize, from_bits: u8 },
    /// Leftover bits are non-zero, or too many bits remain without padding
    InvalidPadding,
}

/// Which rule a rejected human-readable part broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrpProblem {
    Empty,
    TooLong { length: usize, max: usize },
    InvalidByte { byte: u8, position: usize },
}

/// Error for the byte-oriented convenience functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bech32Error {
    Encode(EncodeError),
    Decode(DecodeError),
    Convert(ConvertError),
}

impl From<EncodeError> for Bech32Error {
    fn from(err: EncodeError) -> Self {
        Bech32Error::Encode(err)
    }
}

impl From<DecodeError> for Bech32Error {
    fn from(err: DecodeError) -> Self {
        Bech32Error::Decode(err)
    }
}

impl From<ConvertError> for Bech32Error {
    fn from(err: ConvertError) -> Self {
        Bech32Error::Convert(err)
    }
}

/// Writes `error: <message>`, coloured when appropriate.
///
/// The alternate form (`{:#}`) is always plain text.
fn write_error_header(f: &mut fmt::Formatter<'_>, message: fmt::Arguments<'_>) -> fmt::Result {
    if !f.alternate() && should_use_color() {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

/// Writes a trailing `hint: <message>` on its own line.
fn write_hint(f: &mut fmt::Formatter<'_>, message: fmt::Arguments<'_>) -> fmt::Result {
    writeln!(f)?;
    if !f.alternate() && should_use_color() {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", message)
    } else {
        write!(f, "hint: {}", message)
    }
}

impl fmt::Display for HrpProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HrpProblem::Empty => write!(f, "human-readable part is empty"),
            HrpProblem::TooLong { length, max } => write!(
                f,
                "human-readable part is {} characters, maximum is {}",
                length, max
            ),
            HrpProblem::InvalidByte { byte, position } => write!(
                f,
                "byte 0x{:02x} at position {} is outside the printable range 33..=126",
                byte, position
            ),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidHrp { hrp, reason } => {
                write_error_header(f, format_args!("invalid human-readable part '{}'", hrp))?;
                writeln!(f)?;
                write!(f, "  {}", reason)
            }
            EncodeError::InvalidCase => {
                write_error_header(f, format_args!("human-readable part mixes upper and lower case"))?;
                write_hint(f, format_args!("use a single case, output case follows the human-readable part"))
            }
            EncodeError::InvalidDataValue { value, position } => {
                write_error_header(
                    f,
                    format_args!("data value {} at position {} does not fit in 5 bits", value, position),
                )?;
                write_hint(f, format_args!("convert 8-bit input with convert_bits(data, 8, 5, true) first"))
            }
            EncodeError::ExceedsLengthLimit { length, max } => {
                write_error_header(
                    f,
                    format_args!("encoded string would be {} characters, maximum is {}", length, max),
                )
            }
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidCase => {
                write_error_header(f, format_args!("input mixes upper and lower case"))?;
                write_hint(f, format_args!("bech32 strings are entirely upper case or entirely lower case"))
            }
            DecodeError::ExceedsLengthLimit { length, min, max } if *max == usize::MAX => {
                write_error_header(
                    f,
                    format_args!("input is {} characters, expected at least {}", length, min),
                )
            }
            DecodeError::ExceedsLengthLimit { length, min, max } => write_error_header(
                f,
                format_args!("input is {} characters, expected {} to {}", length, min, max),
            ),
            DecodeError::MissingSeparator => {
                write_error_header(f, format_args!("missing separator '1'"))?;
                write_hint(f, format_args!("a bech32 string looks like <hrp>1<data><checksum>"))
            }
            DecodeError::InvalidHrp { hrp, reason } => {
                write_error_header(f, format_args!("invalid human-readable part '{}'", hrp))?;
                writeln!(f)?;
                write!(f, "  {}", reason)
            }
            DecodeError::InvalidDataLength { length } => write_error_header(
                f,
                format_args!(
                    "data part is {} characters, at least 6 are needed for the checksum",
                    length
                ),
            ),
            DecodeError::InvalidCharacter { char: c, position } => {
                write_error_header(
                    f,
                    format_args!("invalid character '{}' at position {}", c.escape_debug(), position),
                )?;
                write_hint(f, format_args!("valid characters: qpzry9x8gf2tvdw0s3jn54khce6mua7l"))
            }
            DecodeError::InvalidChecksum => {
                write_error_header(f, format_args!("invalid checksum"))?;
                write_hint(f, format_args!("check the string for transcription errors"))
            }
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidBitGroups { from_bits, to_bits } => write_error_header(
                f,
                format_args!(
                    "cannot regroup {}-bit values into {}-bit values, widths must be 1 to 8",
                    from_bits, to_bits
                ),
            ),
            ConvertError::InvalidDataValue {
                value,
                position,
                from_bits,
            } => write_error_header(
                f,
                format_args!(
                    "value {} at position {} does not fit in {} bits",
                    value, position, from_bits
                ),
            ),
            ConvertError::InvalidPadding => {
                write_error_header(f, format_args!("invalid padding"))?;
                write_hint(f, format_args!("trailing bits must be zero and shorter than one input group"))
            }
        }
    }
}

impl fmt::Display for Bech32Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bech32Error::Encode(e) => fmt::Display::fmt(e, f),
            Bech32Error::Decode(e) => fmt::Display::fmt(e, f),
            Bech32Error::Convert(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for EncodeError {}
impl std::error::Error for DecodeError {}
impl std::error::Error for ConvertError {}

impl std::error::Error for Bech32Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Bech32Error::Encode(e) => Some(e),
            Bech32Error::Decode(e) => Some(e),
            Bech32Error::Convert(e) => Some(e),
        }
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
