use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Checksum variant (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum VariantCli {
    Bech32,
    Bech32m,
}

impl From<VariantCli> for bech32_text::Variant {
    fn from(cli: VariantCli) -> Self {
        match cli {
            VariantCli::Bech32 => bech32_text::Variant::Bech32,
            VariantCli::Bech32m => bech32_text::Variant::Bech32m,
        }
    }
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Human-readable part (e.g. "bc"); falls back to the configured default preset
    #[arg(conflicts_with = "preset")]
    pub hrp: Option<String>,

    /// Input file (reads from stdin if not provided)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Take the human-readable part from a named preset
    #[arg(short = 'p', long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Treat input as hex text instead of raw bytes
    #[arg(short = 'x', long)]
    pub hex: bool,

    /// Checksum variant (defaults to the preset's or the configured default)
    #[arg(long, value_enum)]
    pub variant: Option<VariantCli>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Bech32 string (reads from --file or stdin if not provided)
    pub input: Option<String>,

    /// Read the string from a file
    #[arg(short = 'f', long, conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Print the decoded bytes as hex
    #[arg(short = 'x', long)]
    pub hex: bool,

    /// Print the 5-bit values instead of regrouping to bytes
    #[arg(long, conflicts_with = "hex")]
    pub values: bool,

    /// Print hrp, variant, values and bytes as JSON
    #[arg(long, conflicts_with_all = ["hex", "values"])]
    pub json: bool,

    /// Only accept this checksum variant (default: accept either)
    #[arg(long, value_enum)]
    pub variant: Option<VariantCli>,

    /// Lift the 90-character limit (bech32 checksum only)
    #[arg(long, conflicts_with = "variant")]
    pub no_limit: bool,
}

/// Arguments for regrouping bits
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Width of input values in bits
    #[arg(long, default_value_t = 8)]
    pub from: u8,

    /// Width of output values in bits
    #[arg(long, default_value_t = 5)]
    pub to: u8,

    /// Pad a trailing partial group with zero bits
    #[arg(long)]
    pub pad: bool,

    /// Input values, comma or space separated (reads from stdin if not provided)
    pub values: Vec<String>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List hrp presets
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific preset
    Show {
        /// Preset name
        preset: String,
    },
}
