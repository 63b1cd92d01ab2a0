mod args;
mod commands;
mod config;
mod global;
mod handlers;

use bech32_text::HrpRegistry;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use args::{ConfigAction, ConvertArgs, DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "bech32-text")]
#[command(version)]
#[command(about = "Encode and decode Bech32 (BIP-173) checksummed strings", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode bytes under a human-readable part
    Encode(EncodeArgs),
    /// Decode a Bech32 string back to bytes
    Decode(DecodeArgs),
    /// Regroup integer values between bit widths
    Convert(ConvertArgs),
    /// Inspect hrp presets
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.global);

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(e.as_ref(), &cli.global);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    // Load hrp presets with user overrides
    let config = HrpRegistry::load_with_overrides()?;

    match command {
        Commands::Encode(args) => handlers::encode::handle(args, &config),
        Commands::Decode(args) => handlers::decode::handle(args),
        Commands::Convert(args) => handlers::convert::handle(args),
        Commands::Config { action } => handlers::config::handle(action, &config),
    }
}

/// Prints an error to stderr, plain when `--no-color` is given.
fn report_error(err: &dyn std::error::Error, global: &GlobalArgs) {
    if global.no_color {
        eprintln!("{:#}", err);
    } else {
        eprintln!("{}", err);
    }
}

/// Logs go to stderr so they never mix with encoded output.
fn init_logging(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(global.default_log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!global.no_color)
        .with_target(false)
        .init();
}
