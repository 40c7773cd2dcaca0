//! `fundwire`: encode, decode and inspect single-funder handshake payloads.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use funding_wire::MessageCommand;
use funding_wire_cli::commands;
use funding_wire_cli::config::CliConfig;

#[derive(Parser)]
#[clap(name = "fundwire")]
#[clap(about = "Encode and decode single-funder channel handshake payloads")]
struct Cli {
    /// Path to a TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a SingleFundingSignComplete payload as hex
    Encode {
        /// Channel identifier
        #[clap(long)]
        channel_id: u64,

        /// Commitment signature, strict DER in hex
        #[clap(long)]
        signature: Option<String>,
    },

    /// Decode and validate a hex payload
    Decode {
        /// Command code from the outer frame
        #[clap(long, default_value_t = MessageCommand::SingleFundingSignComplete.as_u32())]
        command: u32,

        /// Payload bytes in hex
        payload: String,
    },

    /// Show the command table and payload limits
    Inspect,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_filter = if cli.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");

    let output = match cli.command {
        Command::Encode {
            channel_id,
            signature,
        } => commands::encode(channel_id, signature.as_deref(), &config)?,
        Command::Decode { command, payload } => commands::decode(command, &payload, &config)?,
        Command::Inspect => commands::inspect(&config)?,
    };

    println!("{}", output.trim_end());
    Ok(())
}
