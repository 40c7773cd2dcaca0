//! Implementations of the `fundwire` subcommands.
//!
//! Each command returns the text to print so it can be exercised without a
//! terminal.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use funding_wire::dispatch::payload_limit;
use funding_wire::{
    decode_payload, encode_payload, FundingMessage, MessageCommand, Signature,
    SingleFundingSignComplete,
};
use tracing::{debug, info, warn};

use crate::config::CliConfig;

/// Encode a `SingleFundingSignComplete` payload.
///
/// `signature_hex` is a strict-DER ECDSA signature. Without one the
/// payload carries an empty signature slot, which receivers reject at
/// validation.
pub fn encode(channel_id: u64, signature_hex: Option<&str>, config: &CliConfig) -> Result<String> {
    let commit_signature = match signature_hex {
        Some(raw) => Some(parse_signature(raw)?),
        None => {
            warn!(channel_id, "encoding without a commitment signature");
            None
        }
    };

    let msg: FundingMessage = SingleFundingSignComplete {
        channel_id,
        commit_signature,
    }
    .into();

    let payload = encode_payload(&msg, config.protocol_version).context("encoding payload")?;
    info!(command = %msg.command(), len = payload.len(), "encoded");

    Ok(config.hex(&payload))
}

/// Decode and validate a hex payload for `command`, returning a
/// field-per-line description.
pub fn decode(command: u32, payload_hex: &str, config: &CliConfig) -> Result<String> {
    let payload = hex::decode(payload_hex.trim()).context("payload is not valid hex")?;
    debug!(command, len = payload.len(), "decoding");

    let msg = decode_payload(command, &payload, config.protocol_version)
        .with_context(|| format!("decoding payload for command {}", command))?;

    let mut out = String::new();
    match &msg {
        FundingMessage::SingleFundingSignComplete(m) => {
            writeln!(out, "command:    {}", msg.command())?;
            writeln!(out, "channel_id: {}", m.channel_id)?;
            // Validation already guaranteed the signature is present.
            if let Some(sig) = &m.commit_signature {
                writeln!(out, "signature:  {}", config.hex(&sig.serialize_der()))?;
            }
        }
    }

    Ok(out)
}

/// List the single-funder command table with each payload bound.
pub fn inspect(config: &CliConfig) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "protocol version: {}", config.protocol_version)?;

    for cmd in MessageCommand::ALL {
        match payload_limit(cmd.as_u32(), config.protocol_version) {
            Ok((_, max)) => writeln!(out, "{:>4}  {:<28} max payload {}", cmd.as_u32(), cmd.name(), max)?,
            Err(_) => writeln!(out, "{:>4}  {:<28} (not decoded here)", cmd.as_u32(), cmd.name())?,
        }
    }

    Ok(out)
}

fn parse_signature(raw: &str) -> Result<Signature> {
    let der = hex::decode(raw.trim()).context("signature is not valid hex")?;
    Signature::from_der(&der).context("signature is not strict DER")
}
