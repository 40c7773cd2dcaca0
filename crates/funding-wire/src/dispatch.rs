//! Command-code dispatch for message payloads.
//!
//! The outer framing layer (not part of this crate) strips its header and
//! hands over a command code plus the raw payload. This module maps the
//! code to a concrete message, enforces the payload bound before decoding,
//! and validates the result before returning it.
//!
//! NOTE: Only `SingleFundingSignComplete` has a decoder here. The other
//! single-funder commands are recognised and reported as unsupported so a
//! caller can route them elsewhere.

use std::io::{Read, Write};

use tracing::{debug, trace, warn};

use crate::error::{DecodeError, EncodeError, MessageError, ValidationError};
use crate::message::Message;
use crate::single_funding_sign_complete::SingleFundingSignComplete;
use crate::wire_types::{MessageCommand, MAX_MESSAGE_PAYLOAD};

/// Any message this crate can decode, tagged by type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FundingMessage {
    SingleFundingSignComplete(SingleFundingSignComplete),
}

impl FundingMessage {
    pub fn command(&self) -> MessageCommand {
        match self {
            FundingMessage::SingleFundingSignComplete(m) => m.command(),
        }
    }

    pub fn max_payload_length(&self, pver: u32) -> u32 {
        match self {
            FundingMessage::SingleFundingSignComplete(m) => m.max_payload_length(pver),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            FundingMessage::SingleFundingSignComplete(m) => m.validate(),
        }
    }

    pub fn encode<W: Write + ?Sized>(&self, w: &mut W, pver: u32) -> Result<(), EncodeError> {
        match self {
            FundingMessage::SingleFundingSignComplete(m) => m.encode(w, pver),
        }
    }
}

impl From<SingleFundingSignComplete> for FundingMessage {
    fn from(m: SingleFundingSignComplete) -> Self {
        FundingMessage::SingleFundingSignComplete(m)
    }
}

/// Build an empty message of the given type, used to look up its bound
/// before any payload bytes are trusted.
pub fn empty_message(command: MessageCommand) -> Result<FundingMessage, MessageError> {
    match command {
        MessageCommand::SingleFundingSignComplete => Ok(FundingMessage::SingleFundingSignComplete(
            SingleFundingSignComplete::default(),
        )),
        other => Err(MessageError::UnsupportedCommand(other)),
    }
}

/// Effective payload limit for `command`: the type's own bound, capped by
/// the global ceiling.
pub fn payload_limit(command: u32, pver: u32) -> Result<(MessageCommand, u32), MessageError> {
    let command = MessageCommand::from_u32(command).ok_or(MessageError::UnknownCommand(command))?;
    let template = empty_message(command)?;
    let max = template.max_payload_length(pver).min(MAX_MESSAGE_PAYLOAD);
    Ok((command, max))
}

/// Decode and validate one payload.
///
/// The payload must contain exactly one message body; leftover bytes are
/// an error.
pub fn decode_payload(command: u32, payload: &[u8], pver: u32) -> Result<FundingMessage, MessageError> {
    let (command, max) = payload_limit(command, pver)?;
    check_len(command, payload.len(), max)?;

    let mut reader = payload;
    let msg: FundingMessage = match command {
        MessageCommand::SingleFundingSignComplete => {
            SingleFundingSignComplete::decode(&mut reader, pver)?.into()
        }
        other => return Err(MessageError::UnsupportedCommand(other)),
    };

    // Unreachable for fixed-size bodies, which `check_len` already pins to
    // their exact size. Variable-length siblings rely on it.
    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes(reader.len()).into());
    }

    msg.validate()?;

    debug!(%command, len = payload.len(), "decoded payload");
    Ok(msg)
}

/// Read a payload of `payload_len` bytes from `r` and decode it.
///
/// The length is checked against the type's bound before any buffer is
/// allocated or any byte is read.
pub fn read_payload<R: Read + ?Sized>(
    r: &mut R,
    command: u32,
    payload_len: usize,
    pver: u32,
) -> Result<FundingMessage, MessageError> {
    let (cmd, max) = payload_limit(command, pver)?;
    check_len(cmd, payload_len, max)?;

    let mut payload = vec![0u8; payload_len];
    r.read_exact(&mut payload).map_err(DecodeError::from)?;
    trace!(command = %cmd, len = payload_len, "read payload");

    decode_payload(command, &payload, pver)
}

/// Encode one message into a fresh payload buffer.
pub fn encode_payload(msg: &FundingMessage, pver: u32) -> Result<Vec<u8>, MessageError> {
    let command = msg.command();
    let max = msg.max_payload_length(pver).min(MAX_MESSAGE_PAYLOAD);

    let mut out = Vec::with_capacity(max as usize);
    msg.encode(&mut out, pver)?;
    check_len(command, out.len(), max)?;

    debug!(%command, len = out.len(), "encoded payload");
    Ok(out)
}

fn check_len(command: MessageCommand, len: usize, max: u32) -> Result<(), MessageError> {
    if len > max as usize {
        warn!(%command, len, max, "payload exceeds limit");
        return Err(MessageError::PayloadTooLarge { command, len, max });
    }
    Ok(())
}
