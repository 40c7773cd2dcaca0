//! Error types for the funding wire protocol.
//!
//! Three categories are kept apart on purpose: bytes that could not be
//! turned into a message (`DecodeError`), a sink that refused bytes
//! (`EncodeError`), and a well-formed message that is semantically unusable
//! (`ValidationError`). `MessageError` wraps all of them for the dispatcher.

use std::io;

use thiserror::Error;

use crate::wire_types::MessageCommand;

/// Errors that can arise when decoding a message payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Stream ended before all fixed-width fields were read.
    #[error("payload truncated")]
    Truncated,

    /// The signature slot is not laid out as DER plus zero padding.
    #[error("malformed signature slot: {0}")]
    MalformedSignature(&'static str),

    /// The DER bytes were framed correctly but are not a valid signature.
    #[error("invalid signature encoding: {0}")]
    InvalidSignature(#[from] secp256k1::Error),

    /// Payload had bytes left over after the last field.
    #[error("{0} trailing bytes after message body")]
    TrailingBytes(usize),

    /// Any other failure reported by the underlying reader.
    #[error("read failed: {0}")]
    Io(io::Error),
}

impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            DecodeError::Truncated
        } else {
            DecodeError::Io(e)
        }
    }
}

/// Errors that can arise when encoding a message.
///
/// Every field has a fixed, always-representable width, so the only way
/// to fail is a sink that refuses the write.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

/// Semantic problems with an already-decoded message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent.
    #[error("{0} must be non-nil")]
    MissingField(&'static str),
}

/// Errors surfaced by the payload dispatcher.
#[derive(Debug, Error)]
pub enum MessageError {
    /// Command code is not part of the single-funder family.
    #[error("unknown command code: {0}")]
    UnknownCommand(u32),

    /// Command is known, but no decoder for it lives in this crate.
    #[error("no decoder registered for {0}")]
    UnsupportedCommand(MessageCommand),

    /// Payload exceeds the bound for its message type.
    #[error("payload of {len} bytes exceeds limit of {max} for {command}")]
    PayloadTooLarge {
        command: MessageCommand,
        len: usize,
        max: u32,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("invalid message: {0}")]
    Validation(#[from] ValidationError),
}
