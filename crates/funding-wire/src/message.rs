//! The contract every single-funder wire message implements.

use std::io::{Read, Write};

use crate::error::{DecodeError, EncodeError, ValidationError};
use crate::wire_types::MessageCommand;

/// A message that can travel over the funding wire.
///
/// The dispatcher uses `command` to pick a concrete type, consults
/// `max_payload_length` before touching the payload, calls `decode`, and
/// only hands the result to business logic once `validate` passes.
pub trait Message: Sized {
    /// Decode a message body from `r`.
    ///
    /// Consumes exactly the bytes of the body. Either a fully populated
    /// message or an error is returned, never both.
    fn decode<R: Read + ?Sized>(r: &mut R, pver: u32) -> Result<Self, DecodeError>;

    /// Encode the message body into `w`, in the same field order `decode`
    /// expects.
    fn encode<W: Write + ?Sized>(&self, w: &mut W, pver: u32) -> Result<(), EncodeError>;

    /// Wire code identifying this message type.
    fn command(&self) -> MessageCommand;

    /// Largest payload this message type may occupy at protocol version
    /// `pver`.
    fn max_payload_length(&self, pver: u32) -> u32;

    /// Semantic checks on a decoded message.
    fn validate(&self) -> Result<(), ValidationError>;
}
