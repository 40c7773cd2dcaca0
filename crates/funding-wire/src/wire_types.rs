//! Low-level wire types and constants.
//!
//! This module defines:
//! - Command codes for the single-funder message family.
//! - Protocol versioning.
//! - Fixed field widths and the global payload ceiling.
//!
//! The field encode/decode logic lives in `codec`.

use std::fmt;

/// Current protocol version.
///
/// Messages accept a version argument on every encode/decode call but none
/// of the single-funder messages branch on it yet.
pub const PROTOCOL_VERSION: u32 = 1;

/// Upper bound on any single message payload, regardless of type.
///
/// A framing layer should reject anything larger before even looking up
/// the command.
pub const MAX_MESSAGE_PAYLOAD: u32 = 1024 * 1024 * 32;

/// Width of a channel identifier on the wire (u64 BE).
pub const CHANNEL_ID_LEN: usize = 8;

/// Width of the fixed signature slot on the wire.
///
/// Holds a strict-DER ECDSA signature (at most 72 bytes), right-padded
/// with zeros.
pub const SIGNATURE_LEN: usize = 73;

/// Command codes for the single-funder handshake messages.
///
/// The dispatcher reads one of these from the outer frame to decide which
/// concrete message to decode the payload as.
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MessageCommand {
    /// Initiator proposes a single-funder channel.
    SingleFundingRequest = 100,

    /// Responder accepts and returns its keys.
    SingleFundingResponse = 110,

    /// Initiator hands over the funding outpoint and its signature.
    SingleFundingComplete = 120,

    /// Responder's signature over the initiator's commitment transaction.
    SingleFundingSignComplete = 130,

    /// Proof that the funding transaction confirmed.
    SingleFundingOpenProof = 140,
}

impl MessageCommand {
    /// Every command in the family, in wire-code order.
    pub const ALL: [MessageCommand; 5] = [
        MessageCommand::SingleFundingRequest,
        MessageCommand::SingleFundingResponse,
        MessageCommand::SingleFundingComplete,
        MessageCommand::SingleFundingSignComplete,
        MessageCommand::SingleFundingOpenProof,
    ];

    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            100 => Some(MessageCommand::SingleFundingRequest),
            110 => Some(MessageCommand::SingleFundingResponse),
            120 => Some(MessageCommand::SingleFundingComplete),
            130 => Some(MessageCommand::SingleFundingSignComplete),
            140 => Some(MessageCommand::SingleFundingOpenProof),
            _ => None,
        }
    }

    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Human-readable message name, as used in logs and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            MessageCommand::SingleFundingRequest => "SingleFundingRequest",
            MessageCommand::SingleFundingResponse => "SingleFundingResponse",
            MessageCommand::SingleFundingComplete => "SingleFundingComplete",
            MessageCommand::SingleFundingSignComplete => "SingleFundingSignComplete",
            MessageCommand::SingleFundingOpenProof => "SingleFundingOpenProof",
        }
    }
}

impl fmt::Display for MessageCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.as_u32())
    }
}
