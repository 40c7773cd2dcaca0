//! funding-wire
//!
//! Wire-level encoding/decoding for the single-funder channel handshake.
//!
//! This crate turns handshake messages into payload bytes and back again.
//! Outer framing (magic, length prefix, checksum) belongs to the transport.
//!
//! - [`wire_types`]                   : command codes, widths, limits
//! - [`codec`]                        : fixed-width field readers/writers
//! - [`message`]                      : the `Message` contract
//! - [`single_funding_sign_complete`] : the responder's commitment signature
//! - [`dispatch`]                     : command-code dispatch and payload bounds

pub mod wire_types;
pub mod error;
pub mod codec;
pub mod message;
pub mod single_funding_sign_complete;
pub mod dispatch;

pub use dispatch::{decode_payload, encode_payload, read_payload, FundingMessage};
pub use error::{DecodeError, EncodeError, MessageError, ValidationError};
pub use message::Message;
pub use single_funding_sign_complete::{SingleFundingSignComplete, SINGLE_FUNDING_SIGN_COMPLETE_LEN};
pub use wire_types::{MessageCommand, MAX_MESSAGE_PAYLOAD, PROTOCOL_VERSION};

pub use secp256k1::ecdsa::Signature;
