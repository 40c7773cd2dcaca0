//! `SingleFundingSignComplete`: the responder's signature over the
//! initiator's version of the commitment transaction. Once the initiator
//! has processed it, the funding transaction may be broadcast.
//!
//! ```text
//! [0..8]   channel_id        (u64 BE)
//! [8..81]  commit_signature  (73-byte signature slot, see `codec`)
//! ```

use std::io::{Read, Write};

use secp256k1::ecdsa::Signature;

use crate::codec::{read_signature, read_u64, write_signature, write_u64};
use crate::error::{DecodeError, EncodeError, ValidationError};
use crate::message::Message;
use crate::wire_types::{MessageCommand, CHANNEL_ID_LEN, SIGNATURE_LEN};

/// Encoded size of the message body: 8 + 73 = 81.
pub const SINGLE_FUNDING_SIGN_COMPLETE_LEN: usize = CHANNEL_ID_LEN + SIGNATURE_LEN;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleFundingSignComplete {
    /// Identifies the channel being negotiated by this single-funder
    /// workflow. Opaque to the codec.
    pub channel_id: u64,

    /// Responder's signature for the initiator's commitment transaction.
    pub commit_signature: Option<Signature>,
}

impl SingleFundingSignComplete {
    pub const COMMAND: MessageCommand = MessageCommand::SingleFundingSignComplete;

    pub fn new(channel_id: u64, commit_signature: Signature) -> Self {
        Self {
            channel_id,
            commit_signature: Some(commit_signature),
        }
    }
}

impl Message for SingleFundingSignComplete {
    fn decode<R: Read + ?Sized>(r: &mut R, _pver: u32) -> Result<Self, DecodeError> {
        let channel_id = read_u64(r)?;
        let commit_signature = read_signature(r)?;

        Ok(Self {
            channel_id,
            commit_signature,
        })
    }

    fn encode<W: Write + ?Sized>(&self, w: &mut W, _pver: u32) -> Result<(), EncodeError> {
        write_u64(w, self.channel_id)?;
        write_signature(w, self.commit_signature.as_ref())?;
        Ok(())
    }

    fn command(&self) -> MessageCommand {
        Self::COMMAND
    }

    /// No variable-length fields, so the bound is the exact size.
    fn max_payload_length(&self, _pver: u32) -> u32 {
        SINGLE_FUNDING_SIGN_COMPLETE_LEN as u32
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.commit_signature.is_none() {
            return Err(ValidationError::MissingField("commitment signature"));
        }

        Ok(())
    }
}
