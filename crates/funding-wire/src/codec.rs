//! Field-level binary encoding/decoding.
//!
//! Each helper reads or writes exactly one fixed-width field and nothing
//! more, so a message decoder never consumes bytes that belong to the next
//! frame.
//!
//! ```text
//! u64 field (8 bytes):
//!   big-endian unsigned integer
//!
//! signature slot (73 bytes):
//!   [0]          0x30 (DER SEQUENCE)
//!   [1]          der_len - 2
//!   [2..der_len] 0x02 rlen r 0x02 slen s
//!   [der_len..]  zero padding
//!
//!   73 zero bytes == absent signature
//!   r and s must both lie in [1, n)
//! ```

use std::io::{Read, Write};

use secp256k1::ecdsa::Signature;

use crate::error::{DecodeError, EncodeError};
use crate::wire_types::{CHANNEL_ID_LEN, SIGNATURE_LEN};

const DER_SEQUENCE_TAG: u8 = 0x30;

// -----------------------------------------------------------------------------
// Integers
// -----------------------------------------------------------------------------

/// Read a big-endian u64.
pub fn read_u64<R: Read + ?Sized>(r: &mut R) -> Result<u64, DecodeError> {
    let mut buf = [0u8; CHANNEL_ID_LEN];
    r.read_exact(&mut buf)?;
    Ok(u64::from_be_bytes(buf))
}

/// Write a big-endian u64.
pub fn write_u64<W: Write + ?Sized>(w: &mut W, v: u64) -> Result<(), EncodeError> {
    w.write_all(&v.to_be_bytes())?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Signatures
// -----------------------------------------------------------------------------

/// Read one 73-byte signature slot.
///
/// Returns `Ok(None)` for an all-zero slot; the caller decides whether an
/// absent signature is acceptable.
pub fn read_signature<R: Read + ?Sized>(r: &mut R) -> Result<Option<Signature>, DecodeError> {
    let mut slot = [0u8; SIGNATURE_LEN];
    r.read_exact(&mut slot)?;
    parse_signature_slot(&slot)
}

/// Write one 73-byte signature slot. `None` is written as all zeros.
pub fn write_signature<W: Write + ?Sized>(
    w: &mut W,
    sig: Option<&Signature>,
) -> Result<(), EncodeError> {
    w.write_all(&signature_slot(sig))?;
    Ok(())
}

/// Lay a signature out in its fixed-width wire slot.
pub fn signature_slot(sig: Option<&Signature>) -> [u8; SIGNATURE_LEN] {
    let mut slot = [0u8; SIGNATURE_LEN];
    if let Some(sig) = sig {
        // Strict DER for secp256k1 never exceeds 72 bytes.
        let der = sig.serialize_der();
        slot[..der.len()].copy_from_slice(&der);
    }
    slot
}

/// Parse a fixed-width slot back into an optional signature.
pub fn parse_signature_slot(slot: &[u8; SIGNATURE_LEN]) -> Result<Option<Signature>, DecodeError> {
    if slot.iter().all(|&b| b == 0) {
        return Ok(None);
    }

    if slot[0] != DER_SEQUENCE_TAG {
        return Err(DecodeError::MalformedSignature("missing DER sequence tag"));
    }

    let der_len = slot[1] as usize + 2;
    if der_len > SIGNATURE_LEN {
        return Err(DecodeError::MalformedSignature("DER length overruns slot"));
    }

    let (der, padding) = slot.split_at(der_len);
    if padding.iter().any(|&b| b != 0) {
        return Err(DecodeError::MalformedSignature("non-zero padding after DER body"));
    }

    let sig = Signature::from_der(der)?;

    // libsecp256k1 maps an out-of-range r or s to zero instead of failing.
    let compact = sig.serialize_compact();
    let (r, s) = compact.split_at(32);
    if r.iter().all(|&b| b == 0) || s.iter().all(|&b| b == 0) {
        return Err(DecodeError::MalformedSignature("scalar is zero or not below the curve order"));
    }
    if &sig.serialize_der()[..] != der {
        return Err(DecodeError::MalformedSignature("DER body is not canonical"));
    }

    Ok(Some(sig))
}
