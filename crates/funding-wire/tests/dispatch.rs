// crates/funding-wire/tests/dispatch.rs
use std::io::Cursor;

use funding_wire::dispatch::{empty_message, payload_limit};
use funding_wire::{
    decode_payload, encode_payload, read_payload, DecodeError, FundingMessage, MessageCommand,
    MessageError, Signature, SingleFundingSignComplete, ValidationError, PROTOCOL_VERSION,
};
use secp256k1::{Secp256k1, SecretKey};

const SIGN_COMPLETE: u32 = 130;

fn test_signature() -> Signature {
    let secp = Secp256k1::signing_only();
    let key = SecretKey::from_slice(&[0x33; 32]).expect("valid secret key");
    let digest = secp256k1::Message::from_digest([0x24; 32]);
    secp.sign_ecdsa(&digest, &key)
}

fn sign_complete_payload(channel_id: u64) -> Vec<u8> {
    let msg: FundingMessage = SingleFundingSignComplete::new(channel_id, test_signature()).into();
    encode_payload(&msg, PROTOCOL_VERSION).expect("encode")
}

#[test]
fn decodes_sign_complete_by_command() {
    let payload = sign_complete_payload(77);
    let msg = decode_payload(SIGN_COMPLETE, &payload, PROTOCOL_VERSION).expect("decode");

    assert_eq!(msg.command(), MessageCommand::SingleFundingSignComplete);
    let FundingMessage::SingleFundingSignComplete(inner) = msg;
    assert_eq!(inner.channel_id, 77);
    assert_eq!(inner.commit_signature, Some(test_signature()));
}

#[test]
fn encode_payload_is_exact_size() {
    assert_eq!(sign_complete_payload(1).len(), 81);
}

#[test]
fn unknown_command_is_rejected() {
    let payload = sign_complete_payload(1);
    let err = decode_payload(999, &payload, PROTOCOL_VERSION).unwrap_err();
    assert!(matches!(err, MessageError::UnknownCommand(999)));
}

#[test]
fn sibling_commands_are_unsupported() {
    for cmd in MessageCommand::ALL {
        if cmd == MessageCommand::SingleFundingSignComplete {
            continue;
        }
        let err = decode_payload(cmd.as_u32(), &[], PROTOCOL_VERSION).unwrap_err();
        assert!(matches!(err, MessageError::UnsupportedCommand(c) if c == cmd));
        assert!(empty_message(cmd).is_err());
    }
}

#[test]
fn oversize_payload_is_rejected_before_decode() {
    let mut payload = sign_complete_payload(1);
    payload.push(0);

    let err = decode_payload(SIGN_COMPLETE, &payload, PROTOCOL_VERSION).unwrap_err();
    match err {
        MessageError::PayloadTooLarge { command, len, max } => {
            assert_eq!(command, MessageCommand::SingleFundingSignComplete);
            assert_eq!(len, 82);
            assert_eq!(max, 81);
        }
        other => panic!("expected PayloadTooLarge, got {:?}", other),
    }
}

#[test]
fn short_payload_is_a_decode_error() {
    let payload = sign_complete_payload(1);
    let err = decode_payload(SIGN_COMPLETE, &payload[..80], PROTOCOL_VERSION).unwrap_err();
    assert!(matches!(err, MessageError::Decode(DecodeError::Truncated)));
}

#[test]
fn absent_signature_is_a_validation_error() {
    let mut payload = vec![0u8; 81];
    payload[7] = 5;

    let err = decode_payload(SIGN_COMPLETE, &payload, PROTOCOL_VERSION).unwrap_err();
    assert!(matches!(
        err,
        MessageError::Validation(ValidationError::MissingField(_))
    ));
}

#[test]
fn read_payload_checks_length_before_reading() {
    let mut cursor = Cursor::new(vec![0u8; 4096]);
    let err = read_payload(&mut cursor, SIGN_COMPLETE, 4096, PROTOCOL_VERSION).unwrap_err();

    assert!(matches!(err, MessageError::PayloadTooLarge { .. }));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn read_payload_consumes_only_its_frame() {
    let mut stream = sign_complete_payload(8);
    stream.extend_from_slice(&sign_complete_payload(9));

    let mut cursor = Cursor::new(stream);
    let first = read_payload(&mut cursor, SIGN_COMPLETE, 81, PROTOCOL_VERSION).unwrap();
    assert_eq!(cursor.position(), 81);
    let second = read_payload(&mut cursor, SIGN_COMPLETE, 81, PROTOCOL_VERSION).unwrap();

    let FundingMessage::SingleFundingSignComplete(first) = first;
    let FundingMessage::SingleFundingSignComplete(second) = second;
    assert_eq!(first.channel_id, 8);
    assert_eq!(second.channel_id, 9);
}

#[test]
fn read_payload_truncated_stream() {
    let payload = sign_complete_payload(1);
    let mut cursor = Cursor::new(payload[..50].to_vec());

    let err = read_payload(&mut cursor, SIGN_COMPLETE, 81, PROTOCOL_VERSION).unwrap_err();
    assert!(matches!(err, MessageError::Decode(DecodeError::Truncated)));
}

#[test]
fn short_declared_length_leaves_no_partial_message() {
    let payload = sign_complete_payload(1);
    let mut cursor = Cursor::new(payload);

    let err = read_payload(&mut cursor, SIGN_COMPLETE, 40, PROTOCOL_VERSION).unwrap_err();
    assert!(matches!(err, MessageError::Decode(DecodeError::Truncated)));
}

#[test]
fn payload_limit_is_type_bound() {
    let (cmd, max) = payload_limit(SIGN_COMPLETE, PROTOCOL_VERSION).unwrap();
    assert_eq!(cmd, MessageCommand::SingleFundingSignComplete);
    assert_eq!(max, 81);
}
