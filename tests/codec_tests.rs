//! Codec Tests
//!
//! Tests for request encoding, response decoding, and value encoding.

use blink_adapter::error::BlinkError;
use blink_adapter::protocol::{
    decode_response, decode_value, encode_request, encode_value, Command, CommandType, Key, Reply,
    RequestLine,
};
use bytes::Bytes;

fn key(s: &str) -> Key {
    Key::new(s).unwrap()
}

// =============================================================================
// Key Validation Tests
// =============================================================================

#[test]
fn test_key_accepts_plain_tokens() {
    for k in ["k", "user:42", "a/b", "ключ", "x-y_z.1"] {
        assert_eq!(key(k).as_str(), k);
    }
}

#[test]
fn test_key_rejects_empty() {
    assert!(matches!(Key::new(""), Err(BlinkError::InvalidKey(_))));
}

#[test]
fn test_key_rejects_whitespace_and_control() {
    for k in ["a b", "a\tb", "a\nb", "a\rb", " a", "a\u{0}b", "a\u{a0}b"] {
        assert!(
            matches!(Key::new(k), Err(BlinkError::InvalidKey(_))),
            "{k:?} should be rejected"
        );
    }
}

// =============================================================================
// Request Encoding Tests
// =============================================================================

#[test]
fn test_encode_get() {
    let line = encode_request(&Command::Get { key: key("hello") });
    assert_eq!(line.as_bytes(), b"GET hello\n");
}

#[test]
fn test_encode_delete() {
    let line = encode_request(&Command::Delete { key: key("gone") });
    assert_eq!(line.as_bytes(), b"DELETE gone\n");
}

#[test]
fn test_encode_usage_and_quit() {
    assert_eq!(encode_request(&Command::Usage).as_bytes(), b"USAGE\n");
    assert_eq!(encode_request(&Command::Quit).as_bytes(), b"QUIT\n");
}

#[test]
fn test_encode_set_base64_value() {
    let line = encode_request(&Command::Set {
        key: key("k"),
        value: Bytes::from_static(b"bytes"),
    });
    assert_eq!(line.as_bytes(), b"SET k Ynl0ZXM=\n");
}

#[test]
fn test_encode_set_binary_value_stays_on_one_line() {
    let value: Vec<u8> = (0..=255).collect();
    let line = encode_request(&Command::Set {
        key: key("bin"),
        value: Bytes::from(value),
    });

    let bytes = line.as_bytes();
    assert_eq!(bytes.iter().filter(|&&b| b == b'\n').count(), 1);
    assert_eq!(bytes.last(), Some(&b'\n'));
    assert!(bytes.is_ascii());
}

#[test]
fn test_encode_set_empty_value() {
    let line = encode_request(&Command::Set {
        key: key("k"),
        value: Bytes::new(),
    });
    assert_eq!(line.as_str(), "SET k ");
}

#[test]
fn test_command_metadata() {
    let cmd = Command::Set {
        key: key("k"),
        value: Bytes::from_static(b"v"),
    };
    assert_eq!(cmd.command_type(), CommandType::Set);
    assert_eq!(cmd.key().map(Key::as_str), Some("k"));
    assert_eq!(Command::Usage.key(), None);
}

// =============================================================================
// Raw Request Line Tests
// =============================================================================

#[test]
fn test_raw_line_is_trimmed_and_terminated() {
    let line = RequestLine::raw("  SET k hello world  ").unwrap();
    assert_eq!(line.as_bytes(), b"SET k hello world\n");
    assert_eq!(line.command_name(), "SET");
}

#[test]
fn test_raw_line_rejects_empty_and_line_breaks() {
    assert!(matches!(
        RequestLine::raw("   "),
        Err(BlinkError::InvalidRequest(_))
    ));
    assert!(matches!(
        RequestLine::raw("GET a\nGET b"),
        Err(BlinkError::InvalidRequest(_))
    ));
    assert!(matches!(
        RequestLine::raw("GET a\rb"),
        Err(BlinkError::InvalidRequest(_))
    ));
}

// =============================================================================
// Response Decoding Tests
// =============================================================================

#[test]
fn test_decode_value_line() {
    let reply = decode_response("VALUE aGVsbG8=\n").unwrap();
    assert_eq!(reply, Reply::Value(Bytes::from_static(b"hello")));
}

#[test]
fn test_decode_value_line_with_crlf_and_padding_spaces() {
    let reply = decode_response("VALUE   aGVsbG8=  \r\n").unwrap();
    assert_eq!(reply, Reply::Value(Bytes::from_static(b"hello")));
}

#[test]
fn test_decode_empty_value() {
    let reply = decode_response("VALUE \n").unwrap();
    assert_eq!(reply, Reply::Value(Bytes::new()));
}

#[test]
fn test_decode_malformed_value_keeps_raw_line() {
    match decode_response("VALUE not*base64\n") {
        Err(BlinkError::MalformedResponse { line, .. }) => assert_eq!(line, "VALUE not*base64"),
        other => panic!("Expected MalformedResponse, got {other:?}"),
    }
}

#[test]
fn test_decode_status_tokens() {
    assert_eq!(
        decode_response("NOT_FOUND\n").unwrap(),
        Reply::Status("NOT_FOUND".to_string())
    );
    assert_eq!(
        decode_response("ERROR out of memory\n").unwrap(),
        Reply::Status("ERROR out of memory".to_string())
    );
    // "VALUE" without the separating space is just a status
    assert_eq!(
        decode_response("VALUE\n").unwrap(),
        Reply::Status("VALUE".to_string())
    );
}

#[test]
fn test_reply_classification() {
    let status = |s: &str| Reply::Status(s.to_string());

    assert!(status("OK").is_ok());
    assert!(status("OK stored").is_ok());
    assert!(!status("NOT_FOUND").is_ok());
    assert!(status("NOT_FOUND").is_not_found());
    assert!(status("DELETED").is_deleted());
    assert_eq!(status("USAGE 1024").usage_bytes(), Some(1024));
    assert_eq!(status("USAGE lots").usage_bytes(), None);

    let value = Reply::Value(Bytes::from_static(b"OK"));
    assert!(!value.is_ok());
    assert_eq!(value.status(), None);
}

// =============================================================================
// Value Round-Trip Tests
// =============================================================================

#[test]
fn test_value_round_trip() {
    let samples: Vec<Vec<u8>> = vec![
        Vec::new(),
        vec![0u8; 64],
        vec![0xFF, 0xFE, 0xC3, 0x28, 0x80],
        b"line one\nline two\r\n".to_vec(),
        (0..=255).collect(),
        (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect(),
    ];

    for value in samples {
        let decoded = decode_value(&encode_value(&value)).unwrap();
        assert_eq!(decoded.as_ref(), value.as_slice());
    }
}

#[test]
fn test_value_round_trip_through_lines() {
    let value: Vec<u8> = vec![0x00, b'\n', 0xFF, b' ', 0x7F];
    let request = encode_request(&Command::Set {
        key: key("k"),
        value: Bytes::from(value.clone()),
    });

    // The store echoes the payload back as a VALUE line
    let payload = request.as_str().rsplit(' ').next().unwrap();
    let reply = decode_response(&format!("VALUE {payload}\n")).unwrap();

    assert_eq!(reply, Reply::Value(Bytes::from(value)));
}
