//! Transcoder contract tests: version tagging, the three distinguishable
//! decode failure stages, and structural round-trip equality.

use bpbook_core::{decode, encode, BookError, VERSION_TAG};
use serde_json::json;

// Produced by the reference pipeline (Python zlib + base64) from
// {"blueprint": {"label": "Base"}}, so decode is checked against a
// foreign-made string and not just our own encoder's output.
const REFERENCE_STRING: &str = "0eJyrVkrKKU0tKMrMK1GyUqhWyklMSs0BspScEotTlWprAbdBCsE=";

#[test]
fn encode_starts_with_version_tag() {
    let value = json!({"blueprint": {"label": "Base"}});
    let text = encode(&value).unwrap();
    assert!(text.starts_with(VERSION_TAG));
}

#[test]
fn encode_output_is_single_line_ascii() {
    let value = json!({"blueprint": {"label": "café ☕"}});
    let text = encode(&value).unwrap();
    assert!(text.is_ascii());
    assert!(!text.contains('\n'));
}

#[test]
fn decode_reference_string() {
    let value = decode(REFERENCE_STRING).unwrap();
    assert_eq!(value, json!({"blueprint": {"label": "Base"}}));
}

#[test]
fn roundtrip_simple_book() {
    let book = json!({"blueprint_book": {"blueprints": [
        {"blueprint": {"label": "Base", "entities": []}},
        {"blueprint": {"label": "Outpost", "version": 281479275675648u64}},
    ]}});
    let decoded = decode(&encode(&book).unwrap()).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn roundtrip_preserves_key_order() {
    // preserve_order keeps object keys in insertion order through the trip.
    let value = json!({"zeta": 1, "alpha": 2, "mid": {"b": true, "a": null}});
    let decoded = decode(&encode(&value).unwrap()).unwrap();
    let keys: Vec<&str> = decoded.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn roundtrip_scalars_and_arrays() {
    for value in [
        json!(null),
        json!(true),
        json!(-42),
        json!(3.5),
        json!("label with spaces"),
        json!([1, [2, [3]], {"k": "v"}]),
        json!({}),
        json!([]),
    ] {
        let decoded = decode(&encode(&value).unwrap()).unwrap();
        assert_eq!(decoded, value);
    }
}

#[test]
fn roundtrip_large_book() {
    // No size ceiling: a thousand entries just makes a longer string.
    let blueprints: Vec<_> = (0..1000)
        .map(|i| json!({"blueprint": {"label": format!("bp-{i}"), "entities": [i]}}))
        .collect();
    let book = json!({"blueprint_book": {"blueprints": blueprints}});
    let decoded = decode(&encode(&book).unwrap()).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn decode_rejects_unknown_version() {
    let err = decode(&format!("1{}", &REFERENCE_STRING[1..])).unwrap_err();
    assert!(matches!(err, BookError::Format(_)), "got {err:?}");
    assert!(err.to_string().contains("version"));
}

#[test]
fn decode_rejects_empty_input() {
    let err = decode("").unwrap_err();
    assert!(matches!(err, BookError::Format(_)), "got {err:?}");
}

#[test]
fn decode_rejects_malformed_base64() {
    let err = decode("0!!!not base64!!!").unwrap_err();
    assert!(matches!(err, BookError::Format(_)), "got {err:?}");
}

#[test]
fn decode_rejects_non_zlib_payload() {
    // base64 of b"definitely not zlib"
    let err = decode("0ZGVmaW5pdGVseSBub3QgemxpYg==").unwrap_err();
    assert!(matches!(err, BookError::Compression(_)), "got {err:?}");
}

#[test]
fn decode_rejects_truncated_stream() {
    let full = encode(&json!({"blueprint": {"label": "Base"}})).unwrap();
    // Chop the base64 payload down to a valid prefix (multiple of 4 chars)
    // so base64 decoding succeeds but inflation hits EOF.
    let err = decode(&full[..1 + 8]).unwrap_err();
    assert!(matches!(err, BookError::Compression(_)), "got {err:?}");
}

#[test]
fn decode_rejects_non_json_plaintext() {
    // base64 of zlib(b"this is not json")
    let err = decode("0eJwrycgsVgCivPwShazi/DwAMrwGAA==").unwrap_err();
    assert!(matches!(err, BookError::Parse(_)), "got {err:?}");
}
