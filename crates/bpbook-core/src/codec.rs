//! Blueprint exchange-string codec.
//!
//! Factorio shares blueprints and blueprint books as a single line of text:
//! a one-character format-version tag followed by the base64 encoding of the
//! zlib-compressed JSON document. The current (and only recognized) version
//! tag is `'0'`:
//!
//! ```text
//! <version-char><base64(zlib(utf8(json_text)))>
//! ```
//!
//! Both directions go through `serde_json::Value`. The `preserve_order`
//! feature keeps object keys in insertion order, so re-encoding a decoded
//! book serializes its keys in the order the game wrote them.

use std::io::{Read, Write};

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde_json::Value;

use crate::error::{BookError, Result};

/// The format-version character prepended to every encoded string.
pub const VERSION_TAG: char = '0';

/// Encode a JSON value as a versioned blueprint exchange string.
///
/// Serializes the value, compresses it with zlib at the default level, and
/// base64-encodes the result behind the [`VERSION_TAG`]. There is no size
/// ceiling; large inputs simply produce large outputs. Failure is not
/// reachable for any `Value`, but errors are propagated rather than panicked.
pub fn encode(value: &Value) -> Result<String> {
    let json = serde_json::to_vec(value)?;

    let mut compressor = ZlibEncoder::new(Vec::new(), Compression::default());
    compressor.write_all(&json).map_err(BookError::Compression)?;
    let compressed = compressor.finish().map_err(BookError::Compression)?;

    let mut out = String::with_capacity(1 + compressed.len() * 4 / 3);
    out.push(VERSION_TAG);
    BASE64_STANDARD.encode_string(&compressed, &mut out);
    Ok(out)
}

/// Decode a blueprint exchange string back into a JSON value.
///
/// The first character must be the recognized [`VERSION_TAG`]; anything else
/// (including empty input) is rejected as a format error rather than
/// misparsed. The three decode stages fail distinguishably:
/// [`BookError::Format`] for a bad tag or malformed base64,
/// [`BookError::Compression`] for a corrupt or truncated zlib stream, and
/// [`BookError::Parse`] when the decompressed bytes are not valid JSON.
pub fn decode(text: &str) -> Result<Value> {
    let payload = match text.chars().next() {
        None => {
            return Err(BookError::Format(
                "empty input, missing version tag".to_string(),
            ))
        }
        Some(VERSION_TAG) => &text[VERSION_TAG.len_utf8()..],
        Some(other) => {
            return Err(BookError::Format(format!(
                "unrecognized format version '{other}'"
            )))
        }
    };

    let compressed = BASE64_STANDARD
        .decode(payload)
        .map_err(|e| BookError::Format(format!("malformed base64 payload: {e}")))?;

    let mut json = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_end(&mut json)
        .map_err(BookError::Compression)?;

    Ok(serde_json::from_slice(&json)?)
}
