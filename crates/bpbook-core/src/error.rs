//! Error types for blueprint-book encoding, decoding, and unpacking.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting blueprint books.
///
/// The decode pipeline has three distinguishable failure stages —
/// [`Format`](BookError::Format) (bad version tag or malformed base64),
/// [`Compression`](BookError::Compression) (corrupt zlib stream), and
/// [`Parse`](BookError::Parse) (decompressed bytes are not valid JSON) —
/// so callers can report which stage rejected the input.
#[derive(Error, Debug)]
pub enum BookError {
    /// The input file named in the flow configuration does not exist.
    #[error("input file '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// The output directory already exists and force-overwrite was not requested.
    #[error("output folder '{}' already exists (use --force to overwrite it)", .0.display())]
    OutputExists(PathBuf),

    /// Unrecognized version tag or malformed base64 payload.
    #[error("format error: {0}")]
    Format(String),

    /// The base64 payload decoded fine but is not a valid zlib stream.
    #[error("corrupt compressed stream: {0}")]
    Compression(#[source] std::io::Error),

    /// The decompressed bytes are not valid JSON (decoding path), or the
    /// pack-flow input file is not a valid JSON document.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The decoded value does not have the blueprint-book shape.
    #[error("invalid blueprint book: {0}")]
    Structure(String),

    /// An I/O failure reported by the file-system driver.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout bpbook-core.
pub type Result<T> = std::result::Result<T, BookError>;
