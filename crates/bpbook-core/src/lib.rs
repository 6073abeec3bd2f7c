//! # bpbook-core
//!
//! Codec and file-tree flattener for **Factorio blueprint books**.
//!
//! A blueprint book travels as a single line of text: a one-character
//! format-version tag (`'0'`) followed by the base64 encoding of the
//! zlib-compressed JSON document. This crate converts between that exchange
//! string and a decomposed set of JSON artifacts, one per contained
//! blueprint, so books can be inspected, diffed, and archived item by item.
//!
//! ## Quick start
//!
//! ```rust
//! use bpbook_core::{decode, encode};
//! use serde_json::json;
//!
//! let book = json!({"blueprint_book": {"blueprints": [
//!     {"blueprint": {"label": "Base"}},
//! ]}});
//!
//! let text = encode(&book).unwrap();
//! assert!(text.starts_with('0'));
//!
//! let back = decode(&text).unwrap();
//! assert_eq!(back, book);
//! ```
//!
//! ## Modules
//!
//! - [`codec`] — exchange string ⇄ JSON value (`encode`, `decode`)
//! - [`book`] — book tree → ordered `(label, entry)` pairs (`flatten`)
//! - [`sanitize`] — blueprint label → file-system-safe name
//! - [`flow`] — unpack/pack orchestration over a pluggable [`Driver`]
//! - [`error`] — error types for every pipeline stage

pub mod book;
pub mod codec;
pub mod error;
pub mod flow;
pub mod sanitize;

pub use book::flatten;
pub use codec::{decode, encode, VERSION_TAG};
pub use error::{BookError, Result};
pub use flow::{pack, unpack, Driver, FlowConfig, Progress, Quiet};
pub use sanitize::sanitize;
