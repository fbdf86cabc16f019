//! # jsonnav
//!
//! Typed accessors and key-path navigation over decoded JSON documents.
//!
//! Decoding is done by `serde_json` with numbers kept as their exact source
//! text. Decoders return a [`DocumentBuf`] that owns the value; navigation
//! happens through [`Document`], a `Copy` view into it. Both are read-only
//! and offer three flavours of every accessor:
//!
//! - `string()`, `at(..)`, ... return an `Option`;
//! - `try_string()`, `try_at(..)`, ... return a [`Result`] with an [`Error`];
//! - `must_string()`, `must_at(..)`, ... panic, for call sites where a
//!   mismatch is a bug.
//!
//! ```rust
//! let document = jsonnav::from_str(r#"{"server": {"port": 8080, "name": "edge"}}"#)?;
//!
//! assert_eq!(document.kind(), jsonnav::Kind::Map);
//! assert_eq!(document.string_at(["server", "name"]), Some("edge"));
//!
//! let port = document.try_at(["server", "port"])?;
//! assert_eq!(port.try_number()?.as_u64(), Some(8080));
//!
//! // Missing keys and non-object levels look the same.
//! assert!(document.at(["server", "port", "value"]).is_none());
//! assert!(document.at(["client"]).is_none());
//! # Ok::<(), jsonnav::Error>(())
//! ```
//!
//! Numbers are not rounded:
//!
//! ```rust
//! let document = jsonnav::must_from_str(r#"{"n": 123456789012345678901234567890}"#);
//! let n = document.must_at(["n"]);
//! assert_eq!(n.must_number().to_string(), "123456789012345678901234567890");
//! ```
#[macro_use]
mod tracing_macros;

mod depth;
mod document;
mod error;
mod kind;
mod options;
mod path;

use std::io;

pub use document::{Array, Document, DocumentBuf, Map};
pub use error::Error;
pub use kind::Kind;
pub use options::{DecodeOptions, Trailing, DEFAULT_MAX_DEPTH};
pub use serde_json::Number;

/// Get [`DecodeOptions`] for configuring how documents are decoded.
#[must_use]
pub fn options() -> DecodeOptions {
    DecodeOptions::new()
}

/// Decode a document from a byte stream.
///
/// Only the first JSON value is read, anything after it is ignored.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the stream does not start with a well-formed JSON value.
pub fn from_reader<R: io::Read>(reader: R) -> Result<DocumentBuf, Error> {
    options().from_reader(reader)
}

/// Decode a document from a string.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the input does not start with a well-formed JSON value.
pub fn from_str(input: &str) -> Result<DocumentBuf, Error> {
    options().from_str(input)
}

/// Decode a document from a byte slice.
///
/// The input must be valid UTF-8. Invalid byte sequences inside strings and
/// unpaired surrogate escapes such as `"\ud800"` are decode errors; they are
/// never replaced with U+FFFD.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the input does not start with a well-formed JSON value.
pub fn from_slice(input: &[u8]) -> Result<DocumentBuf, Error> {
    options().from_slice(input)
}

/// Decode a document from a byte stream, panicking on failure.
///
/// # Panics
///
/// Panics if the stream does not start with a well-formed JSON value.
#[must_use]
#[track_caller]
pub fn must_from_reader<R: io::Read>(reader: R) -> DocumentBuf {
    document::must(from_reader(reader))
}

/// Decode a document from a string, panicking on failure.
///
/// # Panics
///
/// Panics if the input does not start with a well-formed JSON value.
#[must_use]
#[track_caller]
pub fn must_from_str(input: &str) -> DocumentBuf {
    document::must(from_str(input))
}

/// Decode a document from a byte slice, panicking on failure.
///
/// # Panics
///
/// Panics if the input does not start with a well-formed JSON value.
#[must_use]
#[track_caller]
pub fn must_from_slice(input: &[u8]) -> DocumentBuf {
    document::must(from_slice(input))
}
