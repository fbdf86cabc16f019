use std::io;

use serde::Deserialize;
use serde_json::{de::Read, Deserializer, Value};

use crate::{
    depth::{DepthGuard, Guarded},
    DocumentBuf, Error,
};

/// Default for [`DecodeOptions::with_max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// What to do with input that follows the first JSON value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Trailing {
    /// Stop after the first complete value and leave the rest unread.
    #[default]
    Ignore,
    /// Fail unless only whitespace follows the first value.
    Reject,
}

/// Configuration for decoding a [`DocumentBuf`].
///
/// ```rust
/// use jsonnav::Trailing;
///
/// let options = jsonnav::options().with_trailing(Trailing::Reject);
/// assert!(options.from_str(r#"{"a": 1}"#).is_ok());
/// assert!(options.from_str(r#"{"a": 1} {"b": 2}"#).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    trailing: Trailing,
    max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            trailing: Trailing::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Create options with the default, lenient, configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many arrays and objects may be nested inside each other.
    ///
    /// Input nested deeper fails with [`Error::DepthLimitExceeded`] before
    /// anything is built. Pass `usize::MAX` to lift the limit.
    ///
    /// ```rust
    /// let options = jsonnav::options().with_max_depth(2);
    /// assert!(options.from_str("[[1]]").is_ok());
    /// assert!(options.from_str("[[[1]]]").is_err());
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Current nesting limit.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Set how content after the first value is handled.
    #[must_use]
    pub fn with_trailing(mut self, trailing: Trailing) -> Self {
        self.trailing = trailing;
        self
    }

    /// Current trailing content policy.
    #[must_use]
    pub fn trailing(&self) -> Trailing {
        self.trailing
    }

    /// Decode a document from a byte stream.
    ///
    /// The reader is consumed one byte at a time, wrap unbuffered sources in
    /// [`std::io::BufReader`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the stream does not start with a well-formed
    /// JSON value, [`Error::TrailingCharacters`] if trailing content is rejected,
    /// or [`Error::DepthLimitExceeded`] if the value nests too deeply.
    pub fn from_reader<R: io::Read>(&self, reader: R) -> Result<DocumentBuf, Error> {
        let mut reader = Guarded::new(reader, self.max_depth);
        let result = self.decode(Deserializer::from_reader(&mut reader));
        if reader.exceeded() {
            return Err(self.too_deep());
        }
        result
    }

    /// Decode a document from a string.
    ///
    /// # Errors
    ///
    /// See [`DecodeOptions::from_reader`].
    pub fn from_str(&self, input: &str) -> Result<DocumentBuf, Error> {
        self.check_depth(input.as_bytes())?;
        self.decode(Deserializer::from_str(input))
    }

    /// Decode a document from a byte slice.
    ///
    /// Invalid UTF-8 and unpaired surrogate escapes are decode errors.
    ///
    /// # Errors
    ///
    /// See [`DecodeOptions::from_reader`].
    pub fn from_slice(&self, input: &[u8]) -> Result<DocumentBuf, Error> {
        self.check_depth(input)?;
        self.decode(Deserializer::from_slice(input))
    }

    fn check_depth(&self, input: &[u8]) -> Result<(), Error> {
        if DepthGuard::new(self.max_depth).feed(input) {
            Ok(())
        } else {
            Err(self.too_deep())
        }
    }

    fn too_deep(&self) -> Error {
        debug!(limit = self.max_depth, "rejected deeply nested input");
        Error::depth_limit_exceeded(self.max_depth)
    }

    fn decode<'de, R: Read<'de>>(
        &self,
        mut deserializer: Deserializer<R>,
    ) -> Result<DocumentBuf, Error> {
        // Nesting is bounded by `max_depth`, grow the stack instead of
        // hitting serde_json's fixed limit of 128.
        deserializer.disable_recursion_limit();
        let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
            .map_err(Error::decode)?;
        if self.trailing == Trailing::Reject {
            deserializer.end().map_err(|error| {
                debug!(%error, "rejected trailing content");
                Error::trailing_characters(error)
            })?;
        }
        let document = DocumentBuf::from(value);
        debug!(kind = %document.kind(), "decoded document");
        Ok(document)
    }
}
