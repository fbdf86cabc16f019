use core::fmt;

use crate::Kind;

/// Errors produced while decoding or navigating a [`Document`](crate::Document).
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a well-formed JSON value.
    Decode { source: serde_json::Error },
    /// The input continues past the first JSON value.
    ///
    /// Only reported when decoding with [`Trailing::Reject`](crate::Trailing::Reject).
    TrailingCharacters { source: serde_json::Error },
    /// Arrays and objects are nested deeper than the configured limit.
    ///
    /// See [`DecodeOptions::with_max_depth`](crate::DecodeOptions::with_max_depth).
    DepthLimitExceeded { limit: usize },
    /// The document holds a value of a different kind than requested.
    TypeMismatch { expected: Kind, actual: Kind },
    /// A key path does not resolve to a value.
    InvalidPath,
}

impl Error {
    pub(crate) fn decode(source: serde_json::Error) -> Error {
        Error::Decode { source }
    }

    pub(crate) fn trailing_characters(source: serde_json::Error) -> Error {
        Error::TrailingCharacters { source }
    }

    pub(crate) fn depth_limit_exceeded(limit: usize) -> Error {
        Error::DepthLimitExceeded { limit }
    }

    pub(crate) fn type_mismatch(expected: Kind, actual: Kind) -> Error {
        Error::TypeMismatch { expected, actual }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode { source } => fmt::Display::fmt(source, f),
            Error::TrailingCharacters { source } => {
                write!(f, "unexpected content after JSON value: {source}")
            }
            Error::DepthLimitExceeded { limit } => {
                write!(f, "nesting depth exceeds the limit of {limit}")
            }
            Error::TypeMismatch { expected, actual } => {
                write!(f, "got {actual} expected {expected}")
            }
            Error::InvalidPath => f.write_str("invalid path"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode { source } | Error::TrailingCharacters { source } => Some(source),
            Error::DepthLimitExceeded { .. }
            | Error::TypeMismatch { .. }
            | Error::InvalidPath => None,
        }
    }
}
