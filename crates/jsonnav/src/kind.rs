use core::fmt;
use std::str::FromStr;

use serde_json::Value;

/// The shape of the value held by a [`Document`](crate::Document).
///
/// `null` has no shape of its own and is reported as [`Kind::Unknown`], the
/// same as an empty document.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A JSON string, labelled `string`.
    String,
    /// A JSON number, labelled `number`.
    Number,
    /// `true` or `false`, labelled `bool`.
    Bool,
    /// A JSON object, labelled `map`.
    Map,
    /// A JSON array, labelled `array`.
    Array,
    /// `null` or an empty document, labelled `unknown`.
    Unknown,
}

impl Kind {
    pub(crate) fn of(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(_)) => Kind::String,
            Some(Value::Number(_)) => Kind::Number,
            Some(Value::Bool(_)) => Kind::Bool,
            Some(Value::Object(_)) => Kind::Map,
            Some(Value::Array(_)) => Kind::Array,
            Some(Value::Null) | None => Kind::Unknown,
        }
    }

    /// Label used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Bool => "bool",
            Kind::Map => "map",
            Kind::Array => "array",
            Kind::Unknown => "unknown",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Kind::String),
            "number" => Ok(Kind::Number),
            "bool" => Ok(Kind::Bool),
            "map" => Ok(Kind::Map),
            "array" => Ok(Kind::Array),
            "unknown" => Ok(Kind::Unknown),
            _ => Err(()),
        }
    }
}
