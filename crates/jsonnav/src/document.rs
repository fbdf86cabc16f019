use std::str::FromStr;

use ahash::AHashMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

use crate::{Error, Kind};

/// Elements of a JSON array, each wrapped in its own [`Document`].
pub type Array<'a> = Vec<Document<'a>>;
/// Members of a JSON object, each value wrapped in its own [`Document`].
///
/// Iteration order is unspecified.
pub type Map<'a> = AHashMap<&'a str, Document<'a>>;

/// A decoded JSON document that owns its value.
///
/// Produced by [`from_str`](crate::from_str) and friends. Navigation goes
/// through [`Document`], a cheap view that borrows from this buffer; every
/// accessor on `DocumentBuf` is a shortcut for the same accessor on
/// [`DocumentBuf::as_document`].
#[derive(Debug, Clone)]
pub struct DocumentBuf {
    value: Value,
}

/// A read-only view of a single JSON value, or of nothing.
///
/// The empty view is what lookups produce when nothing is found; every typed
/// accessor on it returns `None` and its [`kind`](Document::kind) is
/// [`Kind::Unknown`].
///
/// Views are `Copy` and everything they return borrows the underlying
/// document, not the view itself, so accessors chain freely:
///
/// ```rust
/// let document = jsonnav::must_from_str(r#"{"hello": ["world"]}"#);
/// let items = document.must_at(["hello"]).must_array();
/// let first = items[0].must_string();
/// assert_eq!(first, "world");
/// ```
///
/// [`array`](Document::array), [`map`](Document::map) and [`at`](Document::at)
/// create new views on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Document<'a> {
    value: Option<&'a Value>,
}

impl DocumentBuf {
    /// Borrow the document for navigation.
    #[must_use]
    pub fn as_document(&self) -> Document<'_> {
        Document::borrowed(&self.value)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// See [`Document::kind`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.as_document().kind()
    }

    /// See [`Document::string`].
    #[must_use]
    pub fn string(&self) -> Option<&str> {
        self.as_document().string()
    }

    /// See [`Document::number`].
    #[must_use]
    pub fn number(&self) -> Option<&Number> {
        self.as_document().number()
    }

    /// See [`Document::bool`].
    #[must_use]
    pub fn bool(&self) -> Option<bool> {
        self.as_document().bool()
    }

    /// See [`Document::array`].
    #[must_use]
    pub fn array(&self) -> Option<Array<'_>> {
        self.as_document().array()
    }

    /// See [`Document::map`].
    #[must_use]
    pub fn map(&self) -> Option<Map<'_>> {
        self.as_document().map()
    }

    /// See [`Document::try_string`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the document is not a string.
    pub fn try_string(&self) -> Result<&str, Error> {
        self.as_document().try_string()
    }

    /// See [`Document::try_number`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the document is not a number.
    pub fn try_number(&self) -> Result<&Number, Error> {
        self.as_document().try_number()
    }

    /// See [`Document::try_bool`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the document is not a boolean.
    pub fn try_bool(&self) -> Result<bool, Error> {
        self.as_document().try_bool()
    }

    /// See [`Document::try_array`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the document is not an array.
    pub fn try_array(&self) -> Result<Array<'_>, Error> {
        self.as_document().try_array()
    }

    /// See [`Document::try_map`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the document is not an object.
    pub fn try_map(&self) -> Result<Map<'_>, Error> {
        self.as_document().try_map()
    }

    /// # Panics
    ///
    /// Panics if the document is not a string.
    #[must_use]
    #[track_caller]
    pub fn must_string(&self) -> &str {
        self.as_document().must_string()
    }

    /// # Panics
    ///
    /// Panics if the document is not a number.
    #[must_use]
    #[track_caller]
    pub fn must_number(&self) -> &Number {
        self.as_document().must_number()
    }

    /// # Panics
    ///
    /// Panics if the document is not a boolean.
    #[must_use]
    #[track_caller]
    pub fn must_bool(&self) -> bool {
        self.as_document().must_bool()
    }

    /// # Panics
    ///
    /// Panics if the document is not an array.
    #[must_use]
    #[track_caller]
    pub fn must_array(&self) -> Array<'_> {
        self.as_document().must_array()
    }

    /// # Panics
    ///
    /// Panics if the document is not an object.
    #[must_use]
    #[track_caller]
    pub fn must_map(&self) -> Map<'_> {
        self.as_document().must_map()
    }
}

impl Document<'static> {
    /// The empty view.
    #[must_use]
    pub const fn none() -> Self {
        Document { value: None }
    }
}

impl<'a> Document<'a> {
    pub(crate) fn borrowed(value: &'a Value) -> Self {
        Document { value: Some(value) }
    }

    /// Returns `true` for the empty view.
    ///
    /// A decoded `null` is a value, not an empty view.
    #[must_use]
    pub fn is_none(self) -> bool {
        self.value.is_none()
    }

    /// The underlying value, if any.
    #[must_use]
    pub fn as_value(self) -> Option<&'a Value> {
        self.value
    }

    /// Copy the viewed value into a standalone document.
    #[must_use]
    pub fn to_document_buf(self) -> Option<DocumentBuf> {
        self.value.cloned().map(DocumentBuf::from)
    }

    /// Shape of the viewed value.
    #[must_use]
    pub fn kind(self) -> Kind {
        Kind::of(self.value)
    }

    #[must_use]
    pub fn string(self) -> Option<&'a str> {
        self.value?.as_str()
    }

    /// The number token.
    ///
    /// Digits are kept exactly as they appeared in the input, so large or
    /// very precise numbers are never rounded. Exponents are spelled in a
    /// canonical form: a lowercase `e` followed by an explicit sign, so `1E5`
    /// is reported as `1e+5` and `2.50E-3` as `2.50e-3`.
    ///
    /// Use [`Number::as_i64`], [`Number::as_u64`] or [`Number::as_f64`] to
    /// convert it, or its `Display` implementation to get the token text.
    #[must_use]
    pub fn number(self) -> Option<&'a Number> {
        match self.value? {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    #[must_use]
    pub fn bool(self) -> Option<bool> {
        self.value?.as_bool()
    }

    /// Wrap every element of an array.
    ///
    /// The elements are wrapped again on each call.
    #[must_use]
    pub fn array(self) -> Option<Array<'a>> {
        array_of(self.value?)
    }

    /// Wrap every member of an object.
    ///
    /// The members are wrapped again on each call.
    #[must_use]
    pub fn map(self) -> Option<Map<'a>> {
        map_of(self.value?)
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a string.
    pub fn try_string(self) -> Result<&'a str, Error> {
        self.narrow(self.string(), Kind::String)
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a number.
    pub fn try_number(self) -> Result<&'a Number, Error> {
        self.narrow(self.number(), Kind::Number)
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a boolean.
    pub fn try_bool(self) -> Result<bool, Error> {
        self.narrow(self.bool(), Kind::Bool)
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an array.
    pub fn try_array(self) -> Result<Array<'a>, Error> {
        self.narrow(self.array(), Kind::Array)
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an object.
    pub fn try_map(self) -> Result<Map<'a>, Error> {
        self.narrow(self.map(), Kind::Map)
    }

    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    #[track_caller]
    pub fn must_string(self) -> &'a str {
        must(self.try_string())
    }

    /// # Panics
    ///
    /// Panics if the value is not a number.
    #[must_use]
    #[track_caller]
    pub fn must_number(self) -> &'a Number {
        must(self.try_number())
    }

    /// # Panics
    ///
    /// Panics if the value is not a boolean.
    #[must_use]
    #[track_caller]
    pub fn must_bool(self) -> bool {
        must(self.try_bool())
    }

    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[must_use]
    #[track_caller]
    pub fn must_array(self) -> Array<'a> {
        must(self.try_array())
    }

    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn must_map(self) -> Map<'a> {
        must(self.try_map())
    }

    fn narrow<T>(self, value: Option<T>, expected: Kind) -> Result<T, Error> {
        value.ok_or_else(|| Error::type_mismatch(expected, self.kind()))
    }
}

pub(crate) fn array_of(value: &Value) -> Option<Array<'_>> {
    value
        .as_array()
        .map(|items| items.iter().map(Document::borrowed).collect())
}

pub(crate) fn map_of(value: &Value) -> Option<Map<'_>> {
    value.as_object().map(|object| {
        object
            .iter()
            .map(|(key, value)| (key.as_str(), Document::borrowed(value)))
            .collect()
    })
}

#[track_caller]
pub(crate) fn must<T>(result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

impl From<Value> for DocumentBuf {
    fn from(value: Value) -> Self {
        DocumentBuf { value }
    }
}

impl<'a> From<&'a Value> for Document<'a> {
    fn from(value: &'a Value) -> Self {
        Document::borrowed(value)
    }
}

impl<'a> From<&'a DocumentBuf> for Document<'a> {
    fn from(document: &'a DocumentBuf) -> Self {
        document.as_document()
    }
}

impl FromStr for DocumentBuf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::from_str(s)
    }
}

impl<'de> Deserialize<'de> for DocumentBuf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(DocumentBuf::from)
    }
}

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DocumentBuf>();
    assert_send_sync::<Document<'static>>();
};
