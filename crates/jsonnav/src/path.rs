//! Key-path lookup through nested objects.
use serde_json::{Number, Value};

use crate::{
    document::{array_of, map_of, must},
    Array, Document, DocumentBuf, Error, Map,
};

impl<'a> Document<'a> {
    /// Follow `path` through nested objects, one key per level.
    ///
    /// Returns `None` for an empty path, when a key is missing, or when a
    /// level that still has keys to consume is not an object. Array indices
    /// are not supported.
    ///
    /// ```rust
    /// let document = jsonnav::must_from_str(r#"{"a": {"b": {"c": "world"}}}"#);
    ///
    /// let found = document.at(["a", "b", "c"]).expect("Path exists");
    /// assert_eq!(found.string(), Some("world"));
    /// assert!(document.at(["a", "x"]).is_none());
    /// assert!(document.at(["a", "b", "c", "d"]).is_none());
    /// ```
    #[must_use]
    pub fn at<I>(self, path: I) -> Option<Document<'a>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.locate(path).map(Document::borrowed)
    }

    /// Like [`Document::at`], but reports a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path does not resolve.
    pub fn try_at<I>(self, path: I) -> Result<Document<'a>, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.at(path).ok_or(Error::InvalidPath)
    }

    /// Like [`Document::at`], but panics on a miss.
    ///
    /// # Panics
    ///
    /// Panics with `invalid path` if the path does not resolve.
    #[must_use]
    #[track_caller]
    pub fn must_at<I>(self, path: I) -> Document<'a>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        must(self.try_at(path))
    }

    #[must_use]
    pub fn string_at<I>(self, path: I) -> Option<&'a str>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.locate(path)?.as_str()
    }

    #[must_use]
    pub fn number_at<I>(self, path: I) -> Option<&'a Number>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        match self.locate(path)? {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    #[must_use]
    pub fn bool_at<I>(self, path: I) -> Option<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.locate(path)?.as_bool()
    }

    #[must_use]
    pub fn array_at<I>(self, path: I) -> Option<Array<'a>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        array_of(self.locate(path)?)
    }

    #[must_use]
    pub fn map_at<I>(self, path: I) -> Option<Map<'a>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        map_of(self.locate(path)?)
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn locate<I>(self, path: I) -> Option<&'a Value>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut keys = path.into_iter().enumerate().peekable();
        keys.peek()?;
        keys.try_fold(self.as_value()?, |current, (index, key)| {
            let key = key.as_ref();
            if let Value::Object(object) = current {
                let next = object.get(key);
                if next.is_none() {
                    trace!(index, key = %key, "path key not found");
                }
                next
            } else {
                trace!(
                    index,
                    key = %key,
                    kind = %crate::Kind::of(Some(current)),
                    "path segment is not a map"
                );
                None
            }
        })
    }
}

impl DocumentBuf {
    /// See [`Document::at`].
    #[must_use]
    pub fn at<I>(&self, path: I) -> Option<Document<'_>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.as_document().at(path)
    }

    /// See [`Document::try_at`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path does not resolve.
    pub fn try_at<I>(&self, path: I) -> Result<Document<'_>, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.as_document().try_at(path)
    }

    /// See [`Document::must_at`].
    ///
    /// # Panics
    ///
    /// Panics with `invalid path` if the path does not resolve.
    #[must_use]
    #[track_caller]
    pub fn must_at<I>(&self, path: I) -> Document<'_>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.as_document().must_at(path)
    }

    #[must_use]
    pub fn string_at<I>(&self, path: I) -> Option<&str>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.as_document().string_at(path)
    }

    #[must_use]
    pub fn number_at<I>(&self, path: I) -> Option<&Number>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.as_document().number_at(path)
    }

    #[must_use]
    pub fn bool_at<I>(&self, path: I) -> Option<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.as_document().bool_at(path)
    }

    #[must_use]
    pub fn array_at<I>(&self, path: I) -> Option<Array<'_>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.as_document().array_at(path)
    }

    #[must_use]
    pub fn map_at<I>(&self, path: I) -> Option<Map<'_>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.as_document().map_at(path)
    }
}
