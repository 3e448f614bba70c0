//! A decoded JSON document and the entry points for looking values up in it.

use crate::access::{self, Delimiter};
use crate::error::{PickError, Result};
use crate::format::format;
use crate::resolved::Resolved;
use crate::types::JsonValue;
use std::io::Read;
use std::str::FromStr;

/// Owns a decoded root value plus the delimiter used by [`Document::path`].
/// Paths are slash-delimited unless [`Document::with_delimiter`] says otherwise.
///
/// # Examples
///
/// ```
/// use jsonpick_core::{Delimiter, Document};
///
/// let doc = Document::from_slice(br#"{"friends":[{"name":"hlts2"}]}"#).unwrap();
/// let name = doc.path("/friends/0/name").unwrap();
/// assert_eq!(name.to_string(), "hlts2");
/// assert!(!doc.exists(&["friends", "1"]));
///
/// let doc = doc.with_delimiter(Delimiter::Dot);
/// assert!(doc.exists_path("friends.0.name"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: JsonValue,
    delimiter: Delimiter,
}

impl Document {
    pub fn new(root: JsonValue) -> Self {
        Self {
            root,
            delimiter: Delimiter::default(),
        }
    }

    /// Decode a document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::Decode`] carrying the parser's error.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map(Self::new)
            .map_err(PickError::Decode)
    }

    /// Decode a document from a byte stream.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::Decode`] for malformed JSON and for I/O failures
    /// of the reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map(Self::new)
            .map_err(PickError::Decode)
    }

    /// Use `delimiter` for subsequent [`Document::path`] and
    /// [`Document::exists_path`] calls.
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn root(&self) -> &JsonValue {
        &self.root
    }

    pub fn into_root(self) -> JsonValue {
        self.root
    }

    /// Resolve a sequence of keys/indices from the root.
    pub fn get<S: AsRef<str>>(&self, segments: &[S]) -> Result<Resolved> {
        access::resolve(&self.root, segments)
    }

    /// Resolve a path string split on the document's delimiter.
    pub fn path(&self, path: &str) -> Result<Resolved> {
        access::resolve_path(&self.root, path, self.delimiter)
    }

    /// Resolve a path string split on an explicit delimiter.
    pub fn path_with(&self, path: &str, delimiter: Delimiter) -> Result<Resolved> {
        access::resolve_path(&self.root, path, delimiter)
    }

    pub fn exists<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        access::exists(&self.root, segments)
    }

    pub fn exists_path(&self, path: &str) -> bool {
        access::exists_path(&self.root, path, self.delimiter)
    }

    /// Indented JSON text for the whole document.
    pub fn indent(&self, prefix: &str, indent_unit: &str) -> Result<String> {
        format(&self.root, prefix, indent_unit)
    }
}

impl FromStr for Document {
    type Err = PickError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s)
            .map(Self::new)
            .map_err(PickError::Decode)
    }
}

impl From<JsonValue> for Document {
    fn from(root: JsonValue) -> Self {
        Self::new(root)
    }
}
