//! Tree accessor: resolve a sequence of path segments against a JSON tree.
//!
//! Each segment is interpreted according to the node it is applied to:
//!
//! - **mapping**: the segment is a key; a missing key fails with `KeyNotFound`
//! - **sequence**: the segment is an integer index, or the wildcard `#`
//! - **scalar**: nothing to descend into, fails with `NotContainer`
//!
//! The wildcard fans the *rest* of the path out over every element of the
//! sequence and collects one result per element, in document order:
//!
//! ```
//! use jsonpick_core::{resolve_path, Delimiter, JsonValue};
//!
//! let root: JsonValue = serde_json::from_str(r#"[{"a":1},{"a":2}]"#).unwrap();
//! let picked = resolve_path(&root, "#.a", Delimiter::Dot).unwrap();
//! assert_eq!(picked.value(), &JsonValue::Array(vec![1.0.into(), 2.0.into()]));
//! ```

use crate::error::{PickError, Result};
use crate::resolved::Resolved;
use crate::types::JsonValue;
use std::borrow::Cow;

/// Segment that fans the remaining path out across a sequence.
pub const WILDCARD: &str = "#";

/// Separator used to split a path string into segments.
///
/// Slash is the default, so `Document::path("/friends/0/name")` works
/// without configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// `friends.0.name`
    Dot,
    /// `/friends/0/name` (the leading slash is optional)
    #[default]
    Slash,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Dot => '.',
            Delimiter::Slash => '/',
        }
    }

    /// Split a path string into segments.
    ///
    /// An empty path (or a lone `/` in slash form) yields no segments and
    /// therefore addresses the root.
    pub fn split(self, path: &str) -> Vec<&str> {
        let path = match self {
            Delimiter::Slash => path.strip_prefix('/').unwrap_or(path),
            Delimiter::Dot => path,
        };
        if path.is_empty() {
            return Vec::new();
        }
        path.split(self.as_char()).collect()
    }
}

/// Resolve `segments` in order against `root`.
///
/// The first failing segment aborts the traversal; no partial value is
/// returned.
///
/// # Examples
///
/// ```
/// use jsonpick_core::{resolve, JsonValue, PickError};
///
/// let root: JsonValue = serde_json::from_str(r#"{"tags":["a","b"]}"#).unwrap();
/// let tag = resolve(&root, &["tags", "1"]).unwrap();
/// assert_eq!(tag.to_string_checked().unwrap(), "b");
///
/// let err = resolve(&root, &["tags", "2"]).unwrap_err();
/// assert!(matches!(err, PickError::IndexOutOfRange { .. }));
/// ```
pub fn resolve<S: AsRef<str>>(root: &JsonValue, segments: &[S]) -> Result<Resolved> {
    walk(root, segments).map(|value| Resolved::new(value.into_owned()))
}

/// Split `path` on `delimiter`, then [`resolve`] the segments.
pub fn resolve_path(root: &JsonValue, path: &str, delimiter: Delimiter) -> Result<Resolved> {
    resolve(root, &delimiter.split(path))
}

/// Whether `segments` resolve against `root`. Every error collapses to `false`.
pub fn exists<S: AsRef<str>>(root: &JsonValue, segments: &[S]) -> bool {
    walk(root, segments).is_ok()
}

/// Path-string form of [`exists`].
pub fn exists_path(root: &JsonValue, path: &str, delimiter: Delimiter) -> bool {
    exists(root, &delimiter.split(path))
}

/// Single-element traversal loop. Hands off to [`fan_out`] on a wildcard.
///
/// Borrows from `root` unless a wildcard forces a new sequence to be built.
fn walk<'a, S: AsRef<str>>(root: &'a JsonValue, segments: &[S]) -> Result<Cow<'a, JsonValue>> {
    let mut current = root;

    for (pos, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        current = match current {
            JsonValue::Object(map) => {
                map.get(segment)
                    .ok_or_else(|| PickError::KeyNotFound {
                        key: segment.to_string(),
                    })?
            }
            JsonValue::Array(items) => {
                if segment == WILDCARD {
                    return fan_out(items, &segments[pos + 1..]).map(Cow::Owned);
                }
                index_into(items, segment)?
            }
            scalar => {
                return Err(PickError::NotContainer {
                    segment: segment.to_string(),
                    kind: scalar.kind(),
                });
            }
        };
    }

    Ok(Cow::Borrowed(current))
}

/// Resolve `rest` independently against every element of `items`.
///
/// Any element failing fails the whole fan-out with that element's error.
fn fan_out<S: AsRef<str>>(items: &[JsonValue], rest: &[S]) -> Result<JsonValue> {
    if rest.is_empty() {
        return Ok(JsonValue::Array(items.to_vec()));
    }
    items
        .iter()
        .map(|item| walk(item, rest).map(Cow::into_owned))
        .collect::<Result<Vec<_>>>()
        .map(JsonValue::Array)
}

/// Outcome of reading a segment as a sequence index.
enum Index {
    At(usize),
    /// Syntactically an integer, but negative or too large for `usize`.
    Outside,
}

fn index_into<'a>(items: &'a [JsonValue], segment: &str) -> Result<&'a JsonValue> {
    let out_of_range = || PickError::IndexOutOfRange {
        index: segment.to_string(),
        len: items.len(),
    };

    match parse_index(segment) {
        Some(Index::At(i)) => items.get(i).ok_or_else(out_of_range),
        Some(Index::Outside) => Err(out_of_range()),
        None => Err(PickError::InvalidKey {
            segment: segment.to_string(),
        }),
    }
}

/// Parse an optionally signed decimal integer. `None` when the segment is not
/// numeric at all.
fn parse_index(segment: &str) -> Option<Index> {
    let (negative, digits) = match segment.as_bytes().first() {
        Some(b'-') => (true, &segment[1..]),
        Some(b'+') => (false, &segment[1..]),
        _ => (false, segment),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match digits.parse::<usize>() {
        Ok(0) => Some(Index::At(0)),
        Ok(i) if !negative => Some(Index::At(i)),
        _ => Some(Index::Outside),
    }
}
