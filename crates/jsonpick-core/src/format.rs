//! Indented JSON output for a [`JsonValue`].
//!
//! Serialisation itself is `serde_json`'s `PrettyFormatter`; this module only
//! adds the line prefix.

use crate::error::{PickError, Result};
use crate::types::JsonValue;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serialise `value` as indented JSON.
///
/// Each nested element starts on a new line that begins with `prefix`
/// followed by one copy of `indent_unit` per nesting level. The first line
/// carries no prefix. Whole numbers are written without a fractional part.
///
/// # Examples
///
/// ```
/// use jsonpick_core::{format, JsonValue};
///
/// let value: JsonValue = serde_json::from_str(r#"{"a":[1,2]}"#).unwrap();
/// assert_eq!(format(&value, "", "  ").unwrap(), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
/// assert_eq!(format(&value, "> ", " ").unwrap(), "{\n>  \"a\": [\n>   1,\n>   2\n>  ]\n> }");
/// ```
pub fn format(value: &JsonValue, prefix: &str, indent_unit: &str) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent_unit.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer).map_err(PickError::Encode)?;

    // serde_json only ever writes UTF-8.
    let text = String::from_utf8_lossy(&buf).into_owned();
    if prefix.is_empty() {
        return Ok(text);
    }
    // Newlines inside strings are escaped, so every raw '\n' is a line break.
    Ok(text.replace('\n', &format!("\n{prefix}")))
}
