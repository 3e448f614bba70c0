//! Error types for document decoding, path traversal and value coercion.

use crate::types::ValueKind;
use std::num::ParseFloatError;
use thiserror::Error;

/// Errors that can occur while decoding, traversing or coercing JSON.
///
/// Variants are compared by kind; none of them carries shared state.
#[derive(Error, Debug)]
pub enum PickError {
    /// The input was not valid JSON (construction path).
    #[error("JSON decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// Re-serialising a value to indented JSON text failed.
    #[error("JSON encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A mapping step found no such key.
    #[error("key not found: {key:?}")]
    KeyNotFound { key: String },

    /// A sequence step used a well-formed index outside `0..len`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: String, len: usize },

    /// A sequence step used a segment that is not an integer index.
    #[error("invalid key {segment:?}: expected a sequence index")]
    InvalidKey { segment: String },

    /// Segments remained after reaching a scalar value.
    #[error("cannot descend into {kind} with segment {segment:?}")]
    NotContainer { segment: String, kind: ValueKind },

    /// The source value's kind has no conversion to the requested target.
    #[error("cannot convert {kind} to {target}")]
    InvalidObject {
        target: &'static str,
        kind: ValueKind,
    },

    /// A negative value was requested as an unsigned target.
    #[error("invalid number {value} for {target}")]
    InvalidNumber { target: &'static str, value: String },

    /// A string source could not be parsed as the requested target.
    #[error("cannot parse {input:?} as {target}: {reason}")]
    Parse {
        target: &'static str,
        input: String,
        #[source]
        reason: ParseReason,
    },
}

/// Why a string source failed to parse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseReason {
    /// Not a literal of the target's grammar.
    #[error("invalid syntax")]
    Syntax,

    /// A well-formed literal that does not fit the target.
    #[error("value out of range")]
    OutOfRange,

    /// Rejected by the float parser.
    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

impl PickError {
    /// True for errors raised while walking a path.
    pub fn is_traversal(&self) -> bool {
        matches!(
            self,
            PickError::KeyNotFound { .. }
                | PickError::IndexOutOfRange { .. }
                | PickError::InvalidKey { .. }
                | PickError::NotContainer { .. }
        )
    }

    /// True for errors raised while converting a resolved value.
    pub fn is_coercion(&self) -> bool {
        matches!(
            self,
            PickError::InvalidObject { .. }
                | PickError::InvalidNumber { .. }
                | PickError::Parse { .. }
        )
    }
}

/// Convenience alias used throughout jsonpick-core.
pub type Result<T> = std::result::Result<T, PickError>;
