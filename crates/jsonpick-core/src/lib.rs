//! # jsonpick-core
//!
//! Path lookup and type coercion over **untyped JSON trees**.
//!
//! A decoded document is a tree of [`JsonValue`] nodes. Values are reached by
//! a list of segments (keys for mappings, indices for sequences, `#` to fan
//! out over a sequence) or by a `.`/`/`-delimited path string, then converted
//! to Rust primitives either strictly (errors surface) or leniently (errors
//! become the type's default).
//!
//! ## Quick start
//!
//! ```rust
//! use jsonpick_core::{Document, PickError};
//!
//! let json = r#"{"friends":[{"id":"1111","name":"hlts2","like":["apple","strawberry"]}]}"#;
//! let doc: Document = json.parse().unwrap();
//!
//! assert_eq!(doc.path("/friends/0/like/0").unwrap().to_string(), "apple");
//! assert_eq!(doc.path("/friends/0/id").unwrap().to_u64_checked().unwrap(), 1111);
//! assert!(matches!(doc.path("/friends/9"), Err(PickError::IndexOutOfRange { .. })));
//! assert!(matches!(doc.path("/unknown"), Err(PickError::KeyNotFound { .. })));
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `JsonValue` tree and its serde impls
//! - [`access`] — segment/path traversal, wildcard fan-out, `exists`
//! - [`coerce`] — per-type conversion rules (`Coerce` trait)
//! - [`resolved`] — `Resolved` wrapper with strict/lenient accessors
//! - [`document`] — decoding from bytes, strings and readers
//! - [`format`] — indented JSON output
//! - [`error`] — `PickError` taxonomy

pub mod access;
pub mod coerce;
pub mod document;
pub mod error;
pub mod format;
pub mod resolved;
pub mod types;

pub use access::{exists, exists_path, resolve, resolve_path, Delimiter, WILDCARD};
pub use coerce::Coerce;
pub use document::Document;
pub use error::{ParseReason, PickError, Result};
pub use format::format;
pub use resolved::Resolved;
pub use types::{JsonValue, ValueKind};
