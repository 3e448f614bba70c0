//! The value produced by a successful traversal.

use crate::coerce::Coerce;
use crate::error::Result;
use crate::format::format;
use crate::types::{JsonValue, ValueKind};
use std::collections::BTreeMap;

/// An owned sub-tree returned by [`crate::resolve`] and friends.
///
/// Coercions borrow the wrapped value, so one `Resolved` can be converted
/// any number of times without walking the tree again. Each target type has
/// a strict `to_*_checked` accessor returning the error and a lenient `to_*`
/// accessor returning the type's default instead.
///
/// ```
/// use jsonpick_core::{Document, PickError};
///
/// let doc: Document = r#"{"port":"0x1F90","debug":"t","ratio":-0.5}"#.parse().unwrap();
/// assert_eq!(doc.path("port").unwrap().to_u16_checked().unwrap(), 8080);
/// assert!(doc.path("debug").unwrap().to_bool());
///
/// let ratio = doc.path("ratio").unwrap();
/// assert!(matches!(ratio.to_u32_checked(), Err(PickError::InvalidNumber { .. })));
/// assert_eq!(ratio.to_u32(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolved {
    value: JsonValue,
}

macro_rules! accessors {
    ($($ty:ty => $checked:ident, $lenient:ident;)*) => {
        impl Resolved {
            $(
                #[doc = concat!("Strict conversion to `", stringify!($ty), "`.")]
                pub fn $checked(&self) -> Result<$ty> {
                    self.coerce()
                }

                #[doc = concat!("Lenient conversion to `", stringify!($ty), "`; errors become the default value.")]
                pub fn $lenient(&self) -> $ty {
                    self.coerce_or_default()
                }
            )*
        }
    };
}

accessors! {
    u8 => to_u8_checked, to_u8;
    u16 => to_u16_checked, to_u16;
    u32 => to_u32_checked, to_u32;
    u64 => to_u64_checked, to_u64;
    i8 => to_i8_checked, to_i8;
    i16 => to_i16_checked, to_i16;
    i32 => to_i32_checked, to_i32;
    i64 => to_i64_checked, to_i64;
    isize => to_isize_checked, to_isize;
    f32 => to_f32_checked, to_f32;
    f64 => to_f64_checked, to_f64;
    bool => to_bool_checked, to_bool;
    Vec<Resolved> => to_sequence_checked, to_sequence;
    BTreeMap<String, Resolved> => to_mapping_checked, to_mapping;
}

impl Resolved {
    pub fn new(value: JsonValue) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    pub fn into_value(self) -> JsonValue {
        self.value
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Strict conversion to any [`Coerce`] target.
    pub fn coerce<T: Coerce>(&self) -> Result<T> {
        T::coerce(&self.value)
    }

    /// Lenient conversion to any [`Coerce`] target.
    pub fn coerce_or_default<T: Coerce>(&self) -> T {
        T::coerce_or_default(&self.value)
    }

    /// Strict conversion to `String`.
    pub fn to_string_checked(&self) -> Result<String> {
        self.coerce()
    }

    /// Lenient conversion to `String`; errors become the empty string.
    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> String {
        self.coerce_or_default()
    }

    /// Indented JSON text for the wrapped value. See [`crate::format`].
    pub fn indent(&self, prefix: &str, indent_unit: &str) -> Result<String> {
        format(&self.value, prefix, indent_unit)
    }
}

impl From<JsonValue> for Resolved {
    fn from(value: JsonValue) -> Self {
        Self::new(value)
    }
}
