//! Value coercion: convert one [`JsonValue`] into a primitive Rust type.
//!
//! Every target shares the same rule table for strict and lenient callers;
//! lenient callers just replace the error with `Default::default()`.
//!
//! | Source | Integer targets | Float targets | `String` | `bool` |
//! |--------|-----------------|---------------|----------|--------|
//! | number | truncate, then two's-complement narrow; negative into unsigned is `InvalidNumber` | `as` cast | decimal text, no exponent | `InvalidObject` |
//! | bool   | `1` / `0` | `1.0` / `0.0` | `"true"` / `"false"` | identity |
//! | string | integer literal with `0x`/`0o`/`0b`/leading-`0` prefixes | float literal | identity | `1 t T TRUE true True` and their false forms |
//! | null   | `0` | `0.0` | `InvalidObject` | `false` |
//! | array / object | `InvalidObject` | `InvalidObject` | `InvalidObject` | `InvalidObject` |
//!
//! Sequences and mappings coerce only from exactly that kind, rewrapping each
//! element as a [`Resolved`] without converting it.

use crate::error::{ParseReason, PickError, Result};
use crate::resolved::Resolved;
use crate::types::JsonValue;
use std::collections::BTreeMap;
use std::num::ParseFloatError;
use std::str::FromStr;

/// A type a [`JsonValue`] can be converted into.
///
/// `Default` supplies the value lenient callers fall back to.
pub trait Coerce: Sized + Default {
    /// Target name used in error messages.
    const TARGET: &'static str;

    /// Convert `value`, or report why it cannot be converted.
    fn coerce(value: &JsonValue) -> Result<Self>;

    /// Convert `value`, substituting `Self::default()` for any error.
    fn coerce_or_default(value: &JsonValue) -> Self {
        Self::coerce(value).unwrap_or_default()
    }
}

fn invalid_object(target: &'static str, value: &JsonValue) -> PickError {
    PickError::InvalidObject {
        target,
        kind: value.kind(),
    }
}

fn parse_error(target: &'static str, input: &str, reason: ParseReason) -> PickError {
    PickError::Parse {
        target,
        input: input.to_string(),
        reason,
    }
}

// ============================================================================
// Integers
// ============================================================================

macro_rules! coerce_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Coerce for $ty {
            const TARGET: &'static str = stringify!($ty);

            fn coerce(value: &JsonValue) -> Result<Self> {
                match value {
                    JsonValue::Number(n) => {
                        if *n < 0.0 {
                            return Err(PickError::InvalidNumber {
                                target: Self::TARGET,
                                value: format_number(*n),
                            });
                        }
                        Ok(*n as u64 as $ty)
                    }
                    JsonValue::Bool(b) => Ok(<$ty>::from(*b)),
                    JsonValue::String(s) => {
                        parse_unsigned(s, Self::TARGET, <$ty>::MAX as u64).map(|v| v as $ty)
                    }
                    JsonValue::Null => Ok(0),
                    other => Err(invalid_object(Self::TARGET, other)),
                }
            }
        }
    )*};
}

macro_rules! coerce_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Coerce for $ty {
            const TARGET: &'static str = stringify!($ty);

            fn coerce(value: &JsonValue) -> Result<Self> {
                match value {
                    JsonValue::Number(n) => Ok(*n as i64 as $ty),
                    JsonValue::Bool(b) => Ok(<$ty>::from(*b)),
                    JsonValue::String(s) => {
                        parse_signed(s, Self::TARGET, <$ty>::BITS).map(|v| v as $ty)
                    }
                    JsonValue::Null => Ok(0),
                    other => Err(invalid_object(Self::TARGET, other)),
                }
            }
        }
    )*};
}

coerce_unsigned!(u8, u16, u32, u64);
coerce_signed!(i8, i16, i32, i64, isize);

/// Split an integer literal into its sign and magnitude.
///
/// Accepts an optional `+`/`-`, then `0x`/`0X` (hex), `0o`/`0O` (octal),
/// `0b`/`0B` (binary), a bare leading `0` (octal), or plain decimal digits.
/// Fails with `Syntax` on a malformed literal and `OutOfRange` when the
/// magnitude exceeds `u64`.
fn parse_integer_literal(input: &str) -> std::result::Result<(bool, u64), ParseReason> {
    let (negative, body) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let (radix, digits) = if let Some(rest) = strip_radix_prefix(body, 'x') {
        (16, rest)
    } else if let Some(rest) = strip_radix_prefix(body, 'o') {
        (8, rest)
    } else if let Some(rest) = strip_radix_prefix(body, 'b') {
        (2, rest)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    // from_str_radix would accept a second sign, so check the digits first.
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ParseReason::Syntax);
    }
    // Only overflow is left once the digits are known to be valid.
    u64::from_str_radix(digits, radix)
        .map(|magnitude| (negative, magnitude))
        .map_err(|_| ParseReason::OutOfRange)
}

fn strip_radix_prefix(body: &str, marker: char) -> Option<&str> {
    let rest = body.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}

/// Parse an unsigned literal no larger than `max`. A minus sign on a nonzero
/// magnitude is a sign error, not a syntax error.
fn parse_unsigned(input: &str, target: &'static str, max: u64) -> Result<u64> {
    match parse_integer_literal(input) {
        Ok((true, magnitude)) if magnitude != 0 => Err(PickError::InvalidNumber {
            target,
            value: input.to_string(),
        }),
        Ok((_, magnitude)) if magnitude <= max => Ok(magnitude),
        Ok(_) => Err(parse_error(target, input, ParseReason::OutOfRange)),
        Err(reason) => Err(parse_error(target, input, reason)),
    }
}

/// Parse a signed literal that fits in `bits` bits.
fn parse_signed(input: &str, target: &'static str, bits: u32) -> Result<i64> {
    let min_magnitude = 1u64 << (bits - 1);
    match parse_integer_literal(input) {
        Ok((true, magnitude)) if magnitude <= min_magnitude => {
            Ok((magnitude as i64).wrapping_neg())
        }
        Ok((false, magnitude)) if magnitude < min_magnitude => Ok(magnitude as i64),
        Ok(_) => Err(parse_error(target, input, ParseReason::OutOfRange)),
        Err(reason) => Err(parse_error(target, input, reason)),
    }
}

// ============================================================================
// Floats
// ============================================================================

impl Coerce for f64 {
    const TARGET: &'static str = "f64";

    fn coerce(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Number(n) => Ok(*n),
            JsonValue::Bool(b) => Ok(f64::from(*b)),
            JsonValue::String(s) => parse_float(s, Self::TARGET),
            JsonValue::Null => Ok(0.0),
            other => Err(invalid_object(Self::TARGET, other)),
        }
    }
}

impl Coerce for f32 {
    const TARGET: &'static str = "f32";

    fn coerce(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Number(n) => Ok(*n as f32),
            JsonValue::Bool(b) => Ok(f32::from(*b)),
            JsonValue::String(s) => parse_float(s, Self::TARGET),
            JsonValue::Null => Ok(0.0),
            other => Err(invalid_object(Self::TARGET, other)),
        }
    }
}

/// Parse a float literal. A finite literal too large for the target (`1e40`
/// as `f32`) is out of range rather than infinity; `inf` itself is accepted.
fn parse_float<F>(input: &str, target: &'static str) -> Result<F>
where
    F: FromStr<Err = ParseFloatError> + Into<f64> + Copy,
{
    let parsed: F = input
        .parse()
        .map_err(|e: ParseFloatError| parse_error(target, input, e.into()))?;
    if parsed.into().is_infinite() && !spells_infinity(input) {
        return Err(parse_error(target, input, ParseReason::OutOfRange));
    }
    Ok(parsed)
}

fn spells_infinity(input: &str) -> bool {
    let body = input.strip_prefix(['+', '-']).unwrap_or(input);
    body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity")
}

// ============================================================================
// Strings and booleans
// ============================================================================

impl Coerce for String {
    const TARGET: &'static str = "string";

    fn coerce(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Number(n) => Ok(format_number(*n)),
            JsonValue::Bool(b) => Ok(b.to_string()),
            JsonValue::String(s) => Ok(s.clone()),
            other => Err(invalid_object(Self::TARGET, other)),
        }
    }
}

impl Coerce for bool {
    const TARGET: &'static str = "bool";

    fn coerce(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Bool(b) => Ok(*b),
            JsonValue::Null => Ok(false),
            JsonValue::String(s) => parse_bool(s)
                .ok_or_else(|| parse_error(Self::TARGET, s, ParseReason::Syntax)),
            other => Err(invalid_object(Self::TARGET, other)),
        }
    }
}

fn parse_bool(input: &str) -> Option<bool> {
    match input {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Decimal text for a number, never in exponent form.
///
/// Whole numbers print without a fractional part and `-0` prints as `0`.
pub(crate) fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let n = if n == 0.0 { 0.0 } else { n };
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        return (n as i64).to_string();
    }
    // f64's Display never switches to exponent notation.
    format!("{n}")
}

// ============================================================================
// Containers
// ============================================================================

impl Coerce for Vec<Resolved> {
    const TARGET: &'static str = "sequence";

    fn coerce(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Array(items) => Ok(items.iter().cloned().map(Resolved::new).collect()),
            other => Err(invalid_object(Self::TARGET, other)),
        }
    }
}

impl Coerce for BTreeMap<String, Resolved> {
    const TARGET: &'static str = "mapping";

    fn coerce(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(entries) => Ok(entries
                .iter()
                .map(|(k, v)| (k.clone(), Resolved::new(v.clone())))
                .collect()),
            other => Err(invalid_object(Self::TARGET, other)),
        }
    }
}
