/// Coercion tests: the per-type rule table in strict and lenient form.
use jsonpick_core::{Coerce, JsonValue, ParseReason, PickError, Resolved, ValueKind};
use std::error::Error;
use std::collections::BTreeMap;

fn r(json: &str) -> Resolved {
    Resolved::new(serde_json::from_str(json).unwrap())
}

fn number(n: f64) -> Resolved {
    Resolved::new(JsonValue::Number(n))
}

fn string(s: &str) -> Resolved {
    Resolved::new(JsonValue::from(s))
}

// ============================================================================
// Unsigned integers
// ============================================================================

#[test]
fn bool_to_unsigned() {
    assert_eq!(r("true").to_u8_checked().unwrap(), 1);
    assert_eq!(r("false").to_u16_checked().unwrap(), 0);
    assert_eq!(r("true").to_u32_checked().unwrap(), 1);
    assert_eq!(r("true").to_u64_checked().unwrap(), 1);
}

#[test]
fn number_to_unsigned_truncates() {
    assert_eq!(r("42").to_u8_checked().unwrap(), 42);
    assert_eq!(r("42.9").to_u16_checked().unwrap(), 42);
    assert_eq!(r("0.5").to_u32_checked().unwrap(), 0);
    assert_eq!(r("4294967296").to_u64_checked().unwrap(), 4_294_967_296);
}

#[test]
fn number_to_unsigned_wraps_on_narrowing() {
    assert_eq!(r("300").to_u8_checked().unwrap(), 44);
    assert_eq!(r("65537").to_u16_checked().unwrap(), 1);
    assert_eq!(r("4294967297").to_u32_checked().unwrap(), 1);
}

#[test]
fn negative_number_to_unsigned_is_invalid_number() {
    for value in [number(-1.0), number(-0.5), number(-300.0)] {
        assert!(matches!(value.to_u8_checked(), Err(PickError::InvalidNumber { .. })));
        assert!(matches!(value.to_u16_checked(), Err(PickError::InvalidNumber { .. })));
        assert!(matches!(value.to_u32_checked(), Err(PickError::InvalidNumber { .. })));
        assert!(matches!(value.to_u64_checked(), Err(PickError::InvalidNumber { .. })));
        assert_eq!(value.to_u8(), 0);
        assert_eq!(value.to_u16(), 0);
        assert_eq!(value.to_u32(), 0);
        assert_eq!(value.to_u64(), 0);
    }
}

#[test]
fn negative_zero_to_unsigned_is_zero() {
    assert_eq!(number(-0.0).to_u8_checked().unwrap(), 0);
}

#[test]
fn string_to_unsigned() {
    assert_eq!(string("200").to_u8_checked().unwrap(), 200);
    assert_eq!(string("0xff").to_u8_checked().unwrap(), 255);
    assert_eq!(string("0b1010").to_u16_checked().unwrap(), 10);
    assert_eq!(string("0o777").to_u32_checked().unwrap(), 511);
    assert_eq!(string("010").to_u32_checked().unwrap(), 8);
    assert_eq!(string("+5").to_u64_checked().unwrap(), 5);
    assert_eq!(
        string("18446744073709551615").to_u64_checked().unwrap(),
        u64::MAX
    );
}

#[test]
fn negative_string_to_unsigned_is_invalid_number() {
    let err = string("-5").to_u8_checked().unwrap_err();
    assert!(matches!(err, PickError::InvalidNumber { target: "u8", .. }));
    assert!(err.is_coercion());
    assert_eq!(string("-5").to_u8(), 0);
}

#[test]
fn string_out_of_width_is_parse_error() {
    // Unlike numbers, strings are range-checked by the literal parser.
    let err = string("256").to_u8_checked().unwrap_err();
    assert!(matches!(
        err,
        PickError::Parse { target: "u8", ref input, reason: ParseReason::OutOfRange } if input == "256"
    ));
    assert_eq!(err.to_string(), r#"cannot parse "256" as u8: value out of range"#);
    assert_eq!(err.source().unwrap().to_string(), "value out of range");
    assert!(matches!(
        string("70000").to_u16_checked(),
        Err(PickError::Parse { reason: ParseReason::OutOfRange, .. })
    ));
    assert!(matches!(
        string("18446744073709551616").to_u64_checked(),
        Err(PickError::Parse { reason: ParseReason::OutOfRange, .. })
    ));
}

#[test]
fn malformed_integer_string_reports_syntax() {
    let err = string("zz").to_u8_checked().unwrap_err();
    assert!(matches!(err, PickError::Parse { reason: ParseReason::Syntax, .. }));
    assert_eq!(err.to_string(), r#"cannot parse "zz" as u8: invalid syntax"#);
    assert!(err.source().is_some());
    assert!(matches!(
        string("0x1g").to_i32_checked(),
        Err(PickError::Parse { reason: ParseReason::Syntax, .. })
    ));
}

#[test]
fn malformed_string_to_unsigned_is_parse_error() {
    for input in ["", "abc", "1.5", " 1", "1 ", "0x", "09"] {
        assert!(
            matches!(string(input).to_u32_checked(), Err(PickError::Parse { .. })),
            "input {input:?}"
        );
        assert_eq!(string(input).to_u32(), 0);
    }
}

// ============================================================================
// Signed integers
// ============================================================================

#[test]
fn number_to_signed() {
    assert_eq!(r("-7").to_i8_checked().unwrap(), -7);
    assert_eq!(r("-7.9").to_i16_checked().unwrap(), -7);
    assert_eq!(r("123456").to_i32_checked().unwrap(), 123_456);
    assert_eq!(r("-9007199254740993").to_i64_checked().unwrap(), -9_007_199_254_740_992);
    assert_eq!(r("-42").to_isize_checked().unwrap(), -42);
}

#[test]
fn number_to_signed_wraps_twos_complement() {
    assert_eq!(r("200").to_i8_checked().unwrap(), -56);
    assert_eq!(r("-129").to_i8_checked().unwrap(), 127);
    assert_eq!(r("32768").to_i16_checked().unwrap(), -32768);
    assert_eq!(r("4294967295").to_i32_checked().unwrap(), -1);
}

#[test]
fn bool_to_signed() {
    assert_eq!(r("true").to_i8_checked().unwrap(), 1);
    assert_eq!(r("false").to_i64_checked().unwrap(), 0);
    assert_eq!(r("true").to_isize_checked().unwrap(), 1);
}

#[test]
fn string_to_signed() {
    assert_eq!(string("-128").to_i8_checked().unwrap(), -128);
    assert_eq!(string("-0x10").to_i16_checked().unwrap(), -16);
    assert_eq!(string("0b11").to_i32_checked().unwrap(), 3);
    assert_eq!(string("-9223372036854775808").to_i64_checked().unwrap(), i64::MIN);
    assert_eq!(string("1111").to_isize_checked().unwrap(), 1111);
}

#[test]
fn string_out_of_signed_width_is_parse_error() {
    assert!(matches!(string("128").to_i8_checked(), Err(PickError::Parse { .. })));
    assert!(matches!(string("-32769").to_i16_checked(), Err(PickError::Parse { .. })));
    assert_eq!(string("128").to_i8(), 0);
}

// ============================================================================
// Floats
// ============================================================================

#[test]
fn number_to_float() {
    assert_eq!(r("3.25").to_f64_checked().unwrap(), 3.25);
    assert_eq!(r("-1.5").to_f32_checked().unwrap(), -1.5);
    assert_eq!(r("1e3").to_f64_checked().unwrap(), 1000.0);
}

#[test]
fn bool_and_string_to_float() {
    assert_eq!(r("true").to_f64_checked().unwrap(), 1.0);
    assert_eq!(r("false").to_f32_checked().unwrap(), 0.0);
    assert_eq!(string("2.5").to_f64_checked().unwrap(), 2.5);
    assert_eq!(string("-1e-2").to_f32_checked().unwrap(), -0.01);
    assert!(matches!(string("two").to_f64_checked(), Err(PickError::Parse { target: "f64", .. })));
    assert_eq!(string("two").to_f32(), 0.0);
}

#[test]
fn float_string_error_keeps_parser_cause() {
    let err = string("two").to_f64_checked().unwrap_err();
    assert!(matches!(err, PickError::Parse { reason: ParseReason::Float(_), .. }));
    let cause = err.source().unwrap().to_string();
    assert_eq!(cause, "two".parse::<f64>().unwrap_err().to_string());
    assert!(err.to_string().ends_with(&cause));
}

#[test]
fn float_string_beyond_target_range() {
    let err = string("1e40").to_f32_checked().unwrap_err();
    assert!(matches!(
        err,
        PickError::Parse { target: "f32", reason: ParseReason::OutOfRange, .. }
    ));
    assert_eq!(string("1e40").to_f32(), 0.0);
    assert_eq!(string("1e40").to_f64_checked().unwrap(), 1e40);
    assert!(matches!(
        string("1e400").to_f64_checked(),
        Err(PickError::Parse { reason: ParseReason::OutOfRange, .. })
    ));
}

#[test]
fn float_string_spelling_infinity() {
    assert_eq!(string("inf").to_f32_checked().unwrap(), f32::INFINITY);
    assert_eq!(string("-infinity").to_f64_checked().unwrap(), f64::NEG_INFINITY);
    assert_eq!(string("+Inf").to_f64_checked().unwrap(), f64::INFINITY);
}

// ============================================================================
// Null and container sources
// ============================================================================

#[test]
fn null_is_zero_for_numbers() {
    let null = r("null");
    assert_eq!(null.to_u8_checked().unwrap(), 0);
    assert_eq!(null.to_i64_checked().unwrap(), 0);
    assert_eq!(null.to_f64_checked().unwrap(), 0.0);
    assert!(!null.to_bool_checked().unwrap());
}

#[test]
fn containers_are_invalid_object_for_scalars() {
    for json in ["[1]", r#"{"a":1}"#] {
        let value = r(json);
        assert!(matches!(value.to_u8_checked(), Err(PickError::InvalidObject { .. })));
        assert!(matches!(value.to_i32_checked(), Err(PickError::InvalidObject { .. })));
        assert!(matches!(value.to_f64_checked(), Err(PickError::InvalidObject { .. })));
        assert!(matches!(value.to_string_checked(), Err(PickError::InvalidObject { .. })));
        assert!(matches!(value.to_bool_checked(), Err(PickError::InvalidObject { .. })));
        assert_eq!(value.to_i32(), 0);
        assert_eq!(value.to_string(), "");
        assert!(!value.to_bool());
    }
}

#[test]
fn invalid_object_reports_source_kind() {
    let err = r(r#"{"a":1}"#).to_u16_checked().unwrap_err();
    assert!(matches!(
        err,
        PickError::InvalidObject { target: "u16", kind: ValueKind::Object }
    ));
    assert_eq!(err.to_string(), "cannot convert mapping to u16");
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn number_to_string_has_no_exponent() {
    assert_eq!(r("10").to_string_checked().unwrap(), "10");
    assert_eq!(r("1.0").to_string_checked().unwrap(), "1");
    assert_eq!(r("-0.0").to_string_checked().unwrap(), "0");
    assert_eq!(r("0.125").to_string_checked().unwrap(), "0.125");
    assert_eq!(r("1e21").to_string_checked().unwrap(), "1000000000000000000000");
    assert_eq!(r("1e-7").to_string_checked().unwrap(), "0.0000001");
}

#[test]
fn bool_to_string() {
    assert_eq!(r("true").to_string_checked().unwrap(), "true");
    assert_eq!(r("false").to_string(), "false");
}

#[test]
fn string_to_string_is_identity() {
    let value = string("hello \"world\"");
    let once = value.to_string_checked().unwrap();
    let twice = Resolved::new(JsonValue::from(once.clone()))
        .to_string_checked()
        .unwrap();
    assert_eq!(once, "hello \"world\"");
    assert_eq!(once, twice);
}

#[test]
fn null_to_string_is_invalid_object() {
    assert!(matches!(r("null").to_string_checked(), Err(PickError::InvalidObject { .. })));
    assert_eq!(r("null").to_string(), "");
}

// ============================================================================
// Booleans
// ============================================================================

#[test]
fn string_to_bool_literal_family() {
    for s in ["1", "t", "T", "TRUE", "true", "True"] {
        assert!(string(s).to_bool_checked().unwrap(), "{s}");
    }
    for s in ["0", "f", "F", "FALSE", "false", "False"] {
        assert!(!string(s).to_bool_checked().unwrap(), "{s}");
    }
    assert!(matches!(string("yes").to_bool_checked(), Err(PickError::Parse { .. })));
    assert!(!string("yes").to_bool());
}

#[test]
fn number_to_bool_is_invalid_object() {
    assert!(matches!(r("1").to_bool_checked(), Err(PickError::InvalidObject { .. })));
}

// ============================================================================
// Sequences and mappings
// ============================================================================

#[test]
fn sequence_rewraps_elements() {
    let items = r(r#"[1,"two",null]"#).to_sequence_checked().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].to_u8_checked().unwrap(), 1);
    assert_eq!(items[1].value(), &JsonValue::from("two"));
    assert!(items[2].value().is_null());
}

#[test]
fn mapping_rewraps_values() {
    let map = r(r#"{"a":"1","b":[true]}"#).to_mapping_checked().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["a"].to_i32_checked().unwrap(), 1);
    assert_eq!(map["b"].kind(), ValueKind::Array);
}

#[test]
fn container_accessors_require_exact_kind() {
    assert!(matches!(r("{}").to_sequence_checked(), Err(PickError::InvalidObject { .. })));
    assert!(matches!(r("[]").to_mapping_checked(), Err(PickError::InvalidObject { .. })));
    assert!(matches!(r(r#""[]""#).to_sequence_checked(), Err(PickError::InvalidObject { .. })));
    assert!(r("null").to_sequence().is_empty());
    assert!(r("1").to_mapping().is_empty());
}

// ============================================================================
// Generic entry points
// ============================================================================

#[test]
fn generic_coerce_matches_named_accessors() {
    let value = string("0x7f");
    assert_eq!(value.coerce::<i8>().unwrap(), value.to_i8_checked().unwrap());
    assert_eq!(value.coerce_or_default::<u64>(), value.to_u64());
    assert_eq!(
        <u16 as Coerce>::coerce(value.value()).unwrap(),
        value.to_u16_checked().unwrap()
    );
}

#[test]
fn generic_coerce_into_containers() {
    let value = r(r#"{"k":[1,2]}"#);
    let map: BTreeMap<String, Resolved> = value.coerce().unwrap();
    let items: Vec<Resolved> = map["k"].coerce().unwrap();
    assert_eq!(items.len(), 2);
}

#[test]
fn one_resolved_supports_many_coercions() {
    let value = string("1");
    assert_eq!(value.to_u8_checked().unwrap(), 1);
    assert_eq!(value.to_f64_checked().unwrap(), 1.0);
    assert!(value.to_bool_checked().unwrap());
    assert_eq!(value.to_string_checked().unwrap(), "1");
}
