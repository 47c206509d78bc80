//! Tests for Display on Value - the stringification used by concatenation
//! and conditional comparison.

use crate::values::Value;

#[test]
fn test_display_str_is_verbatim() {
    assert_eq!(format!("{}", Value::from("hello \"world\"")), "hello \"world\"");
}

#[test]
fn test_display_integral_number() {
    assert_eq!(format!("{}", Value::Num(1.0)), "1");
    assert_eq!(format!("{}", Value::Num(-100.0)), "-100");
    assert_eq!(format!("{}", Value::Num(8080.0)), "8080");
}

#[test]
fn test_display_zero_has_no_sign() {
    assert_eq!(format!("{}", Value::Num(-0.0)), "0");
}

#[test]
fn test_display_fractional_number() {
    assert_eq!(format!("{}", Value::Num(3.14)), "3.14");
    assert_eq!(format!("{}", Value::Num(0.5)), "0.5");
}

#[test]
fn test_display_absent_is_empty() {
    assert_eq!(format!("{}", Value::Absent), "");
}

#[test]
fn test_display_list_quotes_strings() {
    let value = Value::list([Value::from("test1"), Value::from("test2")]);
    assert_eq!(format!("{}", value), r#"["test1", "test2"]"#);
}

#[test]
fn test_display_empty_collections() {
    assert_eq!(format!("{}", Value::List(vec![])), "[]");
    assert_eq!(format!("{}", Value::map::<&str>([])), "{}");
}

#[test]
fn test_display_map_sorted_by_key() {
    let value = Value::map([
        ("value", Value::from("test2")),
        ("key", Value::from("test1")),
    ]);
    assert_eq!(format!("{}", value), r#"{key = "test1", value = "test2"}"#);
}

#[test]
fn test_display_nested() {
    let value = Value::map([
        ("ports", Value::list([Value::Num(80.0), Value::Num(443.0)])),
        ("name", Value::from("a\"b")),
    ]);
    assert_eq!(
        format!("{}", value),
        r#"{name = "a\"b", ports = [80, 443]}"#
    );
}
