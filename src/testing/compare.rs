//! Response comparison
//!
//! Two pure predicates over JSON values: canonical-serialization equality
//! and recursive containment.

use serde_json::{Map, Number, Value};

/// Exact match: canonical serializations must be byte-identical
///
/// Canonical form is compact JSON with object keys sorted at every level,
/// so key order never matters but array order does. Integral floats are
/// written as integers, so `1.0` and `1` are the same.
pub fn exact_match(actual: &Value, expected: &Value) -> bool {
    canonical_string(actual) == canonical_string(expected)
}

/// Serialize a value with object keys sorted recursively
pub fn canonical_string(value: &Value) -> String {
    canonicalize(value).to_string()
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(fields) => {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();
            let sorted: Map<String, Value> = keys
                .into_iter()
                .map(|key| (key.clone(), canonicalize(&fields[key])))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        Value::Number(n) => Value::Number(canonical_number(n)),
        other => other.clone(),
    }
}

fn canonical_number(n: &Number) -> Number {
    let Some(f) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.clone();
    };
    if !f.is_finite() || f.fract() != 0.0 {
        return n.clone();
    }
    // 2^63 and 2^64 are exact as f64; the upper bounds are exclusive.
    if f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Number::from(f as i64)
    } else if f >= 0.0 && f < u64::MAX as f64 {
        Number::from(f as u64)
    } else {
        n.clone()
    }
}

/// Containment: every part of `expected` appears in `actual`
///
/// - scalars (and `null`) must be equal, including JSON type
/// - arrays match element-wise by index; `actual` may be longer
/// - objects need every expected key; extra keys in `actual` are ignored
pub fn contains_match(actual: &Value, expected: &Value) -> bool {
    match expected {
        Value::Array(expected_items) => match actual {
            Value::Array(actual_items) => {
                expected_items.iter().enumerate().all(|(i, item)| {
                    actual_items
                        .get(i)
                        .is_some_and(|actual_item| contains_match(actual_item, item))
                })
            }
            _ => false,
        },
        Value::Object(expected_fields) => match actual {
            Value::Object(actual_fields) => expected_fields.iter().all(|(key, value)| {
                actual_fields
                    .get(key)
                    .is_some_and(|actual_value| contains_match(actual_value, value))
            }),
            _ => false,
        },
        scalar => scalar_eq(actual, scalar),
    }
}

fn scalar_eq(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        (a, b) => a == b,
    }
}

/// Whether `data` counts as present for an `exists` check
///
/// `null`, `false`, `0`, and `""` count as missing; empty objects and arrays
/// do not.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn samples() -> Vec<Value> {
        vec![
            json!(null),
            json!(true),
            json!(0),
            json!(-3.5),
            json!("0xabc"),
            json!([]),
            json!({}),
            json!({"tokens": [{"id": "1", "decimals": 18}, {"id": "2"}]}),
            json!([[1, 2], {"nested": {"deep": [null]}}]),
        ]
    }

    #[test]
    fn test_exact_is_reflexive() {
        for value in samples() {
            assert!(exact_match(&value, &value), "{value}");
        }
    }

    #[test]
    fn test_exact_ignores_key_order() {
        let a: Value = serde_json::from_str(r#"{"a":1,"b":2}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b":2,"a":1}"#).unwrap();
        assert_eq!(canonical_string(&b), r#"{"a":1,"b":2}"#);
        assert!(exact_match(&a, &b));
    }

    #[test]
    fn test_exact_nested_key_order() {
        let a: Value = serde_json::from_str(r#"{"x":{"b":[{"d":1,"c":2}],"a":0}}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"x":{"a":0,"b":[{"c":2,"d":1}]}}"#).unwrap();
        assert!(exact_match(&a, &b));
    }

    #[test]
    fn test_exact_is_array_order_sensitive() {
        assert!(!exact_match(&json!([1, 2]), &json!([2, 1])));
    }

    #[test]
    fn test_exact_integral_floats_match_integers() {
        let expected: Value = serde_json::from_str(r#"{"count": 1.0}"#).unwrap();
        let actual: Value = serde_json::from_str(r#"{"count": 1}"#).unwrap();
        assert_eq!(canonical_string(&expected), r#"{"count":1}"#);
        assert!(exact_match(&actual, &expected));
        assert!(exact_match(&json!(-0.0), &json!(0)));
        assert!(exact_match(&json!(1e19), &json!(10_000_000_000_000_000_000u64)));
    }

    #[test]
    fn test_exact_keeps_fractional_numbers() {
        assert!(!exact_match(&json!(1.5), &json!(1)));
        assert!(exact_match(&json!(1.5), &json!(1.5)));
        assert_eq!(canonical_string(&json!(1e300)), json!(1e300).to_string());
    }

    #[test]
    fn test_exact_rejects_extra_fields() {
        assert!(!exact_match(
            &json!({"token": {"id": "1", "symbol": "ABC"}}),
            &json!({"token": {"id": "1"}})
        ));
    }

    #[test]
    fn test_contains_is_reflexive() {
        for value in samples() {
            assert!(contains_match(&value, &value), "{value}");
        }
    }

    #[test]
    fn test_empty_object_is_contained_in_any_object() {
        for actual in [json!({}), json!({"a": 1}), json!({"a": {"b": [1]}})] {
            assert!(contains_match(&actual, &json!({})), "{actual}");
        }
        assert!(!contains_match(&json!([]), &json!({})));
        assert!(!contains_match(&json!(null), &json!({})));
    }

    #[test]
    fn test_array_prefix() {
        assert!(contains_match(&json!([1, 2, 3]), &json!([1, 2])));
        assert!(!contains_match(&json!([1]), &json!([1, 2])));
        assert!(!contains_match(&json!([2, 1]), &json!([1, 2])));
        assert!(!contains_match(&json!({"0": 1}), &json!([1])));
    }

    #[test]
    fn test_nested_object_subset() {
        let actual = json!({"token": {"id": "1", "symbol": "ABC", "holders": [{"id": "a"}]}});
        assert!(contains_match(&actual, &json!({"token": {"id": "1"}})));
        assert!(contains_match(&actual, &json!({"token": {"holders": [{}]}})));
        assert!(!contains_match(&actual, &json!({"token": {"id": "2"}})));
        assert!(!contains_match(&actual, &json!({"pair": {}})));
    }

    #[test]
    fn test_scalars_are_type_strict() {
        assert!(!contains_match(&json!("1"), &json!(1)));
        assert!(!contains_match(&json!(0), &json!(false)));
        assert!(!contains_match(&json!({"a": 1}), &json!(1)));
        assert!(contains_match(&json!(1.0), &json!(1)));
    }

    #[test]
    fn test_null_expectation_requires_present_null() {
        assert!(contains_match(&json!({"owner": null}), &json!({"owner": null})));
        assert!(!contains_match(&json!({}), &json!({"owner": null})));
        assert!(!contains_match(&json!({"owner": "0x1"}), &json!({"owner": null})));
    }

    #[test]
    fn test_is_present() {
        assert!(!is_present(None));
        assert!(!is_present(Some(&json!(null))));
        assert!(!is_present(Some(&json!(false))));
        assert!(!is_present(Some(&json!(0))));
        assert!(!is_present(Some(&json!(""))));
        assert!(is_present(Some(&json!({}))));
        assert!(is_present(Some(&json!([]))));
        assert!(is_present(Some(&json!({"tokens": []}))));
    }
}
