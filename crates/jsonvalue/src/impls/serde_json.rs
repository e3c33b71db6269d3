use serde_json::{Number, Value};

use crate::JsonValue;

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Boolean(b),
            Value::Number(num) => from_number(&num),
            Value::String(s) => JsonValue::String(s),
            Value::Array(old) => JsonValue::Array(old.into_iter().map(JsonValue::from).collect()),
            Value::Object(old) => JsonValue::Object(
                old.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Boolean(*b),
            Value::Number(num) => from_number(num),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Array(old) => JsonValue::Array(old.iter().map(JsonValue::from).collect()),
            Value::Object(old) => JsonValue::Object(
                old.iter()
                    .map(|(k, v)| (k.clone(), JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Integers that fit into `i64` stay integers, everything else becomes a double.
#[inline]
fn from_number(num: &Number) -> JsonValue {
    if let Some(i) = num.as_i64() {
        JsonValue::Integer(i)
    } else {
        JsonValue::Double(num.as_f64().unwrap_or(f64::NAN))
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            // Non-finite doubles have no JSON representation
            JsonValue::Double(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            JsonValue::Integer(i) => Value::Number(i.into()),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Boolean(b) => Value::Bool(b),
            JsonValue::Null => Value::Null,
            JsonValue::Array(old) => Value::Array(old.into_iter().map(Value::from).collect()),
            JsonValue::Object(old) => Value::Object(
                old.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Boolean(r)) => l == r,
        (Value::Number(l), JsonValue::Integer(r)) => l.as_i64() == Some(*r),
        (Value::Number(l), JsonValue::Double(r)) => {
            l.as_i64().is_none() && l.as_f64().is_some_and(|l| l == *r)
        }
        (Value::String(l), JsonValue::String(r)) => l == r,
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (key, lv) in l {
                match r.get(key.as_str()) {
                    Some(rv) if eq(lv, rv) => continue,
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Map;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(null), JsonValue::Null; "null")]
    #[test_case(json!(true), JsonValue::Boolean(true); "bool")]
    #[test_case(json!(42u64), JsonValue::Integer(42); "positive number")]
    #[test_case(json!(-42), JsonValue::Integer(-42); "negative number")]
    #[test_case(json!(u64::MAX), JsonValue::Double(18_446_744_073_709_551_616.0); "unsigned overflow")]
    #[test_case(json!(2.5), JsonValue::Double(2.5); "float number")]
    #[test_case(json!(5.0), JsonValue::Double(5.0); "integral float")]
    #[test_case(
        json!("hello"),
        JsonValue::String("hello".into());
        "string"
    )]
    #[test_case(
        json!([1, 2, 3]),
        JsonValue::Array(vec![
            JsonValue::Integer(1),
            JsonValue::Integer(2),
            JsonValue::Integer(3),
        ]);
        "array"
    )]
    #[test_case(
        json!({
            "a": 1,
            "b": "test",
            "c": true
        }),
        JsonValue::Object(Map::from_iter([
            ("a".to_string(), JsonValue::Integer(1)),
            ("b".to_string(), JsonValue::String("test".into())),
            ("c".to_string(), JsonValue::Boolean(true)),
        ]));
        "object"
    )]
    fn test_json_conversion(value: Value, expected: JsonValue) {
        assert_eq!(JsonValue::from(&value), expected);
        assert_eq!(JsonValue::from(value), expected);
    }

    #[test_case(JsonValue::Double(f64::NAN); "nan")]
    #[test_case(JsonValue::Double(f64::INFINITY); "infinity")]
    fn non_finite_into_null(value: JsonValue) {
        assert_eq!(Value::from(value), Value::Null);
    }

    #[test]
    fn into_serde_json() {
        let value = JsonValue::from_iter([
            ("n", JsonValue::Integer(5)),
            ("x", JsonValue::Double(2.5)),
            ("arr", JsonValue::from_iter([JsonValue::Null, JsonValue::from("two")])),
        ]);
        assert_eq!(
            Value::from(value),
            json!({"n": 5, "x": 2.5, "arr": [null, "two"]})
        );
    }

    #[test_case(json!(null), JsonValue::Null; "null equals")]
    #[test_case(json!(true), JsonValue::Boolean(true); "bool equals")]
    #[test_case(json!(42), JsonValue::Integer(42); "integer equals")]
    #[test_case(json!(2.5), JsonValue::Double(2.5); "double equals")]
    #[test_case(json!(u64::MAX), JsonValue::Double(18_446_744_073_709_551_616.0); "wide integer equals double")]
    #[test_case(
        json!({
            "b": "test",
            "a": [1, null]
        }),
        JsonValue::from_iter([
            ("a", JsonValue::Array(vec![JsonValue::Integer(1), JsonValue::Null])),
            ("b", JsonValue::String("test".into())),
        ]);
        "object equals"
    )]
    fn test_comparison_eq(serde_value: Value, custom: JsonValue) {
        assert_eq!(serde_value, custom);
        assert_eq!(custom, serde_value);
    }

    #[test_case(json!(null), JsonValue::Boolean(false); "null != bool")]
    #[test_case(json!(5), JsonValue::Double(5.0); "integer != double")]
    #[test_case(json!(5.0), JsonValue::Integer(5); "double != integer")]
    #[test_case(json!("5"), JsonValue::Integer(5); "string != integer")]
    #[test_case(json!([1, 2]), JsonValue::Array(vec![JsonValue::Integer(1)]); "different lengths")]
    #[test_case(
        json!({"a": 1}),
        JsonValue::from_iter([("b", JsonValue::Integer(1))]);
        "different keys"
    )]
    #[test_case(
        json!({"a": 1}),
        JsonValue::from_iter([("a", JsonValue::Integer(2))]);
        "different values"
    )]
    fn test_comparison_neq(serde_value: Value, custom: JsonValue) {
        assert_ne!(serde_value, custom);
        assert_ne!(custom, serde_value);
    }
}
