//! JSON value helpers shared by the checkers
//!
//! - [`JsonKind`]: the primitive kind of a data value, used for type checks and
//!   error reporting
//! - [`deep_equal`]: structural equality used by `contains`, array `enum` and
//!   `uniqueItems`

use serde_json::Value;
use std::fmt;

/// Primitive kind of a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a data value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type name of a possibly-missing value, for error messages
pub(crate) fn kind_name(value: Option<&Value>) -> &'static str {
    value.map_or("undefined", |v| JsonKind::of(v).name())
}

/// Structural equality of two data values.
///
/// Numbers compare by numeric value, so `1` equals `1.0`, but values of
/// different kinds never compare equal (`1` is not `"1"`). Objects compare by
/// key set and per-key value, ignoring key order.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
                return x == y;
            }
            if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
                return x == y;
            }
            match (x.as_f64(), y.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            }
        }
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, x)| y.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}

/// Count the elements of `items` that are distinct under [`deep_equal`]
pub(crate) fn distinct_count(items: &[Value]) -> usize {
    let mut distinct: Vec<&Value> = Vec::with_capacity(items.len());
    for item in items {
        if !distinct.iter().any(|seen| deep_equal(seen, item)) {
            distinct.push(item);
        }
    }
    distinct.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Boolean);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
        assert_eq!(kind_name(None), "undefined");
    }

    #[test]
    fn test_deep_equal_numbers() {
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(deep_equal(&json!(-3), &json!(-3)));
        assert!(!deep_equal(&json!(1), &json!(2)));
        assert!(!deep_equal(&json!(1), &json!("1")));
        assert!(deep_equal(&json!(u64::MAX), &json!(u64::MAX)));
    }

    #[test]
    fn test_deep_equal_nested() {
        assert!(deep_equal(
            &json!({"a": [1, {"b": null}], "c": "d"}),
            &json!({"c": "d", "a": [1, {"b": null}]})
        ));
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
    }

    #[test]
    fn test_distinct_count() {
        assert_eq!(distinct_count(&[json!(1), json!(2), json!(2)]), 2);
        assert_eq!(distinct_count(&[json!(1), json!("1")]), 2);
        assert_eq!(distinct_count(&[json!({"a": 1}), json!({"a": 1.0})]), 1);
        assert_eq!(distinct_count(&[]), 0);
    }
}
