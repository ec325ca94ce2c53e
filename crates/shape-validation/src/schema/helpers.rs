//! Helper functions for parsing JSON schemas
//!
//! This module contains utility functions for extracting typed keyword values
//! from a schema object, with proper error handling.

use crate::error::{SchemaError, SchemaPath, SchemaResult};
use serde_json::{Map, Value};

pub(super) type SchemaMap = Map<String, Value>;

fn invalid_field(key: &str, expected: &'static str, path: &SchemaPath) -> SchemaError {
    SchemaError::InvalidField {
        field: key.to_string(),
        expected,
        path: path.clone(),
    }
}

/// Extend a schema path by one segment
pub(super) fn child_path(path: &SchemaPath, segment: impl Into<String>) -> SchemaPath {
    let mut child = path.clone();
    child.push(segment);
    child
}

/// Get a string value by key
pub(super) fn get_string(
    map: &SchemaMap,
    key: &str,
    path: &SchemaPath,
) -> SchemaResult<Option<String>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(invalid_field(key, "a string", path)),
    }
}

/// Get a number value by key
pub(super) fn get_number(map: &SchemaMap, key: &str, path: &SchemaPath) -> SchemaResult<Option<f64>> {
    match map.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| invalid_field(key, "a number", path)),
    }
}

/// Get a usize value by key
pub(super) fn get_usize(map: &SchemaMap, key: &str, path: &SchemaPath) -> SchemaResult<Option<usize>> {
    match map.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| invalid_field(key, "a non-negative integer", path)),
    }
}

/// Get a boolean value by key
pub(super) fn get_bool(map: &SchemaMap, key: &str, path: &SchemaPath) -> SchemaResult<Option<bool>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(invalid_field(key, "a boolean", path)),
    }
}

/// Get an array value by key
pub(super) fn get_array<'a>(
    map: &'a SchemaMap,
    key: &str,
    path: &SchemaPath,
) -> SchemaResult<Option<&'a Vec<Value>>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(_) => Err(invalid_field(key, "an array", path)),
    }
}

/// Get an array of strings by key
pub(super) fn get_string_array(
    map: &SchemaMap,
    key: &str,
    path: &SchemaPath,
) -> SchemaResult<Option<Vec<String>>> {
    let Some(items) = get_array(map, key, path)? else {
        return Ok(None);
    };

    let result: SchemaResult<Vec<_>> = items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid_field(key, "an array of strings", path))
        })
        .collect();
    result.map(Some)
}

/// Get an array of numbers by key
pub(super) fn get_number_array(
    map: &SchemaMap,
    key: &str,
    path: &SchemaPath,
) -> SchemaResult<Option<Vec<f64>>> {
    let Some(items) = get_array(map, key, path)? else {
        return Ok(None);
    };

    let result: SchemaResult<Vec<_>> = items
        .iter()
        .map(|item| {
            item.as_f64()
                .ok_or_else(|| invalid_field(key, "an array of numbers", path))
        })
        .collect();
    result.map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> SchemaMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_get_usize() {
        let path = SchemaPath::new();
        let m = map(json!({"minLength": 3, "maxLength": -1, "minItems": 1.5}));
        assert_eq!(get_usize(&m, "minLength", &path).unwrap(), Some(3));
        assert_eq!(get_usize(&m, "absent", &path).unwrap(), None);
        assert!(get_usize(&m, "maxLength", &path).is_err());
        assert!(get_usize(&m, "minItems", &path).is_err());
    }

    #[test]
    fn test_get_number_accepts_integers_and_floats() {
        let path = SchemaPath::new();
        let m = map(json!({"minimum": 0, "maximum": 10.5, "bad": "10"}));
        assert_eq!(get_number(&m, "minimum", &path).unwrap(), Some(0.0));
        assert_eq!(get_number(&m, "maximum", &path).unwrap(), Some(10.5));
        assert!(get_number(&m, "bad", &path).is_err());
    }

    #[test]
    fn test_get_string_array_rejects_mixed_items() {
        let path = SchemaPath::new();
        let m = map(json!({"required": ["id", "name"], "enum": ["a", 1]}));
        assert_eq!(
            get_string_array(&m, "required", &path).unwrap(),
            Some(vec!["id".to_string(), "name".to_string()])
        );
        let err = get_string_array(&m, "enum", &path).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field 'enum' must be an array of strings (at (root))"
        );
    }

    #[test]
    fn test_child_path() {
        let mut path = SchemaPath::new();
        path.push("object");
        let child = child_path(&path, "properties");
        assert_eq!(child.to_string(), "object > properties");
        assert_eq!(path.to_string(), "object");
    }
}
