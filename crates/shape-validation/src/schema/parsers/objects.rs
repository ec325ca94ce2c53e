//! Object schema parser
//!
//! This module handles parsing of object schemas which validate mapping values.
//! Objects can have:
//! - properties: Declared property schemas, kept in declaration order
//! - required: Keys that must be present
//! - additionalProperties: `false` forbids undeclared keys
//! - minProperties/maxProperties: Key count constraints

use crate::error::{SchemaError, SchemaPath, SchemaResult};
use indexmap::IndexMap;

use crate::schema::SchemaKind;
use crate::schema::helpers::{SchemaMap, child_path, get_bool, get_string_array, get_usize};
use crate::schema::parser::from_json;
use crate::schema::types::ObjectSchema;

/// Parse an object schema
///
/// Format:
/// ```json
/// {
///   "type": "object",
///   "properties": {"id": {"type": "number"}},
///   "required": ["id"],
///   "additionalProperties": false,
///   "minProperties": 1
/// }
/// ```
pub(in crate::schema) fn parse_object_schema(
    map: &SchemaMap,
    path: &SchemaPath,
) -> SchemaResult<SchemaKind> {
    let min_properties = get_usize(map, "minProperties", path)?;
    let max_properties = get_usize(map, "maxProperties", path)?;
    let required = get_string_array(map, "required", path)?;
    let additional_properties = get_bool(map, "additionalProperties", path)?;

    let properties = match map.get("properties") {
        Some(value) => {
            let entries = value
                .as_object()
                .ok_or_else(|| SchemaError::InvalidField {
                    field: "properties".to_string(),
                    expected: "an object",
                    path: path.clone(),
                })?;

            let properties_path = child_path(path, "properties");
            let mut properties = IndexMap::with_capacity(entries.len());
            for (key, schema) in entries {
                let schema = from_json(schema, &child_path(&properties_path, key.as_str()))?;
                properties.insert(key.clone(), schema);
            }
            Some(properties)
        }
        None => None,
    };

    Ok(SchemaKind::Object(ObjectSchema {
        min_properties,
        max_properties,
        required,
        properties,
        additional_properties,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use serde_json::{Value, json};

    fn parse(value: Value) -> SchemaResult<SchemaKind> {
        match value {
            Value::Object(map) => parse_object_schema(&map, &SchemaPath::new()),
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_object_schema_keywords() {
        let kind = parse(json!({
            "type": "object",
            "minProperties": 1,
            "maxProperties": 3,
            "required": ["id"],
            "properties": {"id": {"type": "number"}},
            "additionalProperties": false
        }))
        .unwrap();

        if let SchemaKind::Object(o) = kind {
            assert_eq!(o.min_properties, Some(1));
            assert_eq!(o.max_properties, Some(3));
            assert_eq!(o.required, Some(vec!["id".to_string()]));
            assert!(o.is_closed());
            let properties = o.properties.unwrap();
            assert_eq!(properties.get("id"), Some(&Schema::number()));
        } else {
            panic!("Expected Object schema");
        }
    }

    #[test]
    fn test_properties_keep_declaration_order() {
        let kind = parse(json!({
            "type": "object",
            "properties": {
                "zeta": {"type": "string"},
                "alpha": {"type": "string"},
                "mid": {"type": "string"}
            }
        }))
        .unwrap();

        if let SchemaKind::Object(o) = kind {
            let keys: Vec<_> = o.properties.as_ref().unwrap().keys().cloned().collect();
            assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
            assert!(!o.is_closed());
        } else {
            panic!("Expected Object schema");
        }
    }

    #[test]
    fn test_nested_property_error_has_path() {
        let err = parse(json!({
            "type": "object",
            "properties": {"age": {"type": "number", "minimum": "zero"}}
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field 'minimum' must be a number (at properties > age)"
        );
    }

    #[test]
    fn test_additional_properties_must_be_boolean() {
        let err = parse(json!({"type": "object", "additionalProperties": {}})).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidField { ref field, .. } if field == "additionalProperties"));
    }
}
