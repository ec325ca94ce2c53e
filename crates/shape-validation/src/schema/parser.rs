//! Schema parsing entry point
//!
//! A schema is a JSON object. Dispatch happens in this order:
//! - `anyOf`: any-of combinator (wins over `oneOf` when both are present)
//! - `oneOf`: exactly-one-of combinator
//! - `type`: one of `string`, `number`, `boolean`, `array`, `object`
//!
//! A schema with neither a combinator nor a recognised `type` still parses; it
//! becomes [`SchemaKind::Unknown`] and fails every value it is checked against.

use crate::error::{SchemaError, SchemaPath, SchemaResult};
use serde_json::Value;

use super::helpers::{get_bool, get_string};
use super::parsers::*;
use super::{Schema, SchemaKind};

/// Parse a Schema from a JSON value rooted at `path`.
pub(super) fn from_json(value: &Value, path: &SchemaPath) -> SchemaResult<Schema> {
    let map = value
        .as_object()
        .ok_or_else(|| SchemaError::InvalidStructure {
            message: format!("Expected schema object, got {}", value),
            path: path.clone(),
        })?;

    let nullable = get_bool(map, "nullable", path)?.unwrap_or(false);

    let kind = if map.contains_key("anyOf") {
        if map.contains_key("oneOf") {
            tracing::warn!(
                schema_path = %path,
                "Schema declares both anyOf and oneOf; oneOf is ignored"
            );
        }
        parse_anyof_schema(map, path)?
    } else if map.contains_key("oneOf") {
        parse_oneof_schema(map, path)?
    } else {
        match get_string(map, "type", path)?.as_deref() {
            Some("string") => parse_string_schema(map, path)?,
            Some("number") => parse_number_schema(map, path)?,
            Some("boolean") => SchemaKind::Boolean,
            Some("array") => parse_array_schema(map, path)?,
            Some("object") => parse_object_schema(map, path)?,
            other => SchemaKind::Unknown {
                type_name: other.map(str::to_string),
            },
        }
    };

    Ok(Schema { nullable, kind })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> SchemaResult<Schema> {
        from_json(&value, &SchemaPath::new())
    }

    #[test]
    fn test_nullable_defaults_to_false() {
        let schema = parse(json!({"type": "boolean"})).unwrap();
        assert!(!schema.nullable);
        assert_eq!(schema.kind, SchemaKind::Boolean);

        let schema = parse(json!({"type": "boolean", "nullable": true})).unwrap();
        assert!(schema.nullable);
    }

    #[test]
    fn test_unknown_and_missing_type() {
        let schema = parse(json!({"type": "integer"})).unwrap();
        assert_eq!(
            schema.kind,
            SchemaKind::Unknown {
                type_name: Some("integer".to_string())
            }
        );

        let schema = parse(json!({})).unwrap();
        assert_eq!(schema.kind, SchemaKind::Unknown { type_name: None });
    }

    #[test]
    fn test_non_string_type_is_schema_error() {
        assert!(matches!(
            parse(json!({"type": 5})),
            Err(SchemaError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_schema_must_be_object() {
        let err = parse(json!("string")).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidStructure { .. }));
    }

    #[test]
    fn test_any_of_wins_over_one_of() {
        let schema = parse(json!({
            "anyOf": [{"type": "string"}],
            "oneOf": [{"type": "number"}]
        }))
        .unwrap();
        assert!(matches!(schema.kind, SchemaKind::AnyOf(ref s) if s.len() == 1));
    }

    #[test]
    fn test_combinator_bypasses_type() {
        let schema = parse(json!({
            "type": "object",
            "oneOf": [{"type": "string"}, {"type": "number"}]
        }))
        .unwrap();
        assert!(matches!(schema.kind, SchemaKind::OneOf(ref s) if s.len() == 2));
    }
}
