//! Array schema parser
//!
//! This module handles parsing of array schemas which validate array values.
//! Arrays can have:
//! - items: one schema for every element, or an array of per-index schemas
//! - minItems/maxItems: Length constraints
//! - contains: A literal value that must appear in the array
//! - enum: Whole arrays the value may be equal to
//! - uniqueItems: Whether elements must be unique

use crate::error::{SchemaError, SchemaPath, SchemaResult};
use serde_json::Value;

use crate::schema::SchemaKind;
use crate::schema::helpers::{SchemaMap, child_path, get_array, get_bool, get_usize};
use crate::schema::parser::from_json;
use crate::schema::types::{ArraySchema, ItemsSchema};

/// Parse an array schema
///
/// Format:
/// ```json
/// {
///   "type": "array",
///   "items": {"type": "number"},
///   "minItems": 1,
///   "maxItems": 10,
///   "contains": 3,
///   "uniqueItems": true
/// }
/// ```
pub(in crate::schema) fn parse_array_schema(
    map: &SchemaMap,
    path: &SchemaPath,
) -> SchemaResult<SchemaKind> {
    let min_items = get_usize(map, "minItems", path)?;
    let max_items = get_usize(map, "maxItems", path)?;
    let contains = map.get("contains").cloned();
    let unique_items = get_bool(map, "uniqueItems", path)?.unwrap_or(false);

    let items = match map.get("items") {
        Some(items) => Some(parse_items(items, &child_path(path, "items"))?),
        None => None,
    };

    let enum_values = match get_array(map, "enum", path)? {
        Some(values) => {
            let arrays: SchemaResult<Vec<_>> = values
                .iter()
                .map(|value| {
                    value
                        .as_array()
                        .cloned()
                        .ok_or_else(|| SchemaError::InvalidField {
                            field: "enum".to_string(),
                            expected: "an array of arrays",
                            path: path.clone(),
                        })
                })
                .collect();
            Some(arrays?)
        }
        None => None,
    };

    Ok(SchemaKind::Array(ArraySchema {
        min_items,
        max_items,
        contains,
        items,
        enum_values,
        unique_items,
    }))
}

/// Parse the `items` keyword: a single schema object or a tuple of schemas
fn parse_items(items: &Value, path: &SchemaPath) -> SchemaResult<ItemsSchema> {
    match items {
        Value::Array(schemas) => {
            let result: SchemaResult<Vec<_>> = schemas
                .iter()
                .enumerate()
                .map(|(i, schema)| from_json(schema, &child_path(path, i.to_string())))
                .collect();
            Ok(ItemsSchema::Tuple(result?))
        }
        Value::Object(_) => Ok(ItemsSchema::Single(Box::new(from_json(items, path)?))),
        _ => Err(SchemaError::InvalidStructure {
            message: "items must be a schema or an array of schemas".to_string(),
            path: path.clone(),
        }),
    }
}
