//! Combinator schema parsers
//!
//! This module handles parsing of schema combinators:
//! - anyOf: Validates if any subschema matches
//! - oneOf: Validates if exactly one subschema matches
//!
//! Both take an array of subschemas. A combinator node bypasses `type`
//! dispatch, so any `type` keyword next to it is ignored.

use crate::error::{SchemaError, SchemaPath, SchemaResult};

use crate::schema::helpers::{SchemaMap, child_path};
use crate::schema::parser::from_json;
use crate::schema::{Schema, SchemaKind};

fn parse_branches(map: &SchemaMap, key: &str, path: &SchemaPath) -> SchemaResult<Vec<Schema>> {
    let items = map
        .get(key)
        .and_then(|value| value.as_array())
        .ok_or_else(|| SchemaError::InvalidStructure {
            message: format!("Expected array for {}", key),
            path: path.clone(),
        })?;

    let branch_path = child_path(path, key);
    items
        .iter()
        .enumerate()
        .map(|(i, item)| from_json(item, &child_path(&branch_path, i.to_string())))
        .collect()
}

/// Parse an anyOf schema
pub(in crate::schema) fn parse_anyof_schema(
    map: &SchemaMap,
    path: &SchemaPath,
) -> SchemaResult<SchemaKind> {
    Ok(SchemaKind::AnyOf(parse_branches(map, "anyOf", path)?))
}

/// Parse a oneOf schema
pub(in crate::schema) fn parse_oneof_schema(
    map: &SchemaMap,
    path: &SchemaPath,
) -> SchemaResult<SchemaKind> {
    Ok(SchemaKind::OneOf(parse_branches(map, "oneOf", path)?))
}
