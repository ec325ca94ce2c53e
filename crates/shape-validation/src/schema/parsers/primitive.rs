//! Primitive type schema parsers
//!
//! This module contains parsers for the scalar schema kinds that carry
//! constraints:
//! - string (`minLength`, `maxLength`, `enum`, `pattern`, `format`)
//! - number (`minimum`, `maximum`, `enum`)
//!
//! `boolean` has no keywords of its own and is built directly by the parser.

use crate::error::{SchemaError, SchemaPath, SchemaResult};

use crate::schema::SchemaKind;
use crate::schema::helpers::{
    SchemaMap, get_number, get_number_array, get_string, get_string_array, get_usize,
};
use crate::schema::types::{NumberSchema, Pattern, StringFormat, StringSchema};

/// Parse a string schema
pub(in crate::schema) fn parse_string_schema(
    map: &SchemaMap,
    path: &SchemaPath,
) -> SchemaResult<SchemaKind> {
    let min_length = get_usize(map, "minLength", path)?;
    let max_length = get_usize(map, "maxLength", path)?;
    let enum_values = get_string_array(map, "enum", path)?;

    let pattern = match get_string(map, "pattern", path)? {
        Some(source) => Some(Pattern::new(source.as_str()).map_err(|e| {
            SchemaError::InvalidPattern {
                pattern: source,
                source: e,
                path: path.clone(),
            }
        })?),
        None => None,
    };

    let format = get_string(map, "format", path)?.map(|name| StringFormat::parse(&name));

    Ok(SchemaKind::String(StringSchema {
        min_length,
        max_length,
        enum_values,
        pattern,
        format,
    }))
}

/// Parse a number schema (integer or float)
pub(in crate::schema) fn parse_number_schema(
    map: &SchemaMap,
    path: &SchemaPath,
) -> SchemaResult<SchemaKind> {
    let minimum = get_number(map, "minimum", path)?;
    let maximum = get_number(map, "maximum", path)?;
    let enum_values = get_number_array(map, "enum", path)?;

    Ok(SchemaKind::Number(NumberSchema {
        minimum,
        maximum,
        enum_values,
    }))
}
