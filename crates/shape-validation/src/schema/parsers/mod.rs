//! Schema parser modules
//!
//! This module contains the individual schema kind parsers, organized by
//! category:
//! - primitive: string and number
//! - combinators: anyOf, oneOf
//! - arrays: array schemas, including tuple `items`
//! - objects: object schemas

pub(super) mod arrays;
pub(super) mod combinators;
pub(super) mod objects;
pub(super) mod primitive;

// Re-export parser functions for use within the schema module
pub(super) use arrays::parse_array_schema;
pub(super) use combinators::{parse_anyof_schema, parse_oneof_schema};
pub(super) use objects::parse_object_schema;
pub(super) use primitive::{parse_number_schema, parse_string_schema};
