//! Schema types for JSON validation
//!
//! A [`Schema`] is a `nullable` flag plus a [`SchemaKind`]: the closed set of
//! things a schema node can describe. Schemas are usually parsed from JSON with
//! [`Schema::from_json`], but can also be assembled in code:
//!
//! ```
//! use shape_validation::{Schema, StringSchema};
//!
//! let schema = Schema::any_of(vec![
//!     StringSchema {
//!         max_length: Some(3),
//!         ..Default::default()
//!     }
//!     .into(),
//!     Schema::number(),
//! ])
//! .nullable();
//! assert!(schema.nullable);
//! ```

use crate::error::{SchemaPath, SchemaResult};
use crate::value::JsonKind;
use serde_json::Value;

// Internal modules
mod helpers;
mod parser;
mod parsers;
mod types;

// Public re-exports
pub use types::{
    ArraySchema, ItemsSchema, NumberSchema, ObjectSchema, Pattern, StringFormat, StringSchema,
};

/// A schema node
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// If true, a `null` data value is accepted regardless of `kind`
    pub nullable: bool,
    pub kind: SchemaKind,
}

/// The main schema enum representing all possible schema kinds
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    /// String type schema
    String(StringSchema),
    /// Number type schema (integer or float)
    Number(NumberSchema),
    /// Boolean type schema
    Boolean,
    /// Array type schema
    Array(ArraySchema),
    /// Object type schema
    Object(ObjectSchema),
    /// Validates if any subschema matches
    AnyOf(Vec<Schema>),
    /// Validates if exactly one subschema matches
    OneOf(Vec<Schema>),
    /// Missing or unrecognised `type` with no combinator; rejects every value
    Unknown { type_name: Option<String> },
}

impl SchemaKind {
    /// Get a human-readable name for this schema kind
    pub fn type_name(&self) -> &str {
        match self {
            SchemaKind::String(_) => "string",
            SchemaKind::Number(_) => "number",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Array(_) => "array",
            SchemaKind::Object(_) => "object",
            SchemaKind::AnyOf(_) => "anyOf",
            SchemaKind::OneOf(_) => "oneOf",
            SchemaKind::Unknown {
                type_name: Some(name),
            } => name,
            SchemaKind::Unknown { type_name: None } => "unknown",
        }
    }

    /// The data kind this schema's `type` demands of a value
    pub(crate) fn kind_check(&self) -> KindCheck {
        match self {
            SchemaKind::String(_) => KindCheck::Exactly(JsonKind::String),
            SchemaKind::Number(_) => KindCheck::Exactly(JsonKind::Number),
            SchemaKind::Boolean => KindCheck::Exactly(JsonKind::Boolean),
            SchemaKind::Array(_) => KindCheck::Exactly(JsonKind::Array),
            SchemaKind::Object(_) => KindCheck::Exactly(JsonKind::Object),
            SchemaKind::Unknown { type_name: Some(_) } => KindCheck::Unsatisfiable,
            SchemaKind::AnyOf(_) | SchemaKind::OneOf(_) | SchemaKind::Unknown { type_name: None } => {
                KindCheck::Unconstrained
            }
        }
    }
}

/// Shallow kind constraint derived from a schema's `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KindCheck {
    /// No `type` to check against (combinators, type-less schemas)
    Unconstrained,
    Exactly(JsonKind),
    /// A `type` name no data kind has
    Unsatisfiable,
}

impl Schema {
    /// Parse a Schema from a JSON value.
    ///
    /// # Example
    ///
    /// ```
    /// use shape_validation::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::from_json(&json!({"type": "number", "minimum": 0})).unwrap();
    /// assert_eq!(schema.kind.type_name(), "number");
    /// ```
    pub fn from_json(value: &Value) -> SchemaResult<Schema> {
        parser::from_json(value, &SchemaPath::new())
    }

    /// Parse a Schema from JSON source text.
    pub fn from_json_str(source: &str) -> SchemaResult<Schema> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_json(&value)
    }

    pub fn new(kind: SchemaKind) -> Self {
        Self {
            nullable: false,
            kind,
        }
    }

    pub fn string() -> Self {
        StringSchema::default().into()
    }

    pub fn number() -> Self {
        NumberSchema::default().into()
    }

    pub fn boolean() -> Self {
        Self::new(SchemaKind::Boolean)
    }

    pub fn array() -> Self {
        ArraySchema::default().into()
    }

    pub fn object() -> Self {
        ObjectSchema::default().into()
    }

    pub fn any_of(schemas: Vec<Schema>) -> Self {
        Self::new(SchemaKind::AnyOf(schemas))
    }

    pub fn one_of(schemas: Vec<Schema>) -> Self {
        Self::new(SchemaKind::OneOf(schemas))
    }

    /// Mark this schema as accepting `null`
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

impl TryFrom<&Value> for Schema {
    type Error = crate::error::SchemaError;

    fn try_from(value: &Value) -> SchemaResult<Self> {
        Schema::from_json(value)
    }
}

impl From<StringSchema> for Schema {
    fn from(schema: StringSchema) -> Self {
        Schema::new(SchemaKind::String(schema))
    }
}

impl From<NumberSchema> for Schema {
    fn from(schema: NumberSchema) -> Self {
        Schema::new(SchemaKind::Number(schema))
    }
}

impl From<ArraySchema> for Schema {
    fn from(schema: ArraySchema) -> Self {
        Schema::new(SchemaKind::Array(schema))
    }
}

impl From<ObjectSchema> for Schema {
    fn from(schema: ObjectSchema) -> Self {
        Schema::new(SchemaKind::Object(schema))
    }
}
