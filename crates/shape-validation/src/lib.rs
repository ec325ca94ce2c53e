// Structural validation of JSON values
//
// This crate checks a JSON value against a declarative, JSON-Schema-like
// schema (`type`, `nullable`, `anyOf`/`oneOf` and per-type constraint
// keywords) and reports a verdict plus an ordered log of error messages.

pub mod error;
pub mod options;
pub mod schema;
pub mod validator;
pub mod value;

pub use error::{
    InstancePath, PathSegment, SchemaError, SchemaPath, SchemaResult, ValidationError,
    ValidationErrorKind,
};
pub use options::{AdditionalPropertiesCheck, ItemValidation, ValidationOptions};
pub use schema::{
    ArraySchema, ItemsSchema, NumberSchema, ObjectSchema, Pattern, Schema, SchemaKind,
    StringFormat, StringSchema,
};
pub use validator::{
    ValidationContext, ValidationReport, Validator, validate, validate_with_options,
};
pub use value::{JsonKind, deep_equal};
