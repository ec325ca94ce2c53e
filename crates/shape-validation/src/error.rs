// Error types for schema loading and data validation

use std::fmt;
use thiserror::Error;

/// Errors that can occur while building a [`Schema`](crate::Schema) from JSON
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema source is not valid JSON
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid schema structure
    #[error("Invalid schema structure: {message} (at {path})")]
    InvalidStructure { message: String, path: SchemaPath },

    /// A keyword holds a value of the wrong JSON kind
    #[error("Field '{field}' must be {expected} (at {path})")]
    InvalidField {
        field: String,
        expected: &'static str,
        path: SchemaPath,
    },

    /// A `pattern` keyword that does not compile
    #[error("Invalid regex pattern '{pattern}': {source} (at {path})")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
        path: SchemaPath,
    },
}

/// Result type for schema parsing operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Structured validation error kinds
///
/// Every kind renders to one fixed English sentence through
/// [`ValidationErrorKind::message`]. The extra fields are there for callers that
/// want to explain the failure in more detail than the sentence does.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ValidationErrorKind {
    /// `null` data against a schema that is not nullable
    NullNotAllowed,

    /// No branch of an `anyOf`/`oneOf` accepted the data
    NoSchemaMatched { branches: usize },

    /// More than one `oneOf` branch accepted the data
    MultipleSchemasMatched { matched: usize },

    /// Schema with no usable `type` and no combinator
    UnknownType { type_name: Option<String> },

    /// Data is not of the kind the schema describes
    TypeMismatch { expected: String, got: String },

    /// String longer than `maxLength`
    StringTooLong { length: usize, max_length: usize },

    /// String shorter than `minLength`
    StringTooShort { length: usize, min_length: usize },

    /// Scalar not listed in `enum`
    InvalidEnumValue { value: String },

    /// String doesn't match `pattern`
    StringPatternMismatch { value: String, pattern: String },

    /// String doesn't satisfy `format`
    InvalidFormat { value: String, format: String },

    /// Number above `maximum`
    NumberTooLarge { value: f64, maximum: f64 },

    /// Number below `minimum`
    NumberTooSmall { value: f64, minimum: f64 },

    /// Array shorter than `minItems`
    TooFewItems { length: usize, min_items: usize },

    /// Array longer than `maxItems`
    TooManyItems { length: usize, max_items: usize },

    /// No element equals the `contains` value
    MissingContainedValue { expected: serde_json::Value },

    /// Array element of the wrong kind for its item schema
    ItemTypeMismatch {
        index: usize,
        expected: String,
        got: String,
    },

    /// Array not equal to any array listed in `enum`
    ArrayNotInEnum,

    /// Array has duplicate elements
    ArrayItemsNotUnique,

    /// Object has fewer keys than `minProperties`
    TooFewProperties { count: usize, min_properties: usize },

    /// Object has more keys than `maxProperties`
    TooManyProperties { count: usize, max_properties: usize },

    /// Missing required property
    MissingRequiredProperty { property: String },

    /// Object has keys outside `properties` while `additionalProperties` is false
    AdditionalProperties { property: Option<String> },

    /// One or more declared properties failed validation
    InvalidProperties { properties: Vec<String> },
}

impl ValidationErrorKind {
    /// Get the error code for this error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationErrorKind::NullNotAllowed => "V-1-01",
            ValidationErrorKind::NoSchemaMatched { .. } => "V-1-02",
            ValidationErrorKind::MultipleSchemasMatched { .. } => "V-1-03",
            ValidationErrorKind::UnknownType { .. } => "V-1-04",
            ValidationErrorKind::TypeMismatch { .. } => "V-1-10",
            ValidationErrorKind::StringTooLong { .. }
            | ValidationErrorKind::StringTooShort { .. } => "V-1-11",
            ValidationErrorKind::InvalidEnumValue { .. } => "V-1-12",
            ValidationErrorKind::StringPatternMismatch { .. } => "V-1-13",
            ValidationErrorKind::InvalidFormat { .. } => "V-1-14",
            ValidationErrorKind::NumberTooLarge { .. }
            | ValidationErrorKind::NumberTooSmall { .. } => "V-1-15",
            ValidationErrorKind::TooFewItems { .. } | ValidationErrorKind::TooManyItems { .. } => {
                "V-1-16"
            }
            ValidationErrorKind::MissingContainedValue { .. } => "V-1-17",
            ValidationErrorKind::ItemTypeMismatch { .. } => "V-1-18",
            ValidationErrorKind::ArrayNotInEnum => "V-1-19",
            ValidationErrorKind::ArrayItemsNotUnique => "V-1-20",
            ValidationErrorKind::TooFewProperties { .. }
            | ValidationErrorKind::TooManyProperties { .. } => "V-1-21",
            ValidationErrorKind::MissingRequiredProperty { .. } => "V-1-22",
            ValidationErrorKind::AdditionalProperties { .. } => "V-1-23",
            ValidationErrorKind::InvalidProperties { .. } => "V-1-24",
        }
    }

    /// The fixed human-readable message for this error kind
    pub fn message(&self) -> &'static str {
        match self {
            ValidationErrorKind::NullNotAllowed => "Value is null, but nullable false",
            ValidationErrorKind::NoSchemaMatched { .. } => "None schemas are valid",
            ValidationErrorKind::MultipleSchemasMatched { .. } => {
                "More than one schema valid for this data"
            }
            ValidationErrorKind::UnknownType { .. } => "Unknown type",
            ValidationErrorKind::TypeMismatch { .. }
            | ValidationErrorKind::ItemTypeMismatch { .. }
            | ValidationErrorKind::InvalidProperties { .. } => "Type is incorrect",
            ValidationErrorKind::StringTooLong { .. } => "Too long string",
            ValidationErrorKind::StringTooShort { .. } => "Too short string",
            ValidationErrorKind::InvalidEnumValue { .. } => "The enum does not support value",
            ValidationErrorKind::StringPatternMismatch { .. } => "String does not match pattern",
            ValidationErrorKind::InvalidFormat { .. } => "Format of string is not valid",
            ValidationErrorKind::NumberTooLarge { .. } => "Value is greater than it can be",
            ValidationErrorKind::NumberTooSmall { .. } => "Value is less than it can be",
            ValidationErrorKind::TooFewItems { .. } => "Items count less than can be",
            ValidationErrorKind::TooManyItems { .. } => "Items count more than can be",
            ValidationErrorKind::MissingContainedValue { .. } => {
                "Must contain a value, but does not"
            }
            ValidationErrorKind::ArrayNotInEnum => {
                "The enum does not support one of array elements"
            }
            ValidationErrorKind::ArrayItemsNotUnique => "Elements of array not unique",
            ValidationErrorKind::TooFewProperties { .. } => "Too few properties in object",
            ValidationErrorKind::TooManyProperties { .. } => "Too many properties in object",
            ValidationErrorKind::MissingRequiredProperty { .. } => {
                "Property required, but value is undefined"
            }
            ValidationErrorKind::AdditionalProperties { .. } => {
                "An object can't have additional properties"
            }
        }
    }
}

/// Validation error with the location of the offending value
#[derive(Debug, Clone, PartialEq, Error, serde::Serialize)]
pub struct ValidationError {
    /// The structured error kind
    pub kind: ValidationErrorKind,
    /// Instance path where the error occurred (e.g., ["address", "city"])
    #[serde(serialize_with = "serialize_display")]
    pub instance_path: InstancePath,
    /// Schema path that failed (e.g., ["object", "properties", "address"])
    #[serde(serialize_with = "serialize_display")]
    pub schema_path: SchemaPath,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Validation error at {}: {}",
            self.instance_path,
            self.kind.message()
        )
    }
}

impl ValidationError {
    /// Create a new validation error with a structured kind
    pub fn new(kind: ValidationErrorKind, instance_path: InstancePath) -> Self {
        Self {
            kind,
            instance_path,
            schema_path: SchemaPath::new(),
        }
    }

    /// Get the human-readable message for this error
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    /// Set the schema path for this error
    pub fn with_schema_path(mut self, schema_path: SchemaPath) -> Self {
        self.schema_path = schema_path;
        self
    }
}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

/// Location of a value inside the validated data
///
/// Renders the way the value would be reached in a JSON accessor chain:
/// `(root)`, `address.city`, `tags[2]`, `rows[0][1].id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstancePath(Vec<PathSegment>);

impl InstancePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.0.push(segment);
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.0.pop()
    }
}

impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i > 0 => write!(f, ".{key}")?,
                PathSegment::Key(key) => f.write_str(key)?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Route through the schema tree to the checker that failed
///
/// Segments are kind names (`object`, `string`), keywords (`properties`,
/// `items`, `anyOf`), property names and branch indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaPath(Vec<String>);

impl SchemaPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.0.join(" > "))
        }
    }
}

/// One step into an object or array
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_path_display() {
        let mut path = InstancePath::new();
        assert_eq!(path.to_string(), "(root)");

        path.push(PathSegment::Key("address".to_string()));
        assert_eq!(path.to_string(), "address");

        path.push(PathSegment::Key("lines".to_string()));
        path.push(PathSegment::Index(0));
        path.push(PathSegment::Index(3));
        assert_eq!(path.to_string(), "address.lines[0][3]");

        path.pop();
        path.pop();
        path.push(PathSegment::Key("zip".to_string()));
        assert_eq!(path.to_string(), "address.lines.zip");
    }

    #[test]
    fn test_schema_path_display() {
        let mut path = SchemaPath::new();
        assert_eq!(path.to_string(), "(root)");

        path.push("object");
        path.push("properties");
        path.push("id");
        assert_eq!(path.to_string(), "object > properties > id");
    }

    #[test]
    fn test_validation_error_display() {
        let mut path = InstancePath::new();
        path.push(PathSegment::Key("age".to_string()));

        let error = ValidationError::new(
            ValidationErrorKind::NumberTooLarge {
                value: 150.0,
                maximum: 120.0,
            },
            path,
        );
        assert_eq!(error.message(), "Value is greater than it can be");
        assert_eq!(
            error.to_string(),
            "Validation error at age: Value is greater than it can be"
        );
        assert_eq!(error.error_code(), "V-1-15");
    }

    #[test]
    fn test_type_incorrect_is_shared_by_summary_kinds() {
        let kinds = [
            ValidationErrorKind::TypeMismatch {
                expected: "string".to_string(),
                got: "number".to_string(),
            },
            ValidationErrorKind::ItemTypeMismatch {
                index: 1,
                expected: "number".to_string(),
                got: "string".to_string(),
            },
            ValidationErrorKind::InvalidProperties {
                properties: vec!["id".to_string()],
            },
        ];
        for kind in kinds {
            assert_eq!(kind.message(), "Type is incorrect");
        }
    }

    #[test]
    fn test_validation_error_serializes_paths_as_text() {
        let mut path = InstancePath::new();
        path.push(PathSegment::Key("tags".to_string()));
        path.push(PathSegment::Index(2));
        let mut schema_path = SchemaPath::new();
        schema_path.push("array");

        let error = ValidationError::new(ValidationErrorKind::ArrayItemsNotUnique, path)
            .with_schema_path(schema_path);
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["instance_path"], "tags[2]");
        assert_eq!(json["schema_path"], "array");
        assert_eq!(json["kind"]["type"], "ArrayItemsNotUnique");
    }
}
