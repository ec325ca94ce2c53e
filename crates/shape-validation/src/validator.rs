// JSON validation engine

use crate::error::{InstancePath, PathSegment, SchemaPath, ValidationError, ValidationErrorKind};
use crate::options::{AdditionalPropertiesCheck, ItemValidation, ValidationOptions};
use crate::schema::{
    ArraySchema, ItemsSchema, KindCheck, NumberSchema, ObjectSchema, Schema, SchemaKind,
    StringFormat, StringSchema,
};
use crate::value::{JsonKind, deep_equal, distinct_count, kind_name};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fmt;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));
static PARTIAL_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})(?:-(\d{2}))?$").expect("partial date pattern is a valid regex")
});

const LOCAL_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OFFSET_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// Validates a JSON value against a schema with default options
pub fn validate(schema: &Schema, data: &Value) -> ValidationReport {
    validate_with_options(schema, data, &ValidationOptions::default())
}

/// Validates a JSON value against a schema
pub fn validate_with_options(
    schema: &Schema,
    data: &Value,
    options: &ValidationOptions,
) -> ValidationReport {
    let mut context = ValidationContext::new(options);
    let valid = context.validate(schema, data);
    ValidationReport {
        valid,
        errors: context.into_errors(),
    }
}

/// Verdict and error log of one validation
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The error messages, in the order they were logged
    pub fn messages(&self) -> Vec<&'static str> {
        self.errors.iter().map(ValidationError::message).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return write!(f, "valid");
        }
        write!(f, "invalid")?;
        for error in &self.errors {
            write!(f, "\n  [{}] {}", error.error_code(), error)?;
        }
        Ok(())
    }
}

/// A reusable validator that owns its error log.
///
/// Errors accumulate across calls to [`Validator::is_valid`] until
/// [`Validator::reset`] or [`Validator::take_errors`] clears them.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
    errors: Vec<ValidationError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        Self {
            options,
            errors: Vec::new(),
        }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Check `data` against `schema`, appending any violations to the log
    pub fn is_valid(&mut self, schema: &Schema, data: &Value) -> bool {
        let errors = std::mem::take(&mut self.errors);
        let mut context = ValidationContext::with_errors(&self.options, errors);
        let valid = context.validate(schema, data);
        self.errors = context.into_errors();
        valid
    }

    /// Get the accumulated errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The accumulated error messages, in the order they were logged
    pub fn messages(&self) -> Vec<&'static str> {
        self.errors.iter().map(ValidationError::message).collect()
    }

    /// Drain the error log
    pub fn take_errors(&mut self) -> Vec<ValidationError> {
        std::mem::take(&mut self.errors)
    }

    /// Clear the error log
    pub fn reset(&mut self) {
        self.errors.clear();
    }

    /// Snapshot of the log. Valid when nothing failed since the last reset.
    pub fn report(&self) -> ValidationReport {
        ValidationReport {
            valid: self.errors.is_empty(),
            errors: self.errors.clone(),
        }
    }
}

/// Validation context tracks state during validation
pub struct ValidationContext<'a> {
    options: &'a ValidationOptions,
    /// Current instance path (e.g., ["address", "city"])
    instance_path: InstancePath,
    /// Current schema path (e.g., ["object", "properties", "address"])
    schema_path: SchemaPath,
    /// Collected validation errors
    errors: Vec<ValidationError>,
}

impl<'a> ValidationContext<'a> {
    /// Create a new validation context
    pub fn new(options: &'a ValidationOptions) -> Self {
        Self::with_errors(options, Vec::new())
    }

    /// Create a validation context that appends to an existing error log
    pub fn with_errors(options: &'a ValidationOptions, errors: Vec<ValidationError>) -> Self {
        Self {
            options,
            instance_path: InstancePath::new(),
            schema_path: SchemaPath::new(),
            errors,
        }
    }

    /// Validate `data` against `schema`, returning the verdict
    pub fn validate(&mut self, schema: &Schema, data: &Value) -> bool {
        let error_count = self.errors.len();
        let valid = validate_generic(Some(data), schema, self);
        tracing::debug!(
            valid,
            errors = self.errors.len() - error_count,
            schema_type = schema.kind.type_name(),
            "Validated value"
        );
        valid
    }

    /// Add an error to the context
    fn add_error(&mut self, kind: ValidationErrorKind) {
        let error = ValidationError::new(kind, self.instance_path.clone())
            .with_schema_path(self.schema_path.clone());
        self.errors.push(error);
    }

    /// Execute a function with a new instance path segment
    fn with_instance_path<F, R>(&mut self, segment: PathSegment, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.instance_path.push(segment);
        let result = f(self);
        self.instance_path.pop();
        result
    }

    /// Execute a function with a new schema path segment
    fn with_schema_path<F, R>(&mut self, segment: impl Into<String>, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.schema_path.push(segment);
        let result = f(self);
        self.schema_path.pop();
        result
    }

    /// Get the collected errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Check if validation failed
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Main validation dispatcher
///
/// `None` stands for a missing object property. It is not `null`: the null
/// short-circuit does not apply and every type checker rejects it.
fn validate_generic(value: Option<&Value>, schema: &Schema, context: &mut ValidationContext) -> bool {
    if let Some(Value::Null) = value {
        if schema.nullable {
            return true;
        }
        context.add_error(ValidationErrorKind::NullNotAllowed);
        return false;
    }

    match &schema.kind {
        SchemaKind::AnyOf(branches) => {
            context.with_schema_path("anyOf", |ctx| validate_any_of(value, branches, ctx))
        }
        SchemaKind::OneOf(branches) => {
            context.with_schema_path("oneOf", |ctx| validate_one_of(value, branches, ctx))
        }
        SchemaKind::String(s) => {
            context.with_schema_path("string", |ctx| validate_string(value, s, ctx))
        }
        SchemaKind::Number(s) => {
            context.with_schema_path("number", |ctx| validate_number(value, s, ctx))
        }
        SchemaKind::Boolean => context.with_schema_path("boolean", |ctx| validate_boolean(value, ctx)),
        SchemaKind::Array(s) => context.with_schema_path("array", |ctx| validate_array(value, s, ctx)),
        SchemaKind::Object(s) => {
            context.with_schema_path("object", |ctx| validate_object(value, s, ctx))
        }
        SchemaKind::Unknown { type_name } => {
            context.add_error(ValidationErrorKind::UnknownType {
                type_name: type_name.clone(),
            });
            false
        }
    }
}

/// Count the branches that accept `value`.
///
/// Errors logged by the branches are discarded: they can't be attributed to
/// the branch the caller meant, so only the count is kept.
fn count_matching_branches(
    value: Option<&Value>,
    branches: &[Schema],
    context: &mut ValidationContext,
) -> usize {
    let original_error_count = context.errors.len();

    let mut matched = 0;
    for (i, branch) in branches.iter().enumerate() {
        if context.with_schema_path(i.to_string(), |ctx| validate_generic(value, branch, ctx)) {
            matched += 1;
        }
    }

    context.errors.truncate(original_error_count);
    tracing::trace!(
        schema_path = %context.schema_path,
        branches = branches.len(),
        matched,
        "Evaluated combinator branches"
    );
    matched
}

/// Validate anyOf (at least one schema must match)
fn validate_any_of(value: Option<&Value>, branches: &[Schema], context: &mut ValidationContext) -> bool {
    if count_matching_branches(value, branches, context) > 0 {
        return true;
    }
    context.add_error(ValidationErrorKind::NoSchemaMatched {
        branches: branches.len(),
    });
    false
}

/// Validate oneOf (exactly one schema must match)
fn validate_one_of(value: Option<&Value>, branches: &[Schema], context: &mut ValidationContext) -> bool {
    match count_matching_branches(value, branches, context) {
        1 => true,
        0 => {
            context.add_error(ValidationErrorKind::NoSchemaMatched {
                branches: branches.len(),
            });
            false
        }
        matched => {
            context.add_error(ValidationErrorKind::MultipleSchemasMatched { matched });
            false
        }
    }
}

fn type_mismatch(expected: &str, value: Option<&Value>, context: &mut ValidationContext) -> bool {
    context.add_error(ValidationErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: kind_name(value).to_string(),
    });
    false
}

/// Validate a string value
fn validate_string(
    value: Option<&Value>,
    schema: &StringSchema,
    context: &mut ValidationContext,
) -> bool {
    let Some(Value::String(s)) = value else {
        return type_mismatch("string", value, context);
    };
    let length = s.chars().count();

    if let Some(max_length) = schema.max_length
        && length > max_length
    {
        context.add_error(ValidationErrorKind::StringTooLong { length, max_length });
        return false;
    }

    if let Some(min_length) = schema.min_length
        && length < min_length
    {
        context.add_error(ValidationErrorKind::StringTooShort { length, min_length });
        return false;
    }

    if let Some(allowed) = &schema.enum_values
        && !allowed.iter().any(|candidate| candidate == s)
    {
        context.add_error(ValidationErrorKind::InvalidEnumValue { value: s.clone() });
        return false;
    }

    if let Some(pattern) = &schema.pattern
        && !pattern.is_match(s)
    {
        context.add_error(ValidationErrorKind::StringPatternMismatch {
            value: s.clone(),
            pattern: pattern.as_str().to_string(),
        });
        return false;
    }

    if let Some(format) = &schema.format
        && !matches_format(format, s)
    {
        context.add_error(ValidationErrorKind::InvalidFormat {
            value: s.clone(),
            format: format.name().to_string(),
        });
        return false;
    }

    true
}

fn matches_format(format: &StringFormat, s: &str) -> bool {
    match format {
        StringFormat::Email => EMAIL_RE.is_match(s),
        StringFormat::Date => is_calendar_date(s),
        StringFormat::Other(name) => {
            tracing::trace!(format = %name, "No check for string format");
            true
        }
    }
}

/// Accepts the ISO 8601 date forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and
/// date-times with minute or second precision, either local or with a `Z` or
/// `±HH:MM` offset
fn is_calendar_date(s: &str) -> bool {
    if let Some(caps) = PARTIAL_DATE_RE.captures(s) {
        let month = caps.get(2).map_or("01", |m| m.as_str());
        let first_day = format!("{}-{month}-01", &caps[1]);
        return NaiveDate::parse_from_str(&first_day, "%Y-%m-%d").is_ok();
    }
    if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() || DateTime::parse_from_rfc3339(s).is_ok() {
        return true;
    }

    let local = s.strip_suffix('Z').unwrap_or(s);
    LOCAL_DATE_TIME_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(local, format).is_ok())
        || OFFSET_DATE_TIME_FORMATS
            .iter()
            .any(|format| DateTime::parse_from_str(s, format).is_ok())
}

/// Validate a number value
fn validate_number(
    value: Option<&Value>,
    schema: &NumberSchema,
    context: &mut ValidationContext,
) -> bool {
    let Some(num) = value.and_then(Value::as_f64) else {
        return type_mismatch("number", value, context);
    };

    if let Some(allowed) = &schema.enum_values
        && !allowed.iter().any(|candidate| *candidate == num)
    {
        context.add_error(ValidationErrorKind::InvalidEnumValue {
            value: num.to_string(),
        });
        return false;
    }

    if let Some(maximum) = schema.maximum
        && num > maximum
    {
        context.add_error(ValidationErrorKind::NumberTooLarge {
            value: num,
            maximum,
        });
        return false;
    }

    if let Some(minimum) = schema.minimum
        && num < minimum
    {
        context.add_error(ValidationErrorKind::NumberTooSmall {
            value: num,
            minimum,
        });
        return false;
    }

    true
}

/// Validate a boolean value
fn validate_boolean(value: Option<&Value>, context: &mut ValidationContext) -> bool {
    match value {
        Some(Value::Bool(_)) => true,
        _ => type_mismatch("boolean", value, context),
    }
}

/// Validate an array value
fn validate_array(
    value: Option<&Value>,
    schema: &ArraySchema,
    context: &mut ValidationContext,
) -> bool {
    let Some(Value::Array(items)) = value else {
        return type_mismatch("array", value, context);
    };
    let length = items.len();

    if let Some(min_items) = schema.min_items
        && length < min_items
    {
        context.add_error(ValidationErrorKind::TooFewItems { length, min_items });
        return false;
    }

    if let Some(max_items) = schema.max_items
        && length > max_items
    {
        context.add_error(ValidationErrorKind::TooManyItems { length, max_items });
        return false;
    }

    if let Some(expected) = &schema.contains
        && !items.iter().any(|item| deep_equal(item, expected))
    {
        context.add_error(ValidationErrorKind::MissingContainedValue {
            expected: expected.clone(),
        });
        return false;
    }

    if let Some(item_schemas) = &schema.items {
        let items_valid = match context.options.items {
            ItemValidation::KindOnly => check_item_kinds(items, item_schemas, context),
            ItemValidation::Recursive => context.with_schema_path("items", |ctx| {
                validate_items_recursively(items, item_schemas, ctx)
            }),
        };
        if !items_valid {
            return false;
        }
    }

    if let Some(allowed) = &schema.enum_values
        && !allowed.iter().any(|candidate| {
            candidate.len() == length && candidate.iter().zip(items).all(|(a, b)| deep_equal(a, b))
        })
    {
        context.add_error(ValidationErrorKind::ArrayNotInEnum);
        return false;
    }

    if schema.unique_items && distinct_count(items) != length {
        context.add_error(ValidationErrorKind::ArrayItemsNotUnique);
        return false;
    }

    true
}

/// Shallow check: every element's kind must match its item schema's `type`.
///
/// Elements past the end of a tuple are unconstrained. A `null` element passes
/// when its item schema is nullable.
fn check_item_kinds(items: &[Value], item_schemas: &ItemsSchema, context: &mut ValidationContext) -> bool {
    for (index, item) in items.iter().enumerate() {
        let Some(item_schema) = item_schemas.schema_for(index) else {
            continue;
        };
        if item.is_null() && item_schema.nullable {
            continue;
        }

        let got = JsonKind::of(item);
        let matches = match item_schema.kind.kind_check() {
            KindCheck::Unconstrained => true,
            KindCheck::Exactly(expected) => expected == got,
            KindCheck::Unsatisfiable => false,
        };
        if !matches {
            context.with_instance_path(PathSegment::Index(index), |ctx| {
                ctx.add_error(ValidationErrorKind::ItemTypeMismatch {
                    index,
                    expected: item_schema.kind.type_name().to_string(),
                    got: got.name().to_string(),
                });
            });
            return false;
        }
    }
    true
}

/// Full check: every element is validated against its item schema.
fn validate_items_recursively(
    items: &[Value],
    item_schemas: &ItemsSchema,
    context: &mut ValidationContext,
) -> bool {
    for (index, item) in items.iter().enumerate() {
        let Some(item_schema) = item_schemas.schema_for(index) else {
            continue;
        };
        let valid = context.with_instance_path(PathSegment::Index(index), |ctx| {
            validate_generic(Some(item), item_schema, ctx)
        });
        if !valid {
            return false;
        }
    }
    true
}

/// Validate an object value
fn validate_object(
    value: Option<&Value>,
    schema: &ObjectSchema,
    context: &mut ValidationContext,
) -> bool {
    let Some(Value::Object(entries)) = value else {
        return type_mismatch("object", value, context);
    };
    let count = entries.len();

    if let Some(min_properties) = schema.min_properties
        && count < min_properties
    {
        context.add_error(ValidationErrorKind::TooFewProperties {
            count,
            min_properties,
        });
        return false;
    }

    if let Some(max_properties) = schema.max_properties
        && count > max_properties
    {
        context.add_error(ValidationErrorKind::TooManyProperties {
            count,
            max_properties,
        });
        return false;
    }

    if let Some(required) = &schema.required
        && let Some(missing) = required.iter().find(|key| !entries.contains_key(key.as_str()))
    {
        context.add_error(ValidationErrorKind::MissingRequiredProperty {
            property: missing.clone(),
        });
        return false;
    }

    let Some(properties) = &schema.properties else {
        return true;
    };

    if schema.is_closed() {
        let violation = match context.options.additional_properties {
            AdditionalPropertiesCheck::DeclaredKeys => entries
                .keys()
                .find(|key| !properties.contains_key(key.as_str()))
                .map(|key| Some(key.clone())),
            AdditionalPropertiesCheck::CountOnly => (properties.len() != count).then_some(None),
        };
        if let Some(property) = violation {
            context.add_error(ValidationErrorKind::AdditionalProperties { property });
            return false;
        }
    }

    // Every declared property is checked so each failure leaves its own errors
    let mut failed = Vec::new();
    context.with_schema_path("properties", |ctx| {
        for (key, property_schema) in properties {
            let valid = ctx.with_instance_path(PathSegment::Key(key.clone()), |ctx| {
                ctx.with_schema_path(key.as_str(), |ctx| {
                    validate_generic(entries.get(key), property_schema, ctx)
                })
            });
            if !valid {
                failed.push(key.clone());
            }
        }
    });

    if !failed.is_empty() {
        context.add_error(ValidationErrorKind::InvalidProperties { properties: failed });
        return false;
    }

    true
}
