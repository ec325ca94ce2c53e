//! Schema type definitions
//!
//! This module contains the constraint structs for each schema kind. Each
//! struct only carries the keywords that its kind understands; an unset bound
//! (`None`) imposes no constraint.

use indexmap::IndexMap;
use regex::Regex;
use std::fmt;

use super::Schema;

/// String type schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSchema {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub enum_values: Option<Vec<String>>,
    pub pattern: Option<Pattern>,
    pub format: Option<StringFormat>,
}

/// Number type schema (integer or float)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberSchema {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub enum_values: Option<Vec<f64>>,
}

/// Array type schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArraySchema {
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    /// A literal value that at least one element must deep-equal
    pub contains: Option<serde_json::Value>,
    pub items: Option<ItemsSchema>,
    /// Whole arrays the data may equal (order-sensitive)
    pub enum_values: Option<Vec<Vec<serde_json::Value>>>,
    pub unique_items: bool,
}

/// The `items` keyword of an array schema
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsSchema {
    /// One schema applied to every element
    Single(Box<Schema>),
    /// Per-index schemas (tuple validation)
    Tuple(Vec<Schema>),
}

impl ItemsSchema {
    /// The item schema governing the element at `index`, if any
    pub fn schema_for(&self, index: usize) -> Option<&Schema> {
        match self {
            ItemsSchema::Single(schema) => Some(schema),
            ItemsSchema::Tuple(schemas) => schemas.get(index),
        }
    }
}

/// Object type schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    pub min_properties: Option<usize>,
    pub max_properties: Option<usize>,
    pub required: Option<Vec<String>>,
    /// Declared properties, in declaration order
    pub properties: Option<IndexMap<String, Schema>>,
    /// `Some(false)` forbids keys outside `properties`
    pub additional_properties: Option<bool>,
}

impl ObjectSchema {
    /// Whether keys outside `properties` are forbidden
    pub fn is_closed(&self) -> bool {
        self.additional_properties == Some(false)
    }
}

/// A compiled `pattern` keyword
///
/// Matching is unanchored: the pattern may match anywhere in the string.
/// Two patterns are equal when their source text is equal.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = Regex::new(&source)?;
        Ok(Self { source, regex })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// The `format` keyword of a string schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringFormat {
    /// `local@domain.tld`
    Email,
    /// A calendar date
    Date,
    /// Any other format name; accepted without checks
    Other(String),
}

impl StringFormat {
    pub fn parse(name: &str) -> Self {
        match name {
            "email" => StringFormat::Email,
            "date" => StringFormat::Date,
            other => StringFormat::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            StringFormat::Email => "email",
            StringFormat::Date => "date",
            StringFormat::Other(name) => name,
        }
    }
}
