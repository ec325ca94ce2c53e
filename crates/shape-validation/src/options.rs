//! Validation options
//!
//! Two checks have a faithful form and a stricter form; [`ValidationOptions`]
//! selects between them. Options deserialize from camelCase JSON so they can
//! live next to a caller's other settings:
//!
//! ```
//! use shape_validation::{AdditionalPropertiesCheck, ItemValidation, ValidationOptions};
//!
//! let options: ValidationOptions =
//!     serde_json::from_str(r#"{"items": "recursive"}"#).unwrap();
//! assert_eq!(options.items, ItemValidation::Recursive);
//! assert_eq!(
//!     options.additional_properties,
//!     AdditionalPropertiesCheck::DeclaredKeys
//! );
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    /// How array `items` schemas are applied to elements
    pub items: ItemValidation,
    /// How `additionalProperties: false` is enforced
    pub additional_properties: AdditionalPropertiesCheck,
}

/// How array `items` schemas are applied to elements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemValidation {
    /// Each element's primitive kind must match its item schema's `type`.
    /// No other item-schema constraint is checked.
    #[default]
    KindOnly,
    /// Each element is fully validated against its item schema.
    Recursive,
}

/// How `additionalProperties: false` is enforced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdditionalPropertiesCheck {
    /// Every key of the data must be declared in `properties`.
    #[default]
    DeclaredKeys,
    /// The data must have exactly as many keys as `properties` declares.
    /// Undeclared keys pass when the counts happen to match.
    CountOnly,
}

impl ValidationOptions {
    pub fn with_items(mut self, items: ItemValidation) -> Self {
        self.items = items;
        self
    }

    pub fn with_additional_properties(mut self, check: AdditionalPropertiesCheck) -> Self {
        self.additional_properties = check;
        self
    }
}
