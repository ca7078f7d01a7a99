//! Validator types and traits

use crate::diag::Diagnostics;
use crate::path::AttributePath;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ============================================================================
// Discriminator Definitions
// ============================================================================

/// Sibling rules for one discriminator value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantDefinition {
    /// Siblings that may hold a value; every other checked sibling must be null
    #[serde(default)]
    pub allowed: Vec<String>,
    /// Siblings that must hold a value (a subset of `allowed`)
    #[serde(default)]
    pub required: Vec<String>,
}

impl VariantDefinition {
    /// Create a variant from allowed and required sibling names
    pub fn new<A, R>(allowed: A, required: R) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if a sibling may be set
    pub fn allows(&self, name: &str) -> bool {
        self.allowed.iter().any(|a| a == name)
    }

    /// Check if a sibling must be set
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// Mapping from discriminator value to variant rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscriminatorDefinition {
    /// Case-sensitive discriminator values
    pub mapping: BTreeMap<String, VariantDefinition>,
}

impl DiscriminatorDefinition {
    /// Create an empty definition
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variant
    #[must_use]
    pub fn with_variant(mut self, value: impl Into<String>, variant: VariantDefinition) -> Self {
        self.mapping.insert(value.into(), variant);
        self
    }

    /// Get the variant for a discriminator value
    pub fn variant(&self, value: &str) -> Option<&VariantDefinition> {
        self.mapping.get(value)
    }

    /// Every sibling name referenced by any variant
    ///
    /// Only these siblings are ever checked; attributes outside the union are
    /// never reported.
    pub fn checked_attributes(&self) -> BTreeSet<String> {
        self.mapping
            .values()
            .flat_map(|v| v.allowed.iter().chain(v.required.iter()))
            .cloned()
            .collect()
    }
}

// ============================================================================
// String Validator Seam
// ============================================================================

/// Request passed to a string attribute validator
#[derive(Debug, Clone, Copy)]
pub struct StringRequest<'a> {
    /// Value of the validated attribute
    pub config_value: &'a Value,
    /// Path of the validated attribute
    pub path: &'a AttributePath,
    /// Complete raw configuration of the resource instance
    pub config: &'a Value,
}

/// Response filled in by a string attribute validator
#[derive(Debug, Clone, Default)]
pub struct StringResponse {
    /// Accumulated diagnostics
    pub diagnostics: Diagnostics,
}

/// Validator attached to a string attribute
pub trait StringValidator: Send + Sync {
    /// Plain-text description
    fn description(&self) -> String;

    /// Markdown description
    fn markdown_description(&self) -> String {
        self.description()
    }

    /// Validate the attribute, appending diagnostics to the response
    fn validate_string(&self, request: &StringRequest<'_>, response: &mut StringResponse);
}
