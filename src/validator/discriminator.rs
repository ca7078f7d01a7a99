//! Discriminator validator implementation

use super::types::{DiscriminatorDefinition, StringRequest, StringResponse, StringValidator};
use crate::diag::Diagnostics;
use crate::path::AttributePath;
use crate::value::{Known, Value};
use std::collections::BTreeSet;
use tracing::debug;

/// Summary used for every discriminator diagnostic
pub const SUMMARY: &str = "Invalid Attribute Combination";

/// Create a validator for a discriminator attribute
pub fn validate_discriminator(definition: DiscriminatorDefinition) -> DiscriminatorValidator {
    DiscriminatorValidator::new(definition)
}

/// Checks that the siblings of a discriminator match the selected variant
#[derive(Debug, Clone)]
pub struct DiscriminatorValidator {
    definition: DiscriminatorDefinition,
    /// Union of all variants' sibling names
    checked: BTreeSet<String>,
}

impl DiscriminatorValidator {
    /// Create a validator from a definition
    pub fn new(definition: DiscriminatorDefinition) -> Self {
        let checked = definition.checked_attributes();
        Self {
            definition,
            checked,
        }
    }

    /// The definition this validator enforces
    pub fn definition(&self) -> &DiscriminatorDefinition {
        &self.definition
    }

    /// Validate the siblings of the discriminator at `path`
    ///
    /// `value` is the discriminator's own value. Diagnostics are anchored at
    /// the offending sibling, never at the discriminator.
    pub fn validate(&self, config: &Value, path: &AttributePath, value: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        let discriminator = match value {
            Value::Known(Known::String(s)) => s.as_str(),
            Value::Null | Value::Unknown => {
                debug!(path = %path, state = %value.state(), "Discriminator not resolved, skipping");
                return diagnostics;
            }
            Value::Known(other) => {
                debug!(path = %path, kind = other.kind(), "Discriminator is not a string, skipping");
                return diagnostics;
            }
        };

        if discriminator.is_empty() {
            return diagnostics;
        }

        let Some(variant) = self.definition.variant(discriminator) else {
            debug!(path = %path, value = discriminator, "No variant mapped, skipping");
            return diagnostics;
        };

        let parent = path.parent();
        for name in &self.checked {
            let sibling_path = parent.at_name(name);
            let sibling = match sibling_path.resolve(config) {
                Ok(sibling) => sibling,
                Err(e) => {
                    debug!(path = %sibling_path, error = %e, "Cannot resolve sibling, skipping");
                    continue;
                }
            };

            if !variant.allows(name) && sibling.is_set() {
                diagnostics.add_attribute_error(
                    sibling_path.clone(),
                    SUMMARY,
                    format!("\"{name}\" is not allowed when type is \"{discriminator}\""),
                );
            }

            if variant.requires(name) && sibling.is_null() {
                diagnostics.add_attribute_error(
                    sibling_path,
                    SUMMARY,
                    format!("\"{name}\" must be set when type is \"{discriminator}\""),
                );
            }
        }

        diagnostics
    }
}

impl StringValidator for DiscriminatorValidator {
    fn description(&self) -> String {
        let values: Vec<&str> = self.definition.mapping.keys().map(String::as_str).collect();
        format!(
            "Restricts which sibling attributes may or must be set for each value of: {}",
            values.join(", ")
        )
    }

    fn markdown_description(&self) -> String {
        let mut out = String::from(
            "Restricts which sibling attributes may or must be set for each value:\n",
        );
        for (value, variant) in &self.definition.mapping {
            out.push_str(&format!("\n- `{value}`: "));
            if variant.allowed.is_empty() {
                out.push_str("no variant attributes allowed");
            } else {
                out.push_str(&format!("allowed {}", backticked(&variant.allowed)));
            }
            if !variant.required.is_empty() {
                out.push_str(&format!("; required {}", backticked(&variant.required)));
            }
        }
        out
    }

    fn validate_string(&self, request: &StringRequest<'_>, response: &mut StringResponse) {
        response.diagnostics.extend(self.validate(
            request.config,
            request.path,
            request.config_value,
        ));
    }
}

fn backticked(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
