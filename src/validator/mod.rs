//! Attribute validator module
//!
//! Validators attached to individual schema attributes.
//!
//! # Overview
//!
//! The validator module provides:
//! - `StringValidator` - the seam through which a string attribute is validated
//! - `DiscriminatorDefinition` / `VariantDefinition` - declarative `oneOf` rules
//! - `DiscriminatorValidator` - checks the siblings of a discriminator attribute
//!
//! A discriminator is a string attribute (usually `type`) whose value selects
//! which sibling attributes may and must be set. Unknown or null discriminator
//! values, and values without a mapping, are not checked.

mod discriminator;
mod types;

pub use discriminator::{validate_discriminator, DiscriminatorValidator, SUMMARY};
pub use types::{
    DiscriminatorDefinition, StringRequest, StringResponse, StringValidator, VariantDefinition,
};

#[cfg(test)]
mod tests;
