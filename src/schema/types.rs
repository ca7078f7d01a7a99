//! Schema types

use crate::validator::{DiscriminatorDefinition, VariantDefinition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declared type of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Number,
    Bool,
    List { element: Box<AttributeType> },
    Set { element: Box<AttributeType> },
    Map { element: Box<AttributeType> },
    Object(ObjectType),
}

impl AttributeType {
    /// Create a list type
    pub fn list(element: AttributeType) -> Self {
        Self::List {
            element: Box::new(element),
        }
    }

    /// Create a set type
    pub fn set(element: AttributeType) -> Self {
        Self::Set {
            element: Box::new(element),
        }
    }

    /// Create a map type
    pub fn map(element: AttributeType) -> Self {
        Self::Map {
            element: Box::new(element),
        }
    }

    /// Type name, for messages
    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Bool => "bool",
            AttributeType::List { .. } => "list",
            AttributeType::Set { .. } => "set",
            AttributeType::Map { .. } => "map",
            AttributeType::Object(_) => "object",
        }
    }
}

/// Object type: named attributes plus an optional discriminator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectType {
    /// Attribute types by name
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeType>,
    /// Discriminator for this object level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,
}

impl ObjectType {
    /// Create an empty object type
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, attr: AttributeType) -> Self {
        self.attributes.insert(name.into(), attr);
        self
    }

    /// Set the discriminator
    #[must_use]
    pub fn with_discriminator(mut self, discriminator: Discriminator) -> Self {
        self.discriminator = Some(discriminator);
        self
    }
}

/// Discriminator declared on an object level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Discriminator {
    /// Name of the string attribute holding the discriminator value
    pub property_name: String,
    /// Declared but not enforced
    #[serde(default)]
    pub skip_validation: bool,
    /// Variant rules by discriminator value
    #[serde(default)]
    pub mapping: BTreeMap<String, VariantDefinition>,
}

impl Discriminator {
    /// Create a discriminator on `property_name`
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            skip_validation: false,
            mapping: BTreeMap::new(),
        }
    }

    /// Add a variant
    #[must_use]
    pub fn with_variant(mut self, value: impl Into<String>, variant: VariantDefinition) -> Self {
        self.mapping.insert(value.into(), variant);
        self
    }

    /// Validator definition for this discriminator
    pub fn definition(&self) -> DiscriminatorDefinition {
        DiscriminatorDefinition {
            mapping: self.mapping.clone(),
        }
    }
}

/// Schema of one resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Resource name
    pub name: String,
    /// Resource description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Top-level object
    #[serde(flatten)]
    pub root: ObjectType,
}

impl Schema {
    /// Create a schema
    pub fn new(name: impl Into<String>, root: ObjectType) -> Self {
        Self {
            name: name.into(),
            description: None,
            root,
        }
    }
}
