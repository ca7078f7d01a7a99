//! Whole-tree validation
//!
//! Attaches a discriminator validator to every instance of a discriminated
//! object in a configuration tree and collects their diagnostics.

use super::types::{AttributeType, ObjectType, Schema};
use crate::diag::Diagnostics;
use crate::path::AttributePath;
use crate::validator::{
    validate_discriminator, DiscriminatorValidator, StringRequest, StringResponse, StringValidator,
};
use crate::value::Value;
use tracing::debug;

/// Validates configuration trees against one schema
///
/// Only the parts of the schema that lead to a discriminated object are kept,
/// so walking skips everything else.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    name: String,
    root: Option<ObjectNode>,
}

#[derive(Debug, Clone)]
struct ObjectNode {
    discriminator: Option<(String, DiscriminatorValidator)>,
    children: Vec<(String, ChildNode)>,
}

#[derive(Debug, Clone)]
enum ChildNode {
    Object(ObjectNode),
    List(Box<ChildNode>),
    Set(Box<ChildNode>),
    Map(Box<ChildNode>),
}

impl SchemaValidator {
    /// Build a validator for a schema
    pub fn new(schema: &Schema) -> Self {
        Self {
            name: schema.name.clone(),
            root: build_object(&schema.root),
        }
    }

    /// Schema name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate a decoded configuration
    pub fn validate(&self, config: &Value) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        if let Some(root) = &self.root {
            walk_object(root, config, &AttributePath::empty(), config, &mut diagnostics);
        }
        debug!(
            schema = %self.name,
            errors = diagnostics.error_count(),
            "Validated configuration"
        );
        diagnostics
    }

    /// Enforced discriminators with a display location
    ///
    /// Collection elements are shown as `[*]`.
    pub fn discriminators(&self) -> Vec<(String, &DiscriminatorValidator)> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            collect_object(root, "", &mut out);
        }
        out
    }
}

// ============================================================================
// Building
// ============================================================================

fn build_object(object: &ObjectType) -> Option<ObjectNode> {
    let discriminator = object
        .discriminator
        .as_ref()
        .filter(|d| !d.skip_validation)
        .map(|d| {
            (
                d.property_name.clone(),
                validate_discriminator(d.definition()),
            )
        });

    let children: Vec<(String, ChildNode)> = object
        .attributes
        .iter()
        .filter_map(|(name, ty)| build_child(ty).map(|child| (name.clone(), child)))
        .collect();

    if discriminator.is_none() && children.is_empty() {
        return None;
    }
    Some(ObjectNode {
        discriminator,
        children,
    })
}

fn build_child(ty: &AttributeType) -> Option<ChildNode> {
    match ty {
        AttributeType::String | AttributeType::Number | AttributeType::Bool => None,
        AttributeType::List { element } => build_child(element).map(|c| ChildNode::List(Box::new(c))),
        AttributeType::Set { element } => build_child(element).map(|c| ChildNode::Set(Box::new(c))),
        AttributeType::Map { element } => build_child(element).map(|c| ChildNode::Map(Box::new(c))),
        AttributeType::Object(object) => build_object(object).map(ChildNode::Object),
    }
}

// ============================================================================
// Walking
// ============================================================================

fn walk_object(
    node: &ObjectNode,
    value: &Value,
    path: &AttributePath,
    config: &Value,
    diagnostics: &mut Diagnostics,
) {
    let Some(attributes) = value.as_object() else {
        return;
    };

    if let Some((property, validator)) = &node.discriminator {
        let discriminator_path = path.at_name(property.as_str());
        let request = StringRequest {
            config_value: attributes.get(property).unwrap_or(Value::null_ref()),
            path: &discriminator_path,
            config,
        };
        let mut response = StringResponse::default();
        validator.validate_string(&request, &mut response);
        diagnostics.extend(response.diagnostics);
    }

    for (name, child) in &node.children {
        let child_value = attributes.get(name).unwrap_or(Value::null_ref());
        walk_child(
            child,
            child_value,
            &path.at_name(name.as_str()),
            config,
            diagnostics,
        );
    }
}

fn walk_child(
    node: &ChildNode,
    value: &Value,
    path: &AttributePath,
    config: &Value,
    diagnostics: &mut Diagnostics,
) {
    match node {
        ChildNode::Object(object) => walk_object(object, value, path, config, diagnostics),
        ChildNode::List(element) => {
            for (i, item) in value.as_list().unwrap_or_default().iter().enumerate() {
                walk_child(element, item, &path.at_list_index(i), config, diagnostics);
            }
        }
        ChildNode::Set(element) => {
            for item in value.as_set().unwrap_or_default() {
                walk_child(
                    element,
                    item,
                    &path.at_set_value(item.clone()),
                    config,
                    diagnostics,
                );
            }
        }
        ChildNode::Map(element) => {
            if let Some(entries) = value.as_map() {
                for (key, item) in entries {
                    walk_child(element, item, &path.at_map_key(key.as_str()), config, diagnostics);
                }
            }
        }
    }
}

// ============================================================================
// Describing
// ============================================================================

fn collect_object<'a>(
    node: &'a ObjectNode,
    prefix: &str,
    out: &mut Vec<(String, &'a DiscriminatorValidator)>,
) {
    if let Some((property, validator)) = &node.discriminator {
        out.push((join(prefix, property), validator));
    }
    for (name, child) in &node.children {
        collect_child(child, &join(prefix, name), out);
    }
}

fn collect_child<'a>(
    node: &'a ChildNode,
    prefix: &str,
    out: &mut Vec<(String, &'a DiscriminatorValidator)>,
) {
    match node {
        ChildNode::Object(object) => collect_object(object, prefix, out),
        ChildNode::List(element) | ChildNode::Set(element) | ChildNode::Map(element) => {
            collect_child(element, &format!("{prefix}[*]"), out);
        }
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
