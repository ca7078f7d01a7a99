//! YAML parser for schema definitions
//!
//! Parses and validates schema YAML files.
//! Supports both built-in schemas (by name) and custom YAML files (by path).

use crate::builtin;
use crate::error::{Error, Result, ResultExt};
use crate::schema::{AttributeType, Discriminator, ObjectType, Schema};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a schema definition from a name or file path
///
/// This function first checks if the input is a built-in schema name (e.g., "stream_connection"),
/// then falls back to loading from a file path.
///
/// # Examples
///
/// ```ignore
/// // Load built-in schema by name
/// let schema = load_schema("stream_connection")?;
///
/// // Load custom schema from file
/// let schema = load_schema("./my-resource.yaml")?;
/// ```
pub fn load_schema(path: impl AsRef<Path>) -> Result<Schema> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    // Built-in names have no path separators and no YAML extension
    if !path_str.contains('/')
        && !path_str.contains('\\')
        && !path_str.ends_with(".yaml")
        && !path_str.ends_with(".yml")
    {
        if let Some(yaml) = builtin::get_builtin(&path_str) {
            return load_schema_from_str(yaml);
        }
    }

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            let builtin_list = builtin::list_builtin().join(", ");
            Error::config(format!(
                "Schema '{}' not found. Built-in schemas: {}. Or provide a path to a YAML file.",
                path.display(),
                builtin_list
            ))
        } else {
            Error::config(format!(
                "Failed to read schema file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_schema_from_str(&content)
}

/// Load a schema definition from a YAML string
pub fn load_schema_from_str(yaml: &str) -> Result<Schema> {
    let schema: Schema = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse schema YAML: {e}")))?;

    validate_schema(&schema)?;
    Ok(schema)
}

/// Load every `.yaml`/`.yml` schema in a directory, keyed by schema name
pub fn load_schemas_from_dir(dir: impl AsRef<Path>) -> Result<BTreeMap<String, Schema>> {
    let dir = dir.as_ref();
    let mut schemas = BTreeMap::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "yaml" || e == "yml");
        if !is_yaml {
            continue;
        }

        let schema =
            load_schema(&path).with_context(|| format!("Failed to load '{}'", path.display()))?;
        debug!(schema = %schema.name, path = %path.display(), "Loaded schema");
        if schemas.contains_key(&schema.name) {
            return Err(Error::config(format!(
                "Duplicate schema name '{}' in {}",
                schema.name,
                dir.display()
            )));
        }
        schemas.insert(schema.name.clone(), schema);
    }

    Ok(schemas)
}

/// Validate a schema definition
fn validate_schema(schema: &Schema) -> Result<()> {
    if schema.name.is_empty() {
        return Err(Error::config("Schema name cannot be empty"));
    }

    validate_object(&schema.name, &schema.root, "")
}

/// Validate an object level and everything below it
fn validate_object(schema: &str, object: &ObjectType, location: &str) -> Result<()> {
    if let Some(discriminator) = &object.discriminator {
        validate_discriminator(schema, object, discriminator, location)?;
    }

    for (name, ty) in &object.attributes {
        validate_type(schema, ty, &join(location, name))?;
    }

    Ok(())
}

fn validate_type(schema: &str, ty: &AttributeType, location: &str) -> Result<()> {
    match ty {
        AttributeType::String | AttributeType::Number | AttributeType::Bool => Ok(()),
        AttributeType::List { element }
        | AttributeType::Set { element }
        | AttributeType::Map { element } => {
            validate_type(schema, element, &format!("{location}[*]"))
        }
        AttributeType::Object(object) => validate_object(schema, object, location),
    }
}

/// Validate a discriminator against its object's attributes
fn validate_discriminator(
    schema: &str,
    object: &ObjectType,
    discriminator: &Discriminator,
    location: &str,
) -> Result<()> {
    let property = &discriminator.property_name;
    let at = if location.is_empty() {
        "root".to_string()
    } else {
        format!("'{location}'")
    };

    match object.attributes.get(property) {
        Some(AttributeType::String) => {}
        Some(other) => {
            return Err(Error::invalid_schema(
                schema,
                format!(
                    "discriminator '{property}' at {at} must be a string attribute, found {}",
                    other.name()
                ),
            ));
        }
        None => {
            return Err(Error::invalid_schema(
                schema,
                format!("discriminator '{property}' at {at} is not a declared attribute"),
            ));
        }
    }

    for (value, variant) in &discriminator.mapping {
        if value.is_empty() {
            return Err(Error::invalid_schema(
                schema,
                format!("discriminator '{property}' at {at} has an empty mapping value"),
            ));
        }

        for name in variant.allowed.iter().chain(variant.required.iter()) {
            if name == property {
                return Err(Error::invalid_schema(
                    schema,
                    format!("variant '{value}' at {at} cannot reference the discriminator itself"),
                ));
            }
            if !object.attributes.contains_key(name) {
                return Err(Error::invalid_schema(
                    schema,
                    format!("variant '{value}' at {at} references undeclared attribute '{name}'"),
                ));
            }
        }

        if let Some(name) = variant.required.iter().find(|r| !variant.allows(r)) {
            return Err(Error::invalid_schema(
                schema,
                format!("variant '{value}' at {at} requires '{name}' but does not allow it"),
            ));
        }
    }

    Ok(())
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
