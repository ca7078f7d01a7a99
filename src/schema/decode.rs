//! Schema-directed decoding of JSON configuration
//!
//! Handles `${ expression }` interpolations: a string that still contains one
//! has not been resolved yet and decodes to an unknown value.

use super::types::{AttributeType, ObjectType, Schema};
use crate::error::{Error, Result};
use crate::path::AttributePath;
use crate::types::JsonValue;
use crate::value::{Known, Value};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Regex for matching unresolved interpolations: ${ expression }
static INTERPOLATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").expect("interpolation pattern is valid"));

/// Check if a string is an unresolved expression
pub fn is_unresolved(s: &str) -> bool {
    INTERPOLATION_REGEX.is_match(s)
}

impl Schema {
    /// Decode a JSON configuration document
    pub fn decode(&self, json: &JsonValue) -> Result<Value> {
        decode_object(&self.root, json, &AttributePath::empty())
    }
}

/// Decode a JSON value as the given attribute type
pub fn decode_value(ty: &AttributeType, json: &JsonValue, path: &AttributePath) -> Result<Value> {
    match json {
        JsonValue::Null => return Ok(Value::Null),
        JsonValue::String(s) if is_unresolved(s) => return Ok(Value::Unknown),
        _ => {}
    }

    match (ty, json) {
        (AttributeType::String, JsonValue::String(s)) => Ok(Value::string(s.as_str())),
        (AttributeType::Number, JsonValue::Number(n)) => Ok(Value::Known(Known::Number(n.clone()))),
        (AttributeType::Bool, JsonValue::Bool(b)) => Ok(Value::bool(*b)),
        (AttributeType::List { element }, JsonValue::Array(items)) => {
            let elements = items
                .iter()
                .enumerate()
                .map(|(i, item)| decode_value(element, item, &path.at_list_index(i)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::list(elements))
        }
        (AttributeType::Set { element }, JsonValue::Array(items)) => {
            // Elements have no identity before decoding; errors point at the array position.
            let elements = items
                .iter()
                .enumerate()
                .map(|(i, item)| decode_value(element, item, &path.at_list_index(i)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::set(elements))
        }
        (AttributeType::Map { element }, JsonValue::Object(entries)) => {
            let decoded = entries
                .iter()
                .map(|(key, item)| {
                    decode_value(element, item, &path.at_map_key(key.as_str()))
                        .map(|v| (key.clone(), v))
                })
                .collect::<Result<BTreeMap<_, _>>>()?;
            Ok(Value::Known(Known::Map(decoded)))
        }
        (AttributeType::Object(object), JsonValue::Object(_)) => decode_object(object, json, path),
        (ty, json) => Err(Error::decode(
            path,
            format!("expected {}, found {}", ty.name(), json_kind(json)),
        )),
    }
}

fn decode_object(object: &ObjectType, json: &JsonValue, path: &AttributePath) -> Result<Value> {
    let JsonValue::Object(entries) = json else {
        return Err(Error::decode(
            path,
            format!("expected object, found {}", json_kind(json)),
        ));
    };

    if let Some(key) = entries
        .keys()
        .find(|key| !object.attributes.contains_key(key.as_str()))
    {
        return Err(Error::decode(
            path.at_name(key.as_str()),
            "unsupported attribute",
        ));
    }

    let attributes = object
        .attributes
        .iter()
        .map(|(name, ty)| -> Result<(String, Value)> {
            let value = match entries.get(name) {
                Some(item) => decode_value(ty, item, &path.at_name(name.as_str()))?,
                None => Value::Null,
            };
            Ok((name.clone(), value))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(Value::Known(Known::Object(attributes)))
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
