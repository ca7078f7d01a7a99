//! Path resolution against configuration values
//!
//! All container-specific lookup lives here. A miss resolves to null, a step
//! below an unknown container resolves to unknown, and a step that does not
//! fit the container kind is an error.

use super::types::{AttributePath, PathStep};
use crate::error::{Error, Result};
use crate::value::{Known, Value};

impl PathStep {
    /// Descend one level into `value`
    pub fn apply<'a>(&self, value: &'a Value) -> Result<&'a Value> {
        let known = match value {
            Value::Null => return Ok(Value::null_ref()),
            Value::Unknown => return Ok(Value::unknown_ref()),
            Value::Known(known) => known,
        };

        let found = match (self, known) {
            (PathStep::AttributeName(name), Known::Object(attributes)) => attributes.get(name),
            (PathStep::ElementKeyInt(index), Known::List(elements)) => elements.get(*index),
            (PathStep::ElementKeyString(key), Known::Map(entries)) => entries.get(key),
            (PathStep::ElementKeyValue(target), Known::Set(elements)) => {
                elements.iter().find(|element| *element == target)
            }
            (step, known) => {
                return Err(Error::PathStep {
                    step: step.to_string(),
                    kind: known.kind(),
                })
            }
        };

        Ok(found.unwrap_or(Value::null_ref()))
    }
}

impl AttributePath {
    /// Resolve this path against a configuration root
    pub fn resolve<'a>(&self, root: &'a Value) -> Result<&'a Value> {
        self.steps()
            .iter()
            .try_fold(root, |current, step| step.apply(current))
    }
}
