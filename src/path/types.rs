//! Path types

use crate::error::{Error, Result};
use crate::value::Value;
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

/// A single step of an attribute path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    /// Object attribute by name
    AttributeName(String),
    /// List element by index
    ElementKeyInt(usize),
    /// Map element by key
    ElementKeyString(String),
    /// Set element by value
    ElementKeyValue(Value),
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::AttributeName(name) => write!(f, "{name}"),
            PathStep::ElementKeyInt(index) => write!(f, "[{index}]"),
            PathStep::ElementKeyString(key) => write!(f, "[{key:?}]"),
            PathStep::ElementKeyValue(value) => write!(f, "[Value({value})]"),
        }
    }
}

/// Path to an attribute or element within a configuration value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributePath {
    steps: Vec<PathStep>,
}

impl AttributePath {
    /// Create an empty path (the configuration root)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a path to a top-level attribute
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            steps: vec![PathStep::AttributeName(name.into())],
        }
    }

    /// Create a path from steps
    pub fn from_steps(steps: impl IntoIterator<Item = PathStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Extend with an attribute name
    #[must_use]
    pub fn at_name(&self, name: impl Into<String>) -> Self {
        self.with_step(PathStep::AttributeName(name.into()))
    }

    /// Extend with a list index
    #[must_use]
    pub fn at_list_index(&self, index: usize) -> Self {
        self.with_step(PathStep::ElementKeyInt(index))
    }

    /// Extend with a map key
    #[must_use]
    pub fn at_map_key(&self, key: impl Into<String>) -> Self {
        self.with_step(PathStep::ElementKeyString(key.into()))
    }

    /// Extend with a set element value
    #[must_use]
    pub fn at_set_value(&self, value: Value) -> Self {
        self.with_step(PathStep::ElementKeyValue(value))
    }

    fn with_step(&self, step: PathStep) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend(self.steps.iter().cloned());
        steps.push(step);
        Self { steps }
    }

    /// The containing path: this path without its last step
    ///
    /// The parent of an empty path is the empty path.
    #[must_use]
    pub fn parent(&self) -> Self {
        let len = self.steps.len().saturating_sub(1);
        Self {
            steps: self.steps[..len].to_vec(),
        }
    }

    /// Path steps
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Last step, if any
    pub fn last_step(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    /// Check if this is the root path
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 && matches!(step, PathStep::AttributeName(_)) {
                write!(f, ".")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl Serialize for AttributePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for AttributePath {
    type Err = Error;

    /// Parse `name`, `a.b`, `items[0].type` and `items["key"].type`
    ///
    /// Set element steps have no textual form and are rejected.
    fn from_str(input: &str) -> Result<Self> {
        let mut steps = Vec::new();
        let mut chars = input.char_indices().peekable();

        while let Some(&(pos, c)) = chars.peek() {
            match c {
                '[' if steps.is_empty() => {
                    return Err(Error::path_parse(
                        input,
                        "path must start with an attribute name",
                    ));
                }
                '[' => {
                    chars.next();
                    steps.push(parse_element_key(input, &mut chars)?);
                }
                '.' if !steps.is_empty() => {
                    chars.next();
                    steps.push(PathStep::AttributeName(parse_name(input, &mut chars)?));
                }
                _ if steps.is_empty() => {
                    steps.push(PathStep::AttributeName(parse_name(input, &mut chars)?));
                }
                _ => {
                    return Err(Error::path_parse(
                        input,
                        format!("unexpected '{c}' at offset {pos}"),
                    ));
                }
            }
        }

        Ok(Self { steps })
    }
}

type Chars<'a> = Peekable<CharIndices<'a>>;

fn parse_name(input: &str, chars: &mut Chars<'_>) -> Result<String> {
    let mut name = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            name.push(c);
            chars.next();
        } else {
            break;
        }
    }
    if name.is_empty() {
        return Err(Error::path_parse(input, "empty attribute name"));
    }
    Ok(name)
}

fn parse_element_key(input: &str, chars: &mut Chars<'_>) -> Result<PathStep> {
    let step = if matches!(chars.peek(), Some(&(_, '"'))) {
        chars.next();
        let mut key = String::new();
        loop {
            match chars.next() {
                Some((_, '\\')) => match chars.next() {
                    Some((_, escaped)) => key.push(escaped),
                    None => return Err(Error::path_parse(input, "unterminated map key")),
                },
                Some((_, '"')) => break,
                Some((_, c)) => key.push(c),
                None => return Err(Error::path_parse(input, "unterminated map key")),
            }
        }
        PathStep::ElementKeyString(key)
    } else {
        let mut digits = String::new();
        while let Some(&(_, c)) = chars.peek() {
            if c == ']' {
                break;
            }
            digits.push(c);
            chars.next();
        }
        let index = digits.trim().parse::<usize>().map_err(|_| {
            Error::path_parse(input, format!("invalid list index '{digits}'"))
        })?;
        PathStep::ElementKeyInt(index)
    };

    match chars.next() {
        Some((_, ']')) => Ok(step),
        _ => Err(Error::path_parse(input, "expected ']'")),
    }
}
