//! Value types

use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;

/// Shared null value for lookups that miss
static NULL_VALUE: Value = Value::Null;

/// Shared unknown value for lookups below an unknown container
static UNKNOWN_VALUE: Value = Value::Unknown;

/// The state of a value, without its content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueState {
    /// Has a concrete value
    Known,
    /// Explicitly absent
    Null,
    /// Unresolved expression
    Unknown,
}

impl fmt::Display for ValueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueState::Known => write!(f, "known"),
            ValueState::Null => write!(f, "null"),
            ValueState::Unknown => write!(f, "unknown"),
        }
    }
}

/// A tri-state configuration value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// Explicitly absent / not set
    #[default]
    Null,
    /// Unresolved expression
    Unknown,
    /// Concrete value
    Known(Known),
}

/// Content of a known value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Known {
    String(String),
    Number(Number),
    Bool(bool),
    /// Ordered, indexed elements
    List(Vec<Value>),
    /// Unordered elements, identified by value
    Set(Vec<Value>),
    /// Elements keyed by string
    Map(BTreeMap<String, Value>),
    /// Named attributes
    Object(BTreeMap<String, Value>),
}

impl Known {
    /// Name of this value's kind, for messages
    pub fn kind(&self) -> &'static str {
        match self {
            Known::String(_) => "string",
            Known::Number(_) => "number",
            Known::Bool(_) => "bool",
            Known::List(_) => "list",
            Known::Set(_) => "set",
            Known::Map(_) => "map",
            Known::Object(_) => "object",
        }
    }
}

impl Value {
    /// Shared reference to a null value
    pub fn null_ref() -> &'static Value {
        &NULL_VALUE
    }

    /// Shared reference to an unknown value
    pub fn unknown_ref() -> &'static Value {
        &UNKNOWN_VALUE
    }

    /// Create a known string value
    pub fn string(value: impl Into<String>) -> Self {
        Value::Known(Known::String(value.into()))
    }

    /// Create a known number value
    pub fn number(value: impl Into<Number>) -> Self {
        Value::Known(Known::Number(value.into()))
    }

    /// Create a known bool value
    pub fn bool(value: bool) -> Self {
        Value::Known(Known::Bool(value))
    }

    /// Create a list from elements
    pub fn list(elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Known(Known::List(elements.into_iter().collect()))
    }

    /// Create a set from elements
    ///
    /// Duplicate elements are collapsed, keeping the first occurrence.
    /// Elements containing an unknown value are always kept: two unresolved
    /// expressions may still produce different values.
    pub fn set(elements: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for element in elements {
            if element.contains_unknown() || !unique.contains(&element) {
                unique.push(element);
            }
        }
        Value::Known(Known::Set(unique))
    }

    /// Create a map from key/element pairs
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Known(Known::Map(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Create an object from name/attribute pairs
    pub fn object<K: Into<String>>(attributes: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Known(Known::Object(
            attributes.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Get the state of this value
    pub fn state(&self) -> ValueState {
        match self {
            Value::Null => ValueState::Null,
            Value::Unknown => ValueState::Unknown,
            Value::Known(_) => ValueState::Known,
        }
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// Check if this value is known
    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    /// Check if this value or anything nested in it is unknown
    pub fn contains_unknown(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Unknown => true,
            Value::Known(Known::List(elements) | Known::Set(elements)) => {
                elements.iter().any(Value::contains_unknown)
            }
            Value::Known(Known::Map(entries) | Known::Object(entries)) => {
                entries.values().any(Value::contains_unknown)
            }
            Value::Known(_) => false,
        }
    }

    /// Check if the practitioner set this value (known or unknown)
    pub fn is_set(&self) -> bool {
        !self.is_null()
    }

    /// Get the known content
    pub fn as_known(&self) -> Option<&Known> {
        match self {
            Value::Known(known) => Some(known),
            _ => None,
        }
    }

    /// Get a known string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Known(Known::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Get known list elements
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::Known(Known::List(elements)) => Some(elements),
            _ => None,
        }
    }

    /// Get known set elements
    pub fn as_set(&self) -> Option<&[Value]> {
        match self {
            Value::Known(Known::Set(elements)) => Some(elements),
            _ => None,
        }
    }

    /// Get known map entries
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Known(Known::Map(entries)) => Some(entries),
            _ => None,
        }
    }

    /// Get known object attributes
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Known(Known::Object(attributes)) => Some(attributes),
            _ => None,
        }
    }

    /// Name of this value's kind, for messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Unknown => "unknown",
            Value::Known(known) => known.kind(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::string(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::number(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Unknown => write!(f, "<unknown>"),
            Value::Known(Known::String(s)) => write!(f, "{s:?}"),
            Value::Known(Known::Number(n)) => write!(f, "{n}"),
            Value::Known(Known::Bool(b)) => write!(f, "{b}"),
            Value::Known(Known::List(elements) | Known::Set(elements)) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            }
            Value::Known(Known::Map(entries) | Known::Object(entries)) => {
                write!(f, "{{")?;
                for (i, (key, element)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{key:?}:{element}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
