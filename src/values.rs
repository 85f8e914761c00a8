//! Folding option tokens into the final values map.

use indexmap::IndexMap;
use log::debug;

use crate::schema::OptionSchema;

/// A long name that is never stored, whatever the schema says.
pub const RESERVED_KEY: &str = "__proto__";

/// A single stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A captured value.
    String(String),
    /// Present without a value. Always `true`.
    Bool(bool),
}

impl Value {
    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            Value::Bool(_) => None,
        }
    }

    /// Whether this is the flag value `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }
}

impl From<Option<String>> for Value {
    /// A missing value degrades to `true`.
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => Value::String(value),
            None => Value::Bool(true),
        }
    }
}

/// What is stored under one long name.
///
/// Options declared `multiple` are always [`OptionValue::Multiple`], all
/// others are always [`OptionValue::Single`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// The last occurrence.
    Single(Value),
    /// Every occurrence, in order.
    Multiple(Vec<Value>),
}

impl OptionValue {
    /// The last value stored.
    pub fn last(&self) -> Option<&Value> {
        match self {
            OptionValue::Single(value) => Some(value),
            OptionValue::Multiple(values) => values.last(),
        }
    }

    /// All values stored, in order.
    pub fn as_slice(&self) -> &[Value] {
        match self {
            OptionValue::Single(value) => std::slice::from_ref(value),
            OptionValue::Multiple(values) => values,
        }
    }
}

/// Option values keyed by long name, in first-seen order.
pub type Values = IndexMap<String, OptionValue>;

/// Store one occurrence of an option.
///
/// Singular options keep the last occurrence, `multiple` options append.
pub(crate) fn store_option(
    values: &mut Values,
    schema: &OptionSchema,
    name: String,
    value: Option<String>,
) {
    if name == RESERVED_KEY {
        debug!("dropping reserved option name {:?}", name);
        return;
    }

    let value = Value::from(value);
    if schema.is_multiple(&name) {
        match values
            .entry(name)
            .or_insert_with(|| OptionValue::Multiple(Vec::new()))
        {
            OptionValue::Multiple(list) => list.push(value),
            // Only this function writes to `values`, and it never stores a
            // single value under a multiple name.
            single => *single = OptionValue::Multiple(vec![value]),
        }
    } else {
        values.insert(name, OptionValue::Single(value));
    }
}
