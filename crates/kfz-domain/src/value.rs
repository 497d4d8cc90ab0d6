//! Field values and the field value map

use crate::definition::{field_definition, ValueType};
use crate::field::FieldKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Value stored for one field.
///
/// Serialized untagged, so JSON `15000`, `"BMW"` and `true` map directly onto
/// the matching variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean flag
    Boolean(bool),
    /// Whole number (mileage, tariff classes)
    Integer(i64),
    /// Free text (brand and similar)
    Text(String),
}

impl FieldValue {
    /// Integer payload, if this is an integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Text payload, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean payload, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert to the variant a field of `value_type` is stored as.
    ///
    /// Numeric text becomes an integer and `"true"`/`"false"` a boolean when
    /// the type asks for it. Values that cannot take the declared type are
    /// kept as text, and text fields hold text only. Empty text is no value.
    pub fn coerce(self, value_type: ValueType) -> Option<FieldValue> {
        let value = match (value_type, self) {
            (_, FieldValue::Text(s)) if s.is_empty() => return None,
            (ValueType::Integer, FieldValue::Text(s)) => match s.trim().parse() {
                Ok(n) => FieldValue::Integer(n),
                Err(_) => FieldValue::Text(s),
            },
            (ValueType::Boolean, FieldValue::Text(s)) => match s.trim().parse() {
                Ok(b) => FieldValue::Boolean(b),
                Err(_) => FieldValue::Text(s),
            },
            (ValueType::Integer, v @ FieldValue::Boolean(_))
            | (ValueType::Boolean, v @ FieldValue::Integer(_))
            | (ValueType::Text, v @ (FieldValue::Integer(_) | FieldValue::Boolean(_))) => {
                FieldValue::Text(v.to_string())
            }
            (_, v) => v,
        };
        Some(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// Mapping from field keys to values.
///
/// Keyed by the wire name rather than [`FieldKey`] so that keys the assistant
/// does not know about survive a round trip through extraction unchanged.
/// Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValueMap {
    entries: BTreeMap<String, FieldValue>,
}

impl FieldValueMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a known field, returning the previous value
    pub fn insert(&mut self, key: FieldKey, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.entries.insert(key.as_str().to_string(), value.into())
    }

    /// Value of a known field
    pub fn get(&self, key: FieldKey) -> Option<&FieldValue> {
        self.entries.get(key.as_str())
    }

    /// Value stored under an arbitrary wire name, known or not
    pub fn get_raw(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    /// Whether a known field has a value
    pub fn contains(&self, key: FieldKey) -> bool {
        self.entries.contains_key(key.as_str())
    }

    /// Number of entries, including unknown pass-through keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(wire name, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Coerce every known field to its registry type.
    ///
    /// Known fields holding empty text are removed; unknown keys are kept
    /// as they are.
    pub fn normalized(self) -> Self {
        self.entries
            .into_iter()
            .filter_map(|(name, value)| match FieldKey::parse(&name) {
                Some(key) => value
                    .coerce(field_definition(key).value_type)
                    .map(|v| (name, v)),
                None => Some((name, value)),
            })
            .collect()
    }

    /// Entries whose key is not part of the known field set
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|k| FieldKey::parse(k).is_none())
    }
}

impl FromIterator<(String, FieldValue)> for FieldValueMap {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(FieldKey, FieldValue)> for FieldValueMap {
    fn from_iter<I: IntoIterator<Item = (FieldKey, FieldValue)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.as_str().to_string(), v))
            .collect()
    }
}
