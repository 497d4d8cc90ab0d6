//! Field definition registry
//!
//! Static, ordered metadata for every known field. Used for help output,
//! tool listings and the XML data section order.

use crate::field::FieldKey;
use serde::Serialize;

/// Kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Whole number
    Integer,
    /// Free text
    Text,
    /// Boolean flag
    Boolean,
}

impl ValueType {
    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Text => "text",
            ValueType::Boolean => "boolean",
        }
    }
}

/// Metadata describing one recognized field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Field key
    pub key: FieldKey,
    /// Short human-readable label
    pub label: &'static str,
    /// What the field means and how it is recognized in chat text
    pub description: &'static str,
    /// Kind of value stored for the field
    pub value_type: ValueType,
}

static FIELD_DEFINITIONS: [FieldDefinition; 4] = [
    FieldDefinition {
        key: FieldKey::Jahreskilometer,
        label: "Jahreskilometer",
        description: "Jährliche Fahrleistung in Kilometern (z.B. \"15000 km pro Jahr\")",
        value_type: ValueType::Integer,
    },
    FieldDefinition {
        key: FieldKey::Fahrzeugmarke,
        label: "Fahrzeugmarke",
        description: "Hersteller des Fahrzeugs in Großbuchstaben (z.B. BMW, AUDI, VW)",
        value_type: ValueType::Text,
    },
    FieldDefinition {
        key: FieldKey::TypklasseHaftpflicht,
        label: "Typklasse Haftpflicht",
        description: "Typklasse für die Kfz-Haftpflichtversicherung (z.B. \"KH 12\")",
        value_type: ValueType::Integer,
    },
    FieldDefinition {
        key: FieldKey::TypklasseTeilkasko,
        label: "Typklasse Teilkasko",
        description: "Typklasse für die Teilkaskoversicherung (z.B. \"TK 8\")",
        value_type: ValueType::Integer,
    },
];

/// All known field definitions, in registry order.
///
/// The slice is a compile-time constant, so repeated calls return the same
/// sequence for the lifetime of the process.
pub fn field_definitions() -> &'static [FieldDefinition] {
    &FIELD_DEFINITIONS
}

/// Definition of a single field
pub fn field_definition(key: FieldKey) -> &'static FieldDefinition {
    // FIELD_DEFINITIONS is laid out in FieldKey::ALL order
    let idx = FieldKey::ALL
        .iter()
        .position(|k| *k == key)
        .unwrap_or_default();
    &FIELD_DEFINITIONS[idx]
}
