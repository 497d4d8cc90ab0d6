//! Kfz Domain Layer
//!
//! Core vocabulary for the vehicle/fleet contract assistant. Every other crate
//! in the workspace speaks in these types.
//!
//! ## Key Concepts
//!
//! - **Field key**: closed set of data points the assistant knows about
//!   (annual mileage, vehicle brand, liability and partial-coverage tariff class)
//! - **Field value**: integer, text or boolean payload for one field
//! - **Field value map**: the record passed between extraction and emission
//! - **Field definition**: static, ordered metadata describing each known field
//!
//! ## Architecture
//!
//! - Only dependency is `serde`, for the shared wire representation
//! - Pure data and lookups, no I/O and no process-wide mutable state

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod definition;
pub mod field;
pub mod value;

// Re-exports for convenience
pub use definition::{field_definition, field_definitions, FieldDefinition, ValueType};
pub use field::FieldKey;
pub use value::{FieldValue, FieldValueMap};
