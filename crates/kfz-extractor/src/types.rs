//! Result types for extraction

use kfz_domain::{FieldKey, FieldValueMap};
use serde::Serialize;

/// Result of one extraction run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Prior values merged with everything the detectors found
    pub field_values: FieldValueMap,

    /// Keys written by detectors, in detection order
    pub extracted_fields: Vec<FieldKey>,

    /// Heuristic score in `[0, 1]`
    pub confidence: f64,
}

impl ExtractionResult {
    /// Whether any detector matched
    pub fn is_empty(&self) -> bool {
        self.extracted_fields.is_empty()
    }

    /// Check that every extracted key is present in the value map
    pub fn validate(&self) -> Result<(), String> {
        if let Some(key) = self
            .extracted_fields
            .iter()
            .find(|key| !self.field_values.contains(**key))
        {
            return Err(format!("extracted field '{}' missing from values", key));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!(
                "confidence {} out of range [0.0, 1.0]",
                self.confidence
            ));
        }
        Ok(())
    }
}
