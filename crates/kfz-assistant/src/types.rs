//! Request and response types for the assistant

use kfz_domain::{FieldKey, FieldValueMap};
use serde::{Deserialize, Serialize};

/// Chat text plus the values already captured for the contract
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Free-form user text
    #[serde(default)]
    pub chat_text: Option<String>,

    /// Values captured earlier in the conversation
    #[serde(default)]
    pub existing_data: Option<FieldValueMap>,
}

impl ChatRequest {
    /// Request with chat text and no prior values
    pub fn new(chat_text: impl Into<String>) -> Self {
        Self {
            chat_text: Some(chat_text.into()),
            existing_data: None,
        }
    }

    /// Attach prior values
    pub fn with_existing(mut self, existing: FieldValueMap) -> Self {
        self.existing_data = Some(existing);
        self
    }
}

/// Statistics returned alongside the XML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Number of entries in the final value map
    pub field_count: usize,
    /// Keys written by this extraction, in detection order
    pub extracted_fields: Vec<FieldKey>,
    /// Heuristic score in `[0, 1]`
    pub confidence: f64,
}

/// Result of a successful chat-to-XML run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    /// Rendered contract XML
    pub xml: String,
    /// Final field values
    pub field_values: FieldValueMap,
    /// Extraction statistics
    pub stats: GenerationStats,
}
