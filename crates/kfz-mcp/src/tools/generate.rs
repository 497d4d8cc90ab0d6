//! Generate tool - Chat text to contract XML

use crate::protocol::ToolCallResult;
use kfz_assistant::{summarize_generation, Assistant, ChatRequest};
use kfz_domain::FieldValueMap;
use serde::Deserialize;
use tracing::warn;

/// Parameters for XML generation
#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    /// Free-form chat text
    #[serde(default, alias = "chatText")]
    pub chat_text: Option<String>,
    /// Values captured earlier in the conversation
    #[serde(default, alias = "existingData")]
    pub existing_data: Option<FieldValueMap>,
}

/// Handle generate_xml_from_chat tool invocation
///
/// Missing chat text and other input problems are reported as an
/// error-flagged text block rather than a protocol error.
pub fn handle_generate(assistant: &Assistant, params: GenerateParams) -> ToolCallResult {
    let request = ChatRequest {
        chat_text: params.chat_text,
        existing_data: params.existing_data,
    };

    match assistant.generate(&request) {
        Ok(generation) => ToolCallResult::text(summarize_generation(&generation)),
        Err(e) if e.is_validation() => {
            warn!("Tool input rejected: {}", e);
            ToolCallResult::error(format!("Validation error: {}", e))
        }
        Err(e) => ToolCallResult::error(format!("Error generating XML: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_params_deserialize() {
        let json = r#"{
            "chat_text": "Audi, 20000 km pro Jahr",
            "existing_data": {"typklasseHaftpflicht": 15}
        }"#;

        let params: GenerateParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.chat_text.as_deref(), Some("Audi, 20000 km pro Jahr"));
        assert_eq!(params.existing_data.map(|d| d.len()), Some(1));
    }

    #[test]
    fn test_camel_case_alias() {
        let params: GenerateParams = serde_json::from_str(r#"{"chatText": "VW"}"#).unwrap();
        assert_eq!(params.chat_text.as_deref(), Some("VW"));
    }

    #[test]
    fn test_handle_generate() {
        let assistant = Assistant::with_defaults().unwrap();
        let params = GenerateParams {
            chat_text: Some("KH 12 und TK 8".to_string()),
            existing_data: None,
        };

        let result = handle_generate(&assistant, params);
        assert!(!result.is_error);
        assert!(result.content[0].text.contains("<typklasseTeilkasko>8</typklasseTeilkasko>"));
    }

    #[test]
    fn test_missing_chat_text_flags_error() {
        let assistant = Assistant::with_defaults().unwrap();
        let params = GenerateParams {
            chat_text: None,
            existing_data: None,
        };

        let result = handle_generate(&assistant, params);
        assert!(result.is_error);
        assert!(result.content[0].text.starts_with("Validation error"));
        assert!(!result.content[0].text.contains("<?xml"));
    }
}
