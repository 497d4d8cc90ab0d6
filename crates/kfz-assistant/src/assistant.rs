//! Assistant pipeline

use crate::error::AssistantError;
use crate::types::{ChatRequest, Generation, GenerationStats};
use kfz_domain::{field_definitions, FieldDefinition, FieldValueMap};
use kfz_extractor::{Extractor, ExtractorConfig};
use kfz_xml::XmlEmitter;
use tracing::{info, warn};

/// Validates chat requests, extracts field values and renders XML
pub struct Assistant {
    extractor: Extractor,
    emitter: XmlEmitter,
}

impl Assistant {
    /// Create an assistant from its parts
    pub fn new(extractor: Extractor, emitter: XmlEmitter) -> Self {
        Self { extractor, emitter }
    }

    /// Create an assistant from an extractor configuration
    pub fn from_config(config: ExtractorConfig) -> Result<Self, AssistantError> {
        Ok(Self::new(Extractor::new(config)?, XmlEmitter::new()))
    }

    /// Create an assistant with default settings
    pub fn with_defaults() -> Result<Self, AssistantError> {
        Self::from_config(ExtractorConfig::default())
    }

    /// The extractor used by this assistant
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Run the chat-to-XML pipeline.
    ///
    /// Fails only when the chat text is missing, blank or over the length
    /// limit; in that case no XML is produced.
    pub fn generate(&self, request: &ChatRequest) -> Result<Generation, AssistantError> {
        let chat_text = request
            .chat_text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                warn!("Rejected request without chat text");
                AssistantError::MissingChatText
            })?;

        let max = self.extractor.config().max_text_length;
        let length = chat_text.chars().count();
        if length > max {
            warn!("Rejected chat text of {} chars (max {})", length, max);
            return Err(AssistantError::TextTooLong(length, max));
        }

        // Known fields are held in their registry type so the XML reads back
        // to the same values
        let existing = request.existing_data.clone().map(FieldValueMap::normalized);
        let result = self.extractor.extract(chat_text, existing.as_ref());
        let xml = self.emitter.render(&result.field_values);

        info!(
            "Generated XML with {} field(s), {} extracted",
            result.field_values.len(),
            result.extracted_fields.len()
        );

        Ok(Generation {
            xml,
            stats: GenerationStats {
                field_count: result.field_values.len(),
                extracted_fields: result.extracted_fields,
                confidence: result.confidence,
            },
            field_values: result.field_values,
        })
    }

    /// Known field definitions, in registry order
    pub fn field_definitions(&self) -> &'static [FieldDefinition] {
        field_definitions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kfz_domain::{FieldKey, FieldValue, FieldValueMap};

    #[test]
    fn test_generate() {
        let assistant = Assistant::with_defaults().unwrap();
        let generation = assistant
            .generate(&ChatRequest::new("15000 km pro Jahr, BMW, KH 12 und TK 8"))
            .unwrap();

        assert!(generation.xml.contains("<jahreskilometer>15000</jahreskilometer>"));
        assert!(generation.xml.contains("<typklasseTeilkasko>8</typklasseTeilkasko>"));
        assert_eq!(generation.stats.field_count, 4);
        assert_eq!(generation.stats.extracted_fields.len(), 4);
        assert_eq!(generation.stats.confidence, 1.0);
    }

    #[test]
    fn test_missing_text() {
        let assistant = Assistant::with_defaults().unwrap();
        let err = assistant.generate(&ChatRequest::default()).unwrap_err();
        assert!(matches!(err, AssistantError::MissingChatText));
    }

    #[test]
    fn test_blank_text() {
        let assistant = Assistant::with_defaults().unwrap();
        let err = assistant.generate(&ChatRequest::new("   \n")).unwrap_err();
        assert!(matches!(err, AssistantError::MissingChatText));
    }

    #[test]
    fn test_text_too_long() {
        let config = ExtractorConfig {
            max_text_length: 10,
            ..Default::default()
        };
        let assistant = Assistant::from_config(config).unwrap();
        let err = assistant
            .generate(&ChatRequest::new("15000 km pro Jahr"))
            .unwrap_err();
        assert!(matches!(err, AssistantError::TextTooLong(17, 10)));
    }

    #[test]
    fn test_field_count_includes_existing() {
        let assistant = Assistant::with_defaults().unwrap();
        let mut existing = FieldValueMap::new();
        existing.insert(FieldKey::TypklasseHaftpflicht, 16);

        let generation = assistant
            .generate(&ChatRequest::new("VW Passat").with_existing(existing))
            .unwrap();

        assert_eq!(generation.stats.field_count, 2);
        assert_eq!(generation.stats.extracted_fields, vec![FieldKey::Fahrzeugmarke]);
        assert_eq!(
            generation.field_values.get(FieldKey::TypklasseHaftpflicht),
            Some(&FieldValue::Integer(16))
        );
    }

    #[test]
    fn test_field_definitions() {
        let assistant = Assistant::with_defaults().unwrap();
        assert_eq!(assistant.field_definitions().len(), 4);
    }
}
