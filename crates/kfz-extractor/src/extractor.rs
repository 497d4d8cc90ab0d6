//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::detector::FieldDetector;
use crate::detectors::{BrandDetector, MileageDetector, TariffClassDetector};
use crate::error::ExtractorError;
use crate::types::ExtractionResult;
use kfz_domain::FieldValueMap;
use tracing::{debug, info};

/// A detector paired with the confidence it contributes on a match
struct WeightedDetector {
    detector: Box<dyn FieldDetector>,
    weight: f64,
}

/// The Extractor turns chat text into field values.
///
/// Holds compiled patterns only; it keeps no state between calls and can be
/// shared freely across threads.
pub struct Extractor {
    pipeline: Vec<WeightedDetector>,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create an Extractor with the built-in detector pipeline:
    /// mileage, tariff class, brand.
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        let pipeline = vec![
            WeightedDetector {
                detector: Box::new(MileageDetector::new()?),
                weight: config.mileage_weight,
            },
            WeightedDetector {
                detector: Box::new(TariffClassDetector::new()?),
                weight: config.tariff_class_weight,
            },
            WeightedDetector {
                detector: Box::new(BrandDetector::new()?),
                weight: config.brand_weight,
            },
        ];

        Ok(Self { pipeline, config })
    }

    /// Create an Extractor with the default configuration
    pub fn with_defaults() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// Append a custom detector to the end of the pipeline.
    ///
    /// The weight is clamped to `[0, 1]` so confidence never decreases.
    pub fn with_detector(mut self, detector: impl FieldDetector + 'static, weight: f64) -> Self {
        self.pipeline.push(WeightedDetector {
            detector: Box::new(detector),
            weight: weight.clamp(0.0, 1.0),
        });
        self
    }

    /// Configuration this extractor was built with
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Names of the detectors, in pipeline order
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.pipeline.iter().map(|w| w.detector.name()).collect()
    }

    /// Extract field values from chat text.
    ///
    /// `existing` seeds the result; untouched fields keep their prior value
    /// and the caller's map is never modified. Empty or non-matching text
    /// returns the prior values with the base confidence.
    pub fn extract(&self, chat_text: &str, existing: Option<&FieldValueMap>) -> ExtractionResult {
        let prior = existing.cloned().unwrap_or_default();
        let mut field_values = prior.clone();
        let mut extracted_fields = Vec::new();
        let mut confidence = self.config.base_confidence;

        for stage in &self.pipeline {
            let Some(detection) = stage.detector.detect(chat_text, &prior) else {
                debug!("Detector '{}' found nothing", stage.detector.name());
                continue;
            };
            if detection.values.is_empty() {
                continue;
            }

            for (key, value) in detection.values {
                field_values.insert(key, value);
                if !extracted_fields.contains(&key) {
                    extracted_fields.push(key);
                }
            }
            confidence += stage.weight;
        }

        let confidence = confidence.clamp(0.0, 1.0);

        info!(
            "Extraction complete: {} field(s) extracted, confidence {:.2}",
            extracted_fields.len(),
            confidence
        );

        ExtractionResult {
            field_values,
            extracted_fields,
            confidence,
        }
    }
}
