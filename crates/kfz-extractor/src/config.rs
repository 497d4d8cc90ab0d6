//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Confidence reported before any detector has matched
    pub base_confidence: f64,

    /// Confidence added when the annual mileage is recognized
    pub mileage_weight: f64,

    /// Confidence added when a tariff class is recognized
    pub tariff_class_weight: f64,

    /// Confidence added when a vehicle brand is recognized
    pub brand_weight: f64,

    /// Maximum accepted chat text length (characters)
    pub max_text_length: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.base_confidence) {
            return Err(format!(
                "base_confidence {} out of range [0.0, 1.0]",
                self.base_confidence
            ));
        }
        for (name, weight) in [
            ("mileage_weight", self.mileage_weight),
            ("tariff_class_weight", self.tariff_class_weight),
            ("brand_weight", self.brand_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(format!("{} {} out of range [0.0, 1.0]", name, weight));
            }
        }
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            base_confidence: 0.5,
            mileage_weight: 0.2,
            tariff_class_weight: 0.3,
            brand_weight: 0.2,
            max_text_length: 10_000,
        }
    }
}
