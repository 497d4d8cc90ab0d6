//! Vehicle brand detector

use crate::detector::{Detection, FieldDetector};
use kfz_domain::{FieldKey, FieldValueMap};
use regex::Regex;
use tracing::debug;

/// Brand tokens recognized in chat text.
///
/// Multi-word or hyphenated names come before their prefixes so the longer
/// token wins at the same position.
pub const KNOWN_BRANDS: &[&str] = &[
    "BMW",
    "MERCEDES-BENZ",
    "MERCEDES",
    "AUDI",
    "VOLKSWAGEN",
    "VW",
    "OPEL",
    "FORD",
    "PORSCHE",
    "SKODA",
    "SEAT",
    "RENAULT",
    "PEUGEOT",
    "CITROEN",
    "FIAT",
    "TOYOTA",
    "HYUNDAI",
    "KIA",
    "MAZDA",
    "NISSAN",
    "VOLVO",
];

/// Recognizes a vehicle brand from [`KNOWN_BRANDS`] (case-insensitive, whole
/// word) and stores it uppercased under [`FieldKey::Fahrzeugmarke`].
#[derive(Debug, Clone)]
pub struct BrandDetector {
    pattern: Regex,
}

impl BrandDetector {
    /// Compile the detector
    pub fn new() -> Result<Self, regex::Error> {
        let alternation = KNOWN_BRANDS
            .iter()
            .map(|brand| regex::escape(brand))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))?;
        Ok(Self { pattern })
    }
}

impl FieldDetector for BrandDetector {
    fn name(&self) -> &'static str {
        "brand"
    }

    fn detect(&self, text: &str, _prior: &FieldValueMap) -> Option<Detection> {
        let m = self.pattern.find(text)?;
        let brand = m.as_str().to_uppercase();
        debug!("Brand detector matched '{}' -> {}", m.as_str(), brand);
        Some(Detection::single(FieldKey::Fahrzeugmarke, brand))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<String> {
        let detector = BrandDetector::new().unwrap();
        detector
            .detect(text, &FieldValueMap::new())
            .and_then(|d| d.values.first().and_then(|(_, v)| v.as_text().map(String::from)))
    }

    #[test]
    fn test_uppercases_brand() {
        assert_eq!(detect("Ein bmw 320d"), Some("BMW".to_string()));
        assert_eq!(detect("Audi A4 Avant"), Some("AUDI".to_string()));
    }

    #[test]
    fn test_longest_token_wins() {
        assert_eq!(detect("Mercedes-Benz Sprinter"), Some("MERCEDES-BENZ".to_string()));
        assert_eq!(detect("Mercedes Vito"), Some("MERCEDES".to_string()));
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(detect("Tesla Model 3"), None);
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(detect("Fordern wir die Unterlagen an"), None);
        assert_eq!(detect("Kiara fährt"), None);
    }

    #[test]
    fn test_first_brand_in_text_wins() {
        assert_eq!(detect("Opel oder VW?"), Some("OPEL".to_string()));
    }
}
