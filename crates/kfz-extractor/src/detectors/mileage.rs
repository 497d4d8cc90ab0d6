//! Annual mileage detector

use crate::detector::{Detection, FieldDetector};
use crate::detectors::parse_number;
use kfz_domain::{FieldKey, FieldValueMap};
use regex::Regex;
use tracing::debug;

const PATTERN: &str = r"(?i)\b(\d[\d.]*)\s*(?:km|kilometern?)\s*(?:pro\s+jahr|im\s+jahr|je\s+jahr|per\s+jahr|/\s*jahr|jährlich|p\.\s?a\.|per\s+year|a\s+year|annually)";

/// Recognizes phrases like "15000 km pro Jahr" or "20.000 Kilometer jährlich"
/// and records the number under [`FieldKey::Jahreskilometer`].
#[derive(Debug, Clone)]
pub struct MileageDetector {
    pattern: Regex,
}

impl MileageDetector {
    /// Compile the detector
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(PATTERN)?,
        })
    }
}

impl FieldDetector for MileageDetector {
    fn name(&self) -> &'static str {
        "mileage"
    }

    fn detect(&self, text: &str, _prior: &FieldValueMap) -> Option<Detection> {
        let caps = self.pattern.captures(text)?;
        let km = parse_number(caps.get(1)?.as_str());
        debug!("Mileage detector matched '{}' -> {}", &caps[0], km);
        Some(Detection::single(FieldKey::Jahreskilometer, km))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kfz_domain::FieldValue;

    fn detect(text: &str) -> Option<i64> {
        let detector = MileageDetector::new().unwrap();
        detector
            .detect(text, &FieldValueMap::new())
            .and_then(|d| d.values.first().and_then(|(_, v)| v.as_integer()))
    }

    #[test]
    fn test_pro_jahr() {
        assert_eq!(detect("Ich fahre 15000 km pro Jahr"), Some(15000));
    }

    #[test]
    fn test_accepted_phrasings() {
        assert_eq!(detect("12000 km im Jahr"), Some(12000));
        assert_eq!(detect("8000km/Jahr"), Some(8000));
        assert_eq!(detect("30000 Kilometer jährlich"), Some(30000));
        assert_eq!(detect("25000 Kilometern je Jahr"), Some(25000));
        assert_eq!(detect("18000 km p.a."), Some(18000));
        assert_eq!(detect("10000 km per year"), Some(10000));
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(detect("ca. 15.000 km pro Jahr"), Some(15000));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(detect("20000 KM PRO JAHR"), Some(20000));
    }

    #[test]
    fn test_requires_per_year_phrase() {
        assert_eq!(detect("Kilometerstand 45000 km"), None);
        assert_eq!(detect("15000 pro Jahr"), None);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(detect("10000 km pro Jahr, später 20000 km pro Jahr"), Some(10000));
    }

    #[test]
    fn test_overflowing_number_defaults_to_zero() {
        assert_eq!(detect("99999999999999999999999 km pro Jahr"), Some(0));
    }

    #[test]
    fn test_detection_key() {
        let detector = MileageDetector::new().unwrap();
        let detection = detector.detect("5000 km pro Jahr", &FieldValueMap::new()).unwrap();
        assert_eq!(
            detection.values,
            vec![(FieldKey::Jahreskilometer, FieldValue::Integer(5000))]
        );
    }
}
