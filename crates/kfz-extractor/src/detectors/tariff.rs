//! Tariff class (Typklasse) detector

use crate::detector::{Detection, FieldDetector};
use crate::detectors::parse_number;
use kfz_domain::{FieldKey, FieldValueMap};
use regex::Regex;
use tracing::debug;

// Liability class after a qualifier, optionally followed by the partial
// coverage class, either after a separator ("und", ",", "/", "&") or after
// its own qualifier ("TK", "Teilkasko").
const PATTERN: &str = concat!(
    r"(?i)\b(?:typklassen?(?:\s+(?:haftpflicht|kh))?|haftpflicht|kh)\s*[:=]?\s*(\d{1,2})\b",
    r"(?:(?:\s*(?:und|,|/|&)\s*(?:(?:teilkasko|tk)\s*[:=]?\s*)?|\s+(?:teilkasko|tk)\s*[:=]?\s*)(\d{1,2})\b)?",
);

/// Recognizes tariff classes such as "KH 12 und TK 8" or "Typklasse 15/18".
///
/// The first number is the liability class. The second, when present and
/// non-zero, is the partial-coverage class; otherwise only the liability
/// class is reported.
#[derive(Debug, Clone)]
pub struct TariffClassDetector {
    pattern: Regex,
}

impl TariffClassDetector {
    /// Compile the detector
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(PATTERN)?,
        })
    }
}

impl FieldDetector for TariffClassDetector {
    fn name(&self) -> &'static str {
        "tariff_class"
    }

    fn detect(&self, text: &str, _prior: &FieldValueMap) -> Option<Detection> {
        let caps = self.pattern.captures(text)?;
        let liability = parse_number(caps.get(1)?.as_str());
        let partial = caps.get(2).map(|m| parse_number(m.as_str())).unwrap_or(0);

        debug!(
            "Tariff class detector matched '{}' -> KH {}, TK {}",
            &caps[0], liability, partial
        );

        let detection = Detection::single(FieldKey::TypklasseHaftpflicht, liability);
        if partial != 0 {
            Some(detection.with(FieldKey::TypklasseTeilkasko, partial))
        } else {
            Some(detection)
        }
    }
}
