//! Field module - the closed set of known field keys

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one recognized contract data point.
///
/// The wire names are the camel-case keys the front-end and the backend XML
/// schema use:
/// - `jahreskilometer`: annual mileage in kilometres
/// - `fahrzeugmarke`: vehicle brand
/// - `typklasseHaftpflicht`: liability tariff class
/// - `typklasseTeilkasko`: partial-coverage tariff class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKey {
    /// Annual mileage (km per year)
    #[serde(rename = "jahreskilometer")]
    Jahreskilometer,

    /// Vehicle brand, stored uppercased
    #[serde(rename = "fahrzeugmarke")]
    Fahrzeugmarke,

    /// Liability tariff class
    #[serde(rename = "typklasseHaftpflicht")]
    TypklasseHaftpflicht,

    /// Partial-coverage tariff class
    #[serde(rename = "typklasseTeilkasko")]
    TypklasseTeilkasko,
}

impl FieldKey {
    /// Every known key, in registry order
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Jahreskilometer,
        FieldKey::Fahrzeugmarke,
        FieldKey::TypklasseHaftpflicht,
        FieldKey::TypklasseTeilkasko,
    ];

    /// Get the wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Jahreskilometer => "jahreskilometer",
            FieldKey::Fahrzeugmarke => "fahrzeugmarke",
            FieldKey::TypklasseHaftpflicht => "typklasseHaftpflicht",
            FieldKey::TypklasseTeilkasko => "typklasseTeilkasko",
        }
    }

    /// Parse a key from its wire name (exact match)
    pub fn parse(s: &str) -> Option<Self> {
        FieldKey::ALL.into_iter().find(|key| key.as_str() == s)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown field key: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_strings() {
        assert_eq!(FieldKey::Jahreskilometer.as_str(), "jahreskilometer");
        assert_eq!(FieldKey::Fahrzeugmarke.as_str(), "fahrzeugmarke");
        assert_eq!(FieldKey::TypklasseHaftpflicht.as_str(), "typklasseHaftpflicht");
        assert_eq!(FieldKey::TypklasseTeilkasko.as_str(), "typklasseTeilkasko");
    }

    #[test]
    fn test_parse_round_trip() {
        for key in FieldKey::ALL {
            assert_eq!(FieldKey::parse(key.as_str()), Some(key));
            assert_eq!(key.to_string().parse::<FieldKey>(), Ok(key));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(FieldKey::parse("Jahreskilometer"), None);
        assert_eq!(FieldKey::parse("typklassehaftpflicht"), None);
        assert!("kennzeichen".parse::<FieldKey>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&FieldKey::TypklasseHaftpflicht).unwrap();
        assert_eq!(json, "\"typklasseHaftpflicht\"");

        let key: FieldKey = serde_json::from_str("\"fahrzeugmarke\"").unwrap();
        assert_eq!(key, FieldKey::Fahrzeugmarke);
    }
}
