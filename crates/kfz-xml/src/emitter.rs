//! Contract XML emitter

use crate::escape::escape;
use chrono::{DateTime, SecondsFormat, Utc};
use kfz_domain::{field_definitions, FieldValueMap};
use std::fmt::{self, Write};
use tracing::debug;

/// Root element of the document
pub const ROOT_ELEMENT: &str = "KfzVertrag";

/// Element holding one child per known field
pub const DATA_ELEMENT: &str = "Fahrzeugdaten";

/// Element holding timestamp and provenance
pub const METADATA_ELEMENT: &str = "Metadaten";

/// Schema version written to the metadata section
pub const SCHEMA_VERSION: &str = "1.0";

/// Renders field values into contract XML
#[derive(Debug, Clone)]
pub struct XmlEmitter {
    source: String,
}

impl Default for XmlEmitter {
    fn default() -> Self {
        Self {
            source: "chat".to_string(),
        }
    }
}

impl XmlEmitter {
    /// Emitter tagging documents with the default `chat` source
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the source written to `<quelle>`
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Render with the current time as the creation timestamp
    pub fn render(&self, values: &FieldValueMap) -> String {
        self.render_at(values, Utc::now())
    }

    /// Render with an explicit creation timestamp
    pub fn render_at(&self, values: &FieldValueMap, created_at: DateTime<Utc>) -> String {
        let mut xml = String::with_capacity(512);
        // fmt::Write for String never returns an error
        let _ = self.write_document(&mut xml, values, created_at);

        let skipped = values.unknown_keys().count();
        if skipped > 0 {
            debug!("Skipped {} key(s) outside the contract schema", skipped);
        }

        xml
    }

    fn write_document(
        &self,
        xml: &mut String,
        values: &FieldValueMap,
        created_at: DateTime<Utc>,
    ) -> fmt::Result {
        writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(xml, "<{}>", ROOT_ELEMENT)?;

        writeln!(xml, "  <{}>", DATA_ELEMENT)?;
        for def in field_definitions() {
            let key = def.key.as_str();
            let value = values
                .get(def.key)
                .map(|v| escape(&v.to_string()))
                .unwrap_or_default();
            writeln!(xml, "    <{key}>{value}</{key}>")?;
        }
        writeln!(xml, "  </{}>", DATA_ELEMENT)?;

        writeln!(xml, "  <{}>", METADATA_ELEMENT)?;
        writeln!(
            xml,
            "    <erstelltAm>{}</erstelltAm>",
            created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        )?;
        writeln!(xml, "    <quelle>{}</quelle>", escape(&self.source))?;
        writeln!(xml, "    <version>{}</version>", SCHEMA_VERSION)?;
        writeln!(xml, "  </{}>", METADATA_ELEMENT)?;

        write!(xml, "</{}>", ROOT_ELEMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kfz_domain::{FieldKey, FieldValue};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_full_document() {
        let mut values = FieldValueMap::new();
        values.insert(FieldKey::Jahreskilometer, 15000);
        values.insert(FieldKey::Fahrzeugmarke, "BMW");
        values.insert(FieldKey::TypklasseHaftpflicht, 12);
        values.insert(FieldKey::TypklasseTeilkasko, 8);

        let xml = XmlEmitter::new().render_at(&values, fixed_time());

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<KfzVertrag>
  <Fahrzeugdaten>
    <jahreskilometer>15000</jahreskilometer>
    <fahrzeugmarke>BMW</fahrzeugmarke>
    <typklasseHaftpflicht>12</typklasseHaftpflicht>
    <typklasseTeilkasko>8</typklasseTeilkasko>
  </Fahrzeugdaten>
  <Metadaten>
    <erstelltAm>2026-10-18T09:30:00.000Z</erstelltAm>
    <quelle>chat</quelle>
    <version>1.0</version>
  </Metadaten>
</KfzVertrag>"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let xml = XmlEmitter::new().render_at(&FieldValueMap::new(), fixed_time());
        assert!(xml.contains("<jahreskilometer></jahreskilometer>"));
        assert!(xml.contains("<fahrzeugmarke></fahrzeugmarke>"));
        assert!(xml.contains("<typklasseHaftpflicht></typklasseHaftpflicht>"));
        assert!(xml.contains("<typklasseTeilkasko></typklasseTeilkasko>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut values = FieldValueMap::new();
        values.insert(FieldKey::Fahrzeugmarke, "<b>A&B</b>");
        let xml = XmlEmitter::new().render_at(&values, fixed_time());
        assert!(xml.contains("<fahrzeugmarke>&lt;b&gt;A&amp;B&lt;/b&gt;</fahrzeugmarke>"));
    }

    #[test]
    fn test_control_characters_not_emitted() {
        let mut values = FieldValueMap::new();
        values.insert(FieldKey::Fahrzeugmarke, "A\u{1}B");
        let xml = XmlEmitter::new().render_at(&values, fixed_time());

        assert!(!xml.contains('\u{1}'));
        assert!(xml.contains("<fahrzeugmarke>AB</fahrzeugmarke>"));
        assert!(xml.chars().all(crate::is_xml_char));
    }

    #[test]
    fn test_unknown_keys_not_emitted() {
        let values: FieldValueMap = [("kennzeichen".to_string(), FieldValue::from("B-AB 12"))]
            .into_iter()
            .collect();
        let xml = XmlEmitter::new().render_at(&values, fixed_time());
        assert!(!xml.contains("kennzeichen"));
    }

    #[test]
    fn test_boolean_value() {
        let mut values = FieldValueMap::new();
        values.insert(FieldKey::Fahrzeugmarke, true);
        let xml = XmlEmitter::new().render_at(&values, fixed_time());
        assert!(xml.contains("<fahrzeugmarke>true</fahrzeugmarke>"));
    }

    #[test]
    fn test_custom_source() {
        let xml = XmlEmitter::new()
            .with_source("mcp")
            .render_at(&FieldValueMap::new(), fixed_time());
        assert!(xml.contains("<quelle>mcp</quelle>"));
    }

    #[test]
    fn test_current_timestamp_is_rfc3339() {
        let before = Utc::now();
        let xml = XmlEmitter::new().render(&FieldValueMap::new());
        let start = xml.find("<erstelltAm>").unwrap() + "<erstelltAm>".len();
        let end = xml.find("</erstelltAm>").unwrap();
        let parsed = DateTime::parse_from_rfc3339(&xml[start..end]).unwrap();
        assert!(parsed.with_timezone(&Utc) >= before - chrono::Duration::seconds(1));
    }
}
