//! Read the data section of a contract document back into field values

use crate::emitter::DATA_ELEMENT;
use crate::error::XmlError;
use crate::escape::unescape;
use kfz_domain::{field_definition, FieldKey, FieldValue, FieldValueMap, ValueType};
use regex::Regex;

/// Parse the `<Fahrzeugdaten>` section of a document produced by
/// [`XmlEmitter`](crate::XmlEmitter).
///
/// Empty elements are treated as missing. Known fields are typed according to
/// their definition; other elements become integers, booleans or text,
/// whichever parses first.
pub fn parse_fields(xml: &str) -> Result<FieldValueMap, XmlError> {
    let section = Regex::new(&format!(r"(?s)<{0}>(.*?)</{0}>", DATA_ELEMENT))?;
    let element = Regex::new(r"(?s)<([A-Za-z][A-Za-z0-9_]*)>(.*?)</([A-Za-z][A-Za-z0-9_]*)>")?;

    let body = section
        .captures(xml)
        .and_then(|caps| caps.get(1))
        .ok_or(XmlError::MissingSection(DATA_ELEMENT))?
        .as_str();

    let mut entries = Vec::new();
    for caps in element.captures_iter(body) {
        let open = &caps[1];
        let close = &caps[3];
        if open != close {
            return Err(XmlError::MismatchedElement {
                open: open.to_string(),
                close: close.to_string(),
            });
        }

        let raw = unescape(&caps[2]);
        if raw.is_empty() {
            continue;
        }

        let value = match FieldKey::parse(open) {
            Some(key) => typed_value(field_definition(key).value_type, raw),
            None => infer_value(raw),
        };
        entries.push((open.to_string(), value));
    }

    Ok(entries.into_iter().collect())
}

fn typed_value(value_type: ValueType, raw: String) -> FieldValue {
    match value_type {
        ValueType::Integer => raw.parse().map(FieldValue::Integer).unwrap_or(FieldValue::Text(raw)),
        ValueType::Boolean => raw.parse().map(FieldValue::Boolean).unwrap_or(FieldValue::Text(raw)),
        ValueType::Text => FieldValue::Text(raw),
    }
}

fn infer_value(raw: String) -> FieldValue {
    if let Ok(n) = raw.parse::<i64>() {
        return FieldValue::Integer(n);
    }
    if let Ok(b) = raw.parse::<bool>() {
        return FieldValue::Boolean(b);
    }
    FieldValue::Text(raw)
}
