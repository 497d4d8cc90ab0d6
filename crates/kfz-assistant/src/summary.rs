//! Human-readable text summaries for tool responses

use crate::types::Generation;
use kfz_domain::FieldDefinition;
use std::fmt::Write;

/// Summarize a generation: statistics first, then the XML
pub fn summarize_generation(generation: &Generation) -> String {
    let stats = &generation.stats;
    let extracted = if stats.extracted_fields.is_empty() {
        "none".to_string()
    } else {
        stats
            .extracted_fields
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut out = String::new();
    out.push_str("XML generated successfully.\n\n");
    let _ = writeln!(out, "Fields: {}", stats.field_count);
    let _ = writeln!(out, "Extracted: {}", extracted);
    let _ = writeln!(out, "Confidence: {:.0}%", stats.confidence * 100.0);
    out.push('\n');
    out.push_str(&generation.xml);
    out
}

/// List field keys with their descriptions, one per line
pub fn summarize_field_definitions(definitions: &[FieldDefinition]) -> String {
    let mut out = format!("Available fields ({}):\n\n", definitions.len());
    for def in definitions {
        let _ = writeln!(
            out,
            "- {} ({}, {}): {}",
            def.key,
            def.label,
            def.value_type.as_str(),
            def.description
        );
    }
    out
}
