//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use kfz_assistant::{Generation, GenerationStats};
use kfz_domain::FieldDefinition;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

#[derive(Serialize)]
struct FieldList<'a> {
    fields: &'a [FieldDefinition],
}

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a generation as pretty JSON.
    pub fn generation_json(&self, generation: &Generation) -> Result<String> {
        Ok(serde_json::to_string_pretty(generation)?)
    }

    /// One-line summary of an extraction.
    pub fn extraction_status(&self, stats: &GenerationStats) -> String {
        if stats.extracted_fields.is_empty() {
            return self.warning(&format!(
                "No new fields recognized ({} field(s) total)",
                stats.field_count
            ));
        }

        let keys: Vec<&str> = stats.extracted_fields.iter().map(|k| k.as_str()).collect();
        self.success(&format!(
            "Extracted {} ({} field(s) total, confidence {:.0}%)",
            keys.join(", "),
            stats.field_count,
            stats.confidence * 100.0
        ))
    }

    /// Format field definitions as a table.
    pub fn fields_table(&self, definitions: &[FieldDefinition]) -> String {
        if definitions.is_empty() {
            return self.colorize("No fields defined.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Key", "Label", "Type", "Description"]);

        for def in definitions {
            builder.push_record([
                def.key.as_str(),
                def.label,
                def.value_type.as_str(),
                def.description,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format field definitions as pretty JSON.
    pub fn fields_json(&self, definitions: &[FieldDefinition]) -> Result<String> {
        Ok(serde_json::to_string_pretty(&FieldList {
            fields: definitions,
        })?)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
