//! Fields command implementation.

use crate::cli::{FieldsArgs, FieldsFormat};
use crate::error::Result;
use crate::output::Formatter;
use kfz_assistant::Assistant;
use std::io::Write;

/// Execute the fields command.
pub fn execute_fields<W: Write>(
    args: FieldsArgs,
    assistant: &Assistant,
    formatter: &Formatter,
    out: &mut W,
) -> Result<()> {
    let definitions = assistant.field_definitions();
    let rendered = match args.format {
        FieldsFormat::Table => formatter.fields_table(definitions),
        FieldsFormat::Json => formatter.fields_json(definitions)?,
    };

    writeln!(out, "{}", rendered)?;
    Ok(())
}
