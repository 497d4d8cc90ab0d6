//! Extract command implementation.

use crate::cli::{ExtractArgs, ExtractFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use kfz_assistant::{Assistant, ChatRequest};
use kfz_domain::FieldValueMap;
use std::fs;
use std::io::{Read, Write};

/// Execute the extract command.
///
/// The document goes to `out`; in XML mode a status line goes to stderr so
/// the output stays pipeable.
pub fn execute_extract<R: Read, W: Write>(
    args: ExtractArgs,
    assistant: &Assistant,
    formatter: &Formatter,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    // Read text from the argument or stdin
    let chat_text = if args.text == "-" {
        let mut buffer = String::new();
        input.read_to_string(&mut buffer)?;
        buffer
    } else {
        args.text
    };

    let mut request = ChatRequest::new(chat_text);
    if let Some(path) = args.existing {
        let json_data = fs::read_to_string(&path)?;
        let existing: FieldValueMap = serde_json::from_str(&json_data).map_err(|e| {
            CliError::InvalidInput(format!(
                "{} is not a JSON object of field values: {}",
                path.display(),
                e
            ))
        })?;
        request = request.with_existing(existing);
    }

    let generation = assistant.generate(&request)?;

    match args.format {
        ExtractFormat::Xml => {
            writeln!(out, "{}", generation.xml)?;
            eprintln!("{}", formatter.extraction_status(&generation.stats));
        }
        ExtractFormat::Json => {
            writeln!(out, "{}", formatter.generation_json(&generation)?)?;
        }
    }

    Ok(())
}
