//! Command execution tests against in-memory stdin/stdout.

use kfz_assistant::Assistant;
use kfz_cli::cli::{ExtractArgs, ExtractFormat, FieldsArgs, FieldsFormat};
use kfz_cli::commands::{execute_extract, execute_fields};
use kfz_cli::{CliError, Formatter};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn extract(args: ExtractArgs, stdin: &str) -> kfz_cli::Result<String> {
    let assistant = Assistant::with_defaults().unwrap();
    let formatter = Formatter::new(false);
    let mut out = Vec::new();
    execute_extract(args, &assistant, &formatter, Cursor::new(stdin.to_string()), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn args(text: &str, format: ExtractFormat) -> ExtractArgs {
    ExtractArgs {
        text: text.to_string(),
        existing: None,
        format,
    }
}

#[test]
fn test_extract_xml() {
    let output = extract(args("15000 km pro Jahr, BMW, KH 12 und TK 8", ExtractFormat::Xml), "").unwrap();

    assert!(output.starts_with("<?xml"));
    assert!(output.contains("<fahrzeugmarke>BMW</fahrzeugmarke>"));
    assert!(output.contains("<jahreskilometer>15000</jahreskilometer>"));
    assert!(output.ends_with("</KfzVertrag>\n"));
}

#[test]
fn test_extract_json() {
    let output = extract(args("Audi, TK 9", ExtractFormat::Json), "").unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["fieldValues"]["fahrzeugmarke"], "AUDI");
    assert_eq!(value["stats"]["extractedFields"][0], "fahrzeugmarke");
    assert!(value["xml"].as_str().unwrap().contains("<KfzVertrag>"));
}

#[test]
fn test_extract_reads_stdin() {
    let output = extract(args("-", ExtractFormat::Json), "20.000 km pro Jahr\n").unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["fieldValues"]["jahreskilometer"], 20000);
}

#[test]
fn test_extract_with_existing_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"typklasseHaftpflicht": 15, "kennzeichen": "B-AB 12"}}"#).unwrap();

    let mut extract_args = args("VW", ExtractFormat::Json);
    extract_args.existing = Some(file.path().to_path_buf());

    let output = extract(extract_args, "").unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["fieldValues"]["typklasseHaftpflicht"], 15);
    assert_eq!(value["fieldValues"]["fahrzeugmarke"], "VW");
    assert_eq!(value["fieldValues"]["kennzeichen"], "B-AB 12");
    assert_eq!(value["stats"]["fieldCount"], 3);
}

#[test]
fn test_extract_rejects_non_object_existing_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[1, 2, 3]").unwrap();

    let mut extract_args = args("VW", ExtractFormat::Xml);
    extract_args.existing = Some(file.path().to_path_buf());

    let result = extract(extract_args, "");
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}

#[test]
fn test_extract_blank_stdin() {
    let result = extract(args("-", ExtractFormat::Xml), "  \n");
    match result {
        Err(CliError::Assistant(e)) => assert!(e.is_validation()),
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn test_fields_table_and_json() {
    let assistant = Assistant::with_defaults().unwrap();
    let formatter = Formatter::new(false);

    let mut out = Vec::new();
    execute_fields(
        FieldsArgs {
            format: FieldsFormat::Table,
        },
        &assistant,
        &formatter,
        &mut out,
    )
    .unwrap();
    let table = String::from_utf8(out).unwrap();
    assert!(table.contains("fahrzeugmarke"));
    assert!(table.contains("Typklasse Teilkasko"));

    let mut out = Vec::new();
    execute_fields(
        FieldsArgs {
            format: FieldsFormat::Json,
        },
        &assistant,
        &formatter,
        &mut out,
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["fields"].as_array().unwrap().len(), 4);
}
