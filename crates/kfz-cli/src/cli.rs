//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kfz CLI - Turn vehicle insurance chat text into contract XML.
#[derive(Debug, Parser)]
#[command(name = "kfz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Extractor configuration file (TOML)
    #[arg(short, long, global = true, env = "KFZ_EXTRACTOR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract contract fields from chat text and print the result
    Extract(ExtractArgs),

    /// List the recognized contract fields
    Fields(FieldsArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Chat text, or `-` to read it from stdin
    pub text: String,

    /// JSON file with field values captured earlier
    #[arg(short, long)]
    pub existing: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "xml")]
    pub format: ExtractFormat,
}

/// Arguments for the fields command.
#[derive(Debug, Parser)]
pub struct FieldsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: FieldsFormat,
}

/// Output formats for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExtractFormat {
    /// Contract XML document
    Xml,
    /// Field values, statistics and XML as JSON
    Json,
}

/// Output formats for the field listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FieldsFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}
