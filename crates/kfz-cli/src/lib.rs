//! Kfz CLI library.
//!
//! This library provides the command-line front end for the chat-to-XML
//! assistant: argument parsing, extractor configuration loading, command
//! execution and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::load_extractor_config;
pub use error::{CliError, Result};
pub use output::Formatter;
