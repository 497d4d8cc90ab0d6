//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while building an extractor.
///
/// Running an extraction never fails; these only surface from construction
/// and configuration loading.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A detector pattern failed to compile
    #[error("Invalid detector pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
