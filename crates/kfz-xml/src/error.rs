//! Error types for reading contract XML

use thiserror::Error;

/// Errors raised while reading a rendered document back.
///
/// Rendering itself never fails.
#[derive(Error, Debug)]
pub enum XmlError {
    /// The document has no data section
    #[error("Missing <{0}> section")]
    MissingSection(&'static str),

    /// An element was opened with one name and closed with another
    #[error("Mismatched element: <{open}> closed by </{close}>")]
    MismatchedElement {
        /// Opening tag name
        open: String,
        /// Closing tag name
        close: String,
    },

    /// Internal pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
