//! Error types for the assistant pipeline

use kfz_extractor::ExtractorError;
use thiserror::Error;

/// Errors surfaced by [`Assistant`](crate::Assistant)
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Chat text missing or blank
    #[error("chatText is required and must not be empty")]
    MissingChatText,

    /// Chat text longer than the configured limit
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Extractor could not be built
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),
}

impl AssistantError {
    /// Whether the error was caused by caller input rather than the service
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AssistantError::MissingChatText | AssistantError::TextTooLong(..)
        )
    }
}
