//! Kfz API
//!
//! HTTP boundary for the chat-to-XML assistant. The browser front-end posts
//! chat text (and the values captured so far) and receives the contract XML
//! together with extraction statistics.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ApiConfig;
use handlers::{create_router, AppState};
use kfz_assistant::{Assistant, AssistantError};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Assistant could not be built
    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application state from configuration
pub fn build_state(config: &ApiConfig) -> Result<AppState, ServerError> {
    let assistant = Assistant::from_config(config.extractor.clone())?;
    Ok(AppState {
        assistant: Arc::new(assistant),
    })
}

/// Start the API HTTP server
///
/// Builds the assistant from configuration, then binds and serves until the
/// process is stopped.
pub async fn start_server(config: ApiConfig) -> Result<(), ServerError> {
    info!("Starting Kfz API");
    info!("Bind address: {}", config.bind_addr());
    info!(
        "Extractor: base confidence {:.2}, max text length {}",
        config.extractor.base_confidence, config.extractor.max_text_length
    );

    let state = build_state(&config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("API listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state_from_default_config() {
        let state = build_state(&ApiConfig::default_config()).unwrap();
        assert_eq!(state.assistant.field_definitions().len(), 4);
    }
}
