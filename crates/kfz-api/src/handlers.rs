//! HTTP request handlers for the API service.
//!
//! Implements XML generation, field listing and health check endpoints using axum.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use kfz_assistant::{Assistant, AssistantError, ChatRequest, GenerationStats};
use kfz_domain::{FieldDefinition, FieldValueMap};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Chat-to-XML pipeline
    pub assistant: Arc<Assistant>,
}

/// Successful XML generation response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateXmlResponse {
    /// Always `true`
    pub success: bool,
    /// Rendered contract XML
    pub xml: String,
    /// Final field values
    pub field_values: FieldValueMap,
    /// Extraction statistics
    pub stats: GenerationStats,
}

/// Field listing response
#[derive(Debug, Serialize)]
pub struct FieldsResponse {
    /// Known fields, in registry order
    pub fields: &'static [FieldDefinition],
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Server version
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Request body could not be read as JSON
    BadRequest(String),
    /// Pipeline error
    Assistant(AssistantError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Assistant(e) if e.is_validation() => {
                warn!("Validation failed: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            AppError::Assistant(e) => {
                error!("Generation failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });
        (status, body).into_response()
    }
}

impl From<AssistantError> for AppError {
    fn from(e: AssistantError) -> Self {
        AppError::Assistant(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

/// POST /api/generate-xml - Extract field values from chat text and render XML
async fn generate_xml(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<GenerateXmlResponse>, AppError> {
    let Json(request) = payload?;
    let generation = state.assistant.generate(&request)?;

    Ok(Json(GenerateXmlResponse {
        success: true,
        xml: generation.xml,
        field_values: generation.field_values,
        stats: generation.stats,
    }))
}

/// GET /api/fields - Known field definitions
async fn list_fields(State(state): State<AppState>) -> Json<FieldsResponse> {
    Json(FieldsResponse {
        fields: state.assistant.field_definitions(),
    })
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/generate-xml", post(generate_xml))
        .route("/api/fields", get(list_fields))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
