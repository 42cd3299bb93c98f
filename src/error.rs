//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::registry::RegistryError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Model failed to load at startup; predictions are blocked until restart
    ModelUnavailable,

    /// Profile failed validation
    ValidationError(String),

    /// Model expects a column the pipeline does not produce
    SchemaMismatch(String),

    /// Registry or serving endpoint failed during inference
    UpstreamError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ModelUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Prediction model is not loaded".to_string(),
            ),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::SchemaMismatch(column) => {
                tracing::error!("Schema mismatch: model expects unknown column '{}'", column);
                (
                    StatusCode::BAD_GATEWAY,
                    "Model schema does not match the feature pipeline".to_string(),
                )
            }
            AppError::UpstreamError(msg) => {
                tracing::error!("Prediction failed: {}", msg);
                (StatusCode::BAD_GATEWAY, "Prediction failed".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::SchemaMismatch(column) => AppError::SchemaMismatch(column),
            other => AppError::UpstreamError(other.to_string()),
        }
    }
}
