//! Model status handler

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct ModelStatusResponse {
    pub model_loaded: bool,
    pub model_name: String,
    pub model_alias: String,
    pub model_version: Option<String>,
    pub schema_available: bool,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Report the state of the session's model handle.
///
/// `model_loaded: false` means startup resolution failed and predictions
/// answer 503 until the service is restarted.
pub async fn status(State(state): State<AppState>) -> Json<ModelStatusResponse> {
    let response = match state.model.as_deref() {
        Some(model) => ModelStatusResponse {
            model_loaded: true,
            model_name: model.name().to_string(),
            model_alias: model.alias().to_string(),
            model_version: Some(model.version().to_string()),
            schema_available: model.has_schema(),
            loaded_at: Some(model.loaded_at()),
        },
        None => ModelStatusResponse {
            model_loaded: false,
            model_name: state.config.model_name.clone(),
            model_alias: state.config.model_alias.clone(),
            model_version: None,
            schema_available: false,
            loaded_at: None,
        },
    };

    Json(response)
}
