//! Prediction handler

use axum::{extract::State, Json};
use serde::Serialize;
use validator::Validate;

use crate::features::pipeline;
use crate::models::ApplicantProfile;
use crate::{AppError, AppResult, AppState};

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Predicted maximum affordable EMI, in rupees
    pub max_emi_amount: f64,
    /// Display string, e.g. "₹12,345.67"
    pub formatted: String,
    /// Version of the model that produced the prediction
    pub model_version: String,
}

/// Run one collect → encode → invoke cycle
pub async fn predict(
    State(state): State<AppState>,
    Json(profile): Json<ApplicantProfile>,
) -> AppResult<Json<PredictResponse>> {
    profile.validate()?;

    let model = state.model.as_deref().ok_or(AppError::ModelUnavailable)?;

    let features = pipeline::encode(&profile);
    tracing::debug!("Encoded feature vector: {:?}", features.named_values());

    let amount = model.predict(&features).await?;

    tracing::info!(
        "Predicted max EMI {} (model {} v{})",
        amount,
        model.name(),
        model.version()
    );

    Ok(Json(PredictResponse {
        max_emi_amount: amount,
        formatted: format_inr(amount),
        model_version: model.version().to_string(),
    }))
}

/// Format a rupee amount with thousands grouping and two decimals
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    format!("{}₹{}.{}", sign, int_grouped, frac_part)
}
