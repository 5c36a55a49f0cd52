use axum::{body::Bytes, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::ApiError, Result};
use models::PredictionPoint;

/// Request body for the prediction endpoint.
///
/// Transactions stay raw `Value`s here: one bad record must not sink the
/// whole payload, so per-record validation belongs to the engine, not the
/// deserializer. A missing `transactions` key reads as an empty list.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub transactions: Vec<Value>,
}

/// Response for the prediction endpoint
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predictions: Vec<PredictionPoint>,
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> Json<Value> {
    Json(serde_json::json!({
        "status": "OK",
        "service": "spending-forecast-api",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// POST /predict
/// Returns a 30-day spending forecast for the posted transactions
pub async fn predict(body: Bytes) -> Result<Json<PredictResponse>> {
    // Parse the body by hand so a malformed payload maps to our own
    // "Invalid JSON" response instead of the extractor's.
    let request: PredictRequest =
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidJson)?;

    let outcome = forecast_engine::predict(&request.transactions)?;

    if !outcome.warnings.is_empty() {
        tracing::warn!("Skipped {} unparseable transactions", outcome.warnings.len());
        for warning in &outcome.warnings {
            tracing::debug!("{warning}");
        }
    }
    tracing::info!("Generated predictions for {} days", outcome.predictions.len());

    Ok(Json(PredictResponse {
        predictions: outcome.predictions,
    }))
}

/// Fallback for unknown routes and for known routes hit with the wrong method
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
