//! Prediction Route

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::AppState;

/// Request body for a prediction
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// Observed temperature (°C)
    pub temperature_c: f64,
    /// Whether rain is expected
    pub rain_expected: bool,
    /// Whether a storm is expected
    pub storm_expected: bool,
    /// Cloud cover: low, medium, or high
    pub cloud_level: String,
    /// Wind selection: auto (derive), light, moderate, or strong
    #[serde(default = "default_wind")]
    pub wind_override: String,
}

fn default_wind() -> String {
    "auto".to_string()
}

/// Response body for a prediction
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub category: String,
    pub reason: String,
    /// Display string front-ends render verbatim
    pub headline: String,
}

/// Run one prediction
///
/// Invalid inputs come back as 400 with the validation message so front-ends
/// can surface it and re-prompt.
pub async fn post_predict(
    State(state): State<Arc<RwLock<AppState>>>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<Value>)> {
    debug!(
        "prediction request: temp={} rain={} storm={} cloud={} wind={}",
        req.temperature_c, req.rain_expected, req.storm_expected, req.cloud_level, req.wind_override
    );

    let prediction = {
        let state = state.read().await;
        state.engine.predict(
            req.temperature_c,
            req.rain_expected,
            req.storm_expected,
            &req.cloud_level,
            &req.wind_override,
        )
    };

    match prediction {
        Ok(p) => {
            let mut state = state.write().await;
            state.predictions_served += 1;

            let headline = format!("Predicted Weather: {}", p.category.to_uppercase());
            Ok(Json(PredictResponse {
                category: p.category,
                reason: p.reason,
                headline,
            }))
        }
        Err(err) => Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_override_defaults_to_auto() {
        let req: PredictRequest = serde_json::from_value(json!({
            "temperature_c": 30.0,
            "rain_expected": false,
            "storm_expected": false,
            "cloud_level": "low"
        }))
        .unwrap();

        assert_eq!(req.wind_override, "auto");
    }
}
