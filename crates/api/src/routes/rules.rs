//! Rule Table Route

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::AppState;

/// One entry of the ordered rule table
#[derive(Debug, Serialize)]
pub struct RuleEntry {
    /// 1-based position; lower positions win ties
    pub position: usize,
    pub category: String,
    pub reason: String,
}

/// Response for the rules endpoint
#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub data: Vec<RuleEntry>,
    pub count: usize,
}

/// List the rule table in match order
pub async fn get_rules(State(state): State<Arc<RwLock<AppState>>>) -> Json<RulesResponse> {
    let state = state.read().await;

    let data: Vec<RuleEntry> = state
        .engine
        .rules()
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleEntry {
            position: i + 1,
            category: rule.category.to_string(),
            reason: rule.reason.to_string(),
        })
        .collect();

    Json(RulesResponse {
        count: data.len(),
        data,
    })
}
