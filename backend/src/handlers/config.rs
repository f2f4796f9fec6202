use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Served as `/config.json`; the client falls back to its own defaults without it.
#[derive(Debug, Serialize, Deserialize)]
pub struct RuntimeConfigResponse {
    pub api_base_url: String,
    pub home_path: String,
}

pub async fn get_runtime_config(State(state): State<AppState>) -> Json<RuntimeConfigResponse> {
    Json(RuntimeConfigResponse {
        api_base_url: state.config.api_base_url.clone(),
        home_path: state.config.home_path.clone(),
    })
}
