//! Config Route
//!
//! - GET /api/v1/config - Network and contract settings for the UI

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::ConfigResponse;
use crate::api::state::AppState;

/// GET /api/v1/config
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse::new(&state.config, state.wallet.is_some()))
}
