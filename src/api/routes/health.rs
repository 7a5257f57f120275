//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ledger node reachable)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 when the ledger node answers.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_ledger_health(&state).await {
        Some(_) => StatusCode::OK,
        None => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let chain_id = check_ledger_health(&state).await;
    let ledger_ok = chain_id.is_some();
    let wallet_ok = state.wallet.is_some();

    let status = match (ledger_ok, wallet_ok) {
        (true, true) => "healthy",
        (true, false) => "degraded",
        (false, _) => "unhealthy",
    };

    Json(HealthResponse {
        status: status.to_string(),
        ledger: if ledger_ok { "ok" } else { "error" }.to_string(),
        chain_id,
        wallet: if wallet_ok { "connected" } else { "missing" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn check_ledger_health(state: &AppState) -> Option<String> {
    match state.ledger.chain_identifier().await {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!(error = %e, "Ledger health check failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
