//! Wallet Routes
//!
//! - POST /api/v1/wallet/connect - Open a session for the signing account
//! - POST /api/v1/wallet/disconnect - Close the caller's session
//!
//! The account is loaded from the keystore at startup. Connecting returns
//! its address and a session token; only requests presenting an open
//! token may sign with it.

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::WalletResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::session::session_token;
use crate::api::state::AppState;

/// POST /api/v1/wallet/connect
pub async fn connect(State(state): State<Arc<AppState>>) -> ApiResult<Json<WalletResponse>> {
    let wallet = state.wallet.as_ref().ok_or_else(|| {
        ApiError::WalletNotConnected(
            "No wallet available. Check the keystore settings".to_string(),
        )
    })?;

    let session = state.sessions.open().await;
    tracing::info!(address = %wallet.address(), "Wallet connect");
    Ok(Json(WalletResponse::new(wallet.address(), session)))
}

/// POST /api/v1/wallet/disconnect
pub async fn disconnect(State(state): State<Arc<AppState>>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = session_token(&headers) {
        if state.sessions.close(token).await {
            tracing::info!("Wallet disconnect");
        }
    }
    StatusCode::NO_CONTENT
}
