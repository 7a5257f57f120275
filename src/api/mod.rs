//! LinkTree REST API
//!
//! HTTP API used by the browser UI, built with Axum.
//!
//! # Endpoints
//!
//! ## Profiles
//! - `POST /api/v1/profiles` - Create a profile, then add its links
//!   (needs the `x-linktree-session` header from connect)
//! - `GET /api/v1/profiles/:id` - Read a profile
//!
//! ## Wallet
//! - `POST /api/v1/wallet/connect` - Address of the signing account and a session token
//! - `POST /api/v1/wallet/disconnect` - Close the session
//!
//! ## Config
//! - `GET /api/v1/config` - Network and contract settings
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe (ledger node reachable)
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use linktree::api::{serve, AppState};
//! use linktree::{Config, SuiRpcClient, Wallet};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let ledger = Arc::new(SuiRpcClient::new(config.network.clone(), config.contract.gas_budget)?);
//!     let wallet = Wallet::load(&config.wallet).ok();
//!
//!     let api_config = config.api.clone();
//!     serve(AppState::new(ledger, config, wallet), &api_config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use session::{SessionStore, SESSION_HEADER};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.api.cors_origins);

    let api_routes = Router::new()
        .route("/config", get(routes::config::get_config))
        .route("/wallet/connect", post(routes::wallet::connect))
        .route("/wallet/disconnect", post(routes::wallet::disconnect))
        .route("/profiles", post(routes::profiles::create_profile))
        .route("/profiles/:id", get(routes::profiles::get_profile));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Listed origins only; permissive when the list is empty or contains `*`
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("LinkTree API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("LinkTree API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
