//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use axum::http::HeaderMap;
use std::sync::Arc;
use std::time::Instant;

use crate::api::session::{session_token, SessionStore};
use crate::config::Config;
use crate::ledger::LedgerClient;
use crate::profile::ProfileService;
use crate::wallet::{TransactionSigner, Wallet};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Create and view flows
    pub profiles: Arc<ProfileService>,
    /// Ledger node, also used for readiness checks
    pub ledger: Arc<dyn LedgerClient>,
    /// Signing account; `None` when no keystore could be loaded
    pub wallet: Option<Arc<Wallet>>,
    /// Wallet sessions opened through `/wallet/connect`
    pub sessions: Arc<SessionStore>,
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(ledger: Arc<dyn LedgerClient>, config: Config, wallet: Option<Wallet>) -> Self {
        let profiles = Arc::new(ProfileService::new(
            Arc::clone(&ledger),
            config.contract.clone(),
        ));

        Self {
            profiles,
            ledger,
            wallet: wallet.map(Arc::new),
            sessions: Arc::new(SessionStore::new()),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// The wallet as a signer, only for requests carrying an open session
    pub async fn signer(&self, headers: &HeaderMap) -> Option<&dyn TransactionSigner> {
        let wallet = self.wallet.as_deref()?;
        let token = session_token(headers)?;
        if !self.sessions.is_open(token).await {
            return None;
        }
        Some(wallet as &dyn TransactionSigner)
    }
}
