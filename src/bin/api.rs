//! LinkTree API Server
//!
//! Run with: cargo run --bin linktree-api
//!
//! # Configuration
//!
//! The config file is read from `LINKTREE_CONFIG` when set, otherwise from
//! the default locations (see `Config::load_default`). `LINKTREE_*`
//! environment variables override file values; `RUST_LOG` overrides the
//! configured log level.

use anyhow::Context;
use linktree::api::{serve, AppState};
use linktree::config::Config;
use linktree::ledger::{LedgerClient, SuiRpcClient};
use linktree::wallet::Wallet;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    linktree::logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!("Starting LinkTree API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        network = %config.network.name,
        rpc_url = %config.network.rpc_url,
        "Ledger node"
    );

    match config.contract.require() {
        Ok((package_id, registry_id)) => {
            tracing::info!(package_id, registry_id, "Contract configured")
        }
        Err(e) => tracing::warn!("{} (profile creation disabled)", e),
    }

    let ledger = Arc::new(
        SuiRpcClient::new(config.network.clone(), config.contract.gas_budget)
            .context("failed to build ledger client")?,
    );

    match ledger.chain_identifier().await {
        Ok(chain_id) => tracing::info!(chain_id = %chain_id, "Ledger node reachable"),
        Err(e) => tracing::warn!("Ledger node not available: {} (requests will fail)", e),
    }

    let wallet = match Wallet::load(&config.wallet) {
        Ok(wallet) => Some(wallet),
        Err(e) => {
            tracing::warn!("Wallet not loaded: {} (read-only mode)", e);
            None
        }
    };

    let api_config = config.api.clone();
    let state = AppState::new(ledger, config, wallet);

    tracing::info!("Starting server on {}:{}", api_config.host, api_config.port);
    serve(state, &api_config).await?;

    tracing::info!("LinkTree API server stopped");
    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    match std::env::var("LINKTREE_CONFIG") {
        Ok(path) => {
            let path = PathBuf::from(path);
            Config::load_with_env(&path)
                .with_context(|| format!("failed to load config from {:?}", path))
        }
        Err(_) => Ok(Config::load_default()),
    }
}
