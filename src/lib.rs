//! # LinkTree
//!
//! Link-in-bio profiles stored on the Sui ledger. A profile (name, avatar,
//! bio, theme, links) is created with one `create_profile` transaction
//! followed by one `add_link` transaction per link, and read back through
//! `sui_getObject`.
//!
//! ## Modules
//!
//! - [`config`]: TOML configuration with environment overrides
//! - [`ledger`]: JSON-RPC client for a Sui fullnode
//! - [`wallet`]: Keystore-backed Ed25519 signer
//! - [`profile`]: Profile drafts, the create flow and the object parser
//! - [`api`]: REST API server with Axum, used by the browser UI
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use linktree::{Config, Link, ProfileDraft, ProfileService, SuiRpcClient, Wallet};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let ledger = Arc::new(SuiRpcClient::new(
//!         config.network.clone(),
//!         config.contract.gas_budget,
//!     )?);
//!     let wallet = Wallet::load(&config.wallet)?;
//!     let profiles = ProfileService::new(ledger, config.contract.clone());
//!
//!     let draft = ProfileDraft::new("alice", "building on Sui")
//!         .link(Link::new("GitHub", "https://github.com/alice"));
//!     let outcome = profiles.create(Some(&wallet), &draft).await?;
//!
//!     if let Some(id) = &outcome.profile_id {
//!         let profile = profiles.fetch(id).await?;
//!         println!("{} has {} links", profile.name, profile.links.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod ledger;
pub mod logging;
pub mod profile;
pub mod wallet;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    ApiConfig, Config, ConfigError, ContractConfig, LoggingConfig, NetworkConfig, WalletConfig,
};

pub use ledger::{LedgerClient, LedgerError, MoveCall, ObjectResponse, SuiRpcClient};

pub use profile::{
    CreateOutcome, Link, LinkDraft, Profile, ProfileDraft, ProfileError, ProfileService, Theme,
};

pub use wallet::{short_address, TransactionSigner, Wallet, WalletError};
