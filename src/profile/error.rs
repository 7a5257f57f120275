//! Profile flow error types
//!
//! Display strings are what the user sees.

use thiserror::Error;

use crate::config::ConfigError;
use crate::ledger::LedgerError;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Please connect your wallet first")]
    WalletNotConnected,

    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Please fill in both label and URL")]
    IncompleteLink,

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid object ID: {0}")]
    InvalidObjectId(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Profile not found")]
    NotFound,

    #[error("Invalid object type")]
    InvalidObject,

    #[error("Failed to create profile: {0}")]
    Create(#[source] LedgerError),

    #[error("Failed to load profile: {0}")]
    Fetch(#[source] LedgerError),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
