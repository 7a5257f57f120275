//! Wallet
//!
//! The signing agent that authorizes writes. Keys come from a local Sui
//! keystore; only Ed25519 keys are supported.
//!
//! Signing follows the Sui scheme: the transaction bytes are prefixed with
//! the transaction-data intent `[0, 0, 0]`, hashed with Blake2b-256, and
//! the digest is signed. The serialized signature is
//! `flag || signature || public key`, base64 encoded.

mod keystore;

pub use keystore::{expand_home, Keystore};

use base64::{engine::general_purpose::STANDARD, Engine};
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use ed25519_dalek::{Signer, SigningKey};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::WalletConfig;

/// Signature scheme flag for Ed25519
pub const ED25519_FLAG: u8 = 0x00;

/// Intent prefix for transaction data (scope, version, app id)
const TRANSACTION_INTENT: [u8; 3] = [0, 0, 0];

type Blake2b256 = Blake2b<U32>;

/// Anything that can authorize a transaction
pub trait TransactionSigner: Send + Sync {
    /// Sender address, `0x`-prefixed hex
    fn address(&self) -> &str;

    /// Serialized signature over the given transaction bytes
    fn sign_transaction(&self, tx_bytes: &[u8]) -> String;
}

/// A single Ed25519 account
pub struct Wallet {
    signing_key: SigningKey,
    address: String,
}

impl Wallet {
    /// Build a wallet from a raw 32-byte secret
    pub fn from_secret(secret: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&secret);
        let address = derive_address(&signing_key.verifying_key().to_bytes());
        Self {
            signing_key,
            address,
        }
    }

    /// Pick an account from a keystore
    ///
    /// With `address` set, the key for that address must be present.
    /// Otherwise the first key is used.
    pub fn from_keystore(keystore: &Keystore, address: Option<&str>) -> Result<Self, WalletError> {
        let mut wallets = keystore.secrets().iter().map(|s| Wallet::from_secret(*s));

        match address {
            Some(wanted) => {
                let wanted = normalize_address(wanted);
                wallets
                    .find(|w| normalize_address(&w.address) == wanted)
                    .ok_or(WalletError::AddressNotFound(wanted))
            }
            None => wallets.next().ok_or(WalletError::NoUsableKey),
        }
    }

    /// Load the configured account
    pub fn load(config: &WalletConfig) -> Result<Self, WalletError> {
        let path = expand_home(&config.keystore_path);
        let keystore = Keystore::load(&path)?;
        let wallet = Self::from_keystore(&keystore, config.address.as_deref())?;

        tracing::info!(address = %wallet.address, "Wallet connected");
        Ok(wallet)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Sign transaction bytes, returning the base64 serialized signature
    pub fn sign_transaction(&self, tx_bytes: &[u8]) -> String {
        let digest = blake2b256(&[&TRANSACTION_INTENT[..], tx_bytes]);
        let signature = self.signing_key.sign(&digest);

        let mut serialized = Vec::with_capacity(1 + 64 + 32);
        serialized.push(ED25519_FLAG);
        serialized.extend_from_slice(&signature.to_bytes());
        serialized.extend_from_slice(&self.public_key());

        STANDARD.encode(serialized)
    }
}

impl TransactionSigner for Wallet {
    fn address(&self) -> &str {
        Wallet::address(self)
    }

    fn sign_transaction(&self, tx_bytes: &[u8]) -> String {
        Wallet::sign_transaction(self, tx_bytes)
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet").field("address", &self.address).finish()
    }
}

/// Sui address of an Ed25519 public key
pub fn derive_address(public_key: &[u8; 32]) -> String {
    let hash = blake2b256(&[&[ED25519_FLAG][..], &public_key[..]]);
    format!("0x{}", hex::encode(hash))
}

/// Lowercase, `0x`-prefixed, zero-padded to 64 hex digits
pub fn normalize_address(address: &str) -> String {
    let trimmed = address.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    format!("0x{:0>64}", hex.to_ascii_lowercase())
}

/// `0x1234...abcd` form for compact display
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

fn blake2b256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Errors that can occur loading or selecting a wallet
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("Failed to read keystore {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Invalid keystore: {0}")]
    Parse(String),

    #[error("Keystore {0:?} has no Ed25519 keys")]
    Empty(PathBuf),

    #[error("Keystore has no usable key")]
    NoUsableKey,

    #[error("Address {0} not found in keystore")]
    AddressNotFound(String),
}
