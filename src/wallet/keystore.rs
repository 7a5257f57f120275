//! Sui keystore file
//!
//! The keystore is a JSON array of base64 strings, each `flag || secret`.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::{Path, PathBuf};

use super::{WalletError, ED25519_FLAG};

/// Ed25519 secrets read from a keystore file
#[derive(Debug, Default)]
pub struct Keystore {
    secrets: Vec<[u8; 32]>,
}

impl Keystore {
    /// Read and parse a keystore file
    pub fn load(path: &Path) -> Result<Self, WalletError> {
        let content = std::fs::read_to_string(path).map_err(|e| WalletError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let keystore = Self::parse(&content)?;
        if keystore.is_empty() {
            return Err(WalletError::Empty(path.to_path_buf()));
        }

        tracing::debug!(path = ?path, keys = keystore.len(), "Loaded keystore");
        Ok(keystore)
    }

    /// Parse keystore content, skipping keys of other schemes
    pub fn parse(content: &str) -> Result<Self, WalletError> {
        let entries: Vec<String> =
            serde_json::from_str(content).map_err(|e| WalletError::Parse(e.to_string()))?;

        let mut secrets = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let bytes = match STANDARD.decode(entry.trim()) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping undecodable keystore entry");
                    continue;
                }
            };

            match bytes.split_first() {
                Some((&ED25519_FLAG, secret)) if secret.len() == 32 => {
                    let mut key = [0u8; 32];
                    key.copy_from_slice(secret);
                    secrets.push(key);
                }
                Some((flag, _)) => {
                    tracing::warn!(index, flag, "Skipping keystore entry with unsupported scheme");
                }
                None => {}
            }
        }

        Ok(Self { secrets })
    }

    pub fn secrets(&self) -> &[[u8; 32]] {
        &self.secrets
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn encode(flag: u8, secret: [u8; 32]) -> String {
        let mut bytes = vec![flag];
        bytes.extend_from_slice(&secret);
        STANDARD.encode(bytes)
    }

    #[test]
    fn test_parse_skips_other_schemes() {
        let content = serde_json::to_string(&vec![
            encode(0x01, [1u8; 32]),
            encode(ED25519_FLAG, [2u8; 32]),
            "not base64!".to_string(),
            encode(ED25519_FLAG, [3u8; 32]),
        ])
        .unwrap();

        let keystore = Keystore::parse(&content).unwrap();
        assert_eq!(keystore.len(), 2);
        assert_eq!(keystore.secrets()[0], [2u8; 32]);
        assert_eq!(keystore.secrets()[1], [3u8; 32]);
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = Keystore::parse("{ not a list }").unwrap_err();
        assert!(matches!(err, WalletError::Parse(_)));
    }

    #[test]
    fn test_load_empty_keystore() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = Keystore::load(file.path()).unwrap_err();
        assert!(matches!(err, WalletError::Empty(_)));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/tmp/sui.keystore"), PathBuf::from("/tmp/sui.keystore"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/.sui/x"), home.join(".sui/x"));
        }
    }
}
