//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub contract: ContractConfig,

    #[serde(default)]
    pub wallet: WalletConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Ledger node connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_network_name")]
    pub name: String,

    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_confirmation_timeout")]
    pub confirmation_timeout_ms: u64,

    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
}

fn default_network_name() -> String {
    "testnet".to_string()
}

fn default_rpc_url() -> String {
    "https://fullnode.testnet.sui.io:443".to_string()
}

fn default_request_timeout() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    3
}

fn default_confirmation_timeout() -> u64 {
    60_000
}

fn default_poll_interval() -> u64 {
    2_000
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: default_network_name(),
            rpc_url: default_rpc_url(),
            request_timeout_ms: default_request_timeout(),
            max_retries: default_max_retries(),
            confirmation_timeout_ms: default_confirmation_timeout(),
            poll_interval_ms: default_poll_interval(),
        }
    }
}

/// Deployed Move package settings
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    pub package_id: Option<String>,

    pub registry_id: Option<String>,

    #[serde(default = "default_module")]
    pub module: String,

    #[serde(default = "default_profile_type_marker")]
    pub profile_type_marker: String,

    #[serde(default = "default_gas_budget")]
    pub gas_budget: u64,

    #[serde(default = "default_ipfs_gateway")]
    pub ipfs_gateway: String,
}

fn default_module() -> String {
    "linktree_profile".to_string()
}

fn default_profile_type_marker() -> String {
    "LinkTreeProfile".to_string()
}

fn default_gas_budget() -> u64 {
    10_000_000
}

fn default_ipfs_gateway() -> String {
    "https://ipfs.io/ipfs".to_string()
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            package_id: None,
            registry_id: None,
            module: default_module(),
            profile_type_marker: default_profile_type_marker(),
            gas_budget: default_gas_budget(),
            ipfs_gateway: default_ipfs_gateway(),
        }
    }
}

impl ContractConfig {
    /// Package and registry ids, or an error when either is missing
    pub fn require(&self) -> Result<(&str, &str), ConfigError> {
        match (non_empty(&self.package_id), non_empty(&self.registry_id)) {
            (Some(package), Some(registry)) => Ok((package, registry)),
            _ => Err(ConfigError::ContractNotConfigured),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Local keystore settings
#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    #[serde(default = "default_keystore_path")]
    pub keystore_path: String,

    /// Address to sign with; first Ed25519 key when unset
    pub address: Option<String>,
}

fn default_keystore_path() -> String {
    dirs::home_dir()
        .map(|p| {
            p.join(".sui")
                .join("sui_config")
                .join("sui.keystore")
                .to_string_lossy()
                .to_string()
        })
        .unwrap_or_else(|| "./sui.keystore".to_string())
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            keystore_path: default_keystore_path(),
            address: None,
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8082
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![
                "http://localhost:8084".to_string(),
                "http://127.0.0.1:8084".to_string(),
            ],
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("linktree").join("config.toml")),
            Some(PathBuf::from("/etc/linktree/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Network overrides
        if let Ok(url) = std::env::var("LINKTREE_RPC_URL") {
            self.network.rpc_url = url;
        }
        if let Ok(name) = std::env::var("LINKTREE_NETWORK") {
            self.network.name = name;
        }

        // Contract overrides
        if let Ok(package_id) = std::env::var("LINKTREE_PACKAGE_ID") {
            self.contract.package_id = Some(package_id);
        }
        if let Ok(registry_id) = std::env::var("LINKTREE_REGISTRY_ID") {
            self.contract.registry_id = Some(registry_id);
        }

        // Wallet overrides
        if let Ok(path) = std::env::var("LINKTREE_KEYSTORE") {
            self.wallet.keystore_path = path;
        }
        if let Ok(address) = std::env::var("LINKTREE_ADDRESS") {
            self.wallet.address = Some(address);
        }

        // API overrides
        if let Ok(host) = std::env::var("LINKTREE_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("LINKTREE_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("LINKTREE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LINKTREE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Contract not configured. Check config file")]
    ContractNotConfigured,
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# LinkTree Configuration
#
# Environment variables override these settings:
# - LINKTREE_RPC_URL
# - LINKTREE_NETWORK
# - LINKTREE_PACKAGE_ID
# - LINKTREE_REGISTRY_ID
# - LINKTREE_KEYSTORE
# - LINKTREE_ADDRESS
# - LINKTREE_API_HOST
# - LINKTREE_API_PORT
# - LINKTREE_LOG_LEVEL
# - LINKTREE_LOG_FORMAT

[network]
# Network label shown in the UI
name = "testnet"

# Fullnode JSON-RPC endpoint
rpc_url = "https://fullnode.testnet.sui.io:443"

# Per-request timeout (ms)
request_timeout_ms = 30000

# Transport retries for connection failures
max_retries = 3

# How long to wait for a transaction to be confirmed (ms)
confirmation_timeout_ms = 60000

# Poll interval while waiting for confirmation (ms)
poll_interval_ms = 2000

[contract]
# Published package id of the linktree_profile module
package_id = ""

# Shared registry object id created at publish time
registry_id = ""

# Module name inside the package
module = "linktree_profile"

# Substring identifying the profile object type in created objects
profile_type_marker = "LinkTreeProfile"

# Gas budget per transaction (MIST)
gas_budget = 10000000

# Gateway used to render avatar CIDs
ipfs_gateway = "https://ipfs.io/ipfs"

[wallet]
# Sui keystore file (JSON array of base64 keys)
keystore_path = "~/.sui/sui_config/sui.keystore"

# Address to sign with (default: first Ed25519 key)
# address = "0x..."

[api]
# API server host
host = "127.0.0.1"

# API server port
port = 8082

# Allowed CORS origins
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/linktree/linktree.log"
"#
    .to_string()
}
