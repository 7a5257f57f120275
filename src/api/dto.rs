//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::profile::{CreateOutcome, Link, Profile, ProfileDraft, Theme};
use crate::wallet::short_address;

// ============================================
// PROFILE DTOs
// ============================================

/// Create profile request
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileRequest {
    /// Display name (required)
    pub name: String,
    /// IPFS CID of the avatar image
    #[serde(default)]
    pub avatar_cid: String,
    /// Short biography (required)
    pub bio: String,
    /// dark, light or custom
    #[serde(default)]
    pub theme: Theme,
    /// Links to attach after the profile exists
    #[serde(default)]
    pub links: Vec<Link>,
}

impl From<CreateProfileRequest> for ProfileDraft {
    fn from(req: CreateProfileRequest) -> Self {
        ProfileDraft {
            name: req.name,
            avatar_cid: req.avatar_cid,
            bio: req.bio,
            theme: req.theme,
            links: req.links,
        }
    }
}

/// Create profile response
#[derive(Debug, Serialize)]
pub struct CreateProfileResponse {
    /// Digest of the `create_profile` transaction
    pub digest: String,
    /// Id of the new profile object, when it could be determined
    pub profile_id: Option<String>,
    /// Number of links attached
    pub links_added: usize,
    /// Links that could not be attached
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub link_failures: Vec<LinkFailureDto>,
    /// Success text for display
    pub message: String,
}

/// A link that was skipped
#[derive(Debug, Serialize)]
pub struct LinkFailureDto {
    pub label: String,
    pub url: String,
    pub error: String,
}

impl From<CreateOutcome> for CreateProfileResponse {
    fn from(outcome: CreateOutcome) -> Self {
        let message = outcome.message();
        Self {
            digest: outcome.digest,
            profile_id: outcome.profile_id,
            links_added: outcome.links_added,
            link_failures: outcome
                .link_failures
                .into_iter()
                .map(|f| LinkFailureDto {
                    label: f.link.label,
                    url: f.link.url,
                    error: f.error,
                })
                .collect(),
            message,
        }
    }
}

/// Profile as rendered by the viewer
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub avatar_cid: String,
    /// Gateway URL of the avatar, absent when no CID is set
    pub avatar_url: Option<String>,
    pub bio: String,
    pub theme: String,
    /// Milliseconds since epoch
    pub updated_at: i64,
    /// Calendar date of the last update
    pub updated_at_display: String,
    pub links: Vec<Link>,
}

impl ProfileResponse {
    pub fn from_profile(profile: Profile, ipfs_gateway: &str) -> Self {
        Self {
            avatar_url: profile.avatar_url(ipfs_gateway),
            updated_at_display: profile.updated_at_display(),
            theme: profile.theme.to_string(),
            id: profile.id,
            name: profile.name,
            avatar_cid: profile.avatar_cid,
            bio: profile.bio,
            updated_at: profile.updated_at,
            links: profile.links,
        }
    }
}

// ============================================
// WALLET / CONFIG DTOs
// ============================================

/// Connected account
#[derive(Debug, Serialize)]
pub struct WalletResponse {
    /// Full address
    pub address: String,
    /// `0x1234...abcd` form
    pub short_address: String,
    /// Token for the session header on signing requests
    pub session: String,
}

impl WalletResponse {
    pub fn new(address: &str, session: String) -> Self {
        Self {
            address: address.to_string(),
            short_address: short_address(address),
            session,
        }
    }
}

/// Client-facing configuration
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub network: String,
    pub package_id: Option<String>,
    pub registry_id: Option<String>,
    /// Both ids are set
    pub contract_configured: bool,
    pub ipfs_gateway: String,
    pub wallet_available: bool,
}

impl ConfigResponse {
    pub fn new(config: &Config, wallet_available: bool) -> Self {
        Self {
            network: config.network.name.clone(),
            package_id: config.contract.package_id.clone(),
            registry_id: config.contract.registry_id.clone(),
            contract_configured: config.contract.require().is_ok(),
            ipfs_gateway: config.contract.ipfs_gateway.clone(),
            wallet_available,
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy", "degraded" or "unhealthy"
    pub status: String,
    /// Ledger node reachability: "ok" or "error"
    pub ledger: String,
    /// Chain identifier reported by the node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    /// "connected" or "missing"
    pub wallet: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
