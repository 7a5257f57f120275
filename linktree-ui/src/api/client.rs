//! HTTP API Client
//!
//! Functions for communicating with the LinkTree REST API.

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::state::validate_profile_id;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

const API_URL_KEY: &str = "linktree_api_url";

/// Header carrying the wallet session token
const SESSION_HEADER: &str = "x-linktree-session";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    url.trim_end_matches('/').to_string()
}

// ============ Request / Response Types ============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub avatar_cid: String,
    pub bio: String,
    pub theme: String,
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileResponse {
    pub digest: String,
    pub profile_id: Option<String>,
    pub links_added: usize,
    #[serde(default)]
    pub link_failures: Vec<LinkFailure>,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkFailure {
    pub label: String,
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileView {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_cid: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub bio: String,
    pub theme: String,
    pub updated_at: i64,
    pub updated_at_display: String,
    #[serde(default)]
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletInfo {
    pub address: String,
    pub short_address: String,
    pub session: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigInfo {
    pub network: String,
    pub package_id: Option<String>,
    pub registry_id: Option<String>,
    pub contract_configured: bool,
    pub ipfs_gateway: String,
    pub wallet_available: bool,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ============ API Functions ============

/// Server-side network and contract settings
pub async fn fetch_config() -> Result<ConfigInfo, String> {
    let response = Request::get(&format!("{}/config", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    parse_json(response).await
}

/// Ask the server for its signing account
pub async fn connect_wallet() -> Result<WalletInfo, String> {
    let response = Request::post(&format!("{}/wallet/connect", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    parse_json(response).await
}

/// Close the server-side session
pub async fn disconnect_wallet(session: &str) -> Result<(), String> {
    let response = Request::post(&format!("{}/wallet/disconnect", get_api_base()))
        .header(SESSION_HEADER, session)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("Request failed ({})", response.status()))
    }
}

/// Create a profile and attach its links
pub async fn create_profile(
    session: &str,
    request: &CreateProfileRequest,
) -> Result<CreateProfileResponse, String> {
    let response = Request::post(&format!("{}/profiles", get_api_base()))
        .header(SESSION_HEADER, session)
        .json(request)
        .map_err(|e| format!("Serialize error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    parse_json(response).await
}

/// Read a profile; `Ok(None)` when the object does not exist
pub async fn fetch_profile(id: &str) -> Result<Option<ProfileView>, String> {
    validate_profile_id(id)?;

    let response = Request::get(&format!("{}/profiles/{}", get_api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }

    parse_json(response).await.map(Some)
}

async fn parse_json<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ApiErrorResponse>().await {
            Ok(body) => body.error.message,
            Err(_) => format!("Request failed ({})", status),
        });
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
