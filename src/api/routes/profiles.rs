//! Profile Routes
//!
//! - POST /api/v1/profiles - Create a profile and attach its links
//! - GET /api/v1/profiles/:id - Read a profile

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{CreateProfileRequest, CreateProfileResponse, ProfileResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::profile::ProfileDraft;

/// POST /api/v1/profiles
///
/// Runs the whole create flow before answering; link failures are
/// reported in the body, not as an error status. Requires the session
/// header from `/wallet/connect`.
pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<CreateProfileRequest>,
) -> ApiResult<(StatusCode, Json<CreateProfileResponse>)> {
    let draft = ProfileDraft::from(req);
    let signer = state.signer(&headers).await;
    let outcome = state.profiles.create(signer, &draft).await?;

    tracing::info!(
        digest = %outcome.digest,
        profile_id = ?outcome.profile_id,
        links_added = outcome.links_added,
        links_failed = outcome.link_failures.len(),
        "Create request finished"
    );

    Ok((StatusCode::CREATED, Json(CreateProfileResponse::from(outcome))))
}

/// GET /api/v1/profiles/:id
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state.profiles.fetch(&id).await?;

    Ok(Json(ProfileResponse::from_profile(
        profile,
        &state.config.contract.ipfs_gateway,
    )))
}
