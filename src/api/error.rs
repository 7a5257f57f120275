//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.
//!
//! Messages are shown to the user as-is by the browser UI.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::profile::ProfileError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed
    #[error("{0}")]
    Validation(String),

    /// Resource not found
    #[error("{0}")]
    NotFound(String),

    /// Object exists but is not a profile
    #[error("{0}")]
    InvalidObject(String),

    /// No signing account is loaded
    #[error("{0}")]
    WalletNotConnected(String),

    /// Package or registry id missing from the configuration
    #[error("{0}")]
    NotConfigured(String),

    /// The ledger node rejected or failed the request
    #[error("{0}")]
    Ledger(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub request_id: String,
}

/// Error details
#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::InvalidObject(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_OBJECT"),
            ApiError::WalletNotConnected(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "WALLET_NOT_CONNECTED")
            }
            ApiError::NotConfigured(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "CONTRACT_NOT_CONFIGURED")
            }
            ApiError::Ledger(_) => (StatusCode::BAD_GATEWAY, "LEDGER_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        let message = err.to_string();
        match err {
            ProfileError::WalletNotConnected => ApiError::WalletNotConnected(message),
            ProfileError::MissingRequiredFields
            | ProfileError::IncompleteLink
            | ProfileError::UnknownTheme(_)
            | ProfileError::InvalidObjectId(_) => ApiError::Validation(message),
            ProfileError::Config(ConfigError::ContractNotConfigured) => {
                ApiError::NotConfigured(message)
            }
            ProfileError::Config(_) => ApiError::Internal(message),
            ProfileError::NotFound => ApiError::NotFound(message),
            ProfileError::InvalidObject => ApiError::InvalidObject(message),
            ProfileError::Create(_) | ProfileError::Fetch(_) => ApiError::Ledger(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerError;

    #[test]
    fn test_profile_error_mapping() {
        let cases = [
            (ProfileError::MissingRequiredFields, StatusCode::BAD_REQUEST),
            (ProfileError::UnknownTheme("neon".into()), StatusCode::BAD_REQUEST),
            (ProfileError::NotFound, StatusCode::NOT_FOUND),
            (ProfileError::InvalidObject, StatusCode::UNPROCESSABLE_ENTITY),
            (ProfileError::WalletNotConnected, StatusCode::SERVICE_UNAVAILABLE),
            (
                ProfileError::Config(ConfigError::ContractNotConfigured),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (ProfileError::Fetch(LedgerError::Timeout), StatusCode::BAD_GATEWAY),
        ];

        for (err, expected) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status_and_code().0, expected, "{}", api);
        }
    }

    #[test]
    fn test_message_is_user_text() {
        let api: ApiError = ProfileError::NotFound.into();
        assert_eq!(api.to_string(), "Profile not found");

        let api: ApiError = ProfileError::Create(LedgerError::Timeout).into();
        assert_eq!(api.to_string(), "Failed to create profile: Request timeout");
    }
}
