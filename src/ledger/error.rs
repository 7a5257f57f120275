//! Ledger client error types

use thiserror::Error;

/// Errors that can occur when talking to the ledger node
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger node unavailable")]
    Unavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Transaction {digest} failed: {error}")]
    ExecutionFailed { digest: String, error: String },

    #[error("Transaction {0} was not confirmed in time")]
    ConfirmationTimeout(String),
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Decode(err.to_string())
    }
}

impl From<base64::DecodeError> for LedgerError {
    fn from(err: base64::DecodeError) -> Self {
        LedgerError::Decode(format!("invalid transaction bytes: {}", err))
    }
}

impl LedgerError {
    /// Map a transport failure the same way for every call
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LedgerError::Timeout
        } else if err.is_connect() {
            LedgerError::Unavailable
        } else {
            LedgerError::Request(err)
        }
    }

    /// Whether another attempt at the same request may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, LedgerError::Unavailable | LedgerError::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Rpc {
            code: -32602,
            message: "Could not find the referenced transaction".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "RPC error -32602: Could not find the referenced transaction"
        );

        let err = LedgerError::ExecutionFailed {
            digest: "D1".to_string(),
            error: "MoveAbort".to_string(),
        };
        assert_eq!(err.to_string(), "Transaction D1 failed: MoveAbort");
    }

    #[test]
    fn test_transient() {
        assert!(LedgerError::Timeout.is_transient());
        assert!(LedgerError::Unavailable.is_transient());
        assert!(!LedgerError::Decode("x".into()).is_transient());
    }
}
