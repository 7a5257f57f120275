//! Wallet Sessions
//!
//! `POST /wallet/connect` opens a session and hands its token to the
//! caller. Requests that sign must present the token in
//! [`SESSION_HEADER`]; without it the server key is not used.

use axum::http::HeaderMap;
use std::collections::HashSet;
use tokio::sync::RwLock;

/// Request header carrying the session token
pub const SESSION_HEADER: &str = "x-linktree-session";

/// Open wallet sessions
#[derive(Debug, Default)]
pub struct SessionStore {
    tokens: RwLock<HashSet<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session and return its token
    pub async fn open(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.tokens.write().await.insert(token.clone());
        token
    }

    /// End a session; false if the token was not open
    pub async fn close(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token)
    }

    pub async fn is_open(&self, token: &str) -> bool {
        self.tokens.read().await.contains(token)
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

/// Token from the session header, if present and non-empty
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_open_and_close() {
        let sessions = SessionStore::new();

        let token = sessions.open().await;
        assert!(sessions.is_open(&token).await);
        assert_ne!(sessions.open().await, token);
        assert_eq!(sessions.len().await, 2);

        assert!(sessions.close(&token).await);
        assert!(!sessions.is_open(&token).await);
        assert!(!sessions.close(&token).await);
    }

    #[test]
    fn test_session_token_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        headers.insert(SESSION_HEADER, HeaderValue::from_static("  "));
        assert_eq!(session_token(&headers), None);

        headers.insert(SESSION_HEADER, HeaderValue::from_static("abc"));
        assert_eq!(session_token(&headers), Some("abc"));
    }
}
