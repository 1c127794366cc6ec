//! Session Manager
//!
//! Maps a browser to its logged-in user id through a signed cookie token:
//!
//! ```text
//! {user_id}.{expires_at_unix_secs}.{base64url(HMAC-SHA256(secret, "{user_id}.{expires_at}"))}
//! ```
//!
//! Tokens are stateless; logging out clears the cookie.

use std::sync::Arc;

use chrono::Utc;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

use crate::application::config::UsersConfig;
use crate::domain::value_object::user_id::UserId;

/// Issues and verifies session tokens with the configured secret and TTL.
///
/// ## Examples
/// ```rust
/// use std::sync::Arc;
/// use users::UsersConfig;
/// use users::application::SessionManager;
/// use users::domain::value_object::user_id::UserId;
///
/// let sessions = SessionManager::new(Arc::new(UsersConfig::with_random_secret()));
/// let token = sessions.issue(UserId::new(3));
///
/// assert_eq!(sessions.resolve(&token), Some(UserId::new(3)));
/// assert_eq!(sessions.resolve("3.9999999999.forged"), None);
/// ```
#[derive(Debug, Clone)]
pub struct SessionManager {
    config: Arc<UsersConfig>,
}

impl SessionManager {
    pub fn new(config: Arc<UsersConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UsersConfig {
        &self.config
    }

    /// Sign a session token for `user_id`.
    ///
    /// ## Arguments
    /// * `user_id` - the user the token logs in
    ///
    /// ## Returns
    /// `{user_id}.{expires_at}.{signature}`, valid for `session_ttl` from now.
    /// Suitable as a cookie value as-is.
    pub fn issue(&self, user_id: UserId) -> String {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    /// The logged-in user id carried by `token`.
    ///
    /// ## Returns
    /// `None` unless the signature matches (compared in constant time), the
    /// token has not expired and the id is a number. Never errors: a bad
    /// token is an anonymous session.
    pub fn resolve(&self, token: &str) -> Option<UserId> {
        self.resolve_at(token, Utc::now().timestamp())
    }

    fn issue_at(&self, user_id: UserId, now_secs: i64) -> String {
        let expires_at = now_secs.saturating_add(self.config.session_ttl_secs());
        let payload = format!("{user_id}.{expires_at}");
        let signature = hmac_sha256(&self.config.session_secret, payload.as_bytes());
        format!("{payload}.{}", to_base64url(&signature))
    }

    fn resolve_at(&self, token: &str, now_secs: i64) -> Option<UserId> {
        let (payload, signature_b64) = token.rsplit_once('.')?;
        let signature = from_base64url(signature_b64).ok()?;

        if !verify_hmac_sha256(&self.config.session_secret, payload.as_bytes(), &signature) {
            tracing::warn!("Session token signature mismatch");
            return None;
        }

        let (user_id, expires_at) = payload.split_once('.')?;
        let expires_at: i64 = expires_at.parse().ok()?;
        if expires_at <= now_secs {
            tracing::debug!(user_id, "Session token expired");
            return None;
        }

        user_id.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(secret: u8) -> SessionManager {
        SessionManager::new(Arc::new(UsersConfig {
            session_secret: [secret; 32],
            ..UsersConfig::default()
        }))
    }

    #[test]
    fn test_issue_then_resolve() {
        let sessions = manager(7);
        let token = sessions.issue(UserId::new(3));

        assert!(token.starts_with("3."));
        assert_eq!(sessions.resolve(&token), Some(UserId::new(3)));
    }

    #[test]
    fn test_tampered_user_id_is_rejected() {
        let sessions = manager(7);
        let token = sessions.issue(UserId::new(3));
        let forged = token.replacen('3', "4", 1);

        assert_eq!(sessions.resolve(&forged), None);
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let token = manager(7).issue(UserId::new(3));
        assert_eq!(manager(8).resolve(&token), None);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let sessions = manager(7);
        let ttl = sessions.config().session_ttl_secs();
        let token = sessions.issue_at(UserId::new(3), 1_000);

        assert_eq!(sessions.resolve_at(&token, 1_000 + ttl - 1), Some(UserId::new(3)));
        assert_eq!(sessions.resolve_at(&token, 1_000 + ttl), None);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let sessions = manager(7);
        for token in ["", ".", "3", "3.99999999999", "3.x.y", "a.b.c.d", "3.1.!!!"] {
            assert_eq!(sessions.resolve(token), None, "{token:?}");
        }
    }
}
