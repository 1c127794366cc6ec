//! Application Configuration
//!
//! Session cookie settings for the users subsystem.

use std::time::Duration;

use platform::cookie::CookieConfig;
pub use platform::cookie::SameSite;

#[derive(Debug, Clone)]
pub struct UsersConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// HMAC key for signing session tokens (32 bytes)
    pub session_secret: [u8; 32],
    /// Lifetime of a session token and its cookie
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "todo_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600), // 12 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl UsersConfig {
    /// Create config with a random session secret.
    ///
    /// Sessions do not survive a restart with this secret.
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Session TTL in seconds
    pub fn session_ttl_secs(&self) -> i64 {
        i64::try_from(self.session_ttl.as_secs()).unwrap_or(i64::MAX)
    }

    /// Cookie attributes for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl.as_secs()),
        }
    }
}
