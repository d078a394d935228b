//! Bearer credential handling.
//!
//! Tokens are obtained elsewhere; this module only holds one for the lifetime of
//! a client. The secret is zeroized on drop and never shows up in `Debug` output.

use crate::error::{LinkedInError, Result};
use chrono::{DateTime, Duration, Utc};
use secrecy::zeroize::Zeroizing;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// An OAuth2 bearer token, optionally with a known expiry.
pub struct AccessToken {
    secret: SecretString,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Wraps a token whose lifetime is unknown.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(token.into()),
            expires_at: None,
        }
    }

    /// Wraps a token together with its `expires_in` from the token endpoint.
    ///
    /// An `expires_in` too large to represent as a timestamp leaves the expiry unknown.
    pub fn with_expiry(token: impl Into<String>, expires_in_seconds: u64) -> Self {
        let expires_at = i64::try_from(expires_in_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));
        Self {
            secret: SecretString::new(token.into()),
            expires_at,
        }
    }

    /// Reads the token from `LINKEDIN_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("LINKEDIN_ACCESS_TOKEN")
            .map_err(|_| LinkedInError::config_error("LINKEDIN_ACCESS_TOKEN is not set"))?;
        Ok(Self::new(token))
    }

    /// Checks if the token is expired or will expire within the buffer time.
    ///
    /// Tokens without a known expiry are never considered expired.
    pub fn is_expired(&self, buffer_seconds: i64) -> bool {
        match self.expires_at {
            Some(expires_at) => match Duration::try_seconds(buffer_seconds)
                .and_then(|buffer| Utc::now().checked_add_signed(buffer))
            {
                Some(deadline) => deadline >= expires_at,
                // Buffer reaches past the representable range
                None => buffer_seconds > 0,
            },
            None => false,
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Gets the remaining time until expiration.
    pub fn time_until_expiry(&self) -> Option<Duration> {
        self.expires_at.map(|at| at - Utc::now())
    }

    pub fn is_empty(&self) -> bool {
        self.secret.expose_secret().trim().is_empty()
    }

    /// The `Authorization` header value. Wiped from memory once dropped.
    pub(crate) fn bearer(&self) -> Zeroizing<String> {
        Zeroizing::new(format!("Bearer {}", self.secret.expose_secret()))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}
