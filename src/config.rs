//! Configuration management for the LinkedIn publishing SDK.
//!
//! This module provides:
//! - Type-safe configuration with sensible defaults
//! - Environment variable overrides
//! - Builder pattern for easy setup
//! - Configuration validation
//!
//! ## Usage
//!
//! ```rust
//! use linkedin_pub_rs::config::{Config, DiagnosticsConfig, HttpConfig};
//! use linkedin_pub_rs::Result;
//!
//! fn example() -> Result<()> {
//!     // Create default configuration
//!     let config = Config::default();
//!
//!     // Build custom configuration
//!     let config = Config::builder()
//!         .http(HttpConfig::builder()
//!             .request_timeout_secs(60)
//!             .build())
//!         .diagnostics(DiagnosticsConfig::builder()
//!             .max_body_bytes(512)
//!             .build())
//!         .build();
//!     config.validate()?;
//!
//!     // Load from environment variables
//!     let config = Config::from_env()?;
//!     Ok(())
//! }
//! ```

use crate::error::{LinkedInError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default LinkedIn REST API base.
pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com/v2";

/// Main configuration structure for the LinkedIn SDK.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client configuration
    pub http: HttpConfig,
    /// Response body diagnostics
    pub diagnostics: DiagnosticsConfig,
}

/// HTTP client configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL for the REST API (default: "https://api.linkedin.com/v2")
    pub api_base_url: String,
    /// Request timeout in seconds; `None` keeps the transport default
    pub request_timeout_secs: Option<u64>,
    /// Connection timeout in seconds; `None` keeps the transport default
    pub connect_timeout_secs: Option<u64>,
    /// User agent string for requests
    pub user_agent: String,
}

/// Settings for the raw response body diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Whether response bodies are reported at all (default: true)
    pub log_response_bodies: bool,
    /// Bodies longer than this are truncated in log events (default: 4096)
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            connect_timeout_secs: None,
            user_agent: format!("linkedin-pub-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            log_response_bodies: true,
            max_body_bytes: 4096,
        }
    }
}

impl Config {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // HTTP settings
        if let Ok(val) = std::env::var("LINKEDIN_API_BASE_URL") {
            config.http.api_base_url = val;
        }

        if let Ok(val) = std::env::var("LINKEDIN_REQUEST_TIMEOUT") {
            config.http.request_timeout_secs = Some(val.parse().map_err(|_| {
                LinkedInError::config_error("Invalid LINKEDIN_REQUEST_TIMEOUT value")
            })?);
        }

        if let Ok(val) = std::env::var("LINKEDIN_CONNECT_TIMEOUT") {
            config.http.connect_timeout_secs = Some(val.parse().map_err(|_| {
                LinkedInError::config_error("Invalid LINKEDIN_CONNECT_TIMEOUT value")
            })?);
        }

        if let Ok(val) = std::env::var("LINKEDIN_USER_AGENT") {
            config.http.user_agent = val;
        }

        // Diagnostics settings
        if let Ok(val) = std::env::var("LINKEDIN_LOG_RESPONSE_BODIES") {
            config.diagnostics.log_response_bodies = val.parse().map_err(|_| {
                LinkedInError::config_error("Invalid LINKEDIN_LOG_RESPONSE_BODIES value")
            })?;
        }

        if let Ok(val) = std::env::var("LINKEDIN_MAX_LOGGED_BODY_BYTES") {
            config.diagnostics.max_body_bytes = val.parse().map_err(|_| {
                LinkedInError::config_error("Invalid LINKEDIN_MAX_LOGGED_BODY_BYTES value")
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for consistency and constraints.
    pub fn validate(&self) -> Result<()> {
        if self.http.api_base_url.is_empty() {
            return Err(LinkedInError::config_error("api_base_url cannot be empty"));
        }

        url::Url::parse(&self.http.api_base_url).map_err(|e| {
            LinkedInError::config_error(format!("api_base_url is not a valid URL: {e}"))
        })?;

        if self.http.request_timeout_secs == Some(0) {
            return Err(LinkedInError::config_error(
                "request_timeout_secs must be greater than 0",
            ));
        }

        if self.http.connect_timeout_secs == Some(0) {
            return Err(LinkedInError::config_error(
                "connect_timeout_secs must be greater than 0",
            ));
        }

        if self.http.user_agent.trim().is_empty() {
            return Err(LinkedInError::config_error("user_agent cannot be empty"));
        }

        Ok(())
    }

    /// Converts the request timeout to a Duration, if one is set.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.http.request_timeout_secs.map(Duration::from_secs)
    }

    /// Converts the connect timeout to a Duration, if one is set.
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.http.connect_timeout_secs.map(Duration::from_secs)
    }
}

/// Builder for creating Config instances.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    http: Option<HttpConfig>,
    diagnostics: Option<DiagnosticsConfig>,
}

impl ConfigBuilder {
    /// Sets the HTTP configuration.
    pub fn http(mut self, http: HttpConfig) -> Self {
        self.http = Some(http);
        self
    }

    /// Sets the diagnostics configuration.
    pub fn diagnostics(mut self, diagnostics: DiagnosticsConfig) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> Config {
        Config {
            http: self.http.unwrap_or_default(),
            diagnostics: self.diagnostics.unwrap_or_default(),
        }
    }
}

impl HttpConfig {
    /// Creates a new HTTP config builder.
    pub fn builder() -> HttpConfigBuilder {
        HttpConfigBuilder::default()
    }
}

impl DiagnosticsConfig {
    /// Creates a new diagnostics config builder.
    pub fn builder() -> DiagnosticsConfigBuilder {
        DiagnosticsConfigBuilder::default()
    }
}

/// Builder for HttpConfig.
#[derive(Debug, Default)]
pub struct HttpConfigBuilder {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl HttpConfigBuilder {
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn request_timeout_secs(mut self, timeout: u64) -> Self {
        self.request_timeout_secs = Some(timeout);
        self
    }

    pub fn connect_timeout_secs(mut self, timeout: u64) -> Self {
        self.connect_timeout_secs = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> HttpConfig {
        let default = HttpConfig::default();
        HttpConfig {
            api_base_url: self.api_base_url.unwrap_or(default.api_base_url),
            request_timeout_secs: self.request_timeout_secs.or(default.request_timeout_secs),
            connect_timeout_secs: self.connect_timeout_secs.or(default.connect_timeout_secs),
            user_agent: self.user_agent.unwrap_or(default.user_agent),
        }
    }
}

/// Builder for DiagnosticsConfig.
#[derive(Debug, Default)]
pub struct DiagnosticsConfigBuilder {
    log_response_bodies: Option<bool>,
    max_body_bytes: Option<usize>,
}

impl DiagnosticsConfigBuilder {
    pub fn log_response_bodies(mut self, enable: bool) -> Self {
        self.log_response_bodies = Some(enable);
        self
    }

    pub fn max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = Some(bytes);
        self
    }

    pub fn build(self) -> DiagnosticsConfig {
        let default = DiagnosticsConfig::default();
        DiagnosticsConfig {
            log_response_bodies: self
                .log_response_bodies
                .unwrap_or(default.log_response_bodies),
            max_body_bytes: self.max_body_bytes.unwrap_or(default.max_body_bytes),
        }
    }
}
