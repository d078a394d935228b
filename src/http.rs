//! HTTP transport for LinkedIn API calls.
//!
//! This module owns the header policy every call shares:
//! - JSON requests carry `Content-Type`, the Rest.li protocol version and the bearer token
//! - Binary uploads carry `application/octet-stream` and the bearer token
//! - The `Authorization` value is marked sensitive so it never shows up in debug output
//!
//! Nothing here retries; a failed send is returned to the caller as-is.

use crate::auth::AccessToken;
use crate::config::Config;
use crate::error::{LinkedInError, Result};
use crate::utils::join_url;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

/// Rest.li protocol version header, required on every JSON call.
pub const PROTOCOL_VERSION_HEADER: &str = "X-Restli-Protocol-Version";
pub const PROTOCOL_VERSION: &str = "2.0.0";

/// Response header carrying the ID of a created entity.
pub const RESTLI_ID_HEADER: &str = "X-RestLi-Id";

const JSON_CONTENT_TYPE: &str = "application/json";
const BINARY_CONTENT_TYPE: &str = "application/octet-stream";

/// HTTP client wrapper for LinkedIn API calls.
#[derive(Debug, Clone)]
pub struct LinkedInHttpClient {
    client: Client,
    config: Config,
}

impl LinkedInHttpClient {
    /// Creates a new HTTP client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(&config.http.user_agent);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout() {
            builder = builder.connect_timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full URL of an endpoint under the configured API base.
    pub fn api_url(&self, endpoint: &str) -> String {
        join_url(&self.config.http.api_base_url, endpoint)
    }

    /// Makes a POST request with a JSON body to an API endpoint.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        token: &AccessToken,
        body: &T,
    ) -> Result<RawResponse> {
        let payload = serde_json::to_vec(body)?;
        let url = self.api_url(endpoint);
        debug!("POST {} ({} bytes)", url, payload.len());

        let mut request = self.client.post(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(PROTOCOL_VERSION_HEADER, PROTOCOL_VERSION)
            .header(AUTHORIZATION, bearer_header(token)?)
            .body(payload)
            .send()
            .await?;

        RawResponse::read(response).await
    }

    /// Makes a POST request with a raw binary body to an absolute URL.
    ///
    /// `extra_headers` are sent as well, except any that would replace
    /// `Authorization` or `Content-Type`.
    pub async fn post_binary(
        &self,
        url: Url,
        token: &AccessToken,
        data: Vec<u8>,
        extra_headers: &HashMap<String, String>,
    ) -> Result<RawResponse> {
        debug!("POST {} ({} bytes)", url, data.len());

        let mut request = self.client.post(url);
        for (name, value) in extra_headers {
            if name.eq_ignore_ascii_case(AUTHORIZATION.as_str())
                || name.eq_ignore_ascii_case(CONTENT_TYPE.as_str())
            {
                continue;
            }
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .header(CONTENT_TYPE, BINARY_CONTENT_TYPE)
            .header(AUTHORIZATION, bearer_header(token)?)
            .body(data)
            .send()
            .await?;

        RawResponse::read(response).await
    }
}

fn bearer_header(token: &AccessToken) -> Result<HeaderValue> {
    let mut value =
        HeaderValue::from_str(token.bearer().as_str()).map_err(|_| LinkedInError::InvalidToken)?;
    value.set_sensitive(true);
    Ok(value)
}

/// A fully read response: status, headers and body text.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    async fn read(response: Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Looks up a header value (case-insensitive name).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
