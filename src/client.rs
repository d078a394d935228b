//! The main client: publishing shares and uploading images.

use crate::auth::AccessToken;
use crate::config::Config;
use crate::diagnostics::sink_for;
use crate::error::{LinkedInError, Operation, Result};
use crate::http::{LinkedInHttpClient, RESTLI_ID_HEADER, RawResponse};
use crate::share::ShareRequest;
use crate::traits::{ContentPublisher, DiagnosticSink, Validate};
use crate::upload::{RegisterUploadRequest, RegisterUploadResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

const UGC_POSTS_ENDPOINT: &str = "/ugcPosts";
const ASSETS_ENDPOINT: &str = "/assets";

/// LinkedIn publishing client.
///
/// Holds a bearer token and a pooled HTTP transport. Every operation is a single
/// request/response; nothing is retried or deduplicated, so repeating
/// [`create_share`](Self::create_share) creates another post.
#[derive(Debug)]
pub struct LinkedInClient {
    http: LinkedInHttpClient,
    token: AccessToken,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl LinkedInClient {
    /// Creates a client with the default configuration.
    pub fn new(token: impl Into<AccessToken>) -> Result<Self> {
        Self::with_config(token, Config::default())
    }

    /// Creates a client with a custom configuration.
    pub fn with_config(token: impl Into<AccessToken>, config: Config) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(LinkedInError::InvalidToken);
        }

        let diagnostics = sink_for(&config.diagnostics);
        let http = LinkedInHttpClient::with_config(config)?;

        Ok(Self {
            http,
            token,
            diagnostics,
        })
    }

    /// Creates a client from `LINKEDIN_ACCESS_TOKEN` and the `LINKEDIN_*` config variables.
    pub fn from_env() -> Result<Self> {
        Self::with_config(AccessToken::from_env()?, Config::from_env()?)
    }

    /// Replaces the sink that receives raw response bodies.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub fn config(&self) -> &Config {
        self.http.config()
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Publishes a text-only share and returns its ID.
    pub async fn share_text(&self, author: &str, text: &str) -> Result<String> {
        self.create_share(&ShareRequest::text(author, text)).await
    }

    /// Publishes a share linking to an article and returns its ID.
    pub async fn share_article(
        &self,
        author: &str,
        text: &str,
        url: &str,
        title: &str,
        description: &str,
    ) -> Result<String> {
        self.create_share(&ShareRequest::article(author, text, url, title, description))
            .await
    }

    /// Publishes a share showing a registered image asset and returns its ID.
    pub async fn share_image(
        &self,
        author: &str,
        text: &str,
        asset: &str,
        title: &str,
        description: &str,
    ) -> Result<String> {
        self.create_share(&ShareRequest::image(author, text, asset, title, description))
            .await
    }

    /// Sends a share request and returns the ID from the `X-RestLi-Id` header.
    ///
    /// Requires `201 Created`; any other status is a rejection.
    pub async fn create_share(&self, request: &ShareRequest) -> Result<String> {
        request.validate()?;
        self.check_token_expiry();

        let response = self
            .http
            .post_json(UGC_POSTS_ENDPOINT, &[], &self.token, request)
            .await?;
        self.expect_status(Operation::CreateShare, &response)?;

        let share_id = response
            .header(RESTLI_ID_HEADER)
            .ok_or(LinkedInError::MissingHeader {
                operation: Operation::CreateShare,
                header: RESTLI_ID_HEADER,
            })?
            .to_string();

        info!("Created share {}", share_id);
        Ok(share_id)
    }

    /// Registers an image upload and returns the upload URL and asset URN.
    ///
    /// Requires `200 OK`; any other status is a rejection.
    pub async fn register_upload(
        &self,
        request: &RegisterUploadRequest,
    ) -> Result<RegisterUploadResponse> {
        self.check_token_expiry();

        let response = self
            .http
            .post_json(
                ASSETS_ENDPOINT,
                &[("action", "registerUpload")],
                &self.token,
                request,
            )
            .await?;
        self.expect_status(Operation::RegisterUpload, &response)?;

        let registration: RegisterUploadResponse = serde_json::from_str(&response.body)?;
        info!("Registered upload for asset {}", registration.asset());
        Ok(registration)
    }

    /// Uploads an image file to a pre-signed upload URL.
    ///
    /// Requires `200 OK`; any other status is a rejection.
    pub async fn upload_image(&self, upload_url: &str, file_path: impl AsRef<Path>) -> Result<()> {
        let data = tokio::fs::read(file_path.as_ref()).await?;
        let url = Url::parse(upload_url)?;
        self.send_image(url, data, &HashMap::new()).await
    }

    /// Uploads in-memory image bytes to a pre-signed upload URL.
    pub async fn upload_image_bytes(&self, upload_url: &str, data: Vec<u8>) -> Result<()> {
        let url = Url::parse(upload_url)?;
        self.send_image(url, data, &HashMap::new()).await
    }

    /// Uploads an image file using the URL and extra headers of a registration.
    pub async fn upload_registered_image(
        &self,
        registration: &RegisterUploadResponse,
        file_path: impl AsRef<Path>,
    ) -> Result<()> {
        let data = tokio::fs::read(file_path.as_ref()).await?;
        self.send_image(
            registration.upload_url().clone(),
            data,
            registration.upload_headers(),
        )
        .await
    }

    async fn send_image(
        &self,
        url: Url,
        data: Vec<u8>,
        extra_headers: &HashMap<String, String>,
    ) -> Result<()> {
        self.check_token_expiry();

        let size = data.len();
        let response = self
            .http
            .post_binary(url, &self.token, data, extra_headers)
            .await?;
        self.expect_status(Operation::UploadImage, &response)?;

        info!("Uploaded image ({} bytes)", size);
        Ok(())
    }

    /// Reports the body to the diagnostic sink, then checks the status.
    fn expect_status(&self, operation: Operation, response: &RawResponse) -> Result<()> {
        self.diagnostics
            .response_body(operation, response.status, &response.body);

        if response.status != operation.success_status() {
            warn!("{} failed with HTTP {}", operation, response.status);
            return Err(LinkedInError::rejected(operation, response.status));
        }
        Ok(())
    }

    fn check_token_expiry(&self) {
        if self.token.is_expired(0) {
            warn!("Access token expired; the request will likely be rejected");
        }
    }
}

#[async_trait]
impl ContentPublisher for LinkedInClient {
    async fn share_text(&self, author: &str, text: &str) -> Result<String> {
        LinkedInClient::share_text(self, author, text).await
    }

    async fn share_article(
        &self,
        author: &str,
        text: &str,
        url: &str,
        title: &str,
        description: &str,
    ) -> Result<String> {
        LinkedInClient::share_article(self, author, text, url, title, description).await
    }

    async fn share_image(
        &self,
        author: &str,
        text: &str,
        asset: &str,
        title: &str,
        description: &str,
    ) -> Result<String> {
        LinkedInClient::share_image(self, author, text, asset, title, description).await
    }

    async fn create_share(&self, request: &ShareRequest) -> Result<String> {
        LinkedInClient::create_share(self, request).await
    }

    async fn register_upload(
        &self,
        request: &RegisterUploadRequest,
    ) -> Result<RegisterUploadResponse> {
        LinkedInClient::register_upload(self, request).await
    }

    async fn upload_image(&self, upload_url: &str, file_path: &Path) -> Result<()> {
        LinkedInClient::upload_image(self, upload_url, file_path).await
    }
}
