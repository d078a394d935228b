//! Trait abstractions for the LinkedIn publishing SDK.
//!
//! This module defines the seams of the crate:
//! - Publishing content and uploading media
//! - Receiving raw response bodies for diagnostics
//! - Validating payloads before they are sent
//!
//! These traits enable better testability and let callers swap implementations.

use crate::error::{Operation, Result};
use crate::share::ShareRequest;
use crate::upload::{RegisterUploadRequest, RegisterUploadResponse};
use async_trait::async_trait;
use std::path::Path;

/// Trait for publishing shares and uploading media.
#[async_trait]
pub trait ContentPublisher: Send + Sync {
    /// Publishes a text-only share and returns its ID.
    async fn share_text(&self, author: &str, text: &str) -> Result<String>;

    /// Publishes a share linking to an article and returns its ID.
    async fn share_article(
        &self,
        author: &str,
        text: &str,
        url: &str,
        title: &str,
        description: &str,
    ) -> Result<String>;

    /// Publishes a share showing a registered image asset and returns its ID.
    async fn share_image(
        &self,
        author: &str,
        text: &str,
        asset: &str,
        title: &str,
        description: &str,
    ) -> Result<String>;

    /// Sends a prepared share request and returns its ID.
    async fn create_share(&self, request: &ShareRequest) -> Result<String>;

    /// Registers an upload and returns where to send the bytes.
    async fn register_upload(
        &self,
        request: &RegisterUploadRequest,
    ) -> Result<RegisterUploadResponse>;

    /// Uploads an image file to a pre-signed upload URL.
    async fn upload_image(&self, upload_url: &str, file_path: &Path) -> Result<()>;
}

/// Receives raw response bodies for diagnostic output.
pub trait DiagnosticSink: Send + Sync + std::fmt::Debug {
    /// Called once per response, before its status is checked.
    fn response_body(&self, operation: Operation, status: u16, body: &str);
}

// Utility trait for types that can be validated
pub trait Validate {
    type Error;

    /// Validates the instance.
    fn validate(&self) -> std::result::Result<(), Self::Error>;
}
