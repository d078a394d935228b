//! Asset registration payloads for image uploads.
//!
//! Uploading an image is a two step affair: register the upload with
//! `POST /assets?action=registerUpload`, then send the raw bytes to the
//! upload URL from the response. The asset URN from the registration is what
//! an image share refers to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Recipe for images attached to feed shares.
pub const FEEDSHARE_IMAGE_RECIPE: &str = "urn:li:digitalmediaRecipe:feedshare-image";

/// Relationship identifier for user generated content.
pub const USER_GENERATED_CONTENT: &str = "urn:li:userGeneratedContent";

/// Request body for registering an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUploadRequest {
    #[serde(rename = "registerUploadRequest")]
    pub register_upload: RegisterUpload,
}

/// Recipes, owner and relationships of an upload registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUpload {
    pub recipes: Vec<String>,
    /// URN of the member or organization that will own the asset
    pub owner: String,
    pub service_relationships: Vec<ServiceRelationship>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRelationship {
    pub relationship_type: String,
    pub identifier: String,
}

impl ServiceRelationship {
    pub fn new(relationship_type: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            relationship_type: relationship_type.into(),
            identifier: identifier.into(),
        }
    }
}

impl RegisterUploadRequest {
    /// Creates a registration request from its parts.
    pub fn new(
        owner: impl Into<String>,
        recipes: Vec<String>,
        service_relationships: Vec<ServiceRelationship>,
    ) -> Self {
        Self {
            register_upload: RegisterUpload {
                recipes,
                owner: owner.into(),
                service_relationships,
            },
        }
    }

    /// The usual registration for an image that will appear in a feed share.
    pub fn feed_image(owner: impl Into<String>) -> Self {
        Self::new(
            owner,
            vec![FEEDSHARE_IMAGE_RECIPE.to_string()],
            vec![ServiceRelationship::new("OWNER", USER_GENERATED_CONTENT)],
        )
    }
}

/// Response body of a successful registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUploadResponse {
    pub value: RegisterUploadValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUploadValue {
    pub upload_mechanism: UploadMechanism,
    pub media_artifact: String,
    pub asset: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadMechanism {
    #[serde(rename = "com.linkedin.digitalmedia.uploading.MediaUploadHttpRequest")]
    pub media_upload_http_request: MediaUploadHttpRequest,
}

/// Where and how to send the image bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUploadHttpRequest {
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Parsed eagerly so a missing or malformed URL fails the response parse
    pub upload_url: Url,
}

impl RegisterUploadResponse {
    /// URN of the registered asset, used when sharing the image.
    pub fn asset(&self) -> &str {
        &self.value.asset
    }

    pub fn media_artifact(&self) -> &str {
        &self.value.media_artifact
    }

    pub fn upload_url(&self) -> &Url {
        &self.value.upload_mechanism.media_upload_http_request.upload_url
    }

    /// Extra headers the upload request is expected to carry.
    pub fn upload_headers(&self) -> &HashMap<String, String> {
        &self.value.upload_mechanism.media_upload_http_request.headers
    }
}
