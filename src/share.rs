//! UGC share payloads.
//!
//! The JSON shape follows the `ugcPosts` endpoint, including its namespaced
//! keys such as `com.linkedin.ugc.ShareContent`.

use crate::error::LinkedInError;
use crate::traits::Validate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Published,
}

/// Kind of media attached to a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareMediaCategory {
    None,
    Article,
    Image,
}

/// Status of an attached media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Ready,
}

/// Who can see a share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberNetworkVisibility {
    #[default]
    Public,
    Connections,
    LoggedIn,
}

/// Request body for `POST /ugcPosts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    /// URN of the posting member or organization
    pub author: String,
    pub lifecycle_state: LifecycleState,
    pub specific_content: SpecificContent,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecificContent {
    #[serde(rename = "com.linkedin.ugc.ShareContent")]
    pub share_content: ShareContent,
}

/// Commentary, media category and attached media of a share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareContent {
    pub share_commentary: ShareText,
    pub share_media_category: ShareMediaCategory,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaItem>,
}

/// A `{ "text": ... }` object, used for commentary, titles and descriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareText {
    pub text: String,
}

impl ShareText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A media attachment. Articles carry `original_url`, images carry `media`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub status: MediaStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ShareText>,
    /// Digital media asset URN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<ShareText>,
}

impl MediaItem {
    /// A ready article link.
    pub fn article(
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            status: MediaStatus::Ready,
            description: Some(ShareText::new(description)),
            media: None,
            original_url: Some(url.into()),
            title: Some(ShareText::new(title)),
        }
    }

    /// A ready image referencing a registered asset.
    pub fn image(
        asset: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            status: MediaStatus::Ready,
            description: Some(ShareText::new(description)),
            media: Some(asset.into()),
            original_url: None,
            title: Some(ShareText::new(title)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    pub member_network_visibility: MemberNetworkVisibility,
}

impl ShareRequest {
    /// Creates a published, public share with the given media.
    pub fn new(
        author: impl Into<String>,
        text: impl Into<String>,
        category: ShareMediaCategory,
        media: Vec<MediaItem>,
    ) -> Self {
        Self {
            author: author.into(),
            lifecycle_state: LifecycleState::Published,
            specific_content: SpecificContent {
                share_content: ShareContent {
                    share_commentary: ShareText::new(text),
                    share_media_category: category,
                    media,
                },
            },
            visibility: Visibility {
                member_network_visibility: MemberNetworkVisibility::Public,
            },
        }
    }

    /// A text-only share.
    pub fn text(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(author, text, ShareMediaCategory::None, Vec::new())
    }

    /// A share linking to an article.
    pub fn article(
        author: impl Into<String>,
        text: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(
            author,
            text,
            ShareMediaCategory::Article,
            vec![MediaItem::article(url, title, description)],
        )
    }

    /// A share showing a previously uploaded image asset.
    pub fn image(
        author: impl Into<String>,
        text: impl Into<String>,
        asset: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(
            author,
            text,
            ShareMediaCategory::Image,
            vec![MediaItem::image(asset, title, description)],
        )
    }

    /// Sets who can see the share.
    pub fn with_visibility(mut self, visibility: MemberNetworkVisibility) -> Self {
        self.visibility.member_network_visibility = visibility;
        self
    }

    pub fn content(&self) -> &ShareContent {
        &self.specific_content.share_content
    }
}

impl Validate for ShareRequest {
    type Error = LinkedInError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.author.trim().is_empty() {
            return Err(LinkedInError::invalid_request("author URN cannot be empty"));
        }

        let content = self.content();
        match content.share_media_category {
            ShareMediaCategory::None if !content.media.is_empty() => Err(
                LinkedInError::invalid_request("media must be empty when category is NONE"),
            ),
            ShareMediaCategory::Article | ShareMediaCategory::Image
                if content.media.is_empty() =>
            {
                Err(LinkedInError::invalid_request(format!(
                    "category {:?} requires at least one media item",
                    content.share_media_category
                )))
            }
            ShareMediaCategory::Article
                if content.media.iter().any(|m| m.original_url.is_none()) =>
            {
                Err(LinkedInError::invalid_request(
                    "article media must carry an originalUrl",
                ))
            }
            ShareMediaCategory::Image if content.media.iter().any(|m| m.media.is_none()) => Err(
                LinkedInError::invalid_request("image media must reference an asset URN"),
            ),
            _ => Ok(()),
        }
    }
}
