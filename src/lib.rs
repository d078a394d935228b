//! # LinkedIn Publishing Rust SDK
//!
//! A small, typed client for publishing to LinkedIn through the v2 REST API.
//!
//! ## Features
//!
//! - **Shares**: text posts, article links and image posts via `ugcPosts`
//! - **Images**: register an upload, send the bytes, then share the asset
//! - **Type Safe**: request and response shapes are plain serde structs
//! - **Quiet**: raw response bodies go to a pluggable [`DiagnosticSink`], `tracing` by default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use linkedin_pub_rs::{LinkedInClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = LinkedInClient::new("your_access_token")?;
//!     let share_id = client.share_text("urn:li:person:abc123", "Hello, LinkedIn!").await?;
//!     println!("Created share {}", share_id);
//!     Ok(())
//! }
//! ```
//!
//! ## Sharing an image
//!
//! ```rust,no_run
//! use linkedin_pub_rs::{LinkedInClient, RegisterUploadRequest, Result};
//!
//! # async fn run(client: LinkedInClient) -> Result<()> {
//! let author = "urn:li:person:abc123";
//! let registration = client
//!     .register_upload(&RegisterUploadRequest::feed_image(author))
//!     .await?;
//! client.upload_registered_image(&registration, "./photo.jpg").await?;
//! client
//!     .share_image(author, "New photo", registration.asset(), "Photo", "Taken today")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod share;
pub mod traits;
pub mod upload;
pub mod utils;

// Re-export main types for convenience
pub use auth::AccessToken;
pub use client::LinkedInClient;
pub use config::Config;
pub use error::{LinkedInError, Operation, Result};
pub use share::{MediaItem, MemberNetworkVisibility, ShareMediaCategory, ShareRequest};
pub use traits::{ContentPublisher, DiagnosticSink};
pub use upload::{RegisterUploadRequest, RegisterUploadResponse};
