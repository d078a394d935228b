//! Error types and handling for the LinkedIn publishing SDK.
//!
//! Every failure surfaces synchronously as the result of the call that hit it.
//! Nothing is retried internally.
//!
//! ## Error Categories
//!
//! - **Transport/Encoding**: connection failures, request serialization, malformed response bodies
//! - **Rejections**: the API answered with a status other than the documented success code
//! - **Local I/O**: an image file could not be read
//! - **Usage**: invalid payloads, tokens or configuration, caught before anything is sent
//!
//! ## Usage
//!
//! ```rust
//! use linkedin_pub_rs::LinkedInError;
//! use linkedin_pub_rs::error::ErrorSeverity;
//!
//! fn handle_error(error: LinkedInError) {
//!     match error.severity() {
//!         ErrorSeverity::Warning => tracing::warn!("Request failed: {}", error),
//!         ErrorSeverity::Error => tracing::error!("Error occurred: {}", error),
//!         ErrorSeverity::Critical => tracing::error!("Critical error: {}", error),
//!     }
//! }
//! ```

use std::fmt;

/// Result type alias for LinkedIn SDK operations.
pub type Result<T> = std::result::Result<T, LinkedInError>;

/// The remote operation a rejection or response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateShare,
    RegisterUpload,
    UploadImage,
}

impl Operation {
    /// The HTTP status code the API answers with on success.
    pub fn success_status(&self) -> u16 {
        match self {
            Operation::CreateShare => 201,
            Operation::RegisterUpload | Operation::UploadImage => 200,
        }
    }

    /// Short machine-friendly name, used as a log field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateShare => "create_share",
            Operation::RegisterUpload => "register_upload",
            Operation::UploadImage => "upload_image",
        }
    }

    fn rejection(&self) -> &'static str {
        match self {
            Operation::CreateShare => "share creation rejected",
            Operation::RegisterUpload => "registration rejected",
            Operation::UploadImage => "upload rejected",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for LinkedIn SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum LinkedInError {
    /// Transport errors (connection, TLS, body read)
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with anything but the documented success code
    #[error("{} (HTTP {status})", .operation.rejection())]
    UnexpectedStatus { operation: Operation, status: u16 },

    /// A success response lacked a header the operation depends on
    #[error("{operation}: response is missing the {header} header")]
    MissingHeader {
        operation: Operation,
        header: &'static str,
    },

    /// Payload violates its own invariants; nothing was sent
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Invalid access token")]
    InvalidToken,

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON processing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl LinkedInError {
    /// Gets the severity level of the error for logging purposes.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LinkedInError::Network(_) => ErrorSeverity::Warning,

            LinkedInError::UnexpectedStatus { status, .. } => match status {
                // Credential problems block every further call
                401 | 403 => ErrorSeverity::Critical,
                500..=599 => ErrorSeverity::Warning,
                _ => ErrorSeverity::Error,
            },

            LinkedInError::InvalidToken => ErrorSeverity::Critical,

            LinkedInError::MissingHeader { .. }
            | LinkedInError::InvalidRequest { .. }
            | LinkedInError::Config { .. }
            | LinkedInError::Json(_)
            | LinkedInError::Io(_)
            | LinkedInError::UrlParse(_) => ErrorSeverity::Error,
        }
    }

    /// The HTTP status of a rejection, if this error is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            LinkedInError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Creates a rejection error for the given operation.
    pub fn rejected(operation: Operation, status: u16) -> Self {
        LinkedInError::UnexpectedStatus { operation, status }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        LinkedInError::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config_error(message: impl Into<String>) -> Self {
        LinkedInError::Config {
            message: message.into(),
        }
    }
}

/// Error severity levels for logging and monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Likely transient, the caller may decide to try again
    Warning,
    /// Standard errors that affect a specific call
    Error,
    /// Errors that will affect every subsequent call
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
