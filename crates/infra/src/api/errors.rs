//! API-specific error types
//!
//! Every failure of a backend call lands in one of four buckets. None of them
//! is retried; they are normalized into [`CrmError`] for display.

use crmdesk_domain::constants::FALLBACK_ERROR_MESSAGE;
use crmdesk_domain::CrmError;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// API operation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be parsed into the expected type.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A field check failed before anything was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error body shape the backend uses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build a status error from a raw response body.
    ///
    /// Uses the body's `message` field when it is JSON and carries a
    /// non-blank message, otherwise the generic fallback.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string());

        Self::Status { status: status.as_u16(), message }
    }

    /// HTTP status for status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for a toast.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message)
            | Self::Decode(message)
            | Self::Validation(message)
            | Self::Config(message)
            | Self::Status { message, .. } => message,
        }
    }
}

impl From<ApiError> for CrmError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(message) => CrmError::Network(message),
            ApiError::Status { message, .. } => CrmError::Api(message),
            ApiError::Decode(message) => CrmError::Decode(message),
            ApiError::Validation(message) => CrmError::Validation(message),
            ApiError::Config(message) => CrmError::Config(message),
        }
    }
}

impl From<CrmError> for ApiError {
    fn from(err: CrmError) -> Self {
        match err {
            CrmError::Network(message) => Self::Network(message),
            CrmError::Decode(message) => Self::Decode(message),
            CrmError::Validation(message) => Self::Validation(message),
            CrmError::Config(message) => Self::Config(message),
            other => Self::Network(other.to_string()),
        }
    }
}
