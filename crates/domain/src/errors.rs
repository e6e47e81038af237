//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::FALLBACK_ERROR_MESSAGE;

/// Main error type for CRM Desk
///
/// Variants follow the failure taxonomy of the client: transport failures,
/// non-success statuses, unparsable bodies and local validation. Every
/// variant collapses to a single human-readable string via
/// [`CrmError::user_message`], which is what views put in front of the user.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CrmError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed: {0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CrmError {
    /// Message suitable for a toast.
    ///
    /// The variant prefix is dropped; an empty payload falls back to the
    /// generic failure message.
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::Network(m)
            | Self::Api(m)
            | Self::Decode(m)
            | Self::Validation(m)
            | Self::Auth(m)
            | Self::Storage(m)
            | Self::Config(m)
            | Self::Internal(m) => m.as_str(),
            Self::Cancelled => "Operation cancelled",
        };

        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message.to_string()
        }
    }

    /// Stable label for structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Api(_) => "api",
            Self::Decode(_) => "decode",
            Self::Validation(_) => "validation",
            Self::Auth(_) => "auth",
            Self::Storage(_) => "storage",
            Self::Config(_) => "config",
            Self::Cancelled => "cancelled",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for CRM Desk operations
pub type Result<T> = std::result::Result<T, CrmError>;
