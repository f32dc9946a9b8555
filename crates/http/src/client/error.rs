//! Client error types

use crate::types::ErrorResponse;
use keyhold_core::CoreError;
use thiserror::Error;

/// Shown when the stored session can no longer be used
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or transport error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server error {status}: {body}")]
    Http { status: u16, body: String },

    /// A request was rejected and no refresh token was stored; tokens are cleared
    #[error("Session expired: no refresh token available")]
    SessionExpired,

    /// The refresh call itself failed; tokens are cleared
    #[error("Token refresh failed: {0}")]
    RefreshFailed(#[source] Box<ClientError>),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Token store write failed
    #[error(transparent)]
    Storage(#[from] CoreError),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        Self::Http {
            status: status.as_u16(),
            body,
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Whether the stored session is gone and the user has to sign in again
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::RefreshFailed(_))
    }

    /// Server-provided `detail` message, looking through refresh failures
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Http { body, .. } => serde_json::from_str::<ErrorResponse>(body)
                .ok()
                .and_then(|response| response.message().map(str::to_string)),
            Self::RefreshFailed(inner) => inner.detail(),
            _ => None,
        }
    }

    /// Message fit for display: the server's `detail`, or a generic sentence
    ///
    /// Never includes raw response bodies.
    pub fn user_message(&self) -> String {
        if let Some(detail) = self.detail() {
            return detail;
        }

        let message = match self {
            Self::Request(_) => "Could not reach the server. Please try again.",
            Self::SessionExpired | Self::RefreshFailed(_) => SESSION_EXPIRED_MESSAGE,
            Self::Http { status, .. } if *status >= 500 => {
                "The server encountered an error. Please try again later."
            }
            _ => "Something went wrong. Please try again.",
        };
        message.to_string()
    }
}
