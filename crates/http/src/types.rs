//! Wire types for the authentication backend

use serde::{Deserialize, Serialize};

/// Body of `POST /register`
#[derive(Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST /register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Response of `POST /token`
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Response of `POST /token/refresh`
#[derive(Clone, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error body returned by the backend
///
/// `detail` is usually a string but validation failures send a list, so it is
/// kept as raw JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    /// The human-readable detail, if the server sent one
    pub fn message(&self) -> Option<&str> {
        self.detail.as_str()
    }
}
