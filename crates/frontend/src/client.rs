//! Shared session controller

use crate::config::AppConfig;
use crate::storage::BrowserTokenStore;
pub use keyhold_http::ClientError;
use keyhold_http::types::RegisterResponse;
use keyhold_http::{ApiClient, SessionController};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, PoisonError};

/// Global controller instance, built on first use
static SESSION: Lazy<Mutex<Option<SessionController>>> = Lazy::new(|| Mutex::new(None));

/// Get the session controller, creating the API client on first call
///
/// Every caller shares one client, so concurrent 401s share one refresh.
pub fn session_controller() -> Result<SessionController, ClientError> {
    let mut slot = SESSION.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(controller) = slot.as_ref() {
        return Ok(controller.clone());
    }

    let client = ApiClient::builder()
        .base_url(AppConfig::API_BASE_URL)
        .store(Arc::new(BrowserTokenStore))
        .build()?;
    let controller = SessionController::new(client);
    *slot = Some(controller.clone());
    drop(slot);

    info!(base_url = AppConfig::API_BASE_URL, "api client initialized");
    Ok(controller)
}

/// Create an account
pub async fn register(username: &str, password: &str) -> Result<RegisterResponse, ClientError> {
    let controller = session_controller()?;
    controller.client().register(username, password).await
}
