//! Keyhold HTTP layer
//!
//! [`ApiClient`] is the single shared network client. It attaches the stored
//! access token to outgoing requests and transparently refreshes it once when
//! the backend answers 401. The auth endpoints are methods on the client, and
//! [`SessionController`] turns them into session events.

#[macro_use]
extern crate tracing;

pub mod client;
pub mod session;
pub mod types;

pub use client::error::ClientError;
pub use client::{ApiClient, ApiRequest, ClientBuilder, RequestBody};
pub use session::SessionController;

// Re-export commonly used types
pub use reqwest::{Method, StatusCode};
