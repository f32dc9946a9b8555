//! Keyhold web application
//!
//! A Yew single-page app that signs users in against the Keyhold API, keeps
//! the token pair in `localStorage` and shows the signed-in user's profile.

#[macro_use]
extern crate tracing;

pub mod app;
pub mod auth;
pub mod auth_guard;
pub mod client;
pub mod components;
pub mod config;
pub mod logging;
pub mod pages;
pub mod storage;

pub use app::{App, Route};
pub use config::AppConfig;
pub use storage::BrowserTokenStore;
