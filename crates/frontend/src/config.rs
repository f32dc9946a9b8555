//! Frontend configuration
//!
//! Everything here is fixed at build time.

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// Backend the app talks to, overridable with `KEYHOLD_API_BASE_URL` at build time
    pub const API_BASE_URL: &'static str = match option_env!("KEYHOLD_API_BASE_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Console log level, overridable with `KEYHOLD_LOG` at build time
    pub const LOG_LEVEL: &'static str = match option_env!("KEYHOLD_LOG") {
        Some(level) => level,
        None => "info",
    };

    /// Delay before leaving the register page after a successful sign-up
    pub const REGISTER_REDIRECT_DELAY_MS: u32 = 1_500;
}
