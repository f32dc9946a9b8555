//! Shared UI components

pub mod navbar;
pub mod spinner;

pub use navbar::Navbar;
pub use spinner::LoadingSpinner;
