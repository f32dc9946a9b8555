//! Authentication module

pub mod context;

// Re-export commonly used items
pub use context::{
    AuthContext, AuthContextData, AuthProvider, fetch_profile, login, logout, refresh, use_auth,
};
