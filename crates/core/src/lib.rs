//! Keyhold core types and utilities

pub mod error;
pub mod session;
pub mod store;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use session::{SessionEvent, SessionPhase, SessionState};
pub use store::{MemoryTokenStore, TokenKind, TokenStore};
pub use types::{TokenPair, User};
