//! Persistent storage contract for the access/refresh token pair
//!
//! The store only knows about two opaque strings. It does not validate their
//! contents or track expiry; absence of a token is the only observable state.

use crate::{CoreResult, TokenPair};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// The two tokens a session persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Fixed storage key for this token
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Access => "accessToken",
            Self::Refresh => "refreshToken",
        }
    }
}

/// Key/value storage for the token pair
///
/// Implementations must write and remove both tokens together so callers never
/// observe a lone access or refresh token.
pub trait TokenStore: Send + Sync {
    /// Read a single token
    fn get(&self, kind: TokenKind) -> Option<String>;

    /// Persist both tokens, overwriting any previous values
    fn set_pair(&self, access_token: &str, refresh_token: &str) -> CoreResult<()>;

    /// Remove both tokens
    fn clear(&self);

    /// Both tokens, or `None` if either is missing
    fn token_pair(&self) -> Option<TokenPair> {
        let access_token = self.get(TokenKind::Access)?;
        let refresh_token = self.get(TokenKind::Refresh)?;
        Some(TokenPair {
            access_token,
            refresh_token,
        })
    }
}

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<TokenKind, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a pair
    pub fn with_pair(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        let store = Self::new();
        {
            let mut tokens = store.lock();
            tokens.insert(TokenKind::Access, access_token.into());
            tokens.insert(TokenKind::Refresh, refresh_token.into());
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<TokenKind, String>> {
        // A panic while holding the lock cannot leave the map half-written
        self.tokens
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        self.lock().get(&kind).cloned()
    }

    fn set_pair(&self, access_token: &str, refresh_token: &str) -> CoreResult<()> {
        let mut tokens = self.lock();
        tokens.insert(TokenKind::Access, access_token.to_string());
        tokens.insert(TokenKind::Refresh, refresh_token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.lock().clear();
    }
}
