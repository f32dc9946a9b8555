//! `localStorage`-backed token store

use keyhold_core::{CoreError, CoreResult, TokenKind, TokenStore};
use web_sys::Storage;

/// Token store over `window.localStorage`
///
/// Tokens are stored as raw strings under the fixed keys, so they survive
/// reloads and are shared by every tab of the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for BrowserTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        Self::storage()?.get_item(kind.storage_key()).ok().flatten()
    }

    fn set_pair(&self, access_token: &str, refresh_token: &str) -> CoreResult<()> {
        let storage =
            Self::storage().ok_or_else(|| CoreError::storage_error("localStorage unavailable"))?;

        for (kind, value) in [
            (TokenKind::Access, access_token),
            (TokenKind::Refresh, refresh_token),
        ] {
            if let Err(err) = storage.set_item(kind.storage_key(), value) {
                // Never leave half a pair behind
                self.clear();
                return Err(CoreError::storage_error(format!(
                    "could not write {}: {err:?}",
                    kind.storage_key()
                )));
            }
        }
        Ok(())
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        for kind in [TokenKind::Access, TokenKind::Refresh] {
            if storage.remove_item(kind.storage_key()).is_err() {
                warn!(key = kind.storage_key(), "failed to remove token from localStorage");
            }
        }
    }
}
