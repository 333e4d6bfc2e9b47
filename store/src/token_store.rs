//! # Token persistence — browser local storage with an in-memory fallback
//!
//! [`TokenStore`] is the seam between the session store and wherever the
//! bearer token actually lives. The web build persists it in the browser's
//! local storage so a session survives page loads; native builds and tests
//! use [`MemoryTokenStore`].
//!
//! All [`LocalStorageTokenStore`] methods silently swallow storage errors
//! (returning `None` for reads, doing nothing for writes). A browser with
//! storage disabled degrades to "not signed in" rather than crashing; the
//! token itself is only a cache of a credential the backend owns.

use std::sync::{Arc, Mutex};

/// Fixed local-storage key the token is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Where the bearer token is persisted between page loads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory TokenStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a token, as if a previous session had saved one.
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

/// Local-storage-backed TokenStore for the web platform.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl LocalStorageTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save("abc");
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn clones_share_state() {
        let store = MemoryTokenStore::new();
        let other = store.clone();
        store.save("shared");
        assert_eq!(other.load().as_deref(), Some("shared"));
    }
}
