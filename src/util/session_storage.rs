//! Persistent session slot backed by browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes the token, logout clears it, and the navigation
//! guard reads it fresh on every navigation. Browser access is compiled in
//! only with the `csr` feature; elsewhere the local-storage store behaves as
//! an always-empty slot.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures (private mode, quota, no window) are swallowed. The worst
//! outcome is an extra redirect to the login view.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::state::session::SessionFlag;

/// Well-known key holding the auth token.
pub const SESSION_KEY: &str = "token";

/// Read/write access to the persisted session slot.
pub trait SessionStore {
    fn read(&self) -> SessionFlag;
    fn write(&self, token: &str);
    fn clear(&self);
}

/// Store handle shared through Leptos context.
pub type SharedSessionStore = Arc<dyn SessionStore + Send + Sync>;

/// `localStorage` slot under [`SESSION_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageSession {
    fn read(&self) -> SessionFlag {
        #[cfg(feature = "csr")]
        {
            let token = local_storage().and_then(|storage| storage.get_item(SESSION_KEY).ok().flatten());
            SessionFlag::new(token)
        }
        #[cfg(not(feature = "csr"))]
        {
            SessionFlag::absent()
        }
    }

    fn write(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(SESSION_KEY, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}

/// In-process slot for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> SessionFlag {
        SessionFlag::new(self.token.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn write(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
