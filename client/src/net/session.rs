//! `localStorage`-backed session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token persists under [`TOKEN_KEY`] across reloads and is shared by
//! every tab on the origin. Nothing else in the bundle touches this key.
//!
//! ERROR HANDLING
//! ==============
//! A missing or inaccessible storage (private mode, sandboxed frame) reads
//! as "no session" and writes are dropped; the user simply has to log in.

use std::rc::Rc;

use console::{Session, SessionStore};

pub const TOKEN_KEY: &str = "token";

/// Session store over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl BrowserSession {
    pub fn shared() -> Session {
        Rc::new(Self)
    }
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSession {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            console::session::normalize_token(storage()?.get_item(TOKEN_KEY).ok().flatten())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = storage() else {
                tracing::warn!("localStorage unavailable; token not persisted");
                return;
            };
            if storage.set_item(TOKEN_KEY, token).is_err() {
                tracing::warn!("failed to write token to localStorage");
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
            if let Some(storage) = storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
