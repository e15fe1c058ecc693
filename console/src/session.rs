//! Session store: the single current bearer token.
//!
//! DESIGN
//! ======
//! The token is reached only through a [`Session`] handle that front ends
//! construct once and pass down, so tests can swap in a [`MemorySession`]
//! without touching browser storage or the filesystem. The token stays
//! opaque: no expiry, refresh, or validation happens client-side.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Durable storage for one bearer token.
///
/// `clear` must be idempotent. Implementations should route reads through
/// [`normalize_token`] so a blank stored value reads as absent.
pub trait SessionStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Shared handle to the active session store.
pub type Session = Rc<dyn SessionStore>;

/// Treat missing and blank tokens alike; a blank credential is never sent.
#[must_use]
pub fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.trim().is_empty())
}

/// Whether a token is currently stored.
#[must_use]
pub fn is_authenticated(session: &dyn SessionStore) -> bool {
    session.get().is_some()
}

/// In-process session store.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }

    /// Wrap into a shareable [`Session`] handle.
    #[must_use]
    pub fn shared(self) -> Session {
        Rc::new(self)
    }
}

impl SessionStore for MemorySession {
    fn get(&self) -> Option<String> {
        normalize_token(self.token.borrow().clone())
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
