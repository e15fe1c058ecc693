//! Auth guard decision for protected views.
//!
//! This is UX redirection only. The server must still authorize every call;
//! a token that the server has revoked passes this check until something
//! clears it locally.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::nav::Route;
use crate::session::SessionStore;

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(Route),
}

impl Access {
    #[must_use]
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Synchronous, network-free check; re-run on every protected render.
#[must_use]
pub fn check(session: &dyn SessionStore) -> Access {
    if session.get().is_some() { Access::Granted } else { Access::Redirect(Route::Login) }
}
