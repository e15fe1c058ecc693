//! Navigation model: routes, the view switcher, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front ends render [`nav_links`] as their switcher and call [`logout`]
//! from its logout action. Highlighting depends only on the current path.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::session::SessionStore;

/// Every destination the console knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Jobs,
    Runs,
    Sources,
    Settings,
}

/// Switcher order.
pub const NAV_ROUTES: [Route; 4] = [Route::Jobs, Route::Runs, Route::Sources, Route::Settings];

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Jobs => "/jobs",
            Self::Runs => "/runs",
            Self::Sources => "/sources",
            Self::Settings => "/settings",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Jobs => "Jobs",
            Self::Runs => "Runs",
            Self::Sources => "Sources",
            Self::Settings => "Settings",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        [Self::Login, Self::Jobs, Self::Runs, Self::Sources, Self::Settings]
            .into_iter()
            .find(|route| route.path() == path)
    }

    /// Whether the route sits behind the auth guard.
    #[must_use]
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Login)
    }
}

/// One switcher entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub active: bool,
}

/// Switcher entries in order; only an exact path match is active.
#[must_use]
pub fn nav_links(current_path: &str) -> Vec<NavLink> {
    NAV_ROUTES
        .into_iter()
        .map(|route| NavLink { route, active: route.path() == current_path })
        .collect()
}

/// Clear the session and return the login destination.
pub fn logout(session: &dyn SessionStore) -> Route {
    session.clear();
    tracing::info!("logged out");
    Route::Login
}
