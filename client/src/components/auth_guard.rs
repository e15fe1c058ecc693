//! Route guard for protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route wraps its page in [`AuthGuard`]. The decision comes
//! from `console::guard::check` on each render; no network, no cache.

#[cfg(test)]
#[path = "auth_guard_test.rs"]
mod auth_guard_test;

use console::Route;
use console::guard::{self, Access};
use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::use_api;

/// Render `children` only while a session token is stored.
///
/// Without a token the children are never constructed (so their on-mount
/// fetches never run) and the router is sent to the login route.
#[component]
pub fn AuthGuard(children: Children) -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let access = api.with_value(|api| guard::check(api.session().as_ref()));
    guarded(access, children, move |route| {
        Effect::new(move || {
            navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    })
}

/// Build `children` when `access` is granted; otherwise hand the target
/// route to `redirect` and build nothing.
pub fn guarded<V>(access: Access, children: impl FnOnce() -> V, redirect: impl FnOnce(Route)) -> Either<V, ()> {
    match access {
        Access::Granted => Either::Left(children()),
        Access::Redirect(route) => {
            tracing::debug!(to = route.path(), "no session, redirecting");
            redirect(route);
            Either::Right(())
        }
    }
}
