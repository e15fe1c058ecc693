//! View switcher with the logout action.

use console::nav;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::use_api;
use crate::util::display::nav_link_class;

/// Top navigation bar shown on every protected page.
#[component]
pub fn Nav() -> impl IntoView {
    let api = use_api();
    let location = use_location();
    let navigate = use_navigate();

    let links = move || {
        nav::nav_links(&location.pathname.get())
            .into_iter()
            .map(|link| {
                view! {
                    <a href=link.route.path() class=nav_link_class(link.active)>
                        {link.route.label()}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let on_logout = move |_| {
        let route = api.with_value(|api| nav::logout(api.session().as_ref()));
        navigate(route.path(), NavigateOptions::default());
    };

    view! {
        <nav class="nav card">
            <span class="nav__brand">"jobwatch"</span>
            {links}
            <button class="btn nav__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
