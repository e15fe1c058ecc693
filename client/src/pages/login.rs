//! Login page: username/password form exchanging credentials for a token.

use console::auth::{self, DEFAULT_USERNAME};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::use_api;
use crate::util::display::can_submit_login;

/// Login form. On success navigates to the jobs view; on failure shows the
/// fixed failure message and stays put.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let username = RwSignal::new(DEFAULT_USERNAME.to_owned());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move || {
        let (user, pass) = (username.get_untracked(), password.get_untracked());
        if !can_submit_login(&user, &pass, pending.get_untracked()) {
            return;
        }
        pending.set(true);
        message.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match auth::login(&client, &user, &pass).await {
                Ok(route) => navigate(route.path(), NavigateOptions::default()),
                Err(e) => {
                    tracing::warn!(error = %e.cause(), "login failed");
                    message.set(Some(e.to_string()));
                }
            }
            pending.set(false);
        });
    };
    let submit_on_enter = submit.clone();

    view! {
        <main class="shell login-page">
            <form
                class="card grid"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <h1>"jobwatch"</h1>
                <label>
                    "Username"
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit_on_enter();
                            }
                        }
                    />
                </label>
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || !can_submit_login(&username.get(), &password.get(), pending.get())
                >
                    "Login"
                </button>
                {move || message.get().map(|text| view! { <p class="error">{text}</p> })}
            </form>
        </main>
    }
}
