//! Settings page: one raw-JSON editor per config family.

use console::views::settings::{self, ConfigEditor, ConfigFamily};
use leptos::prelude::*;

use crate::state::{SignalCell, use_api};

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="grid grid-2">
            {ConfigFamily::ALL.into_iter().map(|family| view! { <ConfigPanel family/> }).collect::<Vec<_>>()}
        </div>
    }
}

/// Editor for one family. Panels share nothing.
#[component]
fn ConfigPanel(family: ConfigFamily) -> impl IntoView {
    let api = use_api();
    let state = SignalCell::new(ConfigEditor::new(family));
    let notice = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        let client = api.get_value();
        if let Err(e) = settings::load(&client, &state).await {
            tracing::warn!(?family, error = %e, "config load failed");
        }
    });

    let on_save = move |_| {
        let snapshot = state.0.get_untracked();
        notice.set(None);
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            match settings::save(&client, &snapshot).await {
                Ok(_) => notice.set(Some("Saved".to_owned())),
                Err(e) => {
                    tracing::warn!(?family, error = %e, "config save failed");
                    notice.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="card grid">
            <h2>{family.title()}</h2>
            <textarea
                rows="20"
                prop:value=move || state.0.with(|editor| editor.buffer.clone())
                on:input=move |ev| state.0.update(|editor| editor.edit(event_target_value(&ev)))
            ></textarea>
            <button class="btn btn--primary" on:click=on_save>
                "Save"
            </button>
            {move || notice.get().map(|text| view! { <p class="page__status">{text}</p> })}
        </div>
    }
}
