//! Sources page: listing with a per-row enable/disable toggle.

use console::views::sources::{self, SourcesView};
use leptos::prelude::*;
use records::Source;

use crate::components::list_status::list_status_line;
use crate::state::{SignalCell, use_api};

#[component]
pub fn SourcesPage() -> impl IntoView {
    let api = use_api();
    let state = SignalCell::new(SourcesView::new());

    leptos::task::spawn_local(async move {
        let client = api.get_value();
        if let Err(e) = sources::load(&client, &state).await {
            tracing::warn!(error = %e, "sources load failed");
        }
    });

    let on_toggle = move |row: Source| {
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            if let Err(e) = sources::toggle(&client, &state, &row).await {
                tracing::warn!(source_id = row.id, error = %e, "source toggle failed");
            }
        });
    };

    let rows = move || {
        state.0.with(|view| {
            view.items
                .iter()
                .map(|source| {
                    let row = source.clone();
                    view! {
                        <tr>
                            <td>{source.id}</td>
                            <td>{source.name.clone()}</td>
                            <td>{source.base_url.clone()}</td>
                            <td>{if source.enabled { "yes" } else { "no" }}</td>
                            <td>
                                <button class="btn" on:click=move |_| on_toggle(row.clone())>
                                    {source.toggle_label()}
                                </button>
                            </td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="card">
            <h2>"Sources"</h2>
            {list_status_line(state)}
            <table class="table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"URL"</th>
                        <th>"Enabled"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
