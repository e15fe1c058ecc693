//! Runs page: read-only crawl history.

use console::views::runs::{self, RunsView};
use leptos::prelude::*;

use crate::components::list_status::list_status_line;
use crate::state::{SignalCell, use_api};
use crate::util::display::run_status_class;

#[component]
pub fn RunsPage() -> impl IntoView {
    let api = use_api();
    let state = SignalCell::new(RunsView::new());

    leptos::task::spawn_local(async move {
        let client = api.get_value();
        if let Err(e) = runs::load(&client, &state, None).await {
            tracing::warn!(error = %e, "runs load failed");
        }
    });

    let rows = move || {
        state.0.with(|view| {
            view.items
                .iter()
                .map(|run| {
                    view! {
                        <tr>
                            <td>{run.id}</td>
                            <td>{run.source_id}</td>
                            <td>
                                <span class=run_status_class(run)>{run.status.clone()}</span>
                            </td>
                            <td>{run.fetched_count}</td>
                            <td>{run.new_count}</td>
                            <td>{run.high_priority_count}</td>
                            <td>{run.error_summary.clone()}</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="card">
            <h2>"Crawl Runs"</h2>
            {list_status_line(state)}
            <table class="table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Source"</th>
                        <th>"Status"</th>
                        <th>"Fetched"</th>
                        <th>"New"</th>
                        <th>"High"</th>
                        <th>"Error"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
