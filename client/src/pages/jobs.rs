//! Jobs page: filtered listing with a manual crawl trigger.
//!
//! SYSTEM CONTEXT
//! ==============
//! State is a `console::views::jobs::JobsView` in a signal. The list loads
//! once on mount; search and the trigger button reload it with the current
//! filter text.

use console::views::jobs::{self, JobQuery, JobsView};
use leptos::prelude::*;
use records::Job;

use crate::components::list_status::list_status_line;
use crate::state::{SignalCell, use_api};
use crate::util::display::{or_dash, score_badge_class};

#[component]
pub fn JobsPage() -> impl IntoView {
    let api = use_api();
    let state = SignalCell::new(JobsView::new());
    let filter = RwSignal::new(String::new());

    let reload = move || {
        let query = JobQuery::text(filter.get_untracked());
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            if let Err(e) = jobs::load(&client, &state, &query).await {
                tracing::warn!(error = %e, "jobs load failed");
            }
        });
    };

    let on_trigger = move |_| {
        let query = JobQuery::text(filter.get_untracked());
        leptos::task::spawn_local(async move {
            let client = api.get_value();
            if let Err(e) = jobs::trigger_crawl(&client, &state, &query).await {
                tracing::warn!(error = %e, "crawl trigger failed");
            }
        });
    };

    reload();

    let rows = move || {
        state.0.with(|view| {
            view.items
                .iter()
                .map(|job| view! { <JobRow job=job.clone()/> })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="card">
            <header class="page__header">
                <h2>"Jobs"</h2>
                <input
                    type="search"
                    placeholder="Filter by title, company, description"
                    prop:value=move || filter.get()
                    on:input=move |ev| filter.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            reload();
                        }
                    }
                />
                <button class="btn" on:click=move |_| reload()>
                    "Search"
                </button>
                <button class="btn btn--primary" on:click=on_trigger>
                    "Trigger crawl"
                </button>
            </header>

            {list_status_line(state)}

            <table class="table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Company"</th>
                        <th>"Location"</th>
                        <th>"Score"</th>
                        <th>"Posted"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

#[component]
fn JobRow(job: Job) -> impl IntoView {
    let badge = score_badge_class(&job);
    let score = job.score_text();
    let posted = or_dash(job.posted_at.as_deref()).to_owned();

    view! {
        <tr>
            <td>
                <a href=job.canonical_url target="_blank" rel="noreferrer">
                    {job.title}
                </a>
            </td>
            <td>{job.company}</td>
            <td>{job.location}</td>
            <td>
                <span class=badge>{score}</span>
            </td>
            <td>{posted}</td>
        </tr>
    }
}
