//! Pure rendering helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Kept free of Leptos types so the class and text choices are testable
//! natively.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use records::{Job, Run};

/// Class for a switcher link.
pub fn nav_link_class(active: bool) -> &'static str {
    if active { "nav__link nav__link--active" } else { "nav__link" }
}

/// Badge class for a job's score cell. A missing score is treated as low.
pub fn score_badge_class(job: &Job) -> &'static str {
    if job.is_high_priority() { "badge badge-high" } else { "badge badge-low" }
}

/// Status line shown above a list: the last error wins over "Loading...".
///
/// Returns the CSS class and the text, or `None` when there is nothing to say.
pub fn list_status(loading: bool, error: Option<&str>) -> Option<(&'static str, String)> {
    match error {
        Some(text) => Some(("error", text.to_owned())),
        None if loading => Some(("page__status", "Loading...".to_owned())),
        None => None,
    }
}

/// Whether the login form may be submitted.
pub fn can_submit_login(username: &str, password: &str, pending: bool) -> bool {
    !pending && !username.trim().is_empty() && !password.is_empty()
}

/// Class for a run's status cell.
pub fn run_status_class(run: &Run) -> &'static str {
    match run.status.as_str() {
        "success" => "status status--ok",
        "running" => "status status--running",
        _ if !run.error_summary.is_empty() => "status status--failed",
        _ => "status",
    }
}

/// Optional server string, or `-`.
pub fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}
