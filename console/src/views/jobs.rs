//! Jobs view: filtered listing plus the manual crawl trigger.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use records::{CrawlTrigger, Job};

use super::{ListView, StateCell, load_list};
use crate::api::{ApiClient, RequestError};

pub type JobsView = ListView<Job>;

/// Filter applied to `GET /jobs`.
///
/// `q` is always sent, empty or not; the optional filters are appended only
/// when set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobQuery {
    pub q: String,
    pub high_priority: Option<bool>,
    pub source_id: Option<i64>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Lower bound on `collected_at`, as an ISO-8601 timestamp.
    pub start: Option<String>,
    /// Upper bound on `collected_at`, as an ISO-8601 timestamp.
    pub end: Option<String>,
}

impl JobQuery {
    /// Free-text filter only.
    #[must_use]
    pub fn text(q: impl Into<String>) -> Self {
        Self { q: q.into(), ..Self::default() }
    }

    /// Request path including the percent-encoded query string.
    #[must_use]
    pub fn to_path(&self) -> String {
        let mut path = format!("/jobs?q={}", urlencoding::encode(&self.q));
        if let Some(high) = self.high_priority {
            path.push_str(&format!("&high_priority={high}"));
        }
        if let Some(source_id) = self.source_id {
            path.push_str(&format!("&source_id={source_id}"));
        }
        if let Some(limit) = self.limit {
            path.push_str(&format!("&limit={limit}"));
        }
        if let Some(offset) = self.offset {
            path.push_str(&format!("&offset={offset}"));
        }
        if let Some(start) = &self.start {
            path.push_str(&format!("&start={}", urlencoding::encode(start)));
        }
        if let Some(end) = &self.end {
            path.push_str(&format!("&end={}", urlencoding::encode(end)));
        }
        path
    }
}

/// Load the job list for `query`.
///
/// # Errors
///
/// Any [`RequestError`] from the listing call.
pub async fn load<C: StateCell<JobsView>>(api: &ApiClient, cell: &C, query: &JobQuery) -> Result<(), RequestError> {
    load_list(cell, api.list_jobs(query)).await
}

/// Trigger a crawl, then reload the list with `query`.
///
/// The reload runs whatever the summary says; only a failed trigger skips it.
///
/// # Errors
///
/// The trigger's error (no reload is issued), or the reload's error.
pub async fn trigger_crawl<C: StateCell<JobsView>>(
    api: &ApiClient,
    cell: &C,
    query: &JobQuery,
) -> Result<CrawlTrigger, RequestError> {
    let summary = api.trigger_crawl().await?;
    tracing::info!(
        new_jobs = summary.new_jobs,
        high_priority_jobs = summary.high_priority_jobs,
        message = %summary.message,
        "crawl triggered"
    );
    load(api, cell, query).await?;
    Ok(summary)
}
