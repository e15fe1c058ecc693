//! Runs view: read-only crawl history.

#[cfg(test)]
#[path = "runs_test.rs"]
mod runs_test;

use records::Run;

use super::{ListView, StateCell, load_list};
use crate::api::{ApiClient, RequestError};

pub type RunsView = ListView<Run>;

/// Load run history. `limit` of `None` uses the server's default cap.
///
/// # Errors
///
/// Any [`RequestError`] from the listing call.
pub async fn load<C: StateCell<RunsView>>(api: &ApiClient, cell: &C, limit: Option<u32>) -> Result<(), RequestError> {
    load_list(cell, api.list_runs(limit)).await
}
