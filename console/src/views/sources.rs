//! Sources view: listing plus the per-row enable/disable toggle.

#[cfg(test)]
#[path = "sources_test.rs"]
mod sources_test;

use records::Source;

use super::{ListView, StateCell, load_list};
use crate::api::{ApiClient, RequestError};

pub type SourcesView = ListView<Source>;

impl ListView<Source> {
    /// Displayed row for source `id`.
    #[must_use]
    pub fn source(&self, id: i64) -> Option<&Source> {
        self.items.iter().find(|source| source.id == id)
    }
}

/// Load the full source list.
///
/// # Errors
///
/// Any [`RequestError`] from the listing call.
pub async fn load<C: StateCell<SourcesView>>(api: &ApiClient, cell: &C) -> Result<(), RequestError> {
    load_list(cell, api.list_sources()).await
}

/// Flip `row.enabled` on the server, then reload the whole list.
///
/// The patch carries the negation of the row as displayed; the PATCH
/// response is ignored in favor of the reload.
///
/// # Errors
///
/// The patch error (no reload is issued), or the reload's error.
pub async fn toggle<C: StateCell<SourcesView>>(api: &ApiClient, cell: &C, row: &Source) -> Result<(), RequestError> {
    let patch = row.toggled();
    api.patch_source(row.id, patch).await?;
    tracing::info!(source_id = row.id, enabled = patch.enabled, "source toggled");
    load(api, cell).await
}
