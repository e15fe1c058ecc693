//! Settings editor: load, edit as text, and save the two config blobs.
//!
//! DESIGN
//! ======
//! Scoring and notification configs are independent [`ConfigEditor`]
//! instances; nothing is shared between them. The buffer is the
//! pretty-printed fetched object, so saving it unedited PUTs a value
//! deep-equal to what was fetched.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use records::{ConfigBlob, config_from_text, config_to_text};

use super::{Generation, LoadTicket, StateCell};
use crate::api::{ApiClient, RequestError};

/// Which remote config document an editor is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigFamily {
    Scoring,
    Notifications,
}

impl ConfigFamily {
    pub const ALL: [Self; 2] = [Self::Scoring, Self::Notifications];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Scoring => "/settings/scoring",
            Self::Notifications => "/settings/notifications",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Scoring => "Scoring Config",
            Self::Notifications => "Notification Config",
        }
    }
}

/// Text buffer and last-fetched value for one config family.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigEditor {
    family: ConfigFamily,
    pub buffer: String,
    pub fetched: Option<ConfigBlob>,
    pub loading: bool,
    pub error: Option<String>,
    generation: Generation,
}

impl ConfigEditor {
    #[must_use]
    pub fn new(family: ConfigFamily) -> Self {
        Self {
            family,
            buffer: "{}".to_owned(),
            fetched: None,
            loading: false,
            error: None,
            generation: Generation::default(),
        }
    }

    #[must_use]
    pub fn family(&self) -> ConfigFamily {
        self.family
    }

    /// Replace the buffer with user-edited text.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.loading = true;
        self.generation.issue()
    }

    /// Seed the buffer from a settled load. Stale tickets are ignored.
    ///
    /// # Errors
    ///
    /// Returns the load's own error, stale or not.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<ConfigBlob, RequestError>,
    ) -> Result<(), RequestError> {
        if !self.generation.is_current(ticket) {
            tracing::debug!(family = ?self.family, ?ticket, "discarding stale config response");
            return outcome.map(drop);
        }
        self.loading = false;
        match outcome {
            Ok(config) => {
                self.buffer = config_to_text(&config);
                self.fetched = Some(config);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Parse the buffer as JSON.
    ///
    /// # Errors
    ///
    /// [`RequestError::MalformedEdit`] when the buffer is not valid JSON.
    pub fn parse_buffer(&self) -> Result<ConfigBlob, RequestError> {
        config_from_text(&self.buffer).map_err(|e| RequestError::MalformedEdit(e.to_string()))
    }
}

/// Fetch the editor's config and seed its buffer.
///
/// # Errors
///
/// Any [`RequestError`] from the fetch.
pub async fn load<C: StateCell<ConfigEditor>>(api: &ApiClient, cell: &C) -> Result<(), RequestError> {
    let Some((family, ticket)) = cell.modify(|editor| (editor.family, editor.begin_load())) else {
        return Ok(());
    };
    let outcome = api.get_config(family).await;
    match cell.modify(move |editor| editor.finish_load(ticket, outcome)) {
        Some(result) => result,
        None => Ok(()),
    }
}

/// Parse `editor`'s buffer and PUT it. Returns the server's stored config.
///
/// # Errors
///
/// [`RequestError::MalformedEdit`] before any request when the buffer does
/// not parse, otherwise any [`RequestError`] from the PUT.
pub async fn save(api: &ApiClient, editor: &ConfigEditor) -> Result<ConfigBlob, RequestError> {
    let config = editor.parse_buffer()?;
    let stored = api.put_config(editor.family, &config).await?;
    tracing::info!(family = ?editor.family, "config saved");
    Ok(stored)
}
