//! Resource-view control loops (jobs, runs, sources, settings).
//!
//! DESIGN
//! ======
//! Each view owns a small state value reached through [`StateCell`], so the
//! same load/mutate/reload code drives a Leptos signal in the browser and a
//! `Rc<RefCell<_>>` in the CLI and tests.
//!
//! Loads are neither de-duplicated nor queued, and in-flight requests are
//! never cancelled. Instead every load takes a [`LoadTicket`] from the
//! view's [`Generation`]; when it settles, only the latest ticket may apply
//! its result. A slow response from an older load is dropped even if it
//! resolves after a newer one.

pub mod jobs;
pub mod runs;
pub mod settings;
pub mod sources;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::api::RequestError;

/// Mutable access to a view's state.
///
/// `modify` returns `None` when the state is gone (the view was torn down);
/// pending results for it are then dropped.
pub trait StateCell<S> {
    fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;
}

impl<S> StateCell<S> for Rc<RefCell<S>> {
    fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Generation captured when a load starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Monotonic per-view load counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    issued: u64,
}

impl Generation {
    pub fn issue(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.issued
    }
}

/// Shared list-view state: current items plus a loading flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub loading: bool,
    /// Text of the most recent failed load, cleared by the next success.
    pub error: Option<String>,
    generation: Generation,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None, generation: Generation::default() }
    }
}

impl<T> ListView<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a load as started and return its ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loading = true;
        self.generation.issue()
    }

    /// Apply a settled load. Stale tickets leave the state untouched.
    ///
    /// # Errors
    ///
    /// Returns the load's own error, stale or not, so callers can log it.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<T>, RequestError>,
    ) -> Result<(), RequestError> {
        if !self.generation.is_current(ticket) {
            tracing::debug!(?ticket, "discarding stale list response");
            return outcome.map(drop);
        }
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

/// Run one generation-guarded load into `cell`.
///
/// `fetch` is not polled until the ticket has been issued, so the request
/// always goes out after the loading flag is set.
///
/// # Errors
///
/// Returns the fetch error, whether or not it was applied to the view.
pub async fn load_list<T, C, F>(cell: &C, fetch: F) -> Result<(), RequestError>
where
    C: StateCell<ListView<T>>,
    F: Future<Output = Result<Vec<T>, RequestError>>,
{
    let Some(ticket) = cell.modify(ListView::begin_load) else {
        return Ok(());
    };
    let outcome = fetch.await;
    match cell.modify(move |view| view.finish_load(ticket, outcome)) {
        Some(result) => result,
        None => Ok(()),
    }
}
