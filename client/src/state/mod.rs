//! Shared client-side state plumbing.
//!
//! DESIGN
//! ======
//! Page state is a plain `console` view value inside an `RwSignal`. The
//! control loops in `console::views` reach it through [`SignalCell`], so the
//! Leptos pages and the terminal front end drive the same code.


use console::ApiClient;
use console::views::StateCell;
use leptos::prelude::*;

/// The tab's shared API client. `Rc`-based, so it lives in local storage.
pub type ApiHandle = StoredValue<ApiClient, LocalStorage>;

/// Fetch the API client provided by `App`.
pub fn use_api() -> ApiHandle {
    expect_context::<ApiHandle>()
}

/// [`StateCell`] over a Leptos signal.
///
/// Writes go through `try_update`, so a result arriving after the page was
/// unmounted (signal disposed) is dropped.
pub struct SignalCell<S: Send + Sync + 'static>(pub RwSignal<S>);

impl<S: Send + Sync + 'static> SignalCell<S> {
    pub fn new(value: S) -> Self {
        Self(RwSignal::new(value))
    }
}

impl<S: Send + Sync + 'static> Clone for SignalCell<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Send + Sync + 'static> Copy for SignalCell<S> {}

impl<S: Send + Sync + 'static> StateCell<S> for SignalCell<S> {
    fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
