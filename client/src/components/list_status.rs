//! Loading/error line shared by the list pages.

use console::views::ListView;
use leptos::prelude::*;

use crate::state::SignalCell;
use crate::util::display::list_status;

/// Reactive status line for any list page's state.
pub fn list_status_line<T: Send + Sync + 'static>(state: SignalCell<ListView<T>>) -> impl IntoView {
    move || {
        state
            .0
            .with(|view| list_status(view.loading, view.error.as_deref()))
            .map(|(class, text)| view! { <p class=class>{text}</p> })
    }
}
