use super::*;
use crate::transport::TransportError;

fn failure(message: &str) -> RequestError {
    RequestError::Transport(TransportError(message.to_owned()))
}

#[test]
fn begin_load_sets_loading_and_issues_increasing_tickets() {
    let mut view = ListView::<u32>::new();
    let first = view.begin_load();
    let second = view.begin_load();
    assert!(view.loading);
    assert!(second > first);
}

#[test]
fn current_ticket_applies_items_and_clears_loading() {
    let mut view = ListView::new();
    let ticket = view.begin_load();
    view.finish_load(ticket, Ok(vec![1, 2, 3])).expect("apply");
    assert_eq!(view.items, vec![1, 2, 3]);
    assert!(!view.loading);
    assert_eq!(view.error, None);
}

#[test]
fn stale_ticket_is_discarded_and_keeps_loading_for_newer_load() {
    let mut view = ListView::new();
    let stale = view.begin_load();
    let _latest = view.begin_load();
    view.finish_load(stale, Ok(vec![9])).expect("stale ok");
    assert!(view.items.is_empty());
    assert!(view.loading);
}

#[test]
fn stale_ticket_cannot_overwrite_newer_items() {
    let mut view = ListView::new();
    let stale = view.begin_load();
    let latest = view.begin_load();
    view.finish_load(latest, Ok(vec![2])).expect("latest");
    view.finish_load(stale, Ok(vec![1])).expect("stale");
    assert_eq!(view.items, vec![2]);
    assert!(!view.loading);
}

#[test]
fn failed_current_load_records_error_and_keeps_items() {
    let mut view = ListView::new();
    let ticket = view.begin_load();
    view.finish_load(ticket, Ok(vec![1])).expect("apply");

    let ticket = view.begin_load();
    let err = view.finish_load(ticket, Err(failure("offline"))).expect_err("error");
    assert_eq!(err.to_string(), "offline");
    assert_eq!(view.items, vec![1]);
    assert_eq!(view.error.as_deref(), Some("offline"));
    assert!(!view.loading);
}

#[test]
fn failed_stale_load_still_returns_error_without_touching_state() {
    let mut view = ListView::<u32>::new();
    let stale = view.begin_load();
    let _latest = view.begin_load();
    assert!(view.finish_load(stale, Err(failure("late"))).is_err());
    assert_eq!(view.error, None);
}

#[test]
fn success_clears_previous_error() {
    let mut view = ListView::new();
    let ticket = view.begin_load();
    let _ = view.finish_load(ticket, Err(failure("offline")));
    let ticket = view.begin_load();
    view.finish_load(ticket, Ok(vec![5])).expect("apply");
    assert_eq!(view.error, None);
}

struct GoneCell;

impl StateCell<ListView<u32>> for GoneCell {
    fn modify<R>(&self, _f: impl FnOnce(&mut ListView<u32>) -> R) -> Option<R> {
        None
    }
}

#[tokio::test]
async fn load_list_skips_fetch_when_view_is_gone() {
    let polled = std::cell::Cell::new(false);
    let fetch = async {
        polled.set(true);
        Ok::<_, RequestError>(vec![1])
    };
    load_list(&GoneCell, fetch).await.expect("no-op");
    assert!(!polled.get());
}
