use super::*;

#[test]
fn memory_session_starts_empty() {
    let session = MemorySession::new();
    assert_eq!(session.get(), None);
    assert!(!is_authenticated(&session));
}

#[test]
fn memory_session_set_then_get_returns_token() {
    let session = MemorySession::new();
    session.set("tok-1");
    assert_eq!(session.get().as_deref(), Some("tok-1"));
    assert!(is_authenticated(&session));
}

#[test]
fn memory_session_set_replaces_previous_token() {
    let session = MemorySession::with_token("old");
    session.set("new");
    assert_eq!(session.get().as_deref(), Some("new"));
}

#[test]
fn memory_session_clear_is_idempotent() {
    let session = MemorySession::with_token("tok-1");
    session.clear();
    session.clear();
    assert_eq!(session.get(), None);

    let empty = MemorySession::new();
    empty.clear();
    assert_eq!(empty.get(), None);
}

#[test]
fn blank_token_reads_as_absent() {
    let session = MemorySession::with_token("   ");
    assert_eq!(session.get(), None);
}

#[test]
fn shared_handle_sees_writes_through_clones() {
    let session = MemorySession::new().shared();
    let other = Rc::clone(&session);
    other.set("tok-2");
    assert_eq!(session.get().as_deref(), Some("tok-2"));
}
