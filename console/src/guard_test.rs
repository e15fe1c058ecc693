use super::*;
use crate::session::MemorySession;

#[test]
fn missing_token_redirects_to_login() {
    assert_eq!(check(&MemorySession::new()), Access::Redirect(Route::Login));
}

#[test]
fn stored_token_grants_access() {
    assert!(check(&MemorySession::with_token("tok-1")).is_granted());
}

#[test]
fn check_reflects_out_of_band_clear() {
    let session = MemorySession::with_token("tok-1");
    assert!(check(&session).is_granted());
    session.clear();
    assert_eq!(check(&session), Access::Redirect(Route::Login));
}
