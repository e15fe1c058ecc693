use super::*;
use crate::session::MemorySession;

#[test]
fn nav_links_keep_fixed_order() {
    let routes: Vec<Route> = nav_links("/jobs").into_iter().map(|link| link.route).collect();
    assert_eq!(routes, vec![Route::Jobs, Route::Runs, Route::Sources, Route::Settings]);
}

#[test]
fn nav_links_mark_only_current_path_active() {
    let links = nav_links("/sources");
    let active: Vec<Route> = links.iter().filter(|link| link.active).map(|link| link.route).collect();
    assert_eq!(active, vec![Route::Sources]);
}

#[test]
fn nav_links_have_no_active_entry_off_switcher() {
    assert!(nav_links("/login").iter().all(|link| !link.active));
    assert!(nav_links("/jobs/12").iter().all(|link| !link.active));
}

#[test]
fn route_paths_round_trip() {
    for route in [Route::Login, Route::Jobs, Route::Runs, Route::Sources, Route::Settings] {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
    assert_eq!(Route::from_path("/nope"), None);
}

#[test]
fn only_login_is_unprotected() {
    assert!(!Route::Login.is_protected());
    assert!(NAV_ROUTES.iter().all(|route| route.is_protected()));
}

#[test]
fn logout_clears_token_and_targets_login() {
    let session = MemorySession::with_token("tok-1");
    assert_eq!(logout(&session), Route::Login);
    assert_eq!(session.get(), None);
}

#[test]
fn logout_without_session_still_targets_login() {
    let session = MemorySession::new();
    assert_eq!(logout(&session), Route::Login);
    assert_eq!(session.get(), None);
}
