use super::*;

fn user(email: &str) -> User {
    User {
        id: 9,
        email: email.to_owned(),
        name: None,
        language: None,
        avatar_url: None,
    }
}

#[test]
fn starts_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn probe_success_authenticates() {
    let mut state = SessionState::default();
    state.apply_probe(Some(user("a@b.c")));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn probe_failure_resolves_to_logged_out() {
    let mut state = SessionState::default();
    state.apply_probe(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn adopt_overrides_without_probe() {
    let mut state = SessionState::default();
    state.adopt(user("fresh@login.io"));
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap().email, "fresh@login.io");
}

#[test]
fn clear_drops_identity() {
    let mut state = SessionState::default();
    state.adopt(user("a@b.c"));
    state.clear();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}
