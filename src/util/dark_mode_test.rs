#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn stored_preference_is_none_in_native_tests() {
    assert_eq!(stored_preference(), None);
}

#[test]
fn system_preference_defaults_to_light_off_browser() {
    assert!(!system_prefers_dark());
}

#[test]
fn apply_and_store_are_noop_but_callable() {
    apply(true);
    apply(false);
    store_preference(true);
    install_media_listener(|_| {});
}
