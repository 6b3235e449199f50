use super::*;

// =============================================================
// Startup precedence
// =============================================================

#[test]
fn stored_choice_wins_over_system_preference() {
    assert!(initial_dark_mode(Some(true), false));
    assert!(!initial_dark_mode(Some(false), true));
}

#[test]
fn system_preference_applies_without_stored_choice() {
    assert!(initial_dark_mode(None, true));
    assert!(!initial_dark_mode(None, false));
}

// =============================================================
// OS preference changes
// =============================================================

#[test]
fn os_change_is_ignored_with_stored_choice() {
    assert!(dark_mode_after_system_change(Some(true), true, false));
    assert!(!dark_mode_after_system_change(Some(false), false, true));
}

#[test]
fn os_change_tracks_system_without_stored_choice() {
    assert!(dark_mode_after_system_change(None, false, true));
    assert!(!dark_mode_after_system_change(None, true, false));
}

// =============================================================
// Appearance wire values
// =============================================================

#[test]
fn appearance_round_trips_wire_strings() {
    assert_eq!(Appearance::parse("dark"), Appearance::Dark);
    assert_eq!(Appearance::parse("light"), Appearance::Light);
    assert_eq!(Appearance::Dark.as_str(), "dark");
    assert_eq!(Appearance::Light.as_str(), "light");
}

#[test]
fn appearance_parse_defaults_unknown_values_to_light() {
    assert_eq!(Appearance::parse("solarized"), Appearance::Light);
    assert_eq!(Appearance::parse(""), Appearance::Light);
}

#[test]
fn appearance_tracks_dark_mode_flag() {
    assert_eq!(Appearance::from_dark_mode(true), Appearance::Dark);
    assert_eq!(Appearance::from_dark_mode(false), Appearance::Light);
    assert!(Appearance::Dark.is_dark());
    assert!(!Appearance::Light.is_dark());
}
