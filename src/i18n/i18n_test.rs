use super::*;
use serde_json::json;

// =============================================================
// Language support and detection inputs
// =============================================================

#[test]
fn supported_languages_include_all_shipped_locales() {
    for lang in ["en", "es", "el", "jp", "ua", "de", "am"] {
        assert!(is_supported_language(lang), "{lang} should be supported");
    }
    assert!(!is_supported_language("fr"));
}

#[test]
fn normalize_strips_region_tags() {
    assert_eq!(normalize_language("en-US").as_deref(), Some("en"));
    assert_eq!(normalize_language("de_DE").as_deref(), Some("de"));
    assert_eq!(normalize_language("ES").as_deref(), Some("es"));
    assert_eq!(normalize_language("fr-FR"), None);
}

#[test]
fn bundle_url_carries_cache_buster() {
    assert_eq!(bundle_url("el"), format!("/locales/el/translation.json?v={BUNDLE_VERSION}"));
}

#[test]
fn detection_falls_back_to_english_off_browser() {
    assert_eq!(detect_initial_language(), "en");
}

// =============================================================
// Translator lookups
// =============================================================

#[test]
fn embedded_fallback_serves_critical_strings() {
    let translator = Translator::default();
    assert_eq!(translator.text("common.loading", "??"), "Loading...");
    assert_eq!(translator.text("auth.login", "??"), "Login");
    assert_eq!(
        translator.text("errors.somethingWentWrong", "??"),
        "Something went wrong, please try again"
    );
}

#[test]
fn missing_key_degrades_to_caller_fallback() {
    let translator = Translator::default();
    assert_eq!(translator.text("profile.title", "Profile Settings"), "Profile Settings");
}

#[test]
fn active_language_bundle_wins_over_fallback() {
    let mut translator = Translator::new("de");
    translator.insert_bundle("de", json!({ "common": { "loading": "Lädt..." } }));
    assert_eq!(translator.text("common.loading", "??"), "Lädt...");
    // Keys the German bundle lacks still resolve through English.
    assert_eq!(translator.text("auth.login", "??"), "Login");
}

#[test]
fn lookup_resolves_nested_paths_only_to_strings() {
    let translator = Translator::default();
    assert_eq!(translator.lookup("common"), None);
    assert_eq!(translator.lookup("common.loading.extra"), None);
}

// =============================================================
// Bundle cache
// =============================================================

#[test]
fn insert_bundle_deep_merges_existing_keys() {
    let mut translator = Translator::default();
    translator.insert_bundle("en", json!({ "profile": { "title": "Profile Settings" } }));
    translator.insert_bundle("en", json!({ "profile": { "saveChanges": "Save Changes" } }));
    assert_eq!(translator.text("profile.title", "??"), "Profile Settings");
    assert_eq!(translator.text("profile.saveChanges", "??"), "Save Changes");
    // The embedded fallback survives merges.
    assert_eq!(translator.text("common.loading", "??"), "Loading...");
}

#[test]
fn incoming_values_override_on_conflict() {
    let mut translator = Translator::default();
    translator.insert_bundle("en", json!({ "common": { "loading": "One moment..." } }));
    assert_eq!(translator.text("common.loading", "??"), "One moment...");
}

#[test]
fn empty_bundles_do_not_count_as_cached() {
    let mut translator = Translator::default();
    assert!(needs_fetch(&translator, "ua"));
    translator.insert_bundle("ua", json!({}));
    assert!(needs_fetch(&translator, "ua"));
    translator.insert_bundle("ua", json!({ "common": { "loading": "..." } }));
    assert!(!needs_fetch(&translator, "ua"));
}

#[test]
fn switching_language_without_bundle_needs_fetch() {
    let translator = Translator::default();
    assert!(!needs_fetch(&translator, "en"));
    assert!(needs_fetch(&translator, "jp"));
}
