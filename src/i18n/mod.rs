//! Localization bootstrap with per-language bundle loading.
//!
//! DESIGN
//! ======
//! A minimal embedded English bundle covers critical strings synchronously;
//! full bundles are fetched from `/locales/{lang}/translation.json` with a
//! cache-busting version parameter and merged into an in-memory cache. A
//! language switch announces itself on the event bus only after the target
//! bundle has been fetched (or the fetch has failed) — localization is
//! best-effort and never blocks rendering. Every lookup carries a fallback
//! string, so a missing bundle degrades to readable English.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::HashMap;

use leptos::prelude::*;
use serde_json::Value;

use crate::net::error::ApiError;
use crate::state::events::{AppEvent, EventBus};
use crate::util::{browser, ui_persistence};

pub const FALLBACK_LANGUAGE: &str = "en";

/// Languages with shipped translation bundles.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "es", "el", "jp", "ua", "de", "am"];

/// Bumped when bundle contents change, to bust HTTP caches.
pub const BUNDLE_VERSION: u32 = 1;

const LOCALE_KEY: &str = "taskflow_locale";

/// Critical strings available before any bundle fetch resolves.
const EMBEDDED_FALLBACK: &str = r#"{
    "common": {
        "loading": "Loading...",
        "appLoading": "Loading application... Please wait.",
        "error": "Error"
    },
    "auth": {
        "login": "Login",
        "register": "Register"
    },
    "errors": {
        "somethingWentWrong": "Something went wrong, please try again"
    }
}"#;

pub fn is_supported_language(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&lang)
}

/// Reduce a browser language tag to a supported code (`"en-US"` -> `"en"`).
pub fn normalize_language(raw: &str) -> Option<String> {
    let base = raw.split(['-', '_']).next().unwrap_or(raw).to_ascii_lowercase();
    is_supported_language(&base).then_some(base)
}

/// Bundle URL for a language, cache-busted by the version parameter.
pub fn bundle_url(lang: &str) -> String {
    format!("/locales/{lang}/translation.json?v={BUNDLE_VERSION}")
}

/// Startup language detection: stored choice, then browser language, then
/// the fallback.
pub fn detect_initial_language() -> String {
    if let Some(stored) = ui_persistence::load_json::<String>(LOCALE_KEY) {
        if is_supported_language(&stored) {
            return stored;
        }
    }
    browser::navigator_language()
        .as_deref()
        .and_then(normalize_language)
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_owned())
}

/// Translation lookup over the cached bundles.
#[derive(Clone, Debug, PartialEq)]
pub struct Translator {
    language: String,
    bundles: HashMap<String, Value>,
}

impl Translator {
    /// Build a translator for `language`, seeded with the embedded English
    /// fallback strings.
    pub fn new(language: impl Into<String>) -> Self {
        let mut bundles = HashMap::new();
        let fallback: Value =
            serde_json::from_str(EMBEDDED_FALLBACK).unwrap_or(Value::Object(serde_json::Map::new()));
        bundles.insert(FALLBACK_LANGUAGE.to_owned(), fallback);
        Self {
            language: language.into(),
            bundles,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn has_bundle(&self, language: &str) -> bool {
        self.bundles
            .get(language)
            .is_some_and(|bundle| bundle.as_object().is_some_and(|map| !map.is_empty()))
    }

    /// Merge a fetched bundle into the cache, keeping previously loaded keys
    /// that the incoming document does not override.
    pub fn insert_bundle(&mut self, language: impl Into<String>, bundle: Value) {
        let language = language.into();
        match self.bundles.get_mut(&language) {
            Some(existing) => deep_merge(existing, bundle),
            None => {
                self.bundles.insert(language, bundle);
            }
        }
    }

    /// Resolve a dotted key (`"profile.title"`) against the active language,
    /// then the fallback language.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.bundles
            .get(&self.language)
            .and_then(|bundle| lookup_path(bundle, key))
            .or_else(|| {
                self.bundles
                    .get(FALLBACK_LANGUAGE)
                    .and_then(|bundle| lookup_path(bundle, key))
            })
    }

    /// Translate `key`, degrading to the caller-provided fallback string.
    pub fn text(&self, key: &str, fallback: &str) -> String {
        self.lookup(key).unwrap_or(fallback).to_owned()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(FALLBACK_LANGUAGE)
    }
}

fn lookup_path<'v>(bundle: &'v Value, key: &str) -> Option<&'v str> {
    let mut node = bundle;
    for segment in key.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

fn deep_merge(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(target_map), Value::Object(incoming_map)) => {
            for (key, value) in incoming_map {
                match target_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target_map.insert(key, value);
                    }
                }
            }
        }
        (target_slot, incoming_value) => *target_slot = incoming_value,
    }
}

/// Whether switching to `language` requires a bundle fetch first.
pub fn needs_fetch(translator: &Translator, language: &str) -> bool {
    !translator.has_bundle(language)
}

async fn fetch_bundle(language: &str) -> Result<Value, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::get(&bundle_url(language))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = language;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the startup language's full bundle in the background.
///
/// No announcement is made: views read the translator reactively and pick up
/// the merged bundle on their own.
pub async fn load_initial_bundle(translator: RwSignal<Translator>) {
    let language = translator.with_untracked(|t| t.language().to_owned());
    match fetch_bundle(&language).await {
        Ok(bundle) => translator.update(|t| t.insert_bundle(&language, bundle)),
        Err(err) => log::warn!("initial bundle load failed for {language}: {err}"),
    }
}

/// Switch the active language, fetching its bundle first when uncached.
///
/// The change is announced on the bus after the fetch settles — also on
/// failure, in which case lookups degrade to fallback strings.
pub async fn switch_language(translator: RwSignal<Translator>, bus: EventBus, language: &str) {
    if !is_supported_language(language) {
        log::warn!("ignoring switch to unsupported language {language:?}");
        return;
    }
    if translator.with_untracked(|t| needs_fetch(t, language)) {
        match fetch_bundle(language).await {
            Ok(bundle) => translator.update(|t| t.insert_bundle(language, bundle)),
            Err(err) => log::warn!("bundle load failed for {language}: {err}"),
        }
    }
    translator.update(|t| t.set_language(language));
    ui_persistence::save_json(LOCALE_KEY, &language);
    browser::set_document_language(language);
    bus.publish(AppEvent::LanguageChanged(language.to_owned()));
}

/// Escape hatch for stuck states: refetch the active bundle and re-announce.
pub async fn force_reload(translator: RwSignal<Translator>, bus: EventBus) {
    let language = translator.with_untracked(|t| t.language().to_owned());
    match fetch_bundle(&language).await {
        Ok(bundle) => translator.update(|t| t.insert_bundle(&language, bundle)),
        Err(err) => log::warn!("forced bundle reload failed for {language}: {err}"),
    }
    bus.publish(AppEvent::LanguageChanged(language));
}
