//! Dark mode browser glue: storage, `data-theme`, and the OS media listener.
//!
//! Reads the user's explicit preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. The precedence rules
//! (explicit choice over OS preference over light) live in
//! [`crate::state::theme`]; this module only talks to the browser.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::ui_persistence;

const STORAGE_KEY: &str = "taskflow_dark_mode";

/// Read the explicit stored choice, if the user ever made one.
///
/// `None` means no choice is stored and the OS preference governs.
pub fn stored_preference() -> Option<bool> {
    ui_persistence::load_json(STORAGE_KEY)
}

/// Persist an explicit dark-mode choice.
pub fn store_preference(enabled: bool) {
    ui_persistence::save_json(STORAGE_KEY, &enabled);
}

/// Whether the operating system currently prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = enabled;
    }
}

/// Subscribe to OS color-scheme changes for the rest of the session.
///
/// The handler receives the new "prefers dark" value. The listener is never
/// detached: it is installed once at startup and must outlive every view.
pub fn install_media_listener(on_change: impl Fn(bool) + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let Some(mql) = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        else {
            return;
        };
        let target: web_sys::EventTarget = mql.into();
        let listener = gloo_events::EventListener::new(&target, "change", move |event| {
            let prefers_dark = event
                .dyn_ref::<web_sys::MediaQueryListEvent>()
                .is_some_and(web_sys::MediaQueryListEvent::matches);
            on_change(prefers_dark);
        });
        listener.forget();
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = on_change;
    }
}
