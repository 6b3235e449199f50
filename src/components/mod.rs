//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome and form surfaces while reading shared state from
//! Leptos context providers; the settings tabs edit the profile draft only
//! through validated tab patches.

pub mod ai_settings_tab;
pub mod general_settings_tab;
pub mod layout;
pub mod loading;
pub mod navbar;
pub mod productivity_settings_tab;
pub mod security_settings_tab;
pub mod sidebar;
pub mod telegram_settings_tab;
pub mod toast;
pub mod toggle;

use leptos::prelude::*;

use crate::state::settings::{ProfileDraft, TabPatch};

/// Merge a tab patch into the shared draft, logging a rejected patch instead
/// of mutating anything.
pub(crate) fn merge_patch(draft: RwSignal<ProfileDraft>, patch: TabPatch) {
    draft.update(|d| {
        if let Err(err) = d.apply(patch) {
            log::warn!("rejected settings patch: {err}");
        }
    });
}
