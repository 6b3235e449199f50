//! Loading placeholders for startup and route transitions.

use leptos::prelude::*;

use crate::i18n::Translator;

/// Full-screen gate shown while auth and localization initialize.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let translator = expect_context::<RwSignal<Translator>>();
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p>
                {move || {
                    translator
                        .with(|t| t.text("common.appLoading", "Loading application... Please wait."))
                }}
            </p>
        </div>
    }
}

/// Inline placeholder for views waiting on their own data.
#[component]
pub fn FallbackLoading() -> impl IntoView {
    let translator = expect_context::<RwSignal<Translator>>();
    view! {
        <div class="fallback-loading">
            {move || translator.with(|t| t.text("common.loading", "Loading..."))}
        </div>
    }
}
