//! Login page: email + password against `POST /api/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::i18n::{self, Translator};
use crate::net::api;
use crate::net::error::ApiError;
use crate::routes::DEFAULT_AUTHENTICATED_PATH;
use crate::state::events::{AppEvent, EventBus};
use crate::state::session::SessionState;

/// Translation key and fallback for a rejected login, or `None` when the
/// server's own message should be shown verbatim.
fn login_error_key(err: &ApiError) -> Option<(&'static str, &'static str)> {
    match err {
        ApiError::Server(_) => None,
        ApiError::Network(_) | ApiError::Decode(_) => {
            Some(("auth.errorOccurred", "An error occurred. Please try again."))
        }
        _ => Some(("auth.loginFailed", "Login failed. Please try again.")),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let translator = expect_context::<RwSignal<Translator>>();
    let bus = expect_context::<EventBus>();
    let navigate = use_navigate();

    // An authenticated visitor has no business here; replace so the login
    // page is not reachable via back-navigation.
    let navigate_away = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate_away(
                DEFAULT_AUTHENTICATED_PATH,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some(translator.with_untracked(|t| {
                t.text("auth.missingCredentials", "Enter your email and password.")
            })));
            return;
        }
        busy.set(true);
        error.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(user) => {
                    // Adopt the account language before anything re-renders
                    // in the old locale.
                    if let Some(language) = user
                        .language
                        .clone()
                        .filter(|language| i18n::is_supported_language(language))
                    {
                        let differs =
                            translator.with_untracked(|t| t.language() != language);
                        if differs {
                            i18n::switch_language(translator, bus, &language).await;
                        }
                    }
                    bus.publish(AppEvent::UserLoggedIn(user));
                    navigate(
                        DEFAULT_AUTHENTICATED_PATH,
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    );
                }
                Err(err) => {
                    busy.set(false);
                    let message = match login_error_key(&err) {
                        None => err.to_string(),
                        Some((key, fallback)) => {
                            translator.with_untracked(|t| t.text(key, fallback))
                        }
                    };
                    error.set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <h1 class="login-page__brand">"Taskflow"</h1>
            <div class="login-card">
                <Show when=move || error.get().is_some()>
                    <p class="login-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="login-form" novalidate on:submit=on_submit>
                    <label class="login-form__label" for="email">
                        {move || translator.with(|t| t.text("auth.email", "Email"))}
                    </label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        class="login-form__input"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-form__label" for="password">
                        {move || translator.with(|t| t.text("auth.password", "Password"))}
                    </label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        class="login-form__input"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-form__submit" type="submit" disabled=move || busy.get()>
                        {move || translator.with(|t| t.text("auth.login", "Login"))}
                    </button>
                </form>
            </div>
        </div>
    }
}
