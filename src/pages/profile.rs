//! Profile settings page: the multi-tab preference editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the profile document on mount, hands the draft to the tab
//! components, and submits the whole document as one PATCH. Post-save
//! reactions (theme toggle, language switch, Pomodoro broadcast) are decided
//! by `state::settings::follow_ups` against the server's authoritative
//! response.

use leptos::prelude::*;

use crate::app::ThemeHandle;
use crate::components::ai_settings_tab::AiSettingsTab;
use crate::components::general_settings_tab::GeneralSettingsTab;
use crate::components::loading::FallbackLoading;
use crate::components::productivity_settings_tab::ProductivitySettingsTab;
use crate::components::security_settings_tab::SecuritySettingsTab;
use crate::components::telegram_settings_tab::TelegramSettingsTab;
use crate::components::toast::Toasts;
use crate::i18n::{self, Translator};
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::Profile;
use crate::state::events::{AppEvent, EventBus};
use crate::state::settings::{self, ProfileDraft, SettingsPhase, SettingsTab};
use crate::state::telegram::{
    self, POST_SETUP_POLLING_DELAY_MS, TelegramState, token_has_separator,
};
use crate::state::theme::Appearance;
use crate::util::browser;

const TABS: &[(SettingsTab, &str, &str, &str)] = &[
    (SettingsTab::General, "profile.tabs.general", "General", "👤"),
    (SettingsTab::Security, "profile.tabs.security", "Security", "🛡"),
    (SettingsTab::Productivity, "profile.tabs.productivity", "Productivity", "⏱"),
    (SettingsTab::Telegram, "profile.tabs.telegram", "Telegram", "💬"),
    (SettingsTab::Assistant, "profile.tabs.ai", "AI Features", "✨"),
];

/// Server-provided message verbatim, else a localized generic fallback.
fn server_or(
    translator: RwSignal<Translator>,
    err: &ApiError,
    key: &'static str,
    fallback: &'static str,
) -> String {
    err.server_message().map_or_else(
        || translator.with_untracked(|t| t.text(key, fallback)),
        str::to_owned,
    )
}

/// Start the poller; failures surface the generic polling error only.
async fn start_polling(
    telegram: RwSignal<TelegramState>,
    toasts: Toasts,
    translator: RwSignal<Translator>,
) {
    match api::telegram_start_polling().await {
        Ok(detail) => {
            telegram.update(|state| state.polling_started(detail));
            toasts.success(
                translator
                    .with_untracked(|t| t.text("profile.pollingStarted", "Polling started successfully.")),
            );
        }
        Err(err) => {
            log::warn!("start polling failed: {err}");
            toasts.error(
                translator.with_untracked(|t| t.text("profile.pollingError", "Polling failed.")),
            );
        }
    }
}

async fn stop_polling(
    telegram: RwSignal<TelegramState>,
    toasts: Toasts,
    translator: RwSignal<Translator>,
) {
    match api::telegram_stop_polling().await {
        Ok(detail) => {
            telegram.update(|state| state.polling_stopped(detail));
            toasts.success(
                translator
                    .with_untracked(|t| t.text("profile.pollingStopped", "Polling stopped successfully.")),
            );
        }
        Err(err) => {
            log::warn!("stop polling failed: {err}");
            toasts.error(
                translator.with_untracked(|t| t.text("profile.pollingError", "Polling failed.")),
            );
        }
    }
}

#[component]
pub fn ProfileSettingsPage() -> impl IntoView {
    let translator = expect_context::<RwSignal<Translator>>();
    let bus = expect_context::<EventBus>();
    let theme = expect_context::<ThemeHandle>();
    let toasts = expect_context::<Toasts>();

    let phase = RwSignal::new(SettingsPhase::Loading);
    let profile = RwSignal::new(None::<Profile>);
    let draft = RwSignal::new(ProfileDraft::default());
    let telegram_state = RwSignal::new(TelegramState::default());
    let active_tab = RwSignal::new(SettingsTab::General);
    let changing_language = RwSignal::new(false);

    // The switch flow announces itself once the target bundle has settled;
    // until then the save button stays off.
    bus.subscribe(move |event| {
        if matches!(event, AppEvent::LanguageChanged(_)) {
            changing_language.set(false);
        }
    });

    // Initial fetch, then the polling-status probe when a token is stored.
    // The status probe is a background check: its failure is logged, never
    // toasted.
    leptos::task::spawn_local(async move {
        match api::fetch_profile().await {
            Ok(fetched) => {
                let active = Appearance::from_dark_mode(theme.is_dark_untracked());
                draft.set(ProfileDraft::from_profile(&fetched, active));
                let has_token = fetched
                    .telegram_bot_token
                    .as_deref()
                    .is_some_and(|token| !token.is_empty());
                profile.set(Some(fetched));
                phase.set(SettingsPhase::Ready);

                if has_token {
                    match api::telegram_polling_status().await {
                        Ok(status) => {
                            telegram_state.update(|state| state.record_status(&status));
                            if telegram::should_auto_start(&status) {
                                start_polling(telegram_state, toasts, translator).await;
                            }
                        }
                        Err(err) => log::warn!("polling status probe failed: {err}"),
                    }
                }
            }
            Err(err) => {
                let message =
                    server_or(translator, &err, "profile.fetchError", "Failed to fetch profile data.");
                toasts.error(message.clone());
                phase.set(SettingsPhase::Failed(message));
            }
        }
    });

    let on_setup = Callback::new(move |()| {
        let token = draft.with_untracked(|d| d.telegram_bot_token.clone());
        if !token_has_separator(&token) {
            telegram_state.update(TelegramState::setup_failed);
            toasts.error(
                translator
                    .with_untracked(|t| t.text("profile.invalidTelegramToken", "Invalid Telegram bot token.")),
            );
            return;
        }
        telegram_state.update(TelegramState::begin_setup);
        leptos::task::spawn_local(async move {
            match api::telegram_setup(&token).await {
                Ok(resp) => {
                    toasts.success(translator.with_untracked(|t| {
                        t.text("profile.telegramSetupSuccess", "Telegram bot configured successfully!")
                    }));
                    let chat_url = resp.bot.as_ref().map_or_else(
                        || {
                            let handle = token.split(':').next().unwrap_or_default();
                            format!("https://t.me/{handle}")
                        },
                        |bot| telegram::chat_url(bot, &token),
                    );
                    let needs_kick = resp
                        .bot
                        .as_ref()
                        .is_some_and(telegram::setup_needs_polling_kick);
                    telegram_state.update(|state| state.setup_succeeded(resp.bot));
                    browser::open_in_new_tab(&chat_url);
                    if needs_kick {
                        // Give the backend a moment to register the bot
                        // before forcing the poller on.
                        browser::sleep_ms(POST_SETUP_POLLING_DELAY_MS).await;
                        start_polling(telegram_state, toasts, translator).await;
                    }
                }
                Err(err) => {
                    telegram_state.update(TelegramState::setup_failed);
                    toasts.error(server_or(
                        translator,
                        &err,
                        "profile.telegramSetupFailed",
                        "Failed to set up Telegram bot.",
                    ));
                }
            }
        });
    });

    let on_start_polling = Callback::new(move |()| {
        leptos::task::spawn_local(async move {
            start_polling(telegram_state, toasts, translator).await;
        });
    });
    let on_stop_polling = Callback::new(move |()| {
        leptos::task::spawn_local(async move {
            stop_polling(telegram_state, toasts, translator).await;
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked() == SettingsPhase::Submitting {
            return;
        }
        let snapshot = draft.get_untracked();
        let changing_password = snapshot.wants_password_change();
        if changing_password {
            if let Err(issue) = snapshot.validate_password_change() {
                toasts.error(
                    translator
                        .with_untracked(|t| t.text(issue.message_key(), issue.fallback_message())),
                );
                return;
            }
        }
        phase.set(SettingsPhase::Submitting);
        let update = snapshot.to_update();

        leptos::task::spawn_local(async move {
            match api::update_profile(&update).await {
                Ok(updated) => {
                    let active_language = translator.with_untracked(|t| t.language().to_owned());
                    let reactions =
                        settings::follow_ups(&updated, theme.is_dark_untracked(), &active_language);

                    draft.update(|d| {
                        d.reconcile(&updated);
                        if changing_password {
                            d.clear_password_fields();
                        }
                    });
                    profile.set(Some(updated));

                    if reactions.toggle_theme {
                        theme.toggle();
                    }
                    if let Some(language) = reactions.switch_language {
                        changing_language.set(true);
                        i18n::switch_language(translator, bus, &language).await;
                        // Escape hatch: the bundle can still be missing when
                        // the fetch failed; one forced reload re-announces.
                        if translator.with_untracked(|t| i18n::needs_fetch(t, &language)) {
                            i18n::force_reload(translator, bus).await;
                        }
                    }
                    if let Some(enabled) = reactions.pomodoro_setting {
                        bus.publish(AppEvent::PomodoroSettingChanged(enabled));
                    }

                    let message = if changing_password {
                        translator.with_untracked(|t| {
                            t.text("profile.passwordChangeSuccess", "Password changed successfully!")
                        })
                    } else {
                        translator.with_untracked(|t| {
                            t.text("profile.successMessage", "Profile updated successfully!")
                        })
                    };
                    toasts.success(message);
                    phase.set(SettingsPhase::Ready);
                }
                Err(err) => {
                    toasts.error(server_or(
                        translator,
                        &err,
                        "profile.updateFailed",
                        "Failed to update profile.",
                    ));
                    phase.set(SettingsPhase::Ready);
                }
            }
        });
    };

    view! {
        <div class="profile-settings">
            <h2 class="profile-settings__title">
                {move || translator.with(|t| t.text("profile.title", "Profile Settings"))}
            </h2>
            {move || match phase.get() {
                SettingsPhase::Loading => view! { <FallbackLoading/> }.into_any(),
                SettingsPhase::Failed(message) => {
                    view! { <p class="profile-settings__error">{message}</p> }.into_any()
                }
                SettingsPhase::Ready | SettingsPhase::Submitting => {
                    view! {
                        <div>
                            <nav class="profile-settings__tabs">
                                {TABS
                                    .iter()
                                    .map(|(tab, key, fallback, icon)| {
                                        let tab = *tab;
                                        view! {
                                            <button
                                                type="button"
                                                class=move || {
                                                    if active_tab.get() == tab {
                                                        "profile-settings__tab profile-settings__tab--active"
                                                    } else {
                                                        "profile-settings__tab"
                                                    }
                                                }
                                                on:click=move |_| active_tab.set(tab)
                                            >
                                                <span class="profile-settings__tab-icon">{*icon}</span>
                                                {move || translator.with(|t| t.text(key, fallback))}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                            <form class="profile-settings__form" on:submit=on_submit>
                                {move || match active_tab.get() {
                                    SettingsTab::General => {
                                        view! { <GeneralSettingsTab draft=draft/> }.into_any()
                                    }
                                    SettingsTab::Security => {
                                        view! { <SecuritySettingsTab draft=draft/> }.into_any()
                                    }
                                    SettingsTab::Productivity => {
                                        view! { <ProductivitySettingsTab draft=draft/> }.into_any()
                                    }
                                    SettingsTab::Telegram => {
                                        view! {
                                            <TelegramSettingsTab
                                                draft=draft
                                                telegram=telegram_state
                                                profile=profile
                                                on_setup=on_setup
                                                on_start_polling=on_start_polling
                                                on_stop_polling=on_stop_polling
                                            />
                                        }
                                            .into_any()
                                    }
                                    SettingsTab::Assistant => {
                                        view! { <AiSettingsTab draft=draft/> }.into_any()
                                    }
                                }}
                                <div class="profile-settings__actions">
                                    <button
                                        type="submit"
                                        class="btn btn--primary"
                                        disabled=move || {
                                            phase.get() == SettingsPhase::Submitting
                                                || changing_language.get()
                                        }
                                    >
                                        {move || translator.with(|t| t.text("profile.saveChanges", "Save Changes"))}
                                    </button>
                                </div>
                            </form>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
