//! Telegram integration tab: bot setup, polling control, task summaries.

use leptos::prelude::*;

use crate::components::merge_patch;
use crate::components::toast::Toasts;
use crate::components::toggle::ToggleSwitch;
use crate::i18n::Translator;
use crate::net::api;
use crate::net::types::Profile;
use crate::state::settings::{
    ProfileDraft, SUMMARY_FREQUENCIES, TabPatch, TelegramPatch, format_frequency,
};
use crate::state::telegram::{TelegramSetupPhase, TelegramState, chat_url};

#[component]
pub fn TelegramSettingsTab(
    draft: RwSignal<ProfileDraft>,
    telegram: RwSignal<TelegramState>,
    profile: RwSignal<Option<Profile>>,
    on_setup: Callback<()>,
    on_start_polling: Callback<()>,
    on_stop_polling: Callback<()>,
) -> impl IntoView {
    let translator = expect_context::<RwSignal<Translator>>();
    let toasts = expect_context::<Toasts>();

    let test_message = RwSignal::new(String::new());

    let on_token_input = move |ev: leptos::ev::Event| {
        merge_patch(
            draft,
            TabPatch::Telegram(TelegramPatch {
                telegram_bot_token: Some(event_target_value(&ev)),
                ..TelegramPatch::default()
            }),
        );
    };

    let on_summary_toggle = Callback::new(move |enabled: bool| {
        merge_patch(
            draft,
            TabPatch::Telegram(TelegramPatch {
                task_summary_enabled: Some(enabled),
                ..TelegramPatch::default()
            }),
        );
    });

    let setup_disabled = move || {
        draft.with(|d| d.telegram_bot_token.is_empty())
            || telegram.with(|t| t.setup_phase == TelegramSetupPhase::Loading)
    };

    let summary_ready = move || {
        profile.with(|p| {
            p.as_ref().is_some_and(|profile| {
                profile.telegram_bot_token.as_deref().is_some_and(|t| !t.is_empty())
                    && profile.telegram_chat_id.as_deref().is_some_and(|c| !c.is_empty())
            })
        })
    };

    let on_send_test_message = move |_| {
        let Some(user_id) = profile.with_untracked(|p| p.as_ref().map(|profile| profile.id)) else {
            return;
        };
        let text = test_message.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::telegram_send_test(user_id, &text).await {
                Ok(true) => {
                    test_message.set(String::new());
                    toasts.success(translator.with_untracked(|t| {
                        t.text("profile.testMessageSent", "Test message sent successfully!")
                    }));
                }
                Ok(false) => {
                    toasts.error(translator.with_untracked(|t| {
                        t.text("profile.testMessageFailed", "Failed to send test message.")
                    }));
                }
                Err(err) => {
                    log::warn!("test message failed: {err}");
                    toasts.error(translator.with_untracked(|t| {
                        t.text("profile.testMessageError", "Error sending test message.")
                    }));
                }
            }
        });
    };

    let on_send_summary = move |_| {
        leptos::task::spawn_local(async move {
            match api::send_task_summary_now().await {
                Ok(message) => {
                    let message = message.unwrap_or_else(|| {
                        translator.with_untracked(|t| {
                            t.text("profile.summarySent", "Task summary sent.")
                        })
                    });
                    toasts.success(message);
                }
                Err(err) => {
                    let message = err.server_message().map_or_else(
                        || {
                            translator.with_untracked(|t| {
                                t.text("profile.sendSummaryFailed", "Failed to send task summary.")
                            })
                        },
                        str::to_owned,
                    );
                    toasts.error(message);
                }
            }
        });
    };

    view! {
        <section class="settings-card settings-card--telegram">
            <h3 class="settings-card__title">
                {move || translator.with(|t| t.text("profile.telegramIntegration", "Telegram Integration"))}
            </h3>

            // Bot setup
            <div class="settings-subsection">
                <h4 class="settings-subsection__title">
                    {move || translator.with(|t| t.text("profile.botSetup", "Bot Setup"))}
                </h4>
                <p class="settings-card__hint">
                    {move || {
                        translator.with(|t| {
                            t.text(
                                "profile.telegramDescription",
                                "Connect your account to a Telegram bot to add items to your inbox via Telegram messages.",
                            )
                        })
                    }}
                </p>
                <div class="settings-field">
                    <label class="settings-field__label" for="telegram-bot-token">
                        {move || translator.with(|t| t.text("profile.telegramBotToken", "Telegram Bot Token"))}
                    </label>
                    <input
                        id="telegram-bot-token"
                        name="telegram_bot_token"
                        type="text"
                        class="settings-field__control"
                        placeholder="123456789:ABCDefGhIJKlmNoPQRsTUVwxyZ"
                        prop:value=move || draft.with(|d| d.telegram_bot_token.clone())
                        on:input=on_token_input
                    />
                    <p class="settings-field__help">
                        {move || {
                            translator.with(|t| {
                                t.text(
                                    "profile.telegramTokenDescription",
                                    "Create a bot with @BotFather on Telegram and paste the token here.",
                                )
                            })
                        }}
                    </p>
                </div>

                <Show when=move || {
                    profile.with(|p| {
                        p.as_ref()
                            .is_some_and(|profile| profile.telegram_chat_id.as_deref().is_some_and(|c| !c.is_empty()))
                    })
                }>
                    <p class="settings-banner settings-banner--connected">
                        {move || {
                            translator.with(|t| {
                                t.text(
                                    "profile.telegramConnected",
                                    "Your Telegram account is connected! Send messages to your bot to add items to your inbox.",
                                )
                            })
                        }}
                    </p>
                </Show>

                <Show when=move || telegram.with(|t| t.bot.is_some())>
                    <div class="settings-banner settings-banner--bot">
                        <p class="settings-banner__title">
                            {move || translator.with(|t| t.text("profile.botConfigured", "Bot configured successfully!"))}
                        </p>
                        <p>
                            <span class="settings-banner__label">
                                {move || translator.with(|t| t.text("profile.botUsername", "Bot Username:"))}
                            </span>
                            {move || {
                                telegram.with(|t| {
                                    t.bot.as_ref().map(|bot| format!(" @{}", bot.username)).unwrap_or_default()
                                })
                            }}
                        </p>
                        <div class="settings-banner__polling">
                            <span class=move || {
                                if telegram.with(|t| t.polling) {
                                    "polling-dot polling-dot--active"
                                } else {
                                    "polling-dot"
                                }
                            }></span>
                            {move || {
                                translator.with(|t| {
                                    if telegram.with(|state| state.polling) {
                                        t.text("profile.pollingActive", "Polling active")
                                    } else {
                                        t.text("profile.pollingInactive", "Polling inactive")
                                    }
                                })
                            }}
                        </div>
                        <p class="settings-field__help">
                            {move || {
                                translator.with(|t| {
                                    t.text(
                                        "profile.pollingNote",
                                        "Polling periodically checks for new messages from Telegram and adds them to your inbox.",
                                    )
                                })
                            }}
                        </p>
                        <div class="settings-banner__actions">
                            <Show
                                when=move || telegram.with(|t| t.polling)
                                fallback=move || {
                                    view! {
                                        <button
                                            type="button"
                                            class="btn btn--primary"
                                            on:click=move |_| on_start_polling.run(())
                                        >
                                            {move || translator.with(|t| t.text("profile.startPolling", "Start Polling"))}
                                        </button>
                                    }
                                }
                            >
                                <button
                                    type="button"
                                    class="btn btn--danger"
                                    on:click=move |_| on_stop_polling.run(())
                                >
                                    {move || translator.with(|t| t.text("profile.stopPolling", "Stop Polling"))}
                                </button>
                            </Show>
                            <a
                                class="btn btn--secondary"
                                target="_blank"
                                rel="noopener noreferrer"
                                href=move || {
                                    telegram.with(|state| {
                                        state.bot.as_ref().map_or_else(String::new, |bot| {
                                            chat_url(bot, &draft.with_untracked(|d| d.telegram_bot_token.clone()))
                                        })
                                    })
                                }
                            >
                                {move || translator.with(|t| t.text("profile.openTelegram", "Open in Telegram"))}
                            </a>
                        </div>
                        <div class="settings-banner__test">
                            <input
                                type="text"
                                class="settings-field__control"
                                placeholder=move || {
                                    translator
                                        .with(|t| t.text("profile.testMessagePlaceholder", "Enter a test message"))
                                }
                                prop:value=move || test_message.get()
                                on:input=move |ev| test_message.set(event_target_value(&ev))
                            />
                            <button type="button" class="btn btn--secondary" on:click=on_send_test_message>
                                {move || translator.with(|t| t.text("profile.testTelegramMessage", "Test Telegram"))}
                            </button>
                        </div>
                    </div>
                </Show>

                <button
                    type="button"
                    class="btn btn--primary"
                    disabled=setup_disabled
                    on:click=move |_| on_setup.run(())
                >
                    {move || {
                        translator.with(|t| {
                            if telegram.with(|state| state.setup_phase == TelegramSetupPhase::Loading) {
                                t.text("profile.settingUp", "Setting up...")
                            } else {
                                t.text("profile.setupTelegram", "Setup Telegram")
                            }
                        })
                    }}
                </button>
            </div>

            // Task summary notifications
            <div class="settings-subsection">
                <h4 class="settings-subsection__title">
                    {move || {
                        translator.with(|t| t.text("profile.taskSummaryNotifications", "Task Summary Notifications"))
                    }}
                </h4>
                <p class="settings-card__hint">
                    {move || {
                        translator.with(|t| {
                            t.text(
                                "profile.taskSummaryDescription",
                                "Receive regular summaries of your tasks via Telegram. This feature requires your Telegram integration to be set up.",
                            )
                        })
                    }}
                </p>
                <div class="settings-row">
                    <span class="settings-row__label">
                        {move || translator.with(|t| t.text("profile.enableTaskSummary", "Enable Task Summaries"))}
                    </span>
                    <ToggleSwitch
                        enabled=Signal::derive(move || draft.with(|d| d.task_summary_enabled))
                        on_toggle=on_summary_toggle
                        label=Signal::derive(move || {
                            translator.with(|t| t.text("profile.enableTaskSummary", "Enable Task Summaries"))
                        })
                    />
                </div>
                <div class="settings-field">
                    <span class="settings-field__label">
                        {move || translator.with(|t| t.text("profile.summaryFrequency", "Summary Frequency"))}
                    </span>
                    <div class="frequency-pills">
                        {SUMMARY_FREQUENCIES
                            .iter()
                            .map(|frequency| {
                                let key = format!("profile.frequency.{frequency}");
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if draft.with(|d| d.task_summary_frequency == *frequency) {
                                                "frequency-pill frequency-pill--active"
                                            } else {
                                                "frequency-pill"
                                            }
                                        }
                                        on:click=move |_| {
                                            merge_patch(
                                                draft,
                                                TabPatch::Telegram(TelegramPatch {
                                                    task_summary_frequency: Some((*frequency).to_owned()),
                                                    ..TelegramPatch::default()
                                                }),
                                            );
                                        }
                                    >
                                        {
                                            let key = key.clone();
                                            move || {
                                                translator
                                                    .with(|t| t.text(&key, &format_frequency(frequency)))
                                            }
                                        }
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <p class="settings-field__help">
                        {move || {
                            translator.with(|t| {
                                t.text("profile.frequencyHelp", "Choose how often you want to receive task summaries.")
                            })
                        }}
                    </p>
                </div>
                <button
                    type="button"
                    class="btn btn--primary"
                    disabled=move || !summary_ready()
                    on:click=on_send_summary
                >
                    {move || translator.with(|t| t.text("profile.sendTestSummary", "Send Test Summary"))}
                </button>
                <Show when=move || !summary_ready()>
                    <p class="settings-field__warning">
                        {move || {
                            translator.with(|t| {
                                t.text(
                                    "profile.telegramRequiredForSummaries",
                                    "Telegram integration must be set up to use task summaries.",
                                )
                            })
                        }}
                    </p>
                </Show>
            </div>
        </section>
    }
}
