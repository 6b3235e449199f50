//! Productivity tab: the Pomodoro timer toggle.

use leptos::prelude::*;

use crate::components::merge_patch;
use crate::components::toggle::ToggleSwitch;
use crate::i18n::Translator;
use crate::state::settings::{ProductivityPatch, ProfileDraft, TabPatch};

#[component]
pub fn ProductivitySettingsTab(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    let translator = expect_context::<RwSignal<Translator>>();

    let on_toggle = Callback::new(move |enabled: bool| {
        merge_patch(
            draft,
            TabPatch::Productivity(ProductivityPatch {
                pomodoro_enabled: Some(enabled),
            }),
        );
    });

    view! {
        <section class="settings-card">
            <h3 class="settings-card__title">
                {move || translator.with(|t| t.text("profile.productivityFeatures", "Productivity Features"))}
            </h3>
            <div class="settings-row">
                <div>
                    <span class="settings-row__label">
                        {move || translator.with(|t| t.text("profile.enablePomodoro", "Enable Pomodoro Timer"))}
                    </span>
                    <p class="settings-row__description">
                        {move || {
                            translator.with(|t| {
                                t.text(
                                    "profile.pomodoroDescription",
                                    "Enable the Pomodoro timer in the navigation bar for focused work sessions.",
                                )
                            })
                        }}
                    </p>
                </div>
                <ToggleSwitch
                    enabled=Signal::derive(move || draft.with(|d| d.pomodoro_enabled))
                    on_toggle=on_toggle
                    label=Signal::derive(move || {
                        translator.with(|t| t.text("profile.enablePomodoro", "Enable Pomodoro Timer"))
                    })
                />
            </div>
        </section>
    }
}
