//! AI features tab: assistant feature flags.

use leptos::prelude::*;

use crate::components::merge_patch;
use crate::components::toggle::ToggleSwitch;
use crate::i18n::Translator;
use crate::state::settings::{AssistantPatch, ProfileDraft, TabPatch};

/// One feature-flag row with a title, description, and switch.
#[component]
fn FeatureRow(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] description: Signal<String>,
    enabled: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="settings-row">
            <div>
                <span class="settings-row__label">{move || title.get()}</span>
                <p class="settings-row__description">{move || description.get()}</p>
            </div>
            <ToggleSwitch enabled=enabled on_toggle=on_toggle label=title/>
        </div>
    }
}

#[component]
pub fn AiSettingsTab(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    let translator = expect_context::<RwSignal<Translator>>();

    let patch = move |build: fn(bool) -> AssistantPatch| {
        Callback::new(move |enabled: bool| {
            merge_patch(draft, TabPatch::Assistant(build(enabled)));
        })
    };

    view! {
        <section class="settings-card">
            <h3 class="settings-card__title">
                {move || {
                    translator.with(|t| t.text("profile.aiProductivityFeatures", "AI & Productivity Features"))
                }}
            </h3>
            <FeatureRow
                title=Signal::derive(move || {
                    translator.with(|t| t.text("profile.taskIntelligence", "Task Intelligence"))
                })
                description=Signal::derive(move || {
                    translator.with(|t| {
                        t.text(
                            "profile.taskIntelligenceDescription",
                            "Get helpful suggestions to make your task names more descriptive and actionable.",
                        )
                    })
                })
                enabled=Signal::derive(move || draft.with(|d| d.task_intelligence_enabled))
                on_toggle=patch(|enabled| AssistantPatch {
                    task_intelligence_enabled: Some(enabled),
                    ..AssistantPatch::default()
                })
            />
            <FeatureRow
                title=Signal::derive(move || {
                    translator.with(|t| t.text("profile.autoSuggestNextActions", "Auto-Suggest Next Actions"))
                })
                description=Signal::derive(move || {
                    translator.with(|t| {
                        t.text(
                            "profile.autoSuggestNextActionsDescription",
                            "When creating a project, automatically prompt for the very next physical action to take.",
                        )
                    })
                })
                enabled=Signal::derive(move || draft.with(|d| d.auto_suggest_next_actions_enabled))
                on_toggle=patch(|enabled| AssistantPatch {
                    auto_suggest_next_actions_enabled: Some(enabled),
                    ..AssistantPatch::default()
                })
            />
            <FeatureRow
                title=Signal::derive(move || {
                    translator.with(|t| t.text("profile.productivityAssistant", "Productivity Assistant"))
                })
                description=Signal::derive(move || {
                    translator.with(|t| {
                        t.text(
                            "profile.productivityAssistantDescription",
                            "Let the assistant review stalled projects and surface what needs attention.",
                        )
                    })
                })
                enabled=Signal::derive(move || draft.with(|d| d.productivity_assistant_enabled))
                on_toggle=patch(|enabled| AssistantPatch {
                    productivity_assistant_enabled: Some(enabled),
                    ..AssistantPatch::default()
                })
            />
            <FeatureRow
                title=Signal::derive(move || {
                    translator.with(|t| t.text("profile.nextTaskSuggestion", "Next Task Suggestions"))
                })
                description=Signal::derive(move || {
                    translator.with(|t| {
                        t.text(
                            "profile.nextTaskSuggestionDescription",
                            "Suggest the next task to pick up when you finish one.",
                        )
                    })
                })
                enabled=Signal::derive(move || draft.with(|d| d.next_task_suggestion_enabled))
                on_toggle=patch(|enabled| AssistantPatch {
                    next_task_suggestion_enabled: Some(enabled),
                    ..AssistantPatch::default()
                })
            />
        </section>
    }
}
