//! Account & preferences tab: appearance, language, timezone.

use leptos::prelude::*;

use crate::components::merge_patch;
use crate::i18n::Translator;
use crate::state::settings::{GeneralPatch, ProfileDraft, TabPatch};
use crate::state::theme::Appearance;

const LANGUAGE_OPTIONS: &[(&str, &str, &str)] = &[
    ("en", "profile.english", "English"),
    ("es", "profile.spanish", "Spanish"),
    ("el", "profile.greek", "Greek"),
    ("jp", "profile.japanese", "Japanese"),
    ("ua", "profile.ukrainian", "Ukrainian"),
    ("de", "profile.deutsch", "Deutsch"),
    ("am", "profile.amharic", "Amharic (አማርኛ)"),
];

const TIMEZONE_GROUPS: &[(&str, &[(&str, &str)])] = &[
    ("Americas", &[
        ("America/New_York", "Eastern Time (New York)"),
        ("America/Chicago", "Central Time (Chicago)"),
        ("America/Denver", "Mountain Time (Denver)"),
        ("America/Los_Angeles", "Pacific Time (Los Angeles)"),
        ("America/Toronto", "Eastern Time (Toronto)"),
        ("America/Mexico_City", "Central Time (Mexico City)"),
        ("America/Sao_Paulo", "Brasília Time (São Paulo)"),
        ("America/Argentina/Buenos_Aires", "Argentina Time (Buenos Aires)"),
    ]),
    ("Europe", &[
        ("Europe/London", "Greenwich Mean Time (London)"),
        ("Europe/Lisbon", "Western European Time (Lisbon)"),
        ("Europe/Paris", "Central European Time (Paris)"),
        ("Europe/Berlin", "Central European Time (Berlin)"),
        ("Europe/Madrid", "Central European Time (Madrid)"),
        ("Europe/Rome", "Central European Time (Rome)"),
        ("Europe/Warsaw", "Central European Time (Warsaw)"),
        ("Europe/Athens", "Eastern European Time (Athens)"),
        ("Europe/Kiev", "Eastern European Time (Kiev)"),
        ("Europe/Istanbul", "Turkey Time (Istanbul)"),
    ]),
    ("Asia", &[
        ("Asia/Dubai", "Gulf Standard Time (Dubai)"),
        ("Asia/Karachi", "Pakistan Standard Time (Karachi)"),
        ("Asia/Kolkata", "India Standard Time (Mumbai/Delhi)"),
        ("Asia/Bangkok", "Indochina Time (Bangkok)"),
        ("Asia/Singapore", "Singapore Standard Time (Singapore)"),
        ("Asia/Hong_Kong", "Hong Kong Time (Hong Kong)"),
        ("Asia/Shanghai", "China Standard Time (Beijing/Shanghai)"),
        ("Asia/Tokyo", "Japan Standard Time (Tokyo)"),
        ("Asia/Seoul", "Korea Standard Time (Seoul)"),
    ]),
    ("Africa", &[
        ("Africa/Casablanca", "Western European Time (Casablanca)"),
        ("Africa/Lagos", "West Africa Time (Lagos)"),
        ("Africa/Cairo", "Eastern European Time (Cairo)"),
        ("Africa/Johannesburg", "South Africa Standard Time (Johannesburg)"),
        ("Africa/Nairobi", "East Africa Time (Nairobi)"),
        ("Africa/Addis_Ababa", "East Africa Time (Addis Ababa)"),
    ]),
    ("Oceania", &[
        ("Australia/Perth", "Australian Western Standard Time (Perth)"),
        ("Australia/Brisbane", "Australian Eastern Standard Time (Brisbane)"),
        ("Australia/Sydney", "Australian Eastern Standard Time (Sydney)"),
        ("Pacific/Auckland", "New Zealand Standard Time (Auckland)"),
        ("Pacific/Fiji", "Fiji Time (Suva)"),
    ]),
];

#[component]
pub fn GeneralSettingsTab(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    let translator = expect_context::<RwSignal<Translator>>();

    let on_appearance = move |ev: leptos::ev::Event| {
        let appearance = Appearance::parse(&event_target_value(&ev));
        merge_patch(
            draft,
            TabPatch::General(GeneralPatch {
                appearance: Some(appearance),
                ..GeneralPatch::default()
            }),
        );
    };
    let on_language = move |ev: leptos::ev::Event| {
        merge_patch(
            draft,
            TabPatch::General(GeneralPatch {
                language: Some(event_target_value(&ev)),
                ..GeneralPatch::default()
            }),
        );
    };
    let on_timezone = move |ev: leptos::ev::Event| {
        merge_patch(
            draft,
            TabPatch::General(GeneralPatch {
                timezone: Some(event_target_value(&ev)),
                ..GeneralPatch::default()
            }),
        );
    };

    view! {
        <section class="settings-card">
            <h3 class="settings-card__title">
                {move || translator.with(|t| t.text("profile.accountSettings", "Account & Preferences"))}
            </h3>
            <div class="settings-card__grid">
                <div class="settings-field">
                    <label class="settings-field__label" for="appearance">
                        {move || translator.with(|t| t.text("profile.appearance", "Appearance"))}
                    </label>
                    <select
                        id="appearance"
                        name="appearance"
                        class="settings-field__control"
                        prop:value=move || draft.with(|d| d.appearance.as_str().to_owned())
                        on:change=on_appearance
                    >
                        <option value="light">
                            {move || translator.with(|t| t.text("profile.lightMode", "Light"))}
                        </option>
                        <option value="dark">
                            {move || translator.with(|t| t.text("profile.darkMode", "Dark"))}
                        </option>
                    </select>
                </div>
                <div class="settings-field">
                    <label class="settings-field__label" for="language">
                        {move || translator.with(|t| t.text("profile.language", "Language"))}
                    </label>
                    <select
                        id="language"
                        name="language"
                        class="settings-field__control"
                        prop:value=move || draft.with(|d| d.language.clone())
                        on:change=on_language
                    >
                        {LANGUAGE_OPTIONS
                            .iter()
                            .map(|(code, key, fallback)| {
                                view! {
                                    <option value=*code>
                                        {move || translator.with(|t| t.text(key, fallback))}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="settings-field">
                    <label class="settings-field__label" for="timezone">
                        {move || translator.with(|t| t.text("profile.timezone", "Timezone"))}
                    </label>
                    <select
                        id="timezone"
                        name="timezone"
                        class="settings-field__control"
                        prop:value=move || draft.with(|d| d.timezone.clone())
                        on:change=on_timezone
                    >
                        <option value="UTC">"UTC"</option>
                        {TIMEZONE_GROUPS
                            .iter()
                            .map(|(region, zones)| {
                                view! {
                                    <optgroup label=*region>
                                        {zones
                                            .iter()
                                            .map(|(value, label)| {
                                                view! { <option value=*value>{*label}</option> }
                                            })
                                            .collect_view()}
                                    </optgroup>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </section>
    }
}
