//! Security tab: the opt-in password change sub-flow.

use leptos::prelude::*;

use crate::components::merge_patch;
use crate::i18n::Translator;
use crate::state::settings::{ProfileDraft, SecurityPatch, TabPatch};

/// One password input with a visibility toggle.
#[component]
fn PasswordField(
    id: &'static str,
    #[prop(into)] label: Signal<String>,
    #[prop(into)] placeholder: Signal<String>,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    view! {
        <div class="settings-field">
            <label class="settings-field__label" for=id>{move || label.get()}</label>
            <div class="settings-field__password">
                <input
                    id=id
                    name=id
                    class="settings-field__control"
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=move || placeholder.get()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="settings-field__reveal"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "🙈" } else { "👁" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn SecuritySettingsTab(draft: RwSignal<ProfileDraft>) -> impl IntoView {
    let translator = expect_context::<RwSignal<Translator>>();

    let on_current = Callback::new(move |value: String| {
        merge_patch(
            draft,
            TabPatch::Security(SecurityPatch {
                current_password: Some(value),
                ..SecurityPatch::default()
            }),
        );
    });
    let on_new = Callback::new(move |value: String| {
        merge_patch(
            draft,
            TabPatch::Security(SecurityPatch {
                new_password: Some(value),
                ..SecurityPatch::default()
            }),
        );
    });
    let on_confirm = Callback::new(move |value: String| {
        merge_patch(
            draft,
            TabPatch::Security(SecurityPatch {
                confirm_password: Some(value),
                ..SecurityPatch::default()
            }),
        );
    });

    view! {
        <section class="settings-card">
            <h3 class="settings-card__title">
                {move || translator.with(|t| t.text("profile.security", "Security Settings"))}
            </h3>
            <p class="settings-card__hint">
                {move || {
                    translator.with(|t| {
                        t.text(
                            "profile.passwordChangeOptional",
                            "Leave password fields empty to update other settings without changing your password.",
                        )
                    })
                }}
            </p>
            <PasswordField
                id="current-password"
                label=Signal::derive(move || {
                    translator.with(|t| t.text("profile.currentPassword", "Current Password"))
                })
                placeholder=Signal::derive(move || {
                    translator
                        .with(|t| t.text("profile.enterCurrentPassword", "Enter your current password"))
                })
                value=Signal::derive(move || draft.with(|d| d.current_password.clone()))
                on_input=on_current
            />
            <PasswordField
                id="new-password"
                label=Signal::derive(move || {
                    translator.with(|t| t.text("profile.newPassword", "New Password"))
                })
                placeholder=Signal::derive(move || {
                    translator.with(|t| t.text("profile.enterNewPassword", "Enter your new password"))
                })
                value=Signal::derive(move || draft.with(|d| d.new_password.clone()))
                on_input=on_new
            />
            <PasswordField
                id="confirm-password"
                label=Signal::derive(move || {
                    translator.with(|t| t.text("profile.confirmPassword", "Confirm New Password"))
                })
                placeholder=Signal::derive(move || {
                    translator.with(|t| t.text("profile.confirmNewPassword", "Confirm your new password"))
                })
                value=Signal::derive(move || draft.with(|d| d.confirm_password.clone()))
                on_input=on_confirm
            />
            <p class="settings-card__note">
                {move || {
                    translator.with(|t| {
                        t.text(
                            "profile.passwordChangeNote",
                            "Password changes are saved with the form's Save Changes button.",
                        )
                    })
                }}
            </p>
        </section>
    }
}
