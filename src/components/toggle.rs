//! Toggle switch used by the boolean preference rows.

use leptos::prelude::*;

/// Pill-style on/off switch.
#[component]
pub fn ToggleSwitch(
    /// Current value, reactive.
    enabled: Signal<bool>,
    /// Invoked with the desired new value.
    on_toggle: Callback<bool>,
    /// Accessible label for the control.
    #[prop(into)]
    label: Signal<String>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            class=move || {
                if enabled.get() { "toggle toggle--on" } else { "toggle" }
            }
            aria-checked=move || enabled.get().to_string()
            aria-label=move || label.get()
            on:click=move |_| on_toggle.run(!enabled.get_untracked())
        >
            <span class="toggle__thumb"></span>
        </button>
    }
}
