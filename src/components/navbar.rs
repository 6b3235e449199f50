//! Fixed top navigation bar with the user menu and Pomodoro indicator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once per authenticated layout. The Pomodoro indicator reflects the
//! saved profile flag and follows live `PomodoroSettingChanged` events from
//! the bus, so a save in the settings editor updates the bar without a
//! reload.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::Translator;
use crate::net::api;
use crate::routes::LOGIN_PATH;
use crate::state::events::{AppEvent, EventBus};
use crate::state::session::SessionState;
use crate::util::browser;

#[component]
pub fn Navbar(sidebar_open: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let translator = expect_context::<RwSignal<Translator>>();
    let bus = expect_context::<EventBus>();

    let dropdown_open = RwSignal::new(false);
    let pomodoro_enabled = RwSignal::new(true);

    // The saved flag arrives with the profile document; default to visible
    // until it does.
    leptos::task::spawn_local(async move {
        match api::fetch_profile().await {
            Ok(profile) => {
                pomodoro_enabled.set(profile.pomodoro_enabled.unwrap_or(true));
            }
            Err(err) => log::warn!("pomodoro flag fetch failed: {err}"),
        }
    });

    bus.subscribe(move |event| {
        if let AppEvent::PomodoroSettingChanged(enabled) = event {
            pomodoro_enabled.set(*enabled);
        }
    });

    let on_logout = move |_| {
        dropdown_open.set(false);
        leptos::task::spawn_local(async move {
            if let Err(err) = api::logout().await {
                log::warn!("logout request failed: {err}");
            }
            session.update(SessionState::clear);
            browser::redirect(LOGIN_PATH);
        });
    };

    let avatar = move || {
        session.get().user.map_or_else(
            || view! { <span class="navbar__avatar navbar__avatar--empty">"?"</span> }.into_any(),
            |user| match user.avatar_url.filter(|url| !url.is_empty()) {
                Some(url) => view! {
                    <img class="navbar__avatar" src=url alt="avatar"/>
                }
                .into_any(),
                None => {
                    let initial = user
                        .email
                        .chars()
                        .next()
                        .map_or('?', |c| c.to_ascii_uppercase());
                    view! {
                        <span class="navbar__avatar navbar__avatar--initial">{initial.to_string()}</span>
                    }
                    .into_any()
                }
            },
        )
    };

    view! {
        <nav class="navbar">
            <div class="navbar__left">
                <button
                    type="button"
                    class="navbar__menu-button"
                    aria-label=move || {
                        translator.with(|t| {
                            if sidebar_open.get() {
                                t.text("ariaLabels.collapseSidebar", "Collapse Sidebar")
                            } else {
                                t.text("ariaLabels.expandSidebar", "Expand Sidebar")
                            }
                        })
                    }
                    on:click=move |_| sidebar_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <A href="/" attr:class="navbar__brand">"Taskflow"</A>
            </div>
            <div class="navbar__right">
                <Show when=move || pomodoro_enabled.get()>
                    <span class="navbar__pomodoro" title="Pomodoro">"🍅"</span>
                </Show>
                <div class="navbar__user">
                    <button
                        type="button"
                        class="navbar__user-button"
                        aria-label=move || translator.with(|t| t.text("ariaLabels.userMenu", "User Menu"))
                        on:click=move |_| dropdown_open.update(|open| *open = !*open)
                    >
                        {avatar}
                    </button>
                    <Show when=move || dropdown_open.get()>
                        <div class="navbar__backdrop" on:click=move |_| dropdown_open.set(false)></div>
                        <div class="navbar__dropdown">
                            <A
                                href="/profile"
                                attr:class="navbar__dropdown-item"
                                on:click=move |_| dropdown_open.set(false)
                            >
                                {move || {
                                    translator
                                        .with(|t| t.text("navigation.profileSettings", "Profile Settings"))
                                }}
                            </A>
                            <button type="button" class="navbar__dropdown-item" on:click=on_logout>
                                {move || translator.with(|t| t.text("navigation.logout", "Logout"))}
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
