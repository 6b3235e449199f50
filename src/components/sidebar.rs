//! Collapsible navigation sidebar for the protected views.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::Translator;

struct NavEntry {
    path: &'static str,
    key: &'static str,
    fallback: &'static str,
}

const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { path: "/today", key: "navigation.today", fallback: "Today" },
    NavEntry { path: "/tasks", key: "navigation.tasks", fallback: "Tasks" },
    NavEntry { path: "/inbox", key: "navigation.inbox", fallback: "Inbox" },
    NavEntry { path: "/projects", key: "navigation.projects", fallback: "Projects" },
    NavEntry { path: "/notes", key: "navigation.notes", fallback: "Notes" },
    NavEntry { path: "/calendar", key: "navigation.calendar", fallback: "Calendar" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let translator = expect_context::<RwSignal<Translator>>();
    view! {
        <aside class="sidebar">
            <ul class="sidebar__list">
                {NAV_ENTRIES
                    .iter()
                    .map(|entry| {
                        view! {
                            <li class="sidebar__item">
                                <A href=entry.path attr:class="sidebar__link">
                                    {move || translator.with(|t| t.text(entry.key, entry.fallback))}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
