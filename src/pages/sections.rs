//! Protected section pages rendered inside the navigation shell.
//!
//! Task, project, and note content is owned by other parts of the product;
//! these views render the localized frame the router needs so every protected
//! path resolves to a real screen.

use leptos::prelude::*;

use crate::i18n::Translator;

#[component]
fn SectionPage(
    title_key: &'static str,
    title_fallback: &'static str,
    empty_key: &'static str,
    empty_fallback: &'static str,
) -> impl IntoView {
    let translator = expect_context::<RwSignal<Translator>>();
    view! {
        <section class="section-page">
            <h2 class="section-page__title">
                {move || translator.with(|t| t.text(title_key, title_fallback))}
            </h2>
            <p class="section-page__empty">
                {move || translator.with(|t| t.text(empty_key, empty_fallback))}
            </p>
        </section>
    }
}

#[component]
pub fn TodayPage() -> impl IntoView {
    view! {
        <SectionPage
            title_key="navigation.today"
            title_fallback="Today"
            empty_key="today.empty"
            empty_fallback="Nothing due today. Enjoy the quiet."
        />
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    view! {
        <SectionPage
            title_key="navigation.tasks"
            title_fallback="Tasks"
            empty_key="tasks.empty"
            empty_fallback="No tasks yet."
        />
    }
}

#[component]
pub fn InboxPage() -> impl IntoView {
    view! {
        <SectionPage
            title_key="navigation.inbox"
            title_fallback="Inbox"
            empty_key="inbox.empty"
            empty_fallback="Your inbox is empty."
        />
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <SectionPage
            title_key="navigation.projects"
            title_fallback="Projects"
            empty_key="projects.empty"
            empty_fallback="No projects yet."
        />
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    view! {
        <SectionPage
            title_key="navigation.notes"
            title_fallback="Notes"
            empty_key="notes.empty"
            empty_fallback="No notes yet."
        />
    }
}

#[component]
pub fn CalendarPage() -> impl IntoView {
    view! {
        <SectionPage
            title_key="navigation.calendar"
            title_fallback="Calendar"
            empty_key="calendar.empty"
            empty_fallback="Nothing scheduled."
        />
    }
}
