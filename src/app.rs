//! Application root: context construction, initialization, and the router.
//!
//! ARCHITECTURE
//! ============
//! Every shared holder (session, theme, translator, event bus, toasts) is
//! constructed here and provided via context — there are no module-level
//! singletons. Initialization gates rendering: the route table is not
//! evaluated until the session probe has settled, so the auth gate always
//! decides from a determinate state. Teardown is the page unload; the only
//! process-wide listener (the OS color-scheme watcher) intentionally lives
//! for the whole session.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::layout::Shell;
use crate::components::loading::LoadingScreen;
use crate::components::toast::{ToastHost, Toasts};
use crate::i18n::{self, Translator};
use crate::net::api;
use crate::pages::home::HomeRedirect;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::profile::ProfileSettingsPage;
use crate::pages::sections::{
    CalendarPage, InboxPage, NotesPage, ProjectsPage, TasksPage, TodayPage,
};
use crate::state::events::{AppEvent, EventBus};
use crate::state::session::SessionState;
use crate::state::theme;
use crate::util::{browser, dark_mode};

/// Theme holder binding the pure precedence rules to browser storage.
///
/// Constructed once at startup; consumers toggle through this handle so the
/// stored preference and the `data-theme` attribute never drift apart.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    dark: RwSignal<bool>,
}

impl ThemeHandle {
    /// Resolve the initial theme (stored choice, else OS preference) and
    /// apply it.
    pub fn init() -> Self {
        let dark = theme::initial_dark_mode(
            dark_mode::stored_preference(),
            dark_mode::system_prefers_dark(),
        );
        dark_mode::apply(dark);
        Self {
            dark: RwSignal::new(dark),
        }
    }

    pub fn is_dark(self) -> bool {
        self.dark.get()
    }

    pub fn is_dark_untracked(self) -> bool {
        self.dark.get_untracked()
    }

    /// Flip the theme as an explicit user choice, written through to
    /// storage.
    pub fn toggle(self) {
        let next = !self.dark.get_untracked();
        dark_mode::store_preference(next);
        dark_mode::apply(next);
        self.dark.set(next);
    }

    /// React to an OS color-scheme change; a stored explicit choice pins the
    /// current theme.
    pub fn handle_system_change(self, system_prefers_dark: bool) {
        let next = theme::dark_mode_after_system_change(
            dark_mode::stored_preference(),
            self.dark.get_untracked(),
            system_prefers_dark,
        );
        dark_mode::apply(next);
        self.dark.set(next);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let bus = EventBus::new();
    provide_context(bus);

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    let theme_handle = ThemeHandle::init();
    provide_context(theme_handle);

    let language = i18n::detect_initial_language();
    browser::set_document_language(&language);
    let translator = RwSignal::new(Translator::new(language));
    provide_context(translator);

    let toasts = Toasts::new();
    provide_context(toasts);

    dark_mode::install_media_listener(move |prefers_dark| {
        theme_handle.handle_system_change(prefers_dark);
    });

    // Startup: full bundle for the detected language, then the session probe.
    // The embedded fallback bundle keeps the loading screen readable while
    // both are in flight.
    leptos::task::spawn_local(async move {
        i18n::load_initial_bundle(translator).await;
    });
    leptos::task::spawn_local(async move {
        let user = api::fetch_current_user().await;
        session.update(|state| state.apply_probe(user));
    });

    // Login flows hand their identity over the bus instead of re-probing.
    bus.subscribe(move |event| {
        if let AppEvent::UserLoggedIn(user) = event {
            session.update(|state| state.adopt(user.clone()));
        }
    });

    view! {
        <Router>
            <ToastHost/>
            <Show when=move || !session.get().loading fallback=|| view! { <LoadingScreen/> }>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomeRedirect/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/today") view=|| view! { <Shell><TodayPage/></Shell> }/>
                    <Route path=path!("/tasks") view=|| view! { <Shell><TasksPage/></Shell> }/>
                    <Route path=path!("/inbox") view=|| view! { <Shell><InboxPage/></Shell> }/>
                    <Route
                        path=path!("/projects")
                        view=|| view! { <Shell><ProjectsPage/></Shell> }
                    />
                    <Route path=path!("/notes") view=|| view! { <Shell><NotesPage/></Shell> }/>
                    <Route
                        path=path!("/calendar")
                        view=|| view! { <Shell><CalendarPage/></Shell> }
                    />
                    <Route
                        path=path!("/profile")
                        view=|| view! { <Shell><ProfileSettingsPage/></Shell> }
                    />
                </Routes>
            </Show>
        </Router>
    }
}
