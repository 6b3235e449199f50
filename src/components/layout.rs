//! Navigation shell wrapping every protected view.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading::FallbackLoading;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Navbar + sidebar chrome around a protected view.
///
/// Applies the unauthenticated redirect; while the redirect is settling the
/// wrapped view is not rendered, so protected content never flashes for
/// logged-out visitors.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let sidebar_open = RwSignal::new(true);
    let children = StoredValue::new(children);

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! { <FallbackLoading/> }
        >
            <div class="app-shell">
                <Navbar sidebar_open=sidebar_open/>
                <div class="app-shell__body">
                    <Show when=move || sidebar_open.get()>
                        <Sidebar/>
                    </Show>
                    <main class="app-shell__content">
                        {move || children.with_value(|children| children())}
                    </main>
                </div>
            </div>
        </Show>
    }
}
