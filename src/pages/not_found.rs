//! Catch-all view for unknown paths.
//!
//! Authenticated users see the not-found screen in place — no redirect —
//! while logged-out visitors are sent to the login page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::i18n::Translator;
use crate::routes::DEFAULT_AUTHENTICATED_PATH;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let translator = expect_context::<RwSignal<Translator>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    view! {
        <Show when=move || session.get().is_authenticated()>
            <div class="not-found">
                <h2 class="not-found__code">"404"</h2>
                <p class="not-found__message">
                    {move || translator.with(|t| t.text("notFound.message", "This page does not exist."))}
                </p>
                <A href=DEFAULT_AUTHENTICATED_PATH attr:class="not-found__home">
                    {move || translator.with(|t| t.text("notFound.backHome", "Back to Today"))}
                </A>
            </div>
        </Show>
    }
}
