//! Root path handler: `/` has no view of its own.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{DEFAULT_AUTHENTICATED_PATH, LOGIN_PATH};
use crate::state::session::SessionState;

/// Replace-navigate to `/today` or `/login` depending on the session.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        let target = if state.is_authenticated() {
            DEFAULT_AUTHENTICATED_PATH
        } else {
            LOGIN_PATH
        };
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    view! { <></> }
}
