//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical unauthenticated redirect behavior
//! through the navigation shell.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::LOGIN_PATH;
use crate::state::session::SessionState;

/// Redirect to `/login` whenever the probe has settled and no user is
/// present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
