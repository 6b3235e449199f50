//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route gating and user-aware components read this to coordinate login
//! redirects and identity-dependent rendering. One "who am I" probe runs at
//! startup; every failure mode of that probe (network down, expired cookie,
//! auth rejection) resolves to a determinate logged-out state — the probe
//! never surfaces an error to the user.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication state tracking the current user and probe progress.
///
/// Held in an `RwSignal` provided via context from the app root; flows that
/// obtain identity elsewhere (login form, logout, profile save) write through
/// the signal instead of re-fetching.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True while the startup probe is in flight; the router renders the
    /// loading screen instead of guessing at an auth decision.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Record the probe outcome. `None` covers both "not logged in" and
    /// "probe failed"; the distinction is intentionally not preserved.
    pub fn apply_probe(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Adopt an identity obtained outside the probe (login event).
    pub fn adopt(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the identity (logout, auth failure during another flow).
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
