//! Static route table and the binary auth gate.
//!
//! DESIGN
//! ======
//! Two disjoint path sets defined at startup: the public set rendered bare
//! and the protected set wrapped in the navigation shell. The gate is binary
//! — there are no nested authorization levels — and its decision logic is a
//! pure function so the redirect matrix is testable without a router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN_PATH: &str = "/login";

/// Landing route for authenticated users; `/` redirects here.
pub const DEFAULT_AUTHENTICATED_PATH: &str = "/today";

/// Routes reachable without a session.
pub const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH];

/// Routes rendered inside the navigation shell, session required.
pub const PROTECTED_PATHS: &[&str] = &[
    "/today",
    "/tasks",
    "/inbox",
    "/projects",
    "/notes",
    "/calendar",
    "/profile",
];

pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

pub fn is_protected(path: &str) -> bool {
    PROTECTED_PATHS.contains(&path)
}

/// Routing decision for a path under the binary auth gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Render the requested view.
    Allow,
    /// Replace-navigate to the login page.
    RedirectLogin,
    /// Replace-navigate to the authenticated landing route.
    RedirectDefault,
    /// Render the not-found view without redirecting.
    NotFound,
}

/// Decide how a path is handled for the given auth state.
pub fn gate(authenticated: bool, path: &str) -> Gate {
    if !authenticated {
        if is_public(path) {
            return Gate::Allow;
        }
        return Gate::RedirectLogin;
    }
    if path == "/" || is_public(path) {
        // Authenticated users never see the login screen; the root path has
        // no view of its own.
        return Gate::RedirectDefault;
    }
    if is_protected(path) {
        return Gate::Allow;
    }
    Gate::NotFound
}
