use super::*;

// =============================================================
// Route table shape
// =============================================================

#[test]
fn public_and_protected_sets_are_disjoint() {
    for path in PUBLIC_PATHS {
        assert!(!PROTECTED_PATHS.contains(path), "{path} in both sets");
    }
}

#[test]
fn default_landing_is_protected() {
    assert!(is_protected(DEFAULT_AUTHENTICATED_PATH));
}

// =============================================================
// Unauthenticated gate
// =============================================================

#[test]
fn unauthenticated_tasks_visit_redirects_to_login() {
    assert_eq!(gate(false, "/tasks"), Gate::RedirectLogin);
}

#[test]
fn unauthenticated_unknown_path_redirects_to_login() {
    assert_eq!(gate(false, "/definitely/not/a/route"), Gate::RedirectLogin);
    assert_eq!(gate(false, "/"), Gate::RedirectLogin);
}

#[test]
fn unauthenticated_login_is_allowed() {
    assert_eq!(gate(false, "/login"), Gate::Allow);
}

// =============================================================
// Authenticated gate
// =============================================================

#[test]
fn authenticated_root_redirects_to_today() {
    assert_eq!(gate(true, "/"), Gate::RedirectDefault);
}

#[test]
fn authenticated_login_redirects_away() {
    assert_eq!(gate(true, "/login"), Gate::RedirectDefault);
}

#[test]
fn authenticated_protected_paths_are_allowed() {
    for path in PROTECTED_PATHS {
        assert_eq!(gate(true, path), Gate::Allow, "{path}");
    }
}

#[test]
fn authenticated_unknown_path_renders_not_found_without_redirect() {
    assert_eq!(gate(true, "/nope"), Gate::NotFound);
}
