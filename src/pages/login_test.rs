use super::*;

#[test]
fn server_messages_surface_verbatim() {
    let err = ApiError::Server("Invalid credentials".to_owned());
    assert_eq!(login_error_key(&err), None);
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn transport_failures_use_the_generic_error_string() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(
        login_error_key(&err),
        Some(("auth.errorOccurred", "An error occurred. Please try again."))
    );
}

#[test]
fn rejected_status_uses_the_login_failed_string() {
    assert_eq!(
        login_error_key(&ApiError::Auth),
        Some(("auth.loginFailed", "Login failed. Please try again."))
    );
    assert_eq!(
        login_error_key(&ApiError::Status(500)),
        Some(("auth.loginFailed", "Login failed. Please try again."))
    );
}
