#![cfg(not(target_arch = "wasm32"))]

use super::*;

#[test]
fn telegram_test_endpoint_formats_user_id() {
    assert_eq!(telegram_test_endpoint(42), "/api/telegram/test/42");
}

#[test]
fn login_rejection_prefers_first_backend_message() {
    let err = login_rejection(401, Some(vec!["Bad password".to_owned(), "second".to_owned()]));
    assert_eq!(err, ApiError::Server("Bad password".to_owned()));
}

#[test]
fn login_rejection_skips_empty_message() {
    assert_eq!(login_rejection(401, Some(vec![String::new()])), ApiError::Auth);
}

#[test]
fn login_rejection_classifies_status_without_messages() {
    assert_eq!(login_rejection(401, None), ApiError::Auth);
    assert_eq!(login_rejection(500, None), ApiError::Status(500));
}

#[test]
fn stubs_resolve_to_unavailable_off_browser() {
    // Native builds never reach the network; every helper degrades cleanly.
    block_on_ready(async {
        assert!(fetch_current_user().await.is_none());
        assert_eq!(fetch_profile().await, Err(ApiError::Unavailable));
        assert_eq!(logout().await, Err(ApiError::Unavailable));
        assert_eq!(telegram_start_polling().await, Err(ApiError::Unavailable));
    });
}

/// Minimal executor for futures that never actually suspend.
fn block_on_ready<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct NoopWake;
    impl Wake for NoopWake {
        fn wake(self: Arc<Self>) {}
    }

    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);
    let mut future = pin!(future);
    match future.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => unreachable!("stub futures resolve immediately"),
    }
}
