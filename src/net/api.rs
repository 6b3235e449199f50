//! REST API helpers for the Taskflow backend.
//!
//! Browser builds issue real HTTP calls via `gloo-net` against same-origin
//! `/api/...` paths, with session cookies handled by the fetch defaults.
//! Native builds (tests) get inert stubs so call sites compile everywhere.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Option`/`Result` instead of panicking. The session
//! probe intentionally swallows failures: an unreachable or unauthenticated
//! backend must resolve to "no user", never to a crash during startup.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(target_arch = "wasm32")]
use super::error::error_from_body;
use super::types::{PollingDetail, PollingStatus, Profile, ProfileUpdate, TelegramSetupResponse, User};
#[cfg(target_arch = "wasm32")]
use super::types::{PollingToggleResponse, SendSummaryResponse, TestMessageResponse};

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";
pub const CURRENT_USER_ENDPOINT: &str = "/api/current_user";
pub const PROFILE_ENDPOINT: &str = "/api/profile";
pub const TELEGRAM_SETUP_ENDPOINT: &str = "/api/telegram/setup";
pub const POLLING_STATUS_ENDPOINT: &str = "/api/telegram/polling-status";
pub const START_POLLING_ENDPOINT: &str = "/api/telegram/start-polling";
pub const STOP_POLLING_ENDPOINT: &str = "/api/telegram/stop-polling";
pub const SEND_SUMMARY_ENDPOINT: &str = "/api/profile/task-summary/send-now";

/// Endpoint for sending a test Telegram message to a user's bot.
#[cfg(any(test, target_arch = "wasm32"))]
pub fn telegram_test_endpoint(user_id: i64) -> String {
    format!("/api/telegram/test/{user_id}")
}

#[cfg(target_arch = "wasm32")]
async fn fail_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    error_from_body(status, &body)
}

/// Authenticate with email and password via `POST /api/login`.
///
/// # Errors
///
/// Returns [`ApiError::Server`] with the backend's first error message when
/// credentials are rejected, or a transport/decoding error otherwise.
pub async fn login(email: &str, password: &str) -> Result<User, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body: super::types::LoginResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if (200..300).contains(&status) {
            body.user
                .ok_or_else(|| ApiError::Decode("login response without user".to_owned()))
        } else {
            Err(login_rejection(status, body.errors))
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Map a rejected login response to an error, preferring the backend's first
/// message.
#[cfg(any(test, target_arch = "wasm32"))]
fn login_rejection(status: u16, errors: Option<Vec<String>>) -> ApiError {
    errors
        .and_then(|list| list.into_iter().next())
        .filter(|message| !message.is_empty())
        .map_or_else(|| super::error::classify_status(status), ApiError::Server)
}

/// End the session via `GET /api/logout`.
///
/// # Errors
///
/// Returns a transport error when the request cannot be delivered; callers
/// typically log and clear local identity regardless.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::get(LOGOUT_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(fail_from_response(resp).await)
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Probe the session via `GET /api/current_user`.
///
/// Returns `None` on any failure — network trouble and expired sessions both
/// resolve to a determinate logged-out state.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(target_arch = "wasm32")]
    {
        #[derive(serde::Deserialize)]
        struct CurrentUserResponse {
            user: Option<User>,
        }
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<CurrentUserResponse>().await.ok()?.user
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Fetch the preference document via `GET /api/profile`.
///
/// # Errors
///
/// Returns a transport, auth, or decoding error on failure.
pub async fn fetch_profile() -> Result<Profile, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::get(PROFILE_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail_from_response(resp).await);
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Persist the preference document via `PATCH /api/profile`.
///
/// The server merges the payload and responds with the authoritative profile,
/// which may omit fields.
///
/// # Errors
///
/// Returns [`ApiError::Server`] with the backend's message when the update is
/// rejected, or a transport/decoding error otherwise.
pub async fn update_profile(update: &ProfileUpdate) -> Result<Profile, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::patch(PROFILE_ENDPOINT)
            .json(update)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail_from_response(resp).await);
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = update;
        Err(ApiError::Unavailable)
    }
}

/// Register a bot token via `POST /api/telegram/setup`.
///
/// # Errors
///
/// Returns [`ApiError::Server`] with the backend's message when setup fails,
/// or a transport/decoding error otherwise.
pub async fn telegram_setup(token: &str) -> Result<TelegramSetupResponse, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "token": token });
        let resp = gloo_net::http::Request::post(TELEGRAM_SETUP_ENDPOINT)
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail_from_response(resp).await);
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Read the poller state via `GET /api/telegram/polling-status`.
///
/// # Errors
///
/// Returns a transport, auth, or decoding error on failure.
pub async fn telegram_polling_status() -> Result<PollingStatus, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::get(POLLING_STATUS_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail_from_response(resp).await);
        }
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
async fn toggle_polling(endpoint: &str) -> Result<Option<PollingDetail>, ApiError> {
    let resp = gloo_net::http::Request::post(endpoint)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(fail_from_response(resp).await);
    }
    let body: PollingToggleResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.status)
}

/// Start the message poller via `POST /api/telegram/start-polling`.
///
/// # Errors
///
/// Returns the server's error message or a transport error on failure.
pub async fn telegram_start_polling() -> Result<Option<PollingDetail>, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        toggle_polling(START_POLLING_ENDPOINT).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Stop the message poller via `POST /api/telegram/stop-polling`.
///
/// # Errors
///
/// Returns the server's error message or a transport error on failure.
pub async fn telegram_stop_polling() -> Result<Option<PollingDetail>, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        toggle_polling(STOP_POLLING_ENDPOINT).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Send a test message through the user's bot via `POST /api/telegram/test/:id`.
///
/// # Errors
///
/// Returns a transport or decoding error; a delivered request with
/// `success: false` is reported through the returned flag, not as an error.
pub async fn telegram_send_test(user_id: i64, text: &str) -> Result<bool, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let payload = serde_json::json!({ "text": text });
        let resp = gloo_net::http::Request::post(&telegram_test_endpoint(user_id))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body: TestMessageResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.success)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (user_id, text);
        Err(ApiError::Unavailable)
    }
}

/// Trigger an immediate task summary via
/// `POST /api/profile/task-summary/send-now`.
///
/// Returns the server's confirmation message, if it sent one.
///
/// # Errors
///
/// Returns the server's error message or a transport error on failure.
pub async fn send_task_summary_now() -> Result<Option<String>, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        let resp = gloo_net::http::Request::post(SEND_SUMMARY_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(fail_from_response(resp).await);
        }
        let body: SendSummaryResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.message)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(ApiError::Unavailable)
    }
}
