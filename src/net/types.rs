//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! Preference fields on [`Profile`] are all optional: the server is free to
//! omit any field from a response, and the settings editor reconciles omitted
//! fields from its own draft rather than trusting the wire shape. Request
//! payloads skip password fields entirely unless a password change is in
//! flight.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/login` and `/api/current_user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Login email address.
    pub email: String,
    /// Display name, if the user set one.
    #[serde(default)]
    pub name: Option<String>,
    /// Preferred UI language code (e.g. `"en"`, `"de"`), if stored.
    #[serde(default)]
    pub language: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default, alias = "avatarUrl")]
    pub avatar_url: Option<String>,
}

/// Response envelope for `POST /api/login`.
///
/// A successful login carries `user`; a rejected one carries `errors` with
/// human-readable messages, first message most specific.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

/// The persisted preference document behind `GET`/`PATCH /api/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique user identifier.
    pub id: i64,
    /// Login email address.
    pub email: String,
    /// `"light"` or `"dark"`.
    #[serde(default)]
    pub appearance: Option<String>,
    /// UI language code.
    #[serde(default)]
    pub language: Option<String>,
    /// IANA timezone name (e.g. `"Europe/Berlin"`).
    #[serde(default)]
    pub timezone: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_image: Option<String>,
    /// Telegram bot token, when the integration is configured.
    #[serde(default)]
    pub telegram_bot_token: Option<String>,
    /// Telegram chat identifier, set once the user has messaged the bot.
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
    /// Whether periodic task summaries are sent over Telegram.
    #[serde(default)]
    pub task_summary_enabled: Option<bool>,
    /// Summary cadence (`"1h"`, `"2h"`, ..., `"daily"`, `"weekly"`).
    #[serde(default)]
    pub task_summary_frequency: Option<String>,
    /// Task-name suggestion assistant.
    #[serde(default)]
    pub task_intelligence_enabled: Option<bool>,
    /// Prompt for the next physical action when creating a project.
    #[serde(default)]
    pub auto_suggest_next_actions_enabled: Option<bool>,
    /// Productivity assistant feature flag.
    #[serde(default)]
    pub productivity_assistant_enabled: Option<bool>,
    /// Next-task suggestion feature flag.
    #[serde(default)]
    pub next_task_suggestion_enabled: Option<bool>,
    /// Pomodoro timer visibility in the navigation bar.
    #[serde(default)]
    pub pomodoro_enabled: Option<bool>,
}

/// Request body for `PATCH /api/profile`.
///
/// The server merges this partially; password fields are omitted from the
/// serialized payload unless the user is changing their password.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub appearance: String,
    pub language: String,
    pub timezone: String,
    pub avatar_image: String,
    pub telegram_bot_token: String,
    pub task_summary_enabled: bool,
    pub task_summary_frequency: String,
    pub task_intelligence_enabled: bool,
    pub auto_suggest_next_actions_enabled: bool,
    pub productivity_assistant_enabled: bool,
    pub next_task_suggestion_enabled: bool,
    pub pomodoro_enabled: bool,
    #[serde(rename = "currentPassword", skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(rename = "newPassword", skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(rename = "confirmPassword", skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

/// Bot descriptor returned by `POST /api/telegram/setup`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TelegramBotInfo {
    /// Bot username without the leading `@`.
    pub username: String,
    /// Polling state at setup time, if the server reports one.
    #[serde(default)]
    pub polling_status: Option<PollingDetail>,
    /// Deep link to the bot chat (`https://t.me/...`).
    #[serde(default)]
    pub chat_url: Option<String>,
}

/// Response envelope for `POST /api/telegram/setup`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TelegramSetupResponse {
    #[serde(default)]
    pub bot: Option<TelegramBotInfo>,
}

/// Polling state snapshot from `GET /api/telegram/polling-status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PollingStatus {
    /// Whether the message poller is currently running.
    #[serde(default)]
    pub running: bool,
    /// Whether a bot token is stored for this user.
    #[serde(default)]
    pub token_exists: bool,
}

/// Poller detail embedded in start/stop responses and bot descriptors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PollingDetail {
    #[serde(default)]
    pub running: bool,
}

/// Response envelope for the polling start/stop endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PollingToggleResponse {
    #[serde(default)]
    pub status: Option<PollingDetail>,
}

/// Response envelope for `POST /api/profile/task-summary/send-now`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SendSummaryResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response envelope for `POST /api/telegram/test/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TestMessageResponse {
    #[serde(default)]
    pub success: bool,
}
