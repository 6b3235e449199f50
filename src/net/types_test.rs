use super::*;

// =============================================================
// Profile deserialization
// =============================================================

#[test]
fn profile_deserializes_with_all_preferences_omitted() {
    let profile: Profile = serde_json::from_str(r#"{"id": 7, "email": "a@b.c"}"#).unwrap();
    assert_eq!(profile.id, 7);
    assert_eq!(profile.email, "a@b.c");
    assert_eq!(profile.appearance, None);
    assert_eq!(profile.language, None);
    assert_eq!(profile.timezone, None);
    assert_eq!(profile.pomodoro_enabled, None);
}

#[test]
fn profile_deserializes_populated_preferences() {
    let raw = r#"{
        "id": 1,
        "email": "a@b.c",
        "appearance": "dark",
        "language": "de",
        "timezone": "Europe/Berlin",
        "telegram_bot_token": "123:abc",
        "telegram_chat_id": "42",
        "task_summary_enabled": true,
        "task_summary_frequency": "weekly",
        "pomodoro_enabled": false
    }"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.appearance.as_deref(), Some("dark"));
    assert_eq!(profile.language.as_deref(), Some("de"));
    assert_eq!(profile.telegram_bot_token.as_deref(), Some("123:abc"));
    assert_eq!(profile.task_summary_enabled, Some(true));
    assert_eq!(profile.task_summary_frequency.as_deref(), Some("weekly"));
    assert_eq!(profile.pomodoro_enabled, Some(false));
}

// =============================================================
// ProfileUpdate serialization
// =============================================================

fn base_update() -> ProfileUpdate {
    ProfileUpdate {
        appearance: "light".to_owned(),
        language: "en".to_owned(),
        timezone: "UTC".to_owned(),
        avatar_image: String::new(),
        telegram_bot_token: String::new(),
        task_summary_enabled: false,
        task_summary_frequency: "daily".to_owned(),
        task_intelligence_enabled: true,
        auto_suggest_next_actions_enabled: true,
        productivity_assistant_enabled: true,
        next_task_suggestion_enabled: true,
        pomodoro_enabled: true,
        current_password: None,
        new_password: None,
        confirm_password: None,
    }
}

#[test]
fn update_without_password_change_omits_password_keys() {
    let raw = serde_json::to_string(&base_update()).unwrap();
    assert!(!raw.contains("currentPassword"));
    assert!(!raw.contains("newPassword"));
    assert!(!raw.contains("confirmPassword"));
}

#[test]
fn update_with_password_change_serializes_camel_case_keys() {
    let mut update = base_update();
    update.current_password = Some("old".to_owned());
    update.new_password = Some("secret1".to_owned());
    update.confirm_password = Some("secret1".to_owned());
    let raw = serde_json::to_string(&update).unwrap();
    assert!(raw.contains(r#""currentPassword":"old""#));
    assert!(raw.contains(r#""newPassword":"secret1""#));
    assert!(raw.contains(r#""confirmPassword":"secret1""#));
}

// =============================================================
// Login and Telegram envelopes
// =============================================================

#[test]
fn login_response_carries_user_on_success() {
    let raw = r#"{"user": {"id": 3, "email": "a@b.c", "language": "es"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    let user = resp.user.unwrap();
    assert_eq!(user.id, 3);
    assert_eq!(user.language.as_deref(), Some("es"));
    assert!(resp.errors.is_none());
}

#[test]
fn login_response_carries_errors_on_failure() {
    let raw = r#"{"errors": ["Invalid credentials"]}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.user.is_none());
    assert_eq!(resp.errors.unwrap()[0], "Invalid credentials");
}

#[test]
fn user_accepts_camel_case_avatar_alias() {
    let raw = r#"{"id": 1, "email": "a@b.c", "avatarUrl": "/img.png"}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.avatar_url.as_deref(), Some("/img.png"));
}

#[test]
fn setup_response_tolerates_missing_polling_status() {
    let raw = r#"{"bot": {"username": "taskbot"}}"#;
    let resp: TelegramSetupResponse = serde_json::from_str(raw).unwrap();
    let bot = resp.bot.unwrap();
    assert_eq!(bot.username, "taskbot");
    assert!(bot.polling_status.is_none());
    assert!(bot.chat_url.is_none());
}

#[test]
fn polling_status_defaults_to_stopped_without_token() {
    let status: PollingStatus = serde_json::from_str("{}").unwrap();
    assert!(!status.running);
    assert!(!status.token_exists);
}

#[test]
fn polling_toggle_response_reads_nested_status() {
    let raw = r#"{"status": {"running": true}}"#;
    let resp: PollingToggleResponse = serde_json::from_str(raw).unwrap();
    assert!(resp.status.unwrap().running);
}
