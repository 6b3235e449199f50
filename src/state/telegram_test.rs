use super::*;

fn bot(username: &str, running: Option<bool>) -> TelegramBotInfo {
    TelegramBotInfo {
        username: username.to_owned(),
        polling_status: running.map(|running| PollingDetail { running }),
        chat_url: None,
    }
}

// =============================================================
// Token gate
// =============================================================

#[test]
fn token_gate_requires_separator() {
    assert!(token_has_separator("123456789:ABCDef"));
    assert!(!token_has_separator("123456789"));
    assert!(!token_has_separator(""));
}

// =============================================================
// Auto-start policy
// =============================================================

#[test]
fn auto_start_fires_for_stored_token_with_inactive_poller() {
    let status = PollingStatus {
        running: false,
        token_exists: true,
    };
    assert!(should_auto_start(&status));
}

#[test]
fn auto_start_skips_running_poller_and_missing_token() {
    assert!(!should_auto_start(&PollingStatus {
        running: true,
        token_exists: true,
    }));
    assert!(!should_auto_start(&PollingStatus {
        running: false,
        token_exists: false,
    }));
}

// =============================================================
// Setup lifecycle
// =============================================================

#[test]
fn begin_setup_clears_previous_bot() {
    let mut state = TelegramState {
        bot: Some(bot("taskbot", Some(true))),
        ..TelegramState::default()
    };
    state.begin_setup();
    assert_eq!(state.setup_phase, TelegramSetupPhase::Loading);
    assert!(state.bot.is_none());
}

#[test]
fn setup_success_with_bot_assumes_polling() {
    let mut state = TelegramState::default();
    state.setup_succeeded(Some(bot("taskbot", None)));
    assert_eq!(state.setup_phase, TelegramSetupPhase::Success);
    assert!(state.polling);
}

#[test]
fn setup_success_without_bot_leaves_polling_alone() {
    let mut state = TelegramState::default();
    state.setup_succeeded(None);
    assert!(!state.polling);
}

#[test]
fn setup_needs_kick_unless_reported_running() {
    assert!(setup_needs_polling_kick(&bot("b", None)));
    assert!(setup_needs_polling_kick(&bot("b", Some(false))));
    assert!(!setup_needs_polling_kick(&bot("b", Some(true))));
}

// =============================================================
// Polling transitions
// =============================================================

#[test]
fn polling_toggles_update_state_and_bot_detail() {
    let mut state = TelegramState::default();
    state.setup_succeeded(Some(bot("taskbot", Some(false))));
    state.polling_started(Some(PollingDetail { running: true }));
    assert!(state.polling);
    assert!(state.bot.as_ref().unwrap().polling_status.as_ref().unwrap().running);

    state.polling_stopped(Some(PollingDetail { running: false }));
    assert!(!state.polling);
    assert!(!state.bot.as_ref().unwrap().polling_status.as_ref().unwrap().running);
}

#[test]
fn record_status_follows_probe() {
    let mut state = TelegramState::default();
    state.record_status(&PollingStatus {
        running: true,
        token_exists: true,
    });
    assert!(state.polling);
}

// =============================================================
// Chat URL derivation
// =============================================================

#[test]
fn chat_url_prefers_server_value() {
    let mut described = bot("taskbot", None);
    described.chat_url = Some("https://t.me/custom".to_owned());
    assert_eq!(chat_url(&described, "1:x"), "https://t.me/custom");
}

#[test]
fn chat_url_falls_back_to_username_then_token_id() {
    assert_eq!(chat_url(&bot("taskbot", None), "1:x"), "https://t.me/taskbot");
    assert_eq!(chat_url(&bot("", None), "987:x"), "https://t.me/987");
}
