use super::*;

fn bare_profile() -> Profile {
    Profile {
        id: 1,
        email: "a@b.c".to_owned(),
        appearance: None,
        language: None,
        timezone: None,
        avatar_image: None,
        telegram_bot_token: None,
        telegram_chat_id: None,
        task_summary_enabled: None,
        task_summary_frequency: None,
        task_intelligence_enabled: None,
        auto_suggest_next_actions_enabled: None,
        productivity_assistant_enabled: None,
        next_task_suggestion_enabled: None,
        pomodoro_enabled: None,
    }
}

// =============================================================
// Draft seeding
// =============================================================

#[test]
fn draft_defaults_cover_every_optional_field() {
    let draft = ProfileDraft::default();
    assert_eq!(draft.appearance, Appearance::Light);
    assert_eq!(draft.language, "en");
    assert_eq!(draft.timezone, "UTC");
    assert_eq!(draft.task_summary_frequency, "daily");
    assert!(!draft.task_summary_enabled);
    assert!(draft.task_intelligence_enabled);
    assert!(draft.pomodoro_enabled);
    assert!(draft.current_password.is_empty());
}

#[test]
fn seeding_from_empty_profile_uses_active_appearance() {
    let draft = ProfileDraft::from_profile(&bare_profile(), Appearance::Dark);
    assert_eq!(draft.appearance, Appearance::Dark);
    assert_eq!(draft.language, "en");
    assert_eq!(draft.timezone, "UTC");
}

#[test]
fn seeding_prefers_server_values() {
    let mut profile = bare_profile();
    profile.appearance = Some("light".to_owned());
    profile.language = Some("el".to_owned());
    profile.timezone = Some("Europe/Athens".to_owned());
    profile.telegram_bot_token = Some("1:x".to_owned());
    profile.task_summary_enabled = Some(true);
    profile.pomodoro_enabled = Some(false);
    let draft = ProfileDraft::from_profile(&profile, Appearance::Dark);
    assert_eq!(draft.appearance, Appearance::Light);
    assert_eq!(draft.language, "el");
    assert_eq!(draft.timezone, "Europe/Athens");
    assert_eq!(draft.telegram_bot_token, "1:x");
    assert!(draft.task_summary_enabled);
    assert!(!draft.pomodoro_enabled);
}

// =============================================================
// Reconciliation after save
// =============================================================

#[test]
fn reconcile_keeps_pre_submit_values_for_omitted_fields() {
    let mut draft = ProfileDraft::default();
    draft.timezone = "Asia/Tokyo".to_owned();
    draft.telegram_bot_token = "7:z".to_owned();
    draft.task_summary_frequency = "weekly".to_owned();

    // Server echoes only the language; everything else is omitted.
    let mut response = bare_profile();
    response.language = Some("jp".to_owned());
    draft.reconcile(&response);

    assert_eq!(draft.language, "jp");
    assert_eq!(draft.timezone, "Asia/Tokyo");
    assert_eq!(draft.telegram_bot_token, "7:z");
    assert_eq!(draft.task_summary_frequency, "weekly");
}

#[test]
fn reconcile_adopts_server_values_when_present() {
    let mut draft = ProfileDraft::default();
    let mut response = bare_profile();
    response.appearance = Some("dark".to_owned());
    response.task_summary_enabled = Some(true);
    response.pomodoro_enabled = Some(false);
    draft.reconcile(&response);
    assert_eq!(draft.appearance, Appearance::Dark);
    assert!(draft.task_summary_enabled);
    assert!(!draft.pomodoro_enabled);
}

#[test]
fn reconcile_never_touches_password_fields() {
    let mut draft = ProfileDraft::default();
    draft.current_password = "old".to_owned();
    draft.reconcile(&bare_profile());
    assert_eq!(draft.current_password, "old");
}

// =============================================================
// Password sub-flow
// =============================================================

#[test]
fn untouched_password_fields_pass_validation() {
    let draft = ProfileDraft::default();
    assert!(!draft.wants_password_change());
    assert_eq!(draft.validate_password_change(), Ok(()));
}

#[test]
fn any_touched_password_field_activates_the_sub_flow() {
    let mut draft = ProfileDraft::default();
    draft.confirm_password = "x".to_owned();
    assert!(draft.wants_password_change());
}

#[test]
fn missing_current_password_is_the_first_violation() {
    let mut draft = ProfileDraft::default();
    draft.new_password = "secret1".to_owned();
    draft.confirm_password = "secret1".to_owned();
    assert_eq!(
        draft.validate_password_change(),
        Err(PasswordIssue::CurrentPasswordRequired)
    );
}

#[test]
fn missing_new_password_reported_before_mismatch() {
    let mut draft = ProfileDraft::default();
    draft.current_password = "old".to_owned();
    draft.confirm_password = "secret1".to_owned();
    assert_eq!(
        draft.validate_password_change(),
        Err(PasswordIssue::NewPasswordRequired)
    );
}

#[test]
fn short_new_password_is_rejected() {
    let mut draft = ProfileDraft::default();
    draft.current_password = "old".to_owned();
    draft.new_password = "abc".to_owned();
    draft.confirm_password = "abc".to_owned();
    assert_eq!(
        draft.validate_password_change(),
        Err(PasswordIssue::PasswordTooShort)
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let mut draft = ProfileDraft::default();
    draft.current_password = "old".to_owned();
    draft.new_password = "secret1".to_owned();
    draft.confirm_password = "secret2".to_owned();
    assert_eq!(
        draft.validate_password_change(),
        Err(PasswordIssue::PasswordMismatch)
    );
}

#[test]
fn valid_password_change_passes() {
    let mut draft = ProfileDraft::default();
    draft.current_password = "old".to_owned();
    draft.new_password = "secret1".to_owned();
    draft.confirm_password = "secret1".to_owned();
    assert_eq!(draft.validate_password_change(), Ok(()));
}

#[test]
fn clear_password_fields_resets_the_sub_flow() {
    let mut draft = ProfileDraft::default();
    draft.current_password = "old".to_owned();
    draft.new_password = "secret1".to_owned();
    draft.clear_password_fields();
    assert!(!draft.wants_password_change());
}

// =============================================================
// PATCH payload
// =============================================================

#[test]
fn update_strips_passwords_when_untouched() {
    let update = ProfileDraft::default().to_update();
    assert_eq!(update.current_password, None);
    assert_eq!(update.new_password, None);
    assert_eq!(update.confirm_password, None);
}

#[test]
fn update_includes_passwords_mid_change() {
    let mut draft = ProfileDraft::default();
    draft.current_password = "old".to_owned();
    draft.new_password = "secret1".to_owned();
    draft.confirm_password = "secret1".to_owned();
    let update = draft.to_update();
    assert_eq!(update.current_password.as_deref(), Some("old"));
    assert_eq!(update.new_password.as_deref(), Some("secret1"));
    assert_eq!(update.confirm_password.as_deref(), Some("secret1"));
}

#[test]
fn update_carries_draft_preferences() {
    let mut draft = ProfileDraft::default();
    draft.appearance = Appearance::Dark;
    draft.task_summary_frequency = "4h".to_owned();
    let update = draft.to_update();
    assert_eq!(update.appearance, "dark");
    assert_eq!(update.task_summary_frequency, "4h");
}

// =============================================================
// Tab patches
// =============================================================

#[test]
fn general_patch_merges_selected_fields() {
    let mut draft = ProfileDraft::default();
    draft
        .apply(TabPatch::General(GeneralPatch {
            language: Some("ua".to_owned()),
            ..GeneralPatch::default()
        }))
        .unwrap();
    assert_eq!(draft.language, "ua");
    assert_eq!(draft.timezone, "UTC");
}

#[test]
fn general_patch_rejects_unsupported_language() {
    let mut draft = ProfileDraft::default();
    let err = draft
        .apply(TabPatch::General(GeneralPatch {
            language: Some("tlh".to_owned()),
            ..GeneralPatch::default()
        }))
        .unwrap_err();
    assert_eq!(err, PatchError::UnsupportedLanguage("tlh".to_owned()));
    assert_eq!(draft.language, "en");
}

#[test]
fn telegram_patch_rejects_unknown_frequency() {
    let mut draft = ProfileDraft::default();
    let err = draft
        .apply(TabPatch::Telegram(TelegramPatch {
            task_summary_frequency: Some("fortnightly".to_owned()),
            ..TelegramPatch::default()
        }))
        .unwrap_err();
    assert_eq!(err, PatchError::UnsupportedFrequency("fortnightly".to_owned()));
    assert_eq!(draft.task_summary_frequency, "daily");
}

#[test]
fn telegram_patch_accepts_listed_frequencies() {
    let mut draft = ProfileDraft::default();
    for frequency in SUMMARY_FREQUENCIES {
        draft
            .apply(TabPatch::Telegram(TelegramPatch {
                task_summary_frequency: Some((*frequency).to_owned()),
                ..TelegramPatch::default()
            }))
            .unwrap();
        assert_eq!(draft.task_summary_frequency, *frequency);
    }
}

#[test]
fn assistant_patch_flips_feature_flags() {
    let mut draft = ProfileDraft::default();
    draft
        .apply(TabPatch::Assistant(AssistantPatch {
            task_intelligence_enabled: Some(false),
            next_task_suggestion_enabled: Some(false),
            ..AssistantPatch::default()
        }))
        .unwrap();
    assert!(!draft.task_intelligence_enabled);
    assert!(!draft.next_task_suggestion_enabled);
    assert!(draft.productivity_assistant_enabled);
}

#[test]
fn security_patch_updates_password_fields() {
    let mut draft = ProfileDraft::default();
    draft
        .apply(TabPatch::Security(SecurityPatch {
            new_password: Some("secret1".to_owned()),
            ..SecurityPatch::default()
        }))
        .unwrap();
    assert_eq!(draft.new_password, "secret1");
}

// =============================================================
// Post-save follow-ups
// =============================================================

#[test]
fn appearance_divergence_requests_theme_toggle() {
    let mut response = bare_profile();
    response.appearance = Some("dark".to_owned());
    let reactions = follow_ups(&response, false, "en");
    assert!(reactions.toggle_theme);
}

#[test]
fn matching_appearance_leaves_theme_alone() {
    let mut response = bare_profile();
    response.appearance = Some("dark".to_owned());
    let reactions = follow_ups(&response, true, "en");
    assert!(!reactions.toggle_theme);
}

#[test]
fn omitted_appearance_never_toggles() {
    let reactions = follow_ups(&bare_profile(), true, "en");
    assert!(!reactions.toggle_theme);
}

#[test]
fn language_divergence_requests_switch() {
    let mut response = bare_profile();
    response.language = Some("de".to_owned());
    let reactions = follow_ups(&response, false, "en");
    assert_eq!(reactions.switch_language.as_deref(), Some("de"));
}

#[test]
fn matching_language_requests_no_switch() {
    let mut response = bare_profile();
    response.language = Some("en".to_owned());
    assert_eq!(follow_ups(&response, false, "en").switch_language, None);
}

#[test]
fn pomodoro_flag_is_forwarded_when_reported() {
    let mut response = bare_profile();
    response.pomodoro_enabled = Some(false);
    assert_eq!(follow_ups(&response, false, "en").pomodoro_setting, Some(false));
    assert_eq!(follow_ups(&bare_profile(), false, "en").pomodoro_setting, None);
}

// =============================================================
// Frequency labels
// =============================================================

#[test]
fn format_frequency_expands_hour_suffixes() {
    assert_eq!(format_frequency("1h"), "1 hour");
    assert_eq!(format_frequency("12h"), "12 hours");
}

#[test]
fn format_frequency_names_fixed_cadences() {
    assert_eq!(format_frequency("daily"), "1 day");
    assert_eq!(format_frequency("weekly"), "1 week");
    assert_eq!(format_frequency("weekdays"), "Weekdays");
    assert_eq!(format_frequency("custom"), "custom");
}
