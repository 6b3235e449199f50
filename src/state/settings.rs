//! Settings editor state machine and draft handling.
//!
//! DESIGN
//! ======
//! The editor moves `Loading -> Ready(draft) -> Submitting -> Ready(draft') |
//! Failed`. The draft seeds every optional profile field with an explicit
//! default so a partial server response never leaves a control undefined, and
//! reconciliation after a save takes, per field: the server's value, else the
//! prior draft value, else the hard default.
//!
//! Tabs never poke arbitrary fields on the aggregate draft. Each tab produces
//! a typed patch ([`TabPatch`]), validated before it is merged — a rejected
//! patch leaves the draft untouched.
//!
//! Password change is an opt-in sub-flow: rules apply only when any password
//! field is non-empty, and untouched password fields are stripped from the
//! PATCH payload entirely.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use thiserror::Error;

use crate::i18n;
use crate::net::types::{Profile, ProfileUpdate};
use crate::state::theme::Appearance;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Task-summary cadences offered by the Telegram tab, in display order.
pub const SUMMARY_FREQUENCIES: &[&str] = &["1h", "2h", "4h", "8h", "12h", "daily", "weekly"];

/// Lifecycle of the settings editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettingsPhase {
    /// Initial profile fetch in flight.
    Loading,
    /// Draft editable, no save in flight.
    Ready,
    /// A PATCH is in flight; a second submit is ignored until it resolves.
    Submitting,
    /// The initial fetch failed; the editor shows the message and offers no
    /// form.
    Failed(String),
}

/// Tabs of the settings editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    General,
    Security,
    Productivity,
    Telegram,
    Assistant,
}

/// The editor's local, possibly-unsaved copy of the profile document.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDraft {
    pub appearance: Appearance,
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
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            appearance: Appearance::Light,
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
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl ProfileDraft {
    /// Seed a draft from a fetched profile, defaulting omitted fields.
    ///
    /// `active_appearance` backs the appearance field when the server omits
    /// it, so the select reflects the theme the user is actually seeing.
    pub fn from_profile(profile: &Profile, active_appearance: Appearance) -> Self {
        let defaults = Self::default();
        Self {
            appearance: profile
                .appearance
                .as_deref()
                .map_or(active_appearance, Appearance::parse),
            language: profile.language.clone().unwrap_or(defaults.language),
            timezone: profile.timezone.clone().unwrap_or(defaults.timezone),
            avatar_image: profile.avatar_image.clone().unwrap_or(defaults.avatar_image),
            telegram_bot_token: profile
                .telegram_bot_token
                .clone()
                .unwrap_or(defaults.telegram_bot_token),
            task_summary_enabled: profile
                .task_summary_enabled
                .unwrap_or(defaults.task_summary_enabled),
            task_summary_frequency: profile
                .task_summary_frequency
                .clone()
                .unwrap_or(defaults.task_summary_frequency),
            task_intelligence_enabled: profile
                .task_intelligence_enabled
                .unwrap_or(defaults.task_intelligence_enabled),
            auto_suggest_next_actions_enabled: profile
                .auto_suggest_next_actions_enabled
                .unwrap_or(defaults.auto_suggest_next_actions_enabled),
            productivity_assistant_enabled: profile
                .productivity_assistant_enabled
                .unwrap_or(defaults.productivity_assistant_enabled),
            next_task_suggestion_enabled: profile
                .next_task_suggestion_enabled
                .unwrap_or(defaults.next_task_suggestion_enabled),
            pomodoro_enabled: profile.pomodoro_enabled.unwrap_or(defaults.pomodoro_enabled),
            current_password: String::new(),
            new_password: String::new(),
            confirm_password: String::new(),
        }
    }

    /// Fold the server's authoritative response back into the draft.
    ///
    /// Fields the server omitted keep their pre-submit draft values — they
    /// are never reset to hard defaults.
    pub fn reconcile(&mut self, updated: &Profile) {
        if let Some(appearance) = updated.appearance.as_deref() {
            self.appearance = Appearance::parse(appearance);
        }
        if let Some(language) = &updated.language {
            self.language = language.clone();
        }
        if let Some(timezone) = &updated.timezone {
            self.timezone = timezone.clone();
        }
        if let Some(avatar_image) = &updated.avatar_image {
            self.avatar_image = avatar_image.clone();
        }
        if let Some(token) = &updated.telegram_bot_token {
            self.telegram_bot_token = token.clone();
        }
        if let Some(enabled) = updated.task_summary_enabled {
            self.task_summary_enabled = enabled;
        }
        if let Some(frequency) = &updated.task_summary_frequency {
            self.task_summary_frequency = frequency.clone();
        }
        if let Some(enabled) = updated.task_intelligence_enabled {
            self.task_intelligence_enabled = enabled;
        }
        if let Some(enabled) = updated.auto_suggest_next_actions_enabled {
            self.auto_suggest_next_actions_enabled = enabled;
        }
        if let Some(enabled) = updated.productivity_assistant_enabled {
            self.productivity_assistant_enabled = enabled;
        }
        if let Some(enabled) = updated.next_task_suggestion_enabled {
            self.next_task_suggestion_enabled = enabled;
        }
        if let Some(enabled) = updated.pomodoro_enabled {
            self.pomodoro_enabled = enabled;
        }
    }

    /// Whether any password field has been touched, making the password
    /// sub-flow active for this submission.
    pub fn wants_password_change(&self) -> bool {
        !self.current_password.is_empty()
            || !self.new_password.is_empty()
            || !self.confirm_password.is_empty()
    }

    /// Validate the password sub-flow, reporting the first violated rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`PasswordIssue`] in field order (current, new,
    /// confirm). Passing when no password field is touched is by contract:
    /// callers gate on [`Self::wants_password_change`].
    pub fn validate_password_change(&self) -> Result<(), PasswordIssue> {
        if !self.wants_password_change() {
            return Ok(());
        }
        if self.current_password.is_empty() {
            return Err(PasswordIssue::CurrentPasswordRequired);
        }
        if self.new_password.is_empty() {
            return Err(PasswordIssue::NewPasswordRequired);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordIssue::PasswordTooShort);
        }
        if self.new_password != self.confirm_password {
            return Err(PasswordIssue::PasswordMismatch);
        }
        Ok(())
    }

    pub fn clear_password_fields(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
        self.confirm_password.clear();
    }

    /// Build the PATCH payload. Password fields are present only when the
    /// password sub-flow is active.
    pub fn to_update(&self) -> ProfileUpdate {
        let changing_password = self.wants_password_change();
        ProfileUpdate {
            appearance: self.appearance.as_str().to_owned(),
            language: self.language.clone(),
            timezone: self.timezone.clone(),
            avatar_image: self.avatar_image.clone(),
            telegram_bot_token: self.telegram_bot_token.clone(),
            task_summary_enabled: self.task_summary_enabled,
            task_summary_frequency: self.task_summary_frequency.clone(),
            task_intelligence_enabled: self.task_intelligence_enabled,
            auto_suggest_next_actions_enabled: self.auto_suggest_next_actions_enabled,
            productivity_assistant_enabled: self.productivity_assistant_enabled,
            next_task_suggestion_enabled: self.next_task_suggestion_enabled,
            pomodoro_enabled: self.pomodoro_enabled,
            current_password: changing_password.then(|| self.current_password.clone()),
            new_password: changing_password.then(|| self.new_password.clone()),
            confirm_password: changing_password.then(|| self.confirm_password.clone()),
        }
    }

    /// Merge a validated tab patch into the draft.
    ///
    /// # Errors
    ///
    /// Returns a [`PatchError`] and leaves the draft untouched when the patch
    /// carries a value outside the supported domain.
    pub fn apply(&mut self, patch: TabPatch) -> Result<(), PatchError> {
        patch.validate()?;
        match patch {
            TabPatch::General(general) => {
                if let Some(appearance) = general.appearance {
                    self.appearance = appearance;
                }
                if let Some(language) = general.language {
                    self.language = language;
                }
                if let Some(timezone) = general.timezone {
                    self.timezone = timezone;
                }
            }
            TabPatch::Security(security) => {
                if let Some(current) = security.current_password {
                    self.current_password = current;
                }
                if let Some(new) = security.new_password {
                    self.new_password = new;
                }
                if let Some(confirm) = security.confirm_password {
                    self.confirm_password = confirm;
                }
            }
            TabPatch::Productivity(productivity) => {
                if let Some(enabled) = productivity.pomodoro_enabled {
                    self.pomodoro_enabled = enabled;
                }
            }
            TabPatch::Telegram(telegram) => {
                if let Some(token) = telegram.telegram_bot_token {
                    self.telegram_bot_token = token;
                }
                if let Some(enabled) = telegram.task_summary_enabled {
                    self.task_summary_enabled = enabled;
                }
                if let Some(frequency) = telegram.task_summary_frequency {
                    self.task_summary_frequency = frequency;
                }
            }
            TabPatch::Assistant(assistant) => {
                if let Some(enabled) = assistant.task_intelligence_enabled {
                    self.task_intelligence_enabled = enabled;
                }
                if let Some(enabled) = assistant.auto_suggest_next_actions_enabled {
                    self.auto_suggest_next_actions_enabled = enabled;
                }
                if let Some(enabled) = assistant.productivity_assistant_enabled {
                    self.productivity_assistant_enabled = enabled;
                }
                if let Some(enabled) = assistant.next_task_suggestion_enabled {
                    self.next_task_suggestion_enabled = enabled;
                }
            }
        }
        Ok(())
    }
}

/// Password sub-flow violations, ordered by the field they concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordIssue {
    CurrentPasswordRequired,
    NewPasswordRequired,
    PasswordTooShort,
    PasswordMismatch,
}

impl PasswordIssue {
    /// Translation key for the user-facing message.
    pub fn message_key(self) -> &'static str {
        match self {
            Self::CurrentPasswordRequired => "profile.currentPasswordRequired",
            Self::NewPasswordRequired => "profile.newPasswordRequired",
            Self::PasswordTooShort => "profile.passwordTooShort",
            Self::PasswordMismatch => "profile.passwordMismatch",
        }
    }

    /// English fallback shown when no bundle carries the key.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::CurrentPasswordRequired => "Current password is required",
            Self::NewPasswordRequired => "New password is required",
            Self::PasswordTooShort => "Password must be at least 6 characters",
            Self::PasswordMismatch => "Passwords do not match",
        }
    }
}

/// One tab's edit, validated before it reaches the aggregate draft.
#[derive(Clone, Debug, PartialEq)]
pub enum TabPatch {
    General(GeneralPatch),
    Security(SecurityPatch),
    Productivity(ProductivityPatch),
    Telegram(TelegramPatch),
    Assistant(AssistantPatch),
}

impl TabPatch {
    fn validate(&self) -> Result<(), PatchError> {
        match self {
            Self::General(general) => {
                if let Some(language) = &general.language {
                    if !i18n::is_supported_language(language) {
                        return Err(PatchError::UnsupportedLanguage(language.clone()));
                    }
                }
                Ok(())
            }
            Self::Telegram(telegram) => {
                if let Some(frequency) = &telegram.task_summary_frequency {
                    if !SUMMARY_FREQUENCIES.contains(&frequency.as_str()) {
                        return Err(PatchError::UnsupportedFrequency(frequency.clone()));
                    }
                }
                Ok(())
            }
            Self::Security(_) | Self::Productivity(_) | Self::Assistant(_) => Ok(()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneralPatch {
    pub appearance: Option<Appearance>,
    pub language: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SecurityPatch {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
    pub confirm_password: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProductivityPatch {
    pub pomodoro_enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TelegramPatch {
    pub telegram_bot_token: Option<String>,
    pub task_summary_enabled: Option<bool>,
    pub task_summary_frequency: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssistantPatch {
    pub task_intelligence_enabled: Option<bool>,
    pub auto_suggest_next_actions_enabled: Option<bool>,
    pub productivity_assistant_enabled: Option<bool>,
    pub next_task_suggestion_enabled: Option<bool>,
}

/// A tab patch rejected before merging.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("unsupported language {0:?}")]
    UnsupportedLanguage(String),
    #[error("unsupported summary frequency {0:?}")]
    UnsupportedFrequency(String),
}

/// Cross-component reactions owed after a successful save.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaveFollowUps {
    /// The server's appearance differs from the active theme.
    pub toggle_theme: bool,
    /// The server's language differs from the active locale.
    pub switch_language: Option<String>,
    /// The server reported a Pomodoro flag; broadcast it either way so other
    /// views converge on the authoritative value.
    pub pomodoro_setting: Option<bool>,
}

/// Compare the server's authoritative response against the live theme and
/// locale. Omitted fields cause no reaction.
pub fn follow_ups(updated: &Profile, active_dark_mode: bool, active_language: &str) -> SaveFollowUps {
    let toggle_theme = updated
        .appearance
        .as_deref()
        .is_some_and(|appearance| Appearance::parse(appearance).is_dark() != active_dark_mode);
    let switch_language = updated
        .language
        .as_deref()
        .filter(|language| *language != active_language)
        .map(str::to_owned);
    SaveFollowUps {
        toggle_theme,
        switch_language,
        pomodoro_setting: updated.pomodoro_enabled,
    }
}

/// Human-readable label for a summary cadence, used as the translation
/// fallback.
pub fn format_frequency(frequency: &str) -> String {
    if let Some(hours) = frequency.strip_suffix('h') {
        let unit = if hours == "1" { "hour" } else { "hours" };
        return format!("{hours} {unit}");
    }
    match frequency {
        "daily" => "1 day".to_owned(),
        "weekly" => "1 week".to_owned(),
        "weekdays" => "Weekdays".to_owned(),
        other => other.to_owned(),
    }
}
