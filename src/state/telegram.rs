//! Session-scoped state for the Telegram integration sub-flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Setup, start-polling, and stop-polling are three independent server calls;
//! none of them mutate the profile document. Polling state lives only here
//! and evaporates with the page.
//!
//! POLICY
//! ======
//! When the profile load finds a stored bot token with the poller inactive,
//! the client starts polling on its own. [`AUTO_START_POLLING_ON_LOAD`] makes
//! that an explicit, greppable decision instead of a side effect.

#[cfg(test)]
#[path = "telegram_test.rs"]
mod telegram_test;

use crate::net::types::{PollingDetail, PollingStatus, TelegramBotInfo};

/// Auto-start the poller when a token exists but polling is reported
/// inactive during the initial status check.
pub const AUTO_START_POLLING_ON_LOAD: bool = true;

/// Delay before explicitly starting the poller after a setup call that did
/// not report it running.
pub const POST_SETUP_POLLING_DELAY_MS: u32 = 1_000;

/// Lifecycle of the bot setup call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TelegramSetupPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Editor-held view of the integration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TelegramState {
    pub setup_phase: TelegramSetupPhase,
    /// Bot descriptor from the most recent setup call, if any.
    pub bot: Option<TelegramBotInfo>,
    /// Whether the poller is believed to be running.
    pub polling: bool,
}

impl TelegramState {
    pub fn begin_setup(&mut self) {
        self.setup_phase = TelegramSetupPhase::Loading;
        self.bot = None;
    }

    /// Record a successful setup. Polling is assumed to start with setup;
    /// [`setup_needs_polling_kick`] decides whether to follow up explicitly.
    pub fn setup_succeeded(&mut self, bot: Option<TelegramBotInfo>) {
        self.setup_phase = TelegramSetupPhase::Success;
        if bot.is_some() {
            self.polling = true;
        }
        self.bot = bot;
    }

    pub fn setup_failed(&mut self) {
        self.setup_phase = TelegramSetupPhase::Error;
    }

    /// Apply a polling-status probe result.
    pub fn record_status(&mut self, status: &PollingStatus) {
        self.polling = status.running;
    }

    /// Record a successful start-polling call.
    pub fn polling_started(&mut self, detail: Option<PollingDetail>) {
        self.polling = true;
        self.merge_detail(detail);
    }

    /// Record a successful stop-polling call.
    pub fn polling_stopped(&mut self, detail: Option<PollingDetail>) {
        self.polling = false;
        self.merge_detail(detail);
    }

    fn merge_detail(&mut self, detail: Option<PollingDetail>) {
        if let (Some(bot), Some(detail)) = (self.bot.as_mut(), detail) {
            bot.polling_status = Some(detail);
        }
    }
}

/// Client-side gate for the setup call: a well-formed bot token carries the
/// `:` separator between bot id and secret.
pub fn token_has_separator(token: &str) -> bool {
    token.contains(':')
}

/// Whether the startup status probe should trigger an automatic start.
pub fn should_auto_start(status: &PollingStatus) -> bool {
    AUTO_START_POLLING_ON_LOAD && status.token_exists && !status.running
}

/// Whether a fresh setup response needs an explicit start-polling follow-up.
pub fn setup_needs_polling_kick(bot: &TelegramBotInfo) -> bool {
    !bot.polling_status.as_ref().is_some_and(|status| status.running)
}

/// Deep link to the bot chat, derived from the token's bot id when the
/// server did not hand one back.
pub fn chat_url(bot: &TelegramBotInfo, token: &str) -> String {
    if let Some(url) = bot.chat_url.as_ref().filter(|url| !url.is_empty()) {
        return url.clone();
    }
    let handle = if bot.username.is_empty() {
        token.split(':').next().unwrap_or_default()
    } else {
        bot.username.as_str()
    };
    format!("https://t.me/{handle}")
}
