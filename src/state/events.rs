//! Typed in-process event channel for cross-component coordination.
//!
//! DESIGN
//! ======
//! Login, language, and feature-flag changes fan out to independently mounted
//! views (session holder, navigation shell, settings editor) without prop
//! threading. Events go through one typed bus provided from the app root;
//! subscribers register a reactive effect owned by their component scope, so
//! a subscription ends with the view that created it. No `window` custom
//! events are involved.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Broadcast notifications crossing component boundaries.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEvent {
    /// A login flow obtained an identity; the session holder adopts it
    /// without another network round trip.
    UserLoggedIn(User),
    /// The localization bootstrap switched the active language.
    LanguageChanged(String),
    /// The profile save changed the Pomodoro flag; the navigation shell
    /// reacts live.
    PomodoroSettingChanged(bool),
}

/// Shared publish/subscribe channel, cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct EventBus {
    seq: RwSignal<u64>,
    last: RwSignal<Option<AppEvent>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            seq: RwSignal::new(0),
            last: RwSignal::new(None),
        }
    }

    /// Deliver an event to every live subscriber.
    pub fn publish(self, event: AppEvent) {
        log::debug!("event bus: {event:?}");
        self.last.set(Some(event));
        self.seq.update(|n| *n += 1);
    }

    /// Run `handler` for each event published after this call.
    ///
    /// The subscription is owned by the current reactive scope and is
    /// disposed with it.
    pub fn subscribe(self, handler: impl Fn(&AppEvent) + 'static) {
        let seen = std::cell::Cell::new(self.seq.get_untracked());
        Effect::new(move || {
            let current = self.seq.get();
            if current == seen.get() {
                return;
            }
            seen.set(current);
            if let Some(event) = self.last.get_untracked() {
                handler(&event);
            }
        });
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
