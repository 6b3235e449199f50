//! Theme preference rules.
//!
//! DESIGN
//! ======
//! Three inputs, highest precedence first: the user's explicit stored choice,
//! the OS color-scheme preference, light. An OS-level change must never
//! override a stored explicit choice; it only moves the theme while the user
//! has not picked one. Browser storage and the media-query listener live in
//! [`crate::util::dark_mode`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two appearance values carried by the profile document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// Wire representation used by the profile document.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a wire value; anything unrecognized falls back to light.
    pub fn parse(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    pub fn from_dark_mode(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Resolve the theme at startup: stored choice, else OS preference.
pub fn initial_dark_mode(stored: Option<bool>, system_prefers_dark: bool) -> bool {
    stored.unwrap_or(system_prefers_dark)
}

/// Resolve the theme after an OS preference change.
///
/// A stored explicit choice pins the current value; otherwise the theme
/// tracks the OS.
pub fn dark_mode_after_system_change(
    stored: Option<bool>,
    current: bool,
    system_prefers_dark: bool,
) -> bool {
    if stored.is_some() { current } else { system_prefers_dark }
}
