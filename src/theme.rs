//! Light/dark theme preference.
//!
//! Reads the stored preference once at mount and writes it back on every
//! toggle. The applied theme lives in `PageState`; the root `dark` class and
//! the toggle icon are projections of it (`view::project`).
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failing store degrades to a theme that does
//! not survive reloads; nothing is surfaced to the user.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::store::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Icon variant shown inside the theme toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl Theme {
    /// Parse a stored value. Only the exact literals are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The theme implied by the presence of the root dark flag.
    #[must_use]
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Moon while light (offer to go dark), sun while dark.
    #[must_use]
    pub fn icon(self) -> ThemeIcon {
        match self {
            Self::Light => ThemeIcon::Moon,
            Self::Dark => ThemeIcon::Sun,
        }
    }
}

/// Read the persisted theme, falling back to `default` when the value is
/// absent, not a known literal, or the store cannot be read.
pub fn read_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str, default: Theme) -> Theme {
    match store.get(key) {
        Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
            log::debug!("ignoring stored theme {raw:?}; using {}", default.as_str());
            default
        }),
        Ok(None) => default,
        Err(e) => {
            log::warn!("theme preference unreadable: {e}");
            default
        }
    }
}

/// Persist `theme`. Failures are logged and swallowed.
pub fn persist<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, theme: Theme) {
    if let Err(e) = store.set(key, theme.as_str()) {
        log::warn!("theme preference not saved: {e}");
    }
}
