//! Page configuration: element selectors, class names, storage key, observer
//! tuning, and user-facing messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page ships static markup, so every name the controller relies on is a
//! convention. Defaults match the portfolio markup; a page can override any
//! subset through an inline JSON block (see `dom::load_config`).
//!
//! ERROR HANDLING
//! ==============
//! Parsing and validation return `ConfigError`. Callers fall back to
//! `PageConfig::default()` instead of refusing to mount.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::observe::ObserverOptions;
use crate::theme::Theme;

const DEFAULT_STORAGE_KEY: &str = "portfolio-theme";
const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{observer} threshold must be within [0, 1], got {value}")]
    InvalidThreshold { observer: &'static str, value: f64 },
    #[error("{observer} bottom margin must be within [0, 100] percent, got {value}")]
    InvalidMargin { observer: &'static str, value: f64 },
    #[error("storage key must not be empty")]
    EmptyStorageKey,
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

// =============================================================================
// CONFIG
// =============================================================================

/// Everything the page controller needs to know about the host document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Theme used when nothing valid is stored.
    pub default_theme: Theme,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub selectors: Selectors,
    pub classes: ClassNames,
    /// Active-section highlighter observer.
    pub highlight: ObserverOptions,
    /// Scroll-reveal observer.
    pub reveal: ObserverOptions,
    pub messages: Messages,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            default_theme: Theme::Dark,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            selectors: Selectors::default(),
            classes: ClassNames::default(),
            highlight: ObserverOptions::highlight(),
            reveal: ObserverOptions::reveal(),
            messages: Messages::default(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and names that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        self.log_level()?;
        check_observer("highlight", &self.highlight)?;
        check_observer("reveal", &self.reveal)?;
        Ok(())
    }

    /// The configured console log level.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

fn check_observer(observer: &'static str, options: &ObserverOptions) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&options.threshold) {
        return Err(ConfigError::InvalidThreshold { observer, value: options.threshold });
    }
    if !(0.0..=100.0).contains(&options.bottom_margin_pct) {
        return Err(ConfigError::InvalidMargin { observer, value: options.bottom_margin_pct });
    }
    Ok(())
}

/// CSS selectors locating the elements each behavior is wired to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub theme_toggle: String,
    /// Resolved inside the theme toggle button.
    pub theme_icon: String,
    pub nav: String,
    pub menu_toggle: String,
    pub nav_links: String,
    pub sections: String,
    pub reveal_sections: String,
    pub year: String,
    pub contact_form: String,
    pub form_status: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            theme_toggle: "#theme-toggle".to_owned(),
            theme_icon: "i".to_owned(),
            nav: "#nav".to_owned(),
            menu_toggle: "#menu-toggle".to_owned(),
            nav_links: ".nav-link".to_owned(),
            sections: "section[id]".to_owned(),
            reveal_sections: ".scroll-section".to_owned(),
            year: "#year".to_owned(),
            contact_form: "#contact-form".to_owned(),
            form_status: "#form-status".to_owned(),
        }
    }
}

/// Class names that make up the visual state contract with the stylesheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub dark: String,
    /// Icon variant shown while the light theme is applied.
    pub icon_light: String,
    /// Icon variant shown while the dark theme is applied.
    pub icon_dark: String,
    pub open: String,
    pub active: String,
    pub visible: String,
    pub in_view: String,
    /// Marks a highlighted section as also taking part in scroll reveal.
    pub scroll_section: String,
    pub success: String,
    pub error: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            dark: "dark".to_owned(),
            icon_light: "fa-moon".to_owned(),
            icon_dark: "fa-sun".to_owned(),
            open: "open".to_owned(),
            active: "active".to_owned(),
            visible: "visible".to_owned(),
            in_view: "in-view".to_owned(),
            scroll_section: "scroll-section".to_owned(),
            success: "success".to_owned(),
            error: "error".to_owned(),
        }
    }
}

/// Status texts shown under the contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub missing_fields: String,
    pub sent: String,
    pub send_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            missing_fields: "Please fill out all fields.".to_owned(),
            sent: "Thanks for your message! I'll get back to you soon.".to_owned(),
            send_failed: "Sorry, your message could not be sent. Please try again later.".to_owned(),
        }
    }
}
