//! Visibility observation port.
//!
//! SYSTEM CONTEXT
//! ==============
//! The highlighter and the reveal trigger both react to batched visibility
//! notifications. Sections are addressed by their index in
//! `PageState::sections`; the browser adapter (`dom::observer`) maps
//! `IntersectionObserverEntry.target` back to that index.

#[cfg(test)]
#[path = "observe_test.rs"]
mod observe_test;

use serde::{Deserialize, Serialize};

/// One visibility change reported for a tracked section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    /// Index into `PageState::sections`.
    pub section: usize,
    pub ratio: f64,
    pub intersecting: bool,
}

impl Observation {
    #[must_use]
    pub fn new(section: usize, ratio: f64, intersecting: bool) -> Self {
        Self { section, ratio, intersecting }
    }

    /// A section crossing into the viewport at `ratio`.
    #[must_use]
    pub fn entering(section: usize, ratio: f64) -> Self {
        Self::new(section, ratio, true)
    }

    /// A section that left the viewport.
    #[must_use]
    pub fn leaving(section: usize) -> Self {
        Self::new(section, 0.0, false)
    }
}

/// Threshold and bottom-margin shrinkage for one observer. Both fields are
/// required when overriding from JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObserverOptions {
    /// Visible fraction at which a notification fires.
    pub threshold: f64,
    /// Percent of the viewport height trimmed from the bottom edge.
    pub bottom_margin_pct: f64,
}

impl ObserverOptions {
    /// Active-section highlighter: 20% visible, viewport shrunk 5% at the bottom.
    #[must_use]
    pub fn highlight() -> Self {
        Self { threshold: 0.2, bottom_margin_pct: 5.0 }
    }

    /// Scroll reveal: 15% visible, viewport shrunk 8% at the bottom.
    #[must_use]
    pub fn reveal() -> Self {
        Self { threshold: 0.15, bottom_margin_pct: 8.0 }
    }

    /// CSS margin string for `IntersectionObserverInit.rootMargin`.
    #[must_use]
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_pct <= 0.0 {
            return "0px 0px 0px 0px".to_owned();
        }
        format!("0px 0px -{}% 0px", self.bottom_margin_pct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserveError {
    #[error("intersection observation is not supported by the host")]
    Unsupported,
    #[error("host rejected observer: {0}")]
    Host(String),
}

/// Callback receiving one batch of observations, in host order.
pub type BatchCallback = Box<dyn FnMut(Vec<Observation>)>;

/// Something that can report section visibility in batches.
pub trait VisibilityPort {
    /// `false` when the host has no intersection observation capability.
    fn supported(&self) -> bool;

    /// Start observing `targets` (section indices). `callback` is invoked for
    /// every batch for the lifetime of the page.
    fn observe(&self, targets: &[usize], options: &ObserverOptions, callback: BatchCallback) -> Result<(), ObserveError>;
}
