//! Projection of `PageState` onto the document's class flags.
//!
//! DESIGN
//! ======
//! The stylesheet owns every visual consequence; this module only decides
//! which class goes on which element. The DOM adapter applies the flags
//! verbatim after every state change, so the projection must be idempotent.
//!
//! Monotonic flags (`visible`, `in-view`) and the active link are emitted
//! only once they are set, which leaves classes shipped in the markup alone
//! until the page has something to say about them.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::config::ClassNames;
use crate::contact::FormStatus;
use crate::state::PageState;
use crate::theme::ThemeIcon;

/// Element a flag applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// Element carrying the theme flag (the page body).
    Root,
    ThemeIcon,
    Nav,
    /// Navigation link by index.
    Link(usize),
    /// Tracked section by index.
    Section(usize),
    FormStatus,
}

/// Add (`enabled`) or remove one class on one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassFlag<'a> {
    pub target: Target,
    pub class: &'a str,
    pub enabled: bool,
}

impl<'a> ClassFlag<'a> {
    fn new(target: Target, class: &'a str, enabled: bool) -> Self {
        Self { target, class, enabled }
    }
}

/// All class flags implied by `state`.
#[must_use]
pub fn project<'a>(state: &PageState, classes: &'a ClassNames) -> Vec<ClassFlag<'a>> {
    let mut flags = Vec::new();

    let icon = state.theme.icon();
    flags.push(ClassFlag::new(Target::Root, &classes.dark, state.theme.is_dark()));
    flags.push(ClassFlag::new(Target::ThemeIcon, &classes.icon_light, icon == ThemeIcon::Moon));
    flags.push(ClassFlag::new(Target::ThemeIcon, &classes.icon_dark, icon == ThemeIcon::Sun));

    flags.push(ClassFlag::new(Target::Nav, &classes.open, state.nav_open));

    if let Some(active) = state.active_link {
        for i in 0..state.links.len() {
            flags.push(ClassFlag::new(Target::Link(i), &classes.active, i == active));
        }
    }

    for (i, section) in state.sections.iter().enumerate() {
        if section.visible {
            flags.push(ClassFlag::new(Target::Section(i), &classes.visible, true));
        }
        if section.in_view {
            flags.push(ClassFlag::new(Target::Section(i), &classes.in_view, true));
        }
    }

    match state.form_status {
        FormStatus::Idle => {}
        FormStatus::Error(_) => {
            flags.push(ClassFlag::new(Target::FormStatus, &classes.success, false));
            flags.push(ClassFlag::new(Target::FormStatus, &classes.error, true));
        }
        FormStatus::Success(_) => {
            flags.push(ClassFlag::new(Target::FormStatus, &classes.error, false));
            flags.push(ClassFlag::new(Target::FormStatus, &classes.success, true));
        }
    }

    flags
}

/// Text for the footer year element.
#[must_use]
pub fn year_text(year: u32) -> String {
    year.to_string()
}
