//! Application state for the page controller.
//!
//! DESIGN
//! ======
//! One owned value holds every UI flag the behaviors touch. Handlers mutate
//! it; `view::project` turns it into class flags. Nothing reads flags back
//! from the document except the theme toggle (drift tolerance) and the
//! initial nav flag.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::contact::FormStatus;
use crate::theme::Theme;

/// A navigation link, identified by its position in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// Raw `href` attribute, e.g. `#about`.
    pub href: Option<String>,
}

impl NavLink {
    #[must_use]
    pub fn new(href: &str) -> Self {
        Self { href: Some(href.to_owned()) }
    }

    /// Whether this link points at the fragment `#id`.
    #[must_use]
    pub fn targets(&self, id: &str) -> bool {
        self.href
            .as_deref()
            .and_then(|href| href.strip_prefix('#'))
            .is_some_and(|fragment| fragment == id)
    }
}

/// How a tracked element was discovered in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: Option<String>,
    /// Observed by the active-section highlighter.
    pub highlight: bool,
    /// Observed by the scroll-reveal trigger.
    pub reveal: bool,
    /// Carries the scroll-section class, so highlighting also reveals it.
    pub scroll_animated: bool,
}

impl SectionSpec {
    /// A `section[id]` element.
    #[must_use]
    pub fn highlighted(id: &str) -> Self {
        Self { id: Some(id.to_owned()), highlight: true, ..Self::default() }
    }

    /// A `.scroll-section` element.
    #[must_use]
    pub fn revealed(id: Option<&str>) -> Self {
        Self { id: id.map(str::to_owned), reveal: true, scroll_animated: true, ..Self::default() }
    }

    /// A `section[id].scroll-section` element, observed by both.
    #[must_use]
    pub fn both(id: &str) -> Self {
        Self { id: Some(id.to_owned()), highlight: true, reveal: true, scroll_animated: true }
    }
}

/// Per-section runtime flags. Both only ever go from `false` to `true`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionState {
    pub spec: SectionSpec,
    pub visible: bool,
    pub in_view: bool,
}

/// What the document offered at mount time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub links: Vec<NavLink>,
    pub sections: Vec<SectionSpec>,
    /// The nav container already carried the open class.
    pub nav_open: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub theme: Theme,
    pub nav_open: bool,
    pub links: Vec<NavLink>,
    /// Index into `links`.
    pub active_link: Option<usize>,
    pub sections: Vec<SectionState>,
    pub form_status: FormStatus,
}

impl PageState {
    #[must_use]
    pub fn new(theme: Theme, layout: PageLayout) -> Self {
        Self {
            theme,
            nav_open: layout.nav_open,
            links: layout.links,
            active_link: None,
            sections: layout
                .sections
                .into_iter()
                .map(|spec| SectionState { spec, ..SectionState::default() })
                .collect(),
            form_status: FormStatus::Idle,
        }
    }

    /// First link in document order pointing at `#id`.
    #[must_use]
    pub fn link_for_section(&self, id: &str) -> Option<usize> {
        self.links.iter().position(|link| link.targets(id))
    }

    /// Indices of sections the highlighter observes.
    #[must_use]
    pub fn highlight_targets(&self) -> Vec<usize> {
        self.targets(|spec| spec.highlight)
    }

    /// Indices of sections the reveal trigger observes.
    #[must_use]
    pub fn reveal_targets(&self) -> Vec<usize> {
        self.targets(|spec| spec.reveal)
    }

    fn targets(&self, pick: impl Fn(&SectionSpec) -> bool) -> Vec<usize> {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, section)| pick(&section.spec))
            .map(|(i, _)| i)
            .collect()
    }
}
