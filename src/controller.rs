//! Page controller: owns `PageState` and the two injected ports.
//!
//! Separated from the DOM adapter so every behavior can be driven and
//! inspected without a browser. The adapter (`dom`) only translates events
//! into calls here and applies `flags()` afterwards.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::PageConfig;
use crate::contact::{self, ContactFields, SubmitOutcome, Submitter};
use crate::observe::{Observation, VisibilityPort};
use crate::state::{PageLayout, PageState};
use crate::store::PreferenceStore;
use crate::theme::{self, Theme};
use crate::view::{self, ClassFlag};
use crate::{highlight, nav, reveal};

/// Controller shared between event handlers on the single UI thread.
pub type SharedController<S, T> = Rc<RefCell<PageController<S, T>>>;

pub struct PageController<S, T> {
    config: PageConfig,
    state: PageState,
    store: S,
    submitter: T,
}

impl<S: PreferenceStore, T: Submitter> PageController<S, T> {
    /// Build the controller and resolve the initial theme from `store`.
    pub fn new(config: PageConfig, store: S, submitter: T, layout: PageLayout) -> Self {
        let theme = theme::read_preference(&store, &config.storage_key, config.default_theme);
        log::debug!(
            "page layout: {} links, {} sections, initial theme {}",
            layout.links.len(),
            layout.sections.len(),
            theme.as_str()
        );
        let state = PageState::new(theme, layout);
        Self { config, state, store, submitter }
    }

    #[must_use]
    pub fn into_shared(self) -> SharedController<S, T> {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn submitter(&self) -> &T {
        &self.submitter
    }

    // --- Theme ---

    /// Flip the theme that is currently applied and persist the result.
    ///
    /// `applied` comes from the document rather than from storage, so a page
    /// whose flag was changed behind our back still toggles visibly.
    pub fn toggle_theme(&mut self, applied: Theme) -> Theme {
        let next = applied.toggled();
        self.state.theme = next;
        theme::persist(&mut self.store, &self.config.storage_key, next);
        next
    }

    // --- Navigation ---

    pub fn toggle_menu(&mut self) -> bool {
        nav::toggle_menu(&mut self.state)
    }

    pub fn close_menu(&mut self) {
        nav::close_menu(&mut self.state);
    }

    // --- Observation ---

    pub fn observe_sections(&mut self, batch: &[Observation]) {
        highlight::apply_batch(&mut self.state, batch);
    }

    pub fn reveal_sections(&mut self, batch: &[Observation]) -> usize {
        reveal::apply_batch(&mut self.state, batch)
    }

    // --- Contact ---

    pub fn submit_contact(&mut self, fields: &ContactFields) -> SubmitOutcome {
        let outcome = contact::handle_submit(fields, &mut self.submitter, &self.config.messages);
        self.state.form_status = outcome.status.clone();
        outcome
    }

    // --- Projection ---

    #[must_use]
    pub fn flags(&self) -> Vec<ClassFlag<'_>> {
        view::project(&self.state, &self.config.classes)
    }
}

/// Register the highlight and reveal observers with `port`.
///
/// Each batch updates the controller, releases the borrow, then calls
/// `on_change` so the caller can re-render. Returns how many observers were
/// installed; zero when the host cannot observe visibility.
pub fn install_observers<S, T, P>(page: &SharedController<S, T>, port: &P, on_change: &Rc<dyn Fn()>) -> usize
where
    S: PreferenceStore + 'static,
    T: Submitter + 'static,
    P: VisibilityPort + ?Sized,
{
    if !port.supported() {
        log::info!("intersection observation unavailable; section highlight and reveal disabled");
        return 0;
    }

    let (highlight_targets, reveal_targets, highlight_options, reveal_options) = {
        let page = page.borrow();
        (
            page.state.highlight_targets(),
            page.state.reveal_targets(),
            page.config.highlight,
            page.config.reveal,
        )
    };

    let mut installed = 0;

    let cb_page = Rc::clone(page);
    let cb_change = Rc::clone(on_change);
    let observed = port.observe(
        &highlight_targets,
        &highlight_options,
        Box::new(move |batch| {
            cb_page.borrow_mut().observe_sections(&batch);
            cb_change();
        }),
    );
    match observed {
        Ok(()) => installed += 1,
        Err(e) => log::warn!("section highlight disabled: {e}"),
    }

    if reveal_targets.is_empty() {
        log::debug!("no reveal sections; scroll reveal not installed");
        return installed;
    }

    let cb_page = Rc::clone(page);
    let cb_change = Rc::clone(on_change);
    let observed = port.observe(
        &reveal_targets,
        &reveal_options,
        Box::new(move |batch| {
            let revealed = cb_page.borrow_mut().reveal_sections(&batch);
            if revealed > 0 {
                cb_change();
            }
        }),
    );
    match observed {
        Ok(()) => installed += 1,
        Err(e) => log::warn!("scroll reveal disabled: {e}"),
    }

    installed
}
