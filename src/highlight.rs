//! Active-section highlighter.
//!
//! Each intersecting entry makes the first link pointing at its section the
//! only active link, marks the section visible, and reveals it when it is
//! also a scroll section. Entries are processed in batch order, so when two
//! sections intersect in one batch the later one ends up active.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

use crate::observe::Observation;
use crate::state::PageState;

/// Apply one observer batch.
pub fn apply_batch(state: &mut PageState, batch: &[Observation]) {
    for observation in batch {
        apply_one(state, observation);
    }
}

fn apply_one(state: &mut PageState, observation: &Observation) {
    let Some(id) = state
        .sections
        .get(observation.section)
        .and_then(|section| section.spec.id.clone())
    else {
        log::debug!("highlight: no section with an id at index {}", observation.section);
        return;
    };
    let Some(link) = state.link_for_section(&id) else {
        return;
    };
    if !observation.intersecting {
        return;
    }

    state.active_link = Some(link);
    if let Some(section) = state.sections.get_mut(observation.section) {
        section.visible = true;
        if section.spec.scroll_animated {
            section.in_view = true;
        }
    }
}
