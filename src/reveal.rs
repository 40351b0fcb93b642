//! Scroll-reveal trigger.
//!
//! `in_view` is one-way: once a section has intersected it keeps the flag for
//! the lifetime of the page, so the entrance animation runs exactly once.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::observe::Observation;
use crate::state::PageState;

/// Apply one observer batch. Returns how many sections were newly revealed.
pub fn apply_batch(state: &mut PageState, batch: &[Observation]) -> usize {
    let mut revealed = 0;
    for observation in batch.iter().filter(|o| o.intersecting) {
        match state.sections.get_mut(observation.section) {
            Some(section) if !section.in_view => {
                section.in_view = true;
                revealed += 1;
            }
            Some(_) => {}
            None => log::debug!("reveal: no section at index {}", observation.section),
        }
    }
    revealed
}
