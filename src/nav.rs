//! Mobile navigation open/close rules.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::PageState;

/// Menu button click: flip the open flag. Returns the new value.
pub fn toggle_menu(state: &mut PageState) -> bool {
    state.nav_open = !state.nav_open;
    state.nav_open
}

/// Navigation link click: always closes, whichever link it was.
pub fn close_menu(state: &mut PageState) {
    state.nav_open = false;
}
