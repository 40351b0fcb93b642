//! Apply the controller's projection to the document.

use super::elements::PageElements;
use crate::contact::Submitter;
use crate::controller::PageController;
use crate::store::PreferenceStore;

/// Write every class flag and the form status text. Safe to call after any
/// state change; flags for missing elements are skipped.
pub fn apply<S: PreferenceStore, T: Submitter>(page: &PageController<S, T>, elements: &PageElements) {
    for flag in page.flags() {
        let Some(el) = elements.target(flag.target) else {
            continue;
        };
        if let Err(e) = el.class_list().toggle_with_force(flag.class, flag.enabled) {
            log::debug!("class {:?} not applied: {}", flag.class, super::js_message(&e));
        }
    }

    if let (Some(status), Some(text)) = (&elements.form_status, page.state().form_status.text()) {
        status.set_text_content(Some(text));
    }
}
