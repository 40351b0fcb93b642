//! `IntersectionObserver` behind the `VisibilityPort` trait.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::observe::{BatchCallback, ObserveError, Observation, ObserverOptions, VisibilityPort};

pub struct IntersectionVisibility {
    window: Window,
    /// Same order as `PageState::sections`.
    sections: Rc<Vec<Element>>,
}

impl IntersectionVisibility {
    #[must_use]
    pub fn new(window: Window, sections: Vec<Element>) -> Self {
        Self { window, sections: Rc::new(sections) }
    }
}

impl VisibilityPort for IntersectionVisibility {
    fn supported(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    }

    fn observe(&self, targets: &[usize], options: &ObserverOptions, mut callback: BatchCallback) -> Result<(), ObserveError> {
        if !self.supported() {
            return Err(ObserveError::Unsupported);
        }

        let sections = Rc::clone(&self.sections);
        let closure = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| to_observation(&sections, entry))
                    .collect::<Vec<_>>();
                callback(batch);
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|e| ObserveError::Host(super::js_message(&e)))?;
        for el in targets.iter().filter_map(|&i| self.sections.get(i)) {
            observer.observe(el);
        }

        // Observers live as long as the page.
        closure.forget();
        Ok(())
    }
}

fn to_observation(sections: &[Element], value: JsValue) -> Option<Observation> {
    let Ok(entry) = value.dyn_into::<IntersectionObserverEntry>() else {
        return None;
    };
    let target = entry.target();
    let section = sections.iter().position(|el| *el == target)?;
    Some(Observation::new(section, entry.intersection_ratio(), entry.is_intersecting()))
}
