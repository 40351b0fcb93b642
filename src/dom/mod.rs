//! Browser adapter: finds the page's elements, wires events and observers to
//! the controller, and applies its projection to the document.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches `web-sys`. It is compiled with the
//! `hydrate` feature; everything it drives is plain Rust tested natively.
//!
//! ERROR HANDLING
//! ==============
//! Each behavior is wired independently. A missing element or a rejected JS
//! call disables that one behavior with a log line; mounting carries on.

pub mod elements;
pub mod events;
pub mod observer;
pub mod render;
pub mod storage;

use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::config::{ConfigError, PageConfig};
use crate::contact::DemoSubmitter;
use crate::controller::{self, PageController, SharedController};
use crate::view;

use self::elements::PageElements;
use self::observer::IntersectionVisibility;
use self::storage::LocalStorage;

/// Id of the optional inline JSON block overriding `PageConfig` defaults.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// The controller as mounted in the browser.
pub type SharedPage = SharedController<LocalStorage, DemoSubmitter>;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("{context} failed: {message}")]
    Js { context: &'static str, message: String },
}

impl DomError {
    pub(crate) fn js(context: &'static str, value: &JsValue) -> Self {
        Self::Js { context, message: js_message(value) }
    }
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Read `<script type="application/json" id="page-config">`, if present.
pub fn load_config() -> Result<PageConfig, ConfigError> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) if !raw.trim().is_empty() => PageConfig::from_json(&raw),
        _ => Ok(PageConfig::default()),
    }
}

/// Mount the page controller on the current document.
pub fn mount(config: PageConfig) -> Result<SharedPage, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    let (elements, layout) = PageElements::query(&document, &config);
    let store = LocalStorage::open(&window);
    let page = PageController::new(config, store, DemoSubmitter, layout).into_shared();
    let elements = Rc::new(elements);

    let render: Rc<dyn Fn()> = {
        let page = Rc::clone(&page);
        let elements = Rc::clone(&elements);
        Rc::new(move || render::apply(&*page.borrow(), &elements))
    };
    render();
    show_year(&elements);

    let wired = [
        ("theme toggle", events::wire_theme_toggle(&page, &elements, &render)),
        ("mobile menu", events::wire_menu_toggle(&page, &elements, &render)),
        ("nav links", events::wire_nav_links(&page, &elements, &render)),
        ("contact form", events::wire_contact_form(&page, &elements, &render)),
    ];
    for (feature, result) in wired {
        if let Err(e) = result {
            log::warn!("{feature} disabled: {e}");
        }
    }

    let port = IntersectionVisibility::new(window, elements.sections.clone());
    let observers = controller::install_observers(&page, &port, &render);

    log::info!("page controller mounted ({observers} observers)");
    Ok(page)
}

fn show_year(elements: &PageElements) {
    let Some(year) = &elements.year else {
        log::debug!("no year element");
        return;
    };
    let now = js_sys::Date::new_0();
    year.set_text_content(Some(&view::year_text(now.get_full_year())));
}
