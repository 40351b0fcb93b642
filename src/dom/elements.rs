//! Element lookup against the configured selectors.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement};

use crate::config::PageConfig;
use crate::state::{NavLink, PageLayout, SectionSpec};
use crate::view::Target;

/// Every element a behavior may be wired to. Absent ones are `None`/empty.
pub struct PageElements {
    /// Carries the theme flag.
    pub root: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub theme_icon: Option<Element>,
    pub nav: Option<Element>,
    pub menu_toggle: Option<Element>,
    pub nav_links: Vec<Element>,
    /// Highlighted sections first, then reveal-only sections, no duplicates.
    pub sections: Vec<Element>,
    pub year: Option<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub form_status: Option<Element>,
}

impl PageElements {
    /// Look everything up and describe it as a `PageLayout` for the controller.
    pub fn query(document: &Document, config: &PageConfig) -> (Self, PageLayout) {
        let selectors = &config.selectors;
        let classes = &config.classes;

        let theme_toggle = query_one(document, &selectors.theme_toggle);
        let theme_icon = theme_toggle
            .as_ref()
            .and_then(|button| match button.query_selector(&selectors.theme_icon) {
                Ok(icon) => icon,
                Err(e) => {
                    log::warn!("bad theme icon selector {:?}: {}", selectors.theme_icon, super::js_message(&e));
                    None
                }
            });

        let nav = query_one(document, &selectors.nav);
        let nav_links = query_all(document, &selectors.nav_links);

        let highlighted = query_all(document, &selectors.sections);
        let highlight_count = highlighted.len();
        let revealed = query_all(document, &selectors.reveal_sections);
        let mut sections = highlighted;
        for el in &revealed {
            if !sections.contains(el) {
                sections.push(el.clone());
            }
        }

        let contact_form = query_one(document, &selectors.contact_form).and_then(|el| match el.dyn_into::<HtmlFormElement>() {
            Ok(form) => Some(form),
            Err(_) => {
                log::warn!("{:?} is not a form", selectors.contact_form);
                None
            }
        });

        let layout = PageLayout {
            links: nav_links
                .iter()
                .map(|link| NavLink { href: link.get_attribute("href") })
                .collect(),
            sections: sections
                .iter()
                .enumerate()
                .map(|(i, el)| {
                    let id = el.id();
                    SectionSpec {
                        id: (!id.is_empty()).then_some(id),
                        highlight: i < highlight_count,
                        reveal: revealed.contains(el),
                        scroll_animated: el.class_list().contains(&classes.scroll_section),
                    }
                })
                .collect(),
            nav_open: nav.as_ref().is_some_and(|el| el.class_list().contains(&classes.open)),
        };

        let elements = Self {
            root: document.body().map(Element::from),
            theme_toggle,
            theme_icon,
            nav,
            menu_toggle: query_one(document, &selectors.menu_toggle),
            nav_links,
            sections,
            year: query_one(document, &selectors.year),
            contact_form,
            form_status: query_one(document, &selectors.form_status),
        };
        (elements, layout)
    }

    /// Resolve a projection target to its element.
    #[must_use]
    pub fn target(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Root => self.root.as_ref(),
            Target::ThemeIcon => self.theme_icon.as_ref(),
            Target::Nav => self.nav.as_ref(),
            Target::Link(i) => self.nav_links.get(i),
            Target::Section(i) => self.sections.get(i),
            Target::FormStatus => self.form_status.as_ref(),
        }
    }
}

fn query_one(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(Some(el)) => Some(el),
        Ok(None) => {
            log::debug!("no element matches {selector:?}");
            None
        }
        Err(e) => {
            log::warn!("bad selector {selector:?}: {}", super::js_message(&e));
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("bad selector {selector:?}: {}", super::js_message(&e));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|node| node.unchecked_into::<Element>())
        .collect()
}
