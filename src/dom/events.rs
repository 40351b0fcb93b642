//! Click and submit listeners.
//!
//! Every handler follows the same shape: borrow the controller mutably, let
//! it decide, drop the borrow, re-render. Listeners are never removed.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, FormData, HtmlFormElement};

use super::elements::PageElements;
use super::{DomError, SharedPage};
use crate::contact::{ContactFields, FIELD_NAMES};
use crate::theme::Theme;

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| DomError::js("addEventListener", &e))?;
    closure.forget();
    Ok(())
}

/// Theme button: flip whatever theme the document currently shows.
pub fn wire_theme_toggle(page: &SharedPage, elements: &Rc<PageElements>, render: &Rc<dyn Fn()>) -> Result<(), DomError> {
    let Some(button) = &elements.theme_toggle else {
        log::debug!("no theme toggle button");
        return Ok(());
    };

    let page = Rc::clone(page);
    let elements_cb = Rc::clone(elements);
    let render = Rc::clone(render);
    listen(button, "click", move |_| {
        let applied = {
            let page = page.borrow();
            elements_cb.root.as_ref().map_or(page.state().theme, |root| {
                Theme::from_dark_flag(root.class_list().contains(&page.config().classes.dark))
            })
        };
        let next = page.borrow_mut().toggle_theme(applied);
        log::debug!("theme -> {}", next.as_str());
        render();
    })
}

/// Menu button: needs both the button and the nav container.
pub fn wire_menu_toggle(page: &SharedPage, elements: &Rc<PageElements>, render: &Rc<dyn Fn()>) -> Result<(), DomError> {
    let (Some(button), Some(_)) = (&elements.menu_toggle, &elements.nav) else {
        log::debug!("no menu button or nav container");
        return Ok(());
    };

    let page = Rc::clone(page);
    let render = Rc::clone(render);
    listen(button, "click", move |_| {
        page.borrow_mut().toggle_menu();
        render();
    })
}

/// Every nav link closes the menu.
pub fn wire_nav_links(page: &SharedPage, elements: &Rc<PageElements>, render: &Rc<dyn Fn()>) -> Result<(), DomError> {
    for link in &elements.nav_links {
        let page = Rc::clone(page);
        let render = Rc::clone(render);
        listen(link, "click", move |_| {
            page.borrow_mut().close_menu();
            render();
        })?;
    }
    Ok(())
}

/// Contact form: needs both the form and the status element.
pub fn wire_contact_form(page: &SharedPage, elements: &Rc<PageElements>, render: &Rc<dyn Fn()>) -> Result<(), DomError> {
    let (Some(form), Some(_)) = (&elements.contact_form, &elements.form_status) else {
        log::debug!("no contact form or status element");
        return Ok(());
    };

    let page = Rc::clone(page);
    let render = Rc::clone(render);
    let form_cb = form.clone();
    listen(form, "submit", move |event| {
        event.prevent_default();
        let fields = read_fields(&form_cb);
        let outcome = page.borrow_mut().submit_contact(&fields);
        render();
        if outcome.reset {
            form_cb.reset();
        }
    })
}

fn read_fields(form: &HtmlFormElement) -> ContactFields {
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("form data unreadable: {}", super::js_message(&e));
            return ContactFields::default();
        }
    };
    let [name, email, message] = FIELD_NAMES.map(|field| data.get(field).as_string());
    ContactFields { name, email, message }
}
