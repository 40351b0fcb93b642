//! # portfolio-page
//!
//! Client-side behavior for a static portfolio page, compiled to WebAssembly.
//!
//! The page is plain server-delivered HTML. On load this crate wires five
//! independent behaviors onto it: a persisted light/dark theme, the mobile
//! navigation toggle, active-link highlighting while scrolling, one-way
//! scroll-reveal flags, and a demo contact form that validates locally and
//! sends nothing.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::PageController`], the single owner of page state |
//! | [`state`] | [`state::PageState`] and the layout discovered at mount |
//! | [`view`] | Pure projection of state onto class flags |
//! | [`theme`] | Theme values and preference persistence |
//! | [`nav`] | Mobile menu open/close |
//! | [`highlight`] | Active-section highlighting |
//! | [`reveal`] | Scroll-reveal trigger |
//! | [`contact`] | Contact form validation and the submission port |
//! | [`observe`] | Visibility observations and the observation port |
//! | [`store`] | Preference persistence port |
//! | [`config`] | Selectors, class names, tuning and messages |
//! | `dom` | Browser adapters (`hydrate` feature only) |

pub mod config;
pub mod contact;
pub mod controller;
pub mod highlight;
pub mod nav;
pub mod observe;
pub mod reveal;
pub mod state;
pub mod store;
pub mod theme;
pub mod view;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install logging, read config, mount the controller.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match dom::load_config() {
        Ok(config) => (config, None),
        Err(e) => (config::PageConfig::default(), Some(e)),
    };
    let level = config.log_level().unwrap_or(log::Level::Info);
    if let Err(e) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {e}");
    }
    if let Some(e) = config_error {
        log::warn!("page config ignored, using defaults: {e}");
    }

    if let Err(e) = dom::mount(config) {
        log::warn!("page controller not mounted: {e}");
    }
}
