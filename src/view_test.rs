use super::*;
use crate::state::{NavLink, PageLayout, SectionSpec};
use crate::theme::Theme;

// =============================================================
// Helpers
// =============================================================

fn state(theme: Theme) -> PageState {
    PageState::new(
        theme,
        PageLayout {
            links: vec![NavLink::new("#a"), NavLink::new("#b"), NavLink::new("#c")],
            sections: vec![SectionSpec::highlighted("a"), SectionSpec::both("b")],
            nav_open: false,
        },
    )
}

fn flag(flags: &[ClassFlag<'_>], target: Target, class: &str) -> Option<bool> {
    flags
        .iter()
        .rev()
        .find(|f| f.target == target && f.class == class)
        .map(|f| f.enabled)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn dark_theme_sets_root_flag_and_sun_icon() {
    let classes = ClassNames::default();
    let flags = project(&state(Theme::Dark), &classes);
    assert_eq!(flag(&flags, Target::Root, "dark"), Some(true));
    assert_eq!(flag(&flags, Target::ThemeIcon, "fa-sun"), Some(true));
    assert_eq!(flag(&flags, Target::ThemeIcon, "fa-moon"), Some(false));
}

#[test]
fn light_theme_clears_root_flag_and_shows_moon() {
    let classes = ClassNames::default();
    let flags = project(&state(Theme::Light), &classes);
    assert_eq!(flag(&flags, Target::Root, "dark"), Some(false));
    assert_eq!(flag(&flags, Target::ThemeIcon, "fa-moon"), Some(true));
    assert_eq!(flag(&flags, Target::ThemeIcon, "fa-sun"), Some(false));
}

#[test]
fn custom_class_names_are_used() {
    let classes = ClassNames { dark: "theme-dark".to_owned(), ..ClassNames::default() };
    let flags = project(&state(Theme::Dark), &classes);
    assert_eq!(flag(&flags, Target::Root, "theme-dark"), Some(true));
    assert_eq!(flag(&flags, Target::Root, "dark"), None);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_flag_follows_state() {
    let classes = ClassNames::default();
    let mut s = state(Theme::Dark);
    assert_eq!(flag(&project(&s, &classes), Target::Nav, "open"), Some(false));
    s.nav_open = true;
    assert_eq!(flag(&project(&s, &classes), Target::Nav, "open"), Some(true));
}

#[test]
fn links_untouched_until_a_section_is_active() {
    let classes = ClassNames::default();
    let flags = project(&state(Theme::Dark), &classes);
    assert!(flags.iter().all(|f| !matches!(f.target, Target::Link(_))));
}

#[test]
fn exactly_one_link_is_active() {
    let classes = ClassNames::default();
    let mut s = state(Theme::Dark);
    s.active_link = Some(1);
    let flags = project(&s, &classes);
    assert_eq!(flag(&flags, Target::Link(0), "active"), Some(false));
    assert_eq!(flag(&flags, Target::Link(1), "active"), Some(true));
    assert_eq!(flag(&flags, Target::Link(2), "active"), Some(false));
}

// =============================================================
// Sections
// =============================================================

#[test]
fn section_flags_only_emitted_when_set() {
    let classes = ClassNames::default();
    let mut s = state(Theme::Dark);
    s.sections[1].visible = true;
    s.sections[1].in_view = true;
    let flags = project(&s, &classes);
    assert_eq!(flag(&flags, Target::Section(0), "visible"), None);
    assert_eq!(flag(&flags, Target::Section(0), "in-view"), None);
    assert_eq!(flag(&flags, Target::Section(1), "visible"), Some(true));
    assert_eq!(flag(&flags, Target::Section(1), "in-view"), Some(true));
}

// =============================================================
// Form status
// =============================================================

#[test]
fn idle_form_status_emits_nothing() {
    let classes = ClassNames::default();
    let flags = project(&state(Theme::Dark), &classes);
    assert!(flags.iter().all(|f| f.target != Target::FormStatus));
}

#[test]
fn error_status_sets_error_and_clears_success() {
    let classes = ClassNames::default();
    let mut s = state(Theme::Dark);
    s.form_status = FormStatus::Error("x".into());
    let flags = project(&s, &classes);
    assert_eq!(flag(&flags, Target::FormStatus, "error"), Some(true));
    assert_eq!(flag(&flags, Target::FormStatus, "success"), Some(false));
}

#[test]
fn success_status_sets_success_and_clears_error() {
    let classes = ClassNames::default();
    let mut s = state(Theme::Dark);
    s.form_status = FormStatus::Success("x".into());
    let flags = project(&s, &classes);
    assert_eq!(flag(&flags, Target::FormStatus, "success"), Some(true));
    assert_eq!(flag(&flags, Target::FormStatus, "error"), Some(false));
}

// =============================================================
// Year
// =============================================================

#[test]
fn year_text_is_plain_number() {
    assert_eq!(year_text(2026), "2026");
}
