use super::*;

fn layout() -> PageLayout {
    PageLayout {
        links: vec![NavLink::new("#home"), NavLink::new("#about"), NavLink::new("#about"), NavLink::new("/blog")],
        sections: vec![
            SectionSpec::highlighted("home"),
            SectionSpec::both("about"),
            SectionSpec::revealed(None),
        ],
        nav_open: false,
    }
}

// =============================================================
// NavLink
// =============================================================

#[test]
fn link_targets_matching_fragment_only() {
    let link = NavLink::new("#about");
    assert!(link.targets("about"));
    assert!(!link.targets("home"));
    assert!(!link.targets("#about"));
}

#[test]
fn link_without_fragment_targets_nothing() {
    assert!(!NavLink::new("/about").targets("about"));
    assert!(!NavLink { href: None }.targets("about"));
}

// =============================================================
// PageState
// =============================================================

#[test]
fn new_state_starts_idle_with_no_active_link() {
    let state = PageState::new(Theme::Dark, layout());
    assert_eq!(state.theme, Theme::Dark);
    assert!(!state.nav_open);
    assert_eq!(state.active_link, None);
    assert_eq!(state.form_status, FormStatus::Idle);
    assert!(state.sections.iter().all(|s| !s.visible && !s.in_view));
}

#[test]
fn new_state_keeps_initial_nav_flag() {
    let state = PageState::new(Theme::Light, PageLayout { nav_open: true, ..PageLayout::default() });
    assert!(state.nav_open);
}

#[test]
fn link_for_section_picks_first_match() {
    let state = PageState::new(Theme::Dark, layout());
    assert_eq!(state.link_for_section("home"), Some(0));
    assert_eq!(state.link_for_section("about"), Some(1));
    assert_eq!(state.link_for_section("contact"), None);
}

#[test]
fn targets_split_by_observer() {
    let state = PageState::new(Theme::Dark, layout());
    assert_eq!(state.highlight_targets(), vec![0, 1]);
    assert_eq!(state.reveal_targets(), vec![1, 2]);
}
