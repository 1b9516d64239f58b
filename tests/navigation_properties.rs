// SPDX-License-Identifier: MPL-2.0
//! Sequence properties of the navigation controller.

use poster_gallery::application::navigation::{NavOrigin, NavigationController};
use poster_gallery::domain::navigation::Section;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Action {
    Select(Section, NavOrigin),
    Toggle,
    Close,
}

fn section() -> impl Strategy<Value = Section> {
    prop_oneof![Just(Section::Home), Just(Section::Gallery)]
}

fn origin() -> impl Strategy<Value = NavOrigin> {
    prop_oneof![
        Just(NavOrigin::DesktopNav),
        Just(NavOrigin::MobileMenu),
        Just(NavOrigin::Content),
        Just(NavOrigin::Startup),
    ]
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (section(), origin()).prop_map(|(s, o)| Action::Select(s, o)),
        Just(Action::Toggle),
        Just(Action::Close),
    ]
}

fn apply(controller: &mut NavigationController, action: Action) {
    match action {
        Action::Select(section, origin) => {
            controller.select_section(section, origin);
        }
        Action::Toggle => controller.toggle_mobile_menu(),
        Action::Close => controller.close_mobile_menu(),
    }
}

#[test]
fn initial_state_is_home_with_menu_closed() {
    let controller = NavigationController::new();
    assert_eq!(controller.state().active_section(), Section::Home);
    assert!(!controller.state().is_mobile_menu_open());
}

#[test]
fn scenario_mobile_round_trip() {
    let mut controller = NavigationController::new();
    controller.toggle_mobile_menu();
    assert!(controller.state().is_mobile_menu_open());

    controller.select_section(Section::Gallery, NavOrigin::MobileMenu);
    assert_eq!(controller.state().active_section(), Section::Gallery);
    assert!(!controller.state().is_mobile_menu_open());
}

#[test]
fn scenario_invalid_id_changes_nothing() {
    let mut controller = NavigationController::new();
    controller.toggle_mobile_menu();
    let before = *controller.state();

    assert!(controller
        .select_section_by_id("contact", NavOrigin::Startup)
        .is_err());
    assert_eq!(*controller.state(), before);
}

proptest! {
    #[test]
    fn prop_last_selection_wins(selections in prop::collection::vec((section(), origin()), 1..32)) {
        let mut controller = NavigationController::new();
        for (section, origin) in &selections {
            controller.select_section(*section, *origin);
        }
        let (last, _) = selections[selections.len() - 1];
        prop_assert_eq!(controller.state().active_section(), last);
        prop_assert!(!controller.state().is_mobile_menu_open());
    }

    #[test]
    fn prop_double_toggle_restores_menu(actions in prop::collection::vec(action(), 0..32)) {
        let mut controller = NavigationController::new();
        for action in actions {
            apply(&mut controller, action);
        }
        let before = *controller.state();
        controller.toggle_mobile_menu();
        controller.toggle_mobile_menu();
        prop_assert_eq!(*controller.state(), before);
    }

    #[test]
    fn prop_close_is_idempotent(actions in prop::collection::vec(action(), 0..32)) {
        let mut controller = NavigationController::new();
        for action in actions {
            apply(&mut controller, action);
        }
        controller.close_mobile_menu();
        let once = *controller.state();
        controller.close_mobile_menu();
        prop_assert_eq!(*controller.state(), once);
        prop_assert!(!once.is_mobile_menu_open());
    }

    #[test]
    fn prop_selection_always_closes_menu(
        actions in prop::collection::vec(action(), 0..32),
        target in section(),
        from in origin(),
    ) {
        let mut controller = NavigationController::new();
        for action in actions {
            apply(&mut controller, action);
        }
        controller.select_section(target, from);
        prop_assert_eq!(controller.state().active_section(), target);
        prop_assert!(!controller.state().is_mobile_menu_open());
    }

    #[test]
    fn prop_unknown_ids_are_rejected(id in "[a-z]{1,12}") {
        prop_assume!(!matches!(id.as_str(), "home" | "gallery" | "gallary"));
        let mut controller = NavigationController::new();
        let before = *controller.state();
        prop_assert!(controller.select_section_by_id(&id, NavOrigin::Content).is_err());
        prop_assert_eq!(*controller.state(), before);
    }
}
