// SPDX-License-Identifier: MPL-2.0
//! The landing view's navigation state.

use super::Section;

/// Which section is shown and whether the mobile overlay menu is mounted.
///
/// Fields are private: the only writer is
/// [`NavigationController`](crate::application::navigation::NavigationController).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    active_section: Section,
    mobile_menu_open: bool,
}

impl ViewState {
    /// State of a freshly mounted view: `Home` with the menu closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active_section(&self) -> Section {
        self.active_section
    }

    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub(crate) fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub(crate) fn set_mobile_menu_open(&mut self, open: bool) {
        self.mobile_menu_open = open;
    }
}
