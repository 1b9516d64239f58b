// SPDX-License-Identifier: MPL-2.0
//! Navigation controller for the landing view.
//!
//! The controller owns the [`ViewState`] and is the only code path that
//! changes it. Every selection closes the mobile menu, so the reachable
//! states after a selection are always `(section, closed)`:
//!
//! | From              | Action                 | To                     |
//! |-------------------|------------------------|------------------------|
//! | `(any, any)`      | `select_section(s)`    | `(s, closed)`          |
//! | `(s, open)`       | `toggle_mobile_menu`   | `(s, closed)`          |
//! | `(s, closed)`     | `toggle_mobile_menu`   | `(s, open)`            |
//! | `(s, any)`        | `close_mobile_menu`    | `(s, closed)`          |

use crate::domain::navigation::{InvalidSection, Section, ViewState};

/// Where a section request came from. Only used for logging; every origin
/// yields the same transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOrigin {
    /// Inline navigation on wide windows.
    DesktopNav,
    /// The full-window overlay menu on compact windows.
    MobileMenu,
    /// A call-to-action inside section content (e.g. "Explore Gallery").
    Content,
    /// The start section requested on the command line.
    Startup,
}

/// Outcome of a successful section selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub previous: Section,
    pub current: Section,
}

impl SectionChange {
    /// Whether the visible section actually changed.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.previous != self.current
    }
}

#[derive(Debug, Default)]
pub struct NavigationController {
    state: ViewState,
}

impl NavigationController {
    /// Creates a controller holding the initial `(Home, closed)` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Shows `target` and closes the mobile menu.
    pub fn select_section(&mut self, target: Section, origin: NavOrigin) -> SectionChange {
        let previous = self.state.active_section();
        self.state.set_active_section(target);
        self.state.set_mobile_menu_open(false);

        tracing::debug!(
            from = %previous,
            to = %target,
            ?origin,
            "section selected"
        );

        SectionChange {
            previous,
            current: target,
        }
    }

    /// Parses `id` and selects the matching section.
    ///
    /// Unknown ids leave the state untouched.
    pub fn select_section_by_id(
        &mut self,
        id: &str,
        origin: NavOrigin,
    ) -> Result<SectionChange, InvalidSection> {
        let target: Section = id.parse()?;
        Ok(self.select_section(target, origin))
    }

    /// Opens the mobile menu if closed, closes it if open.
    pub fn toggle_mobile_menu(&mut self) {
        let open = !self.state.is_mobile_menu_open();
        self.state.set_mobile_menu_open(open);
        tracing::debug!(open, "mobile menu toggled");
    }

    pub fn close_mobile_menu(&mut self) {
        self.state.set_mobile_menu_open(false);
    }
}
