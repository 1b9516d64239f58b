// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component events are translated into [`NavigationController`] calls here.
//! Handlers never touch `ViewState` directly, and nothing in this module
//! feeds transition progress back into navigation.

use crate::application::navigation::{NavOrigin, NavigationController};
use crate::application::port::UrlOpener;
use crate::domain::navigation::Section;
use crate::ui::mobile_menu::{self, Event as MobileMenuEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notice::Notice;
use crate::ui::responsive::{Layout, Viewport};
use crate::ui::sections::{self, Event as SectionsEvent};
use crate::ui::transition::Transition;
use iced::Size;
use std::time::Instant;

/// Mutable slices of `App` needed by the handlers.
pub struct UpdateContext<'a> {
    pub navigation: &'a mut NavigationController,
    pub viewport: &'a mut Viewport,
    pub section_transition: &'a mut Transition,
    pub menu_transition: &'a mut Transition,
    pub now: &'a mut Instant,
    pub notice: &'a mut Notice,
    pub opener: &'a dyn UrlOpener,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) {
    match navbar::update(message) {
        NavbarEvent::SelectSection(section) => {
            select_section(ctx, section, NavOrigin::DesktopNav);
        }
        NavbarEvent::ToggleMenu => toggle_menu(ctx),
    }
}

pub fn handle_mobile_menu_message(ctx: &mut UpdateContext<'_>, message: mobile_menu::Message) {
    match mobile_menu::update(message) {
        MobileMenuEvent::SelectSection(section) => {
            select_section(ctx, section, NavOrigin::MobileMenu);
        }
        MobileMenuEvent::Close => ctx.navigation.close_mobile_menu(),
    }
}

pub fn handle_sections_message(ctx: &mut UpdateContext<'_>, message: sections::Message) {
    match sections::update(message) {
        SectionsEvent::ExploreGallery => {
            select_section(ctx, Section::Gallery, NavOrigin::Content);
        }
        SectionsEvent::OpenUrl(url) => open_url(ctx, url),
    }
}

/// Tracks the new width. Growing into the wide layout unmounts the overlay
/// menu, so an open menu is closed with it.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) {
    let before = ctx.viewport.layout();
    ctx.viewport.width = size.width;
    let after = ctx.viewport.layout();

    if before != after {
        tracing::debug!(width = size.width, layout = ?after, "layout changed");
    }
    if after == Layout::Wide && ctx.navigation.state().is_mobile_menu_open() {
        ctx.navigation.close_mobile_menu();
    }
}

pub fn handle_close_menu(ctx: &mut UpdateContext<'_>) {
    ctx.navigation.close_mobile_menu();
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, instant: Instant) {
    *ctx.now = instant;
}

/// Applies a start section given as a raw id. Unknown ids are logged and
/// leave the state untouched.
pub fn handle_start_section(ctx: &mut UpdateContext<'_>, id: &str) {
    match ctx.navigation.select_section_by_id(id, NavOrigin::Startup) {
        Ok(change) => {
            if change.is_change() {
                ctx.section_transition.start(*ctx.now);
            }
        }
        Err(err) => tracing::warn!(error = %err, "ignoring start section"),
    }
}

fn select_section(ctx: &mut UpdateContext<'_>, section: Section, origin: NavOrigin) {
    let change = ctx.navigation.select_section(section, origin);
    if change.is_change() {
        *ctx.now = Instant::now();
        ctx.section_transition.start(*ctx.now);
    }
}

fn toggle_menu(ctx: &mut UpdateContext<'_>) {
    ctx.navigation.toggle_mobile_menu();
    if ctx.navigation.state().is_mobile_menu_open() {
        *ctx.now = Instant::now();
        ctx.menu_transition.start(*ctx.now);
    }
}

fn open_url(ctx: &mut UpdateContext<'_>, url: &str) {
    if let Err(err) = ctx.opener.open(url) {
        tracing::warn!(%url, error = %err, "failed to open link");
        ctx.notice.show(err.i18n_key());
    }
}
