// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a header, an optional notice, and a scrollable body holding
//! the active content block and the footer. On compact windows an open menu
//! is stacked over the whole page.

use super::Message;
use crate::domain::navigation::ViewState;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::footer;
use crate::ui::mobile_menu::{self, ViewContext as MobileMenuViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notice::Notice;
use crate::ui::responsive::{Layout, Viewport};
use crate::ui::sections::{self, Artwork, ViewContext as SectionsViewContext};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::transition::Transition;
use iced::{
    widget::{scrollable, Column, Container, Stack},
    Element, Length, Padding,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a ViewState,
    pub viewport: &'a Viewport,
    pub colors: ColorScheme,
    pub artwork: &'a Artwork,
    pub notice: &'a Notice,
    pub section_transition: &'a Transition,
    pub menu_transition: &'a Transition,
    pub now: Instant,
}

/// Whether the overlay menu is mounted for this state and width.
#[must_use]
pub fn menu_overlay_visible(state: &ViewState, viewport: &Viewport) -> bool {
    state.is_mobile_menu_open() && viewport.layout() == Layout::Compact
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let layout = ctx.viewport.layout();

    let header = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        layout,
        active_section: ctx.state.active_section(),
    })
    .map(Message::Navbar);

    let progress = ctx.section_transition.progress(ctx.now);
    let block = sections::select(ctx.state.active_section(), ctx.viewport);
    let content = sections::view(
        block,
        SectionsViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors.faded(progress),
            alpha: progress,
            viewport: ctx.viewport,
            artwork: ctx.artwork,
        },
    )
    .map(Message::Sections);

    let (pad_x, pad_y) = if ctx.viewport.is_medium_up() {
        (spacing::LG, spacing::XXL)
    } else {
        (spacing::MD, spacing::LG)
    };
    let slide = sizing::ENTER_SLIDE * (1.0 - progress);
    let content = Container::new(content).width(Length::Fill).padding(Padding {
        top: pad_y + slide,
        right: pad_x,
        bottom: (pad_y - slide).max(0.0),
        left: pad_x,
    });

    let footer_view: Element<'_, Message> = footer::view(ctx.i18n, ctx.colors);
    let body = Column::new().width(Length::Fill).push(content).push(footer_view);

    let mut page = Column::new().width(Length::Fill).height(Length::Fill).push(header);
    if let Some(banner) = ctx.notice.view(ctx.i18n, ctx.colors) {
        page = page.push(
            Container::new(banner.map(Message::Notice)).padding([spacing::XXS, spacing::MD]),
        );
    }
    page = page.push(scrollable(body).height(Length::Fill));

    let page = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(ctx.colors));

    if !menu_overlay_visible(ctx.state, ctx.viewport) {
        return page.into();
    }

    let menu = mobile_menu::view(MobileMenuViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors.faded(ctx.menu_transition.progress(ctx.now)),
        active_section: ctx.state.active_section(),
    })
    .map(Message::MobileMenu);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(menu)
        .into()
}
