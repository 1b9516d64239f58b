// SPDX-License-Identifier: MPL-2.0
//! Header bar with the brand mark and navigation.
//!
//! On wide windows the navigation entries are shown inline. On compact
//! windows they are replaced by a hamburger button that opens the
//! [`mobile_menu`](super::mobile_menu) overlay.

use crate::domain::navigation::{Section, NAV_ITEMS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::responsive::Layout;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Glyph of the hamburger button.
const MENU_GLYPH: &str = "☰";

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub layout: Layout,
    pub active_section: Section,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SelectSection(Section),
    ToggleMenu,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectSection(Section),
    ToggleMenu,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::SelectSection(section) => Event::SelectSection(section),
        Message::ToggleMenu => Event::ToggleMenu,
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("app-name"))
        .size(typography::TITLE_MD)
        .color(ctx.colors.ink);

    let trailing: Element<'a, Message> = match ctx.layout {
        Layout::Wide => build_inline_nav(&ctx),
        Layout::Compact => button(Text::new(MENU_GLYPH).size(typography::TITLE_MD))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::bare(ctx.colors))
            .into(),
    };

    let row = Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(trailing);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::LG])
        .align_x(Horizontal::Left)
        .into()
}

fn build_inline_nav<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    NAV_ITEMS
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, item| {
            let active = item.id == ctx.active_section;
            row.push(
                button(Text::new(ctx.i18n.tr(item.label_key)).size(typography::BODY))
                    .on_press(Message::SelectSection(item.id))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::nav_item(ctx.colors, active)),
            )
        })
        .into()
}
