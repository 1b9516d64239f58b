// SPDX-License-Identifier: MPL-2.0
//! Full-window navigation overlay for compact windows.
//!
//! The overlay is mounted only while the view state reports the menu open.
//! It lists the same [`NAV_ITEMS`] as the inline navigation.

use crate::domain::navigation::{Section, NAV_ITEMS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

const CLOSE_GLYPH: &str = "✕";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Scheme already faded by the overlay's enter transition.
    pub colors: ColorScheme,
    pub active_section: Section,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectSection(Section),
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectSection(Section),
    Close,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::SelectSection(section) => Event::SelectSection(section),
        Message::Close => Event::Close,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new(CLOSE_GLYPH).size(typography::TITLE_MENU))
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(styles::button::bare(ctx.colors));

    let close_row = Row::new()
        .width(Length::Fill)
        .push(Container::new(Text::new("")).width(Length::Fill))
        .push(close);

    let entries = NAV_ITEMS.iter().fold(
        Column::new().spacing(spacing::XXL).align_x(Horizontal::Center),
        |column, item| {
            let active = item.id == ctx.active_section;
            column.push(
                button(Text::new(ctx.i18n.tr(item.label_key)).size(typography::TITLE_MENU))
                    .on_press(Message::SelectSection(item.id))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::nav_item(ctx.colors, active)),
            )
        },
    );

    let centered = Container::new(entries)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Container::new(Column::new().push(close_row).push(centered))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::page(ctx.colors))
        .into()
}
