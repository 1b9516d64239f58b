// SPDX-License-Identifier: MPL-2.0
//! Dismissible warning banner.
//!
//! Shows at most one message at a time, identified by its Fluent key: the
//! config load warning at startup, or a failed attempt to open a link.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    key: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss,
}

impl Notice {
    /// Replaces the current message.
    pub fn show(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss => self.key = None,
        }
    }

    /// Renders the banner, or nothing when no message is pending.
    pub fn view<'a>(&self, i18n: &I18n, colors: ColorScheme) -> Option<Element<'a, Message>> {
        let key = self.key.as_deref()?;
        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(
                Container::new(Text::new(i18n.tr(key)).size(typography::BODY))
                    .width(Length::Fill),
            )
            .push(
                button(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
                    .on_press(Message::Dismiss)
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::bare(colors)),
            );

        Some(
            Container::new(row)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::MD])
                .style(styles::container::notice(colors))
                .into(),
        )
    }
}
