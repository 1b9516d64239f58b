// SPDX-License-Identifier: MPL-2.0
//! Page footer.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::{alignment::Horizontal, widget::Container, widget::Text, Element, Length};

pub fn view<'a, Message: 'a>(i18n: &I18n, colors: ColorScheme) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr("footer-copyright"))
            .size(typography::CAPTION)
            .color(colors.ink),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center)
    .into()
}
