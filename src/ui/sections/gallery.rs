// SPDX-License-Identifier: MPL-2.0
//! Gallery block.
//!
//! The hosted viewer cannot be framed inside a native window, so the block
//! reserves a frame with the embed's proportions and offers to open the
//! embed URL in the system browser.

use super::{Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::responsive::GalleryVariant;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Text},
    Element, Length,
};

pub fn view<'a>(variant: GalleryVariant, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let embed = variant.embed();
    let (frame_width, frame_height) = frame_size(embed.width, embed.height, ctx.viewport.width);

    let label = ctx.i18n.tr_with_args(
        "gallery-embed-label",
        &[
            ("width", &embed.width.to_string()),
            ("height", &embed.height.to_string()),
        ],
    );

    let frame_content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(label).size(typography::BODY).color(ctx.colors.ink_muted))
        .push(
            button(Text::new(ctx.i18n.tr("gallery-open-button")).size(typography::BODY_LG))
                .on_press(Message::OpenUrl(embed.url))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::pill(ctx.colors)),
        );

    let frame = Container::new(frame_content)
        .width(Length::Fixed(frame_width))
        .height(Length::Fixed(frame_height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::embed_frame(ctx.colors));

    Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr("gallery-title"))
                .size(typography::TITLE_LG)
                .color(ctx.colors.ink),
        )
        .push(
            Container::new(
                Text::new(ctx.i18n.tr("gallery-description"))
                    .size(typography::BODY_LG)
                    .color(ctx.colors.ink),
            )
            .max_width(sizing::PROSE_MAX_WIDTH),
        )
        .push(frame)
        .into()
}

/// Scales the embed box down to fit `available` width, keeping its aspect
/// ratio. Never scales up.
fn frame_size(width: u32, height: u32, available: f32) -> (f32, f32) {
    let (width, height) = (width as f32, height as f32);
    let usable = (available - 2.0 * spacing::XL).max(1.0);
    if width <= usable {
        (width, height)
    } else {
        let scale = usable / width;
        (usable, height * scale)
    }
}
