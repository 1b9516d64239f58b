// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Every style takes the active [`ColorScheme`] so enter transitions can pass
//! a faded copy.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window page background.
pub fn page(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(colors.ink),
        background: Some(Background::Color(colors.surface)),
        ..Default::default()
    }
}

/// Outlined topic card.
pub fn card(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(colors.ink),
        background: Some(Background::Color(colors.surface)),
        border: Border {
            color: colors.ink_muted,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Stand-in for a poster or portrait whose image file is missing.
pub fn placeholder(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(colors.ink_muted),
        background: Some(Background::Color(colors.surface_hover)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.ink
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Round frame around the curator portrait.
pub fn portrait(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.surface_hover)),
        border: Border {
            color: colors.ink,
            width: border::WIDTH_LG,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Frame marking where the gallery viewer lives.
pub fn embed_frame(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(colors.ink),
        background: Some(Background::Color(colors.surface_hover)),
        border: Border {
            color: colors.ink_muted,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Warning banner shown under the header.
pub fn notice(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(colors.ink),
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.warning
        })),
        border: Border {
            color: colors.warning,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
