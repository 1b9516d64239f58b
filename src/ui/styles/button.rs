// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Filled pill for calls to action ("Explore Gallery", profile link).
pub fn pill(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => colors.ink_muted,
            _ => colors.accent,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.on_accent,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Text-only navigation entry. The active entry uses full ink, the others
/// the muted ink until hovered.
pub fn nav_item(
    colors: ColorScheme,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active || matches!(status, button::Status::Hovered) {
            colors.ink
        } else {
            colors.ink_muted
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                color: colors.ink,
                width: if active { border::WIDTH_MD } else { 0.0 },
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Borderless icon-like button (hamburger, close, dismiss).
pub fn bare(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(colors.surface_hover))
            }
            _ => None,
        },
        text_color: colors.ink,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
