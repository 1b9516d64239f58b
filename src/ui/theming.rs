// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling for the exhibition color scheme.

use crate::ui::design_tokens::{palette, opacity};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Page and card background.
    pub surface: Color,
    /// Hovered card / button background.
    pub surface_hover: Color,

    /// Headings, body copy, active nav items.
    pub ink: Color,
    /// Inactive nav items and card borders.
    pub ink_muted: Color,

    /// Filled button background.
    pub accent: Color,
    /// Filled button label.
    pub on_accent: Color,

    pub warning: Color,
}

impl ColorScheme {
    /// Sky background with ocean ink, the exhibition's own look.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::SKY_100,
            surface_hover: palette::SKY_200,
            ink: palette::OCEAN_800,
            ink_muted: palette::OCEAN_600,
            accent: palette::OCEAN_800,
            on_accent: palette::SKY_100,
            warning: palette::WARNING_500,
        }
    }

    /// Inverted scheme: deep ocean background with sky ink.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::OCEAN_950,
            surface_hover: palette::OCEAN_800,
            ink: palette::SKY_100,
            ink_muted: palette::SKY_200,
            accent: palette::SKY_100,
            on_accent: palette::OCEAN_800,
            warning: palette::WARNING_500,
        }
    }

    /// Returns a copy whose foreground colors are scaled by `alpha`.
    ///
    /// Used by enter transitions; surfaces stay opaque so the page never
    /// flashes through.
    #[must_use]
    pub fn faded(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE);
        let fade = |c: Color| Color { a: c.a * alpha, ..c };
        Self {
            ink: fade(self.ink),
            ink_muted: fade(self.ink_muted),
            accent: fade(self.accent),
            on_accent: fade(self.on_accent),
            ..self
        }
    }
}

/// Global theme configuration.
#[derive(Debug, Clone, Copy)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // The exhibition identity is light, so detection errors keep it.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = if mode.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode }
    }

    /// Base Iced theme matching the scheme (scrollbars, focus rings).
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.colors == ColorScheme::dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
