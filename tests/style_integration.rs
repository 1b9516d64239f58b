// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use poster_gallery::ui::design_tokens::{palette, sizing, spacing, typography};
    use poster_gallery::ui::styles::{button, container};
    use poster_gallery::ui::theming::{AppTheme, ColorScheme, ThemeMode};

    #[test]
    fn all_styles_are_callable() {
        let theme = Theme::Light;
        for colors in [ColorScheme::light(), ColorScheme::dark()] {
            let _ = button::pill(colors)(&theme, Status::Active);
            let _ = button::nav_item(colors, true)(&theme, Status::Hovered);
            let _ = button::bare(colors)(&theme, Status::Pressed);
            let _ = container::page(colors)(&theme);
            let _ = container::card(colors)(&theme);
            let _ = container::placeholder(colors)(&theme);
            let _ = container::portrait(colors)(&theme);
            let _ = container::embed_frame(colors)(&theme);
            let _ = container::notice(colors)(&theme);
        }
    }

    #[test]
    fn exhibition_palette_is_the_light_scheme() {
        let light = AppTheme::new(ThemeMode::Light);
        assert_eq!(light.colors.surface, palette::SKY_100);
        assert_eq!(light.colors.ink, palette::OCEAN_800);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        assert!(light.colors.surface.r > dark.colors.surface.r);
        assert!(light.colors.ink.r < dark.colors.ink.r);
    }

    #[test]
    fn design_tokens_are_coherent() {
        assert!(spacing::XXL > spacing::LG);
        assert!(sizing::PORTRAIT_LG > sizing::POSTER_TILE_LG);
        assert!(typography::DISPLAY > typography::BODY);
    }
}
