// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors of the exhibition identity
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii

## Examples

```
use poster_gallery::ui::design_tokens::{palette, spacing};

let page = palette::SKY_100;
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Page background `#bff1ff`.
    pub const SKY_100: Color = Color::from_rgb(0.749, 0.945, 1.0);
    /// Hover tint of the page background.
    pub const SKY_200: Color = Color::from_rgb(0.647, 0.898, 0.965);

    /// Secondary ink `#00537A` (inactive nav items, card borders).
    pub const OCEAN_600: Color = Color::from_rgb(0.0, 0.325, 0.478);
    /// Primary ink `#013C58` (headings, body, filled buttons).
    pub const OCEAN_800: Color = Color::from_rgb(0.004, 0.235, 0.345);
    /// Page background for the dark scheme.
    pub const OCEAN_950: Color = Color::from_rgb(0.0, 0.122, 0.184);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Resting poster tiles (`opacity-85`).
    pub const POSTER_REST: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Poster tile height on the hero wall (wide / compact).
    pub const POSTER_TILE_LG: f32 = 128.0;
    pub const POSTER_TILE_SM: f32 = 80.0;

    /// Profile portrait edge (wide / compact).
    pub const PORTRAIT_LG: f32 = 256.0;
    pub const PORTRAIT_SM: f32 = 192.0;

    /// Widest readable column for long copy.
    pub const PROSE_MAX_WIDTH: f32 = 672.0;

    /// Upward offset content starts from when it fades in.
    pub const ENTER_SLIDE: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes mirroring the landing page type ramp.

    /// Hero heading
    pub const DISPLAY: f32 = 44.0;

    /// Section headings (topics, about)
    pub const TITLE_LG: f32 = 34.0;

    /// Mobile menu entries
    pub const TITLE_MENU: f32 = 30.0;

    /// Brand mark in the header
    pub const TITLE_MD: f32 = 22.0;

    /// Topic card names
    pub const TITLE_SM: f32 = 19.0;

    /// Lead paragraphs
    pub const BODY_LG: f32 = 19.0;

    /// Standard body
    pub const BODY: f32 = 16.0;

    /// Footer
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XXXL > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::POSTER_REST > 0.0 && opacity::POSTER_REST < 1.0);

    assert!(sizing::POSTER_TILE_LG > sizing::POSTER_TILE_SM);
    assert!(sizing::PORTRAIT_LG > sizing::PORTRAIT_SM);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(border::WIDTH_LG > border::WIDTH_MD);
};
