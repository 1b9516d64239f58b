// SPDX-License-Identifier: MPL-2.0
//! Window-width driven layout tiers.
//!
//! Width only decides how things are drawn. It never changes which section
//! is active.

use crate::app::config::{self, DisplayConfig};
use crate::domain::exhibition::{GalleryEmbed, GALLERY_EMBED_COMPACT, GALLERY_EMBED_WIDE};

/// Width thresholds in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    /// Start of the medium tier (`md`).
    pub medium: f32,
    /// Start of the large tier (`lg`).
    pub large: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: config::DEFAULT_MEDIUM_BREAKPOINT,
            large: config::DEFAULT_LARGE_BREAKPOINT,
        }
    }
}

impl Breakpoints {
    /// Reads breakpoints from config. A medium breakpoint above the large one
    /// is lowered to it.
    #[must_use]
    pub fn from_config(display: &DisplayConfig) -> Self {
        let large = config::clamp_breakpoint(
            display.large_breakpoint,
            config::DEFAULT_LARGE_BREAKPOINT,
        );
        let medium = config::clamp_breakpoint(
            display.medium_breakpoint,
            config::DEFAULT_MEDIUM_BREAKPOINT,
        )
        .min(large);
        Self { medium, large }
    }
}

/// Navigation chrome tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Hamburger button and full-window overlay menu.
    Compact,
    /// Inline navigation in the header.
    Wide,
}

impl Layout {
    #[must_use]
    pub fn from_width(width: f32, breakpoints: &Breakpoints) -> Self {
        if width >= breakpoints.large {
            Layout::Wide
        } else {
            Layout::Compact
        }
    }

    #[must_use]
    pub fn is_wide(self) -> bool {
        self == Layout::Wide
    }
}

/// Which framed gallery view to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryVariant {
    Compact,
    Wide,
}

impl GalleryVariant {
    #[must_use]
    pub fn from_width(width: f32, breakpoints: &Breakpoints) -> Self {
        if width >= breakpoints.medium {
            GalleryVariant::Wide
        } else {
            GalleryVariant::Compact
        }
    }

    #[must_use]
    pub fn embed(self) -> GalleryEmbed {
        match self {
            GalleryVariant::Wide => GALLERY_EMBED_WIDE,
            GalleryVariant::Compact => GALLERY_EMBED_COMPACT,
        }
    }
}

/// Current window width together with the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub breakpoints: Breakpoints,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, breakpoints: Breakpoints) -> Self {
        Self { width, breakpoints }
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::from_width(self.width, &self.breakpoints)
    }

    #[must_use]
    pub fn gallery_variant(&self) -> GalleryVariant {
        GalleryVariant::from_width(self.width, &self.breakpoints)
    }

    /// Whether the medium tier or above applies.
    #[must_use]
    pub fn is_medium_up(&self) -> bool {
        self.width >= self.breakpoints.medium
    }

    /// Topic cards per row: 1 / 3 / 5 across the tiers.
    #[must_use]
    pub fn topic_columns(&self) -> usize {
        if self.width >= self.breakpoints.large {
            5
        } else if self.width >= self.breakpoints.medium {
            3
        } else {
            1
        }
    }
}
