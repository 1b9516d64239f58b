// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Layout**: Window-width breakpoints for responsive switching
//! - **Animation**: Enter transition timing

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Window width (logical px) from which the inline desktop navigation is
/// shown instead of the hamburger menu.
pub const DEFAULT_LARGE_BREAKPOINT: f32 = 1024.0;

/// Window width (logical px) from which the wide gallery embed and the
/// poster wall are shown.
pub const DEFAULT_MEDIUM_BREAKPOINT: f32 = 768.0;

/// Smallest accepted breakpoint.
pub const MIN_BREAKPOINT: f32 = 320.0;

/// Largest accepted breakpoint.
pub const MAX_BREAKPOINT: f32 = 3840.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of section and menu enter transitions.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 600;

/// Longest accepted transition duration.
pub const MAX_ANIMATION_DURATION_MS: u64 = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MEDIUM_BREAKPOINT < DEFAULT_LARGE_BREAKPOINT);
    assert!(MIN_BREAKPOINT <= DEFAULT_MEDIUM_BREAKPOINT);
    assert!(DEFAULT_LARGE_BREAKPOINT <= MAX_BREAKPOINT);
    assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
};
