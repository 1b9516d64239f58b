// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one owns a `Message` type, turns it into an `Event` in `update`, and
//! leaves state changes to the application.
//!
//! # Components
//!
//! - [`navbar`] - Header with brand, inline navigation or hamburger button
//! - [`mobile_menu`] - Full-window navigation overlay for compact windows
//! - [`sections`] - Content blocks for the active section
//! - [`notice`] - Dismissible warning banner
//! - [`footer`] - Copyright line
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Button and container styles
//! - [`theming`] - Light/Dark/System color schemes
//! - [`responsive`] - Width-based layout tiers
//! - [`transition`] - Enter transitions

pub mod design_tokens;
pub mod footer;
pub mod mobile_menu;
pub mod navbar;
pub mod notice;
pub mod responsive;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod transition;
