// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{mobile_menu, navbar, notice, sections};
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    MobileMenu(mobile_menu::Message),
    Sections(sections::Message),
    Notice(notice::Message),
    /// The window was opened or resized to this logical size.
    WindowResized(Size),
    /// Escape was pressed.
    CloseMenu,
    /// Animation frame while an enter transition runs.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional start section id (`home` or `gallery`).
    pub section: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `POSTER_GALLERY_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional directory holding the poster and portrait images.
    /// Takes precedence over `POSTER_GALLERY_ASSETS_DIR`.
    pub assets_dir: Option<String>,
}
