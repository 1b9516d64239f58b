// SPDX-License-Identifier: MPL-2.0
//! Content area below the header.
//!
//! [`select`] maps the active [`Section`] to exactly one [`ContentBlock`];
//! [`view`] renders it. Neither reads or writes navigation state beyond the
//! section they are given. Buttons inside the blocks surface as [`Event`]s
//! that the application routes back through the navigation controller or
//! the URL opener.

pub mod gallery;
pub mod home;

pub use home::Artwork;

use crate::domain::navigation::Section;
use crate::i18n::fluent::I18n;
use crate::ui::responsive::{GalleryVariant, Viewport};
use crate::ui::theming::ColorScheme;
use iced::Element;

/// Parts of the home block, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomePart {
    Hero,
    Topics,
    About,
}

impl HomePart {
    pub const ALL: [HomePart; 3] = [HomePart::Hero, HomePart::Topics, HomePart::About];
}

/// The single block rendered for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBlock {
    Home,
    Gallery(GalleryVariant),
}

impl ContentBlock {
    /// Parts composing this block, in render order.
    #[must_use]
    pub fn parts(self) -> &'static [HomePart] {
        match self {
            ContentBlock::Home => &HomePart::ALL,
            ContentBlock::Gallery(_) => &[],
        }
    }
}

/// Picks the content block for `section`. The gallery variant depends on
/// the window width only.
#[must_use]
pub fn select(section: Section, viewport: &Viewport) -> ContentBlock {
    match section {
        Section::Home => ContentBlock::Home,
        Section::Gallery => ContentBlock::Gallery(viewport.gallery_variant()),
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ExploreGallery,
    OpenUrl(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Hero call-to-action.
    ExploreGallery,
    /// Hand an outbound link to the system browser.
    OpenUrl(&'static str),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::ExploreGallery => Event::ExploreGallery,
        Message::OpenUrl(url) => Event::OpenUrl(url),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    /// Enter-transition progress in `[0, 1]`, applied to images.
    pub alpha: f32,
    pub viewport: &'a Viewport,
    pub artwork: &'a Artwork,
}

pub fn view<'a>(block: ContentBlock, ctx: ViewContext<'a>) -> Element<'a, Message> {
    match block {
        ContentBlock::Home => home::view(ctx),
        ContentBlock::Gallery(variant) => gallery::view(variant, ctx),
    }
}
