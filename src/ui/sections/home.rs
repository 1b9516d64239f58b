// SPDX-License-Identifier: MPL-2.0
//! Home block: hero with the poster wall, featured topics, and the
//! curator's about panel.

use super::{Message, ViewContext};
use crate::domain::exhibition::{POSTERS, PROFILE_IMAGE, PROFILE_URL, TOPICS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image::Handle, Column, Container, Image, Row, Text},
    ContentFit, Element, Length,
};
use std::path::{Path, PathBuf};

/// Poster wall columns.
const WALL_COLUMNS: usize = 3;

/// Image handles for the exhibition artwork.
///
/// Files are looked up once at startup. A missing file leaves its slot
/// empty and the view draws a labelled placeholder instead.
#[derive(Debug, Clone, Default)]
pub struct Artwork {
    posters: Vec<Option<Handle>>,
    portrait: Option<Handle>,
}

impl Artwork {
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let posters = POSTERS
            .iter()
            .map(|poster| existing(dir.join(poster.file_name)))
            .collect();
        let portrait = existing(dir.join(PROFILE_IMAGE));

        let artwork = Self { posters, portrait };
        let missing = artwork.missing_count();
        if missing > 0 {
            tracing::warn!(dir = %dir.display(), missing, "some artwork files are missing");
        }
        artwork
    }

    #[must_use]
    pub fn poster(&self, index: usize) -> Option<&Handle> {
        self.posters.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn portrait(&self) -> Option<&Handle> {
        self.portrait.as_ref()
    }

    /// Number of poster and portrait files that could not be found.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        let posters = (0..POSTERS.len())
            .filter(|&index| self.poster(index).is_none())
            .count();
        posters + usize::from(self.portrait.is_none())
    }
}

fn existing(path: PathBuf) -> Option<Handle> {
    if path.is_file() {
        Some(Handle::from_path(path))
    } else {
        tracing::debug!(path = %path.display(), "artwork file not found");
        None
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(if ctx.viewport.layout().is_wide() {
            spacing::XXXL
        } else {
            spacing::XXL
        })
        .push(hero(&ctx))
        .push(topics(&ctx))
        .push(about(&ctx))
        .into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let wide = ctx.viewport.layout().is_wide();
    let align = if wide {
        Horizontal::Left
    } else {
        Horizontal::Center
    };

    let intro = Column::new()
        .spacing(spacing::LG)
        .align_x(align)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr("hero-title"))
                .size(typography::DISPLAY)
                .color(ctx.colors.ink),
        )
        .push(
            Text::new(ctx.i18n.tr("hero-subtitle"))
                .size(typography::BODY_LG)
                .color(ctx.colors.ink),
        )
        .push(
            button(Text::new(ctx.i18n.tr("hero-explore-button")).size(typography::BODY_LG))
                .on_press(Message::ExploreGallery)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::pill(ctx.colors)),
        );

    if !ctx.viewport.is_medium_up() {
        return intro.into();
    }

    let tile_height = if wide {
        sizing::POSTER_TILE_LG
    } else {
        sizing::POSTER_TILE_SM
    };
    let wall = grid(
        poster_tiles(ctx.artwork, ctx.i18n, ctx.colors, ctx.alpha, tile_height),
        WALL_COLUMNS,
        spacing::MD,
    );
    let wall = Container::new(wall).width(Length::Fill).padding(spacing::LG);

    if wide {
        Row::new()
            .spacing(spacing::XXL)
            .align_y(Vertical::Center)
            .push(intro)
            .push(wall)
            .into()
    } else {
        Column::new()
            .spacing(spacing::XL)
            .push(intro)
            .push(wall)
            .into()
    }
}

/// One tile per poster, in catalog order.
pub(crate) fn poster_tiles<'a>(
    artwork: &Artwork,
    i18n: &I18n,
    colors: ColorScheme,
    alpha: f32,
    height: f32,
) -> Vec<Element<'a, Message>> {
    POSTERS
        .iter()
        .enumerate()
        .map(|(index, _)| match artwork.poster(index) {
            Some(handle) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover)
                .opacity(opacity::POSTER_REST * alpha)
                .into(),
            None => {
                let number = (index + 1).to_string();
                let label = i18n.tr_with_args("hero-poster-missing", &[("index", &number)]);
                Container::new(Text::new(label).size(typography::CAPTION))
                    .width(Length::Fill)
                    .height(Length::Fixed(height))
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center)
                    .style(styles::container::placeholder(colors))
                    .into()
            }
        })
        .collect()
}

fn topics<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr("topics-title"))
                .size(typography::TITLE_LG)
                .color(ctx.colors.ink),
        )
        .push(grid(
            topic_cards(ctx.i18n, ctx.colors),
            ctx.viewport.topic_columns(),
            spacing::LG,
        ))
        .into()
}

/// One card per featured topic, in catalog order.
pub(crate) fn topic_cards<'a>(i18n: &I18n, colors: ColorScheme) -> Vec<Element<'a, Message>> {
    TOPICS
        .iter()
        .map(|topic| {
            let body = Column::new()
                .spacing(spacing::SM)
                .push(
                    Text::new(i18n.tr(topic.name_key))
                        .size(typography::TITLE_SM)
                        .color(colors.ink),
                )
                .push(
                    Text::new(i18n.tr(topic.description_key))
                        .size(typography::BODY)
                        .color(colors.ink),
                );
            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card(colors))
                .into()
        })
        .collect()
}

fn about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let wide = ctx.viewport.layout().is_wide();
    let edge = if ctx.viewport.is_medium_up() {
        sizing::PORTRAIT_LG
    } else {
        sizing::PORTRAIT_SM
    };

    let portrait: Element<'a, Message> = match ctx.artwork.portrait() {
        Some(handle) => Image::new(handle.clone())
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge))
            .content_fit(ContentFit::Cover)
            .opacity(ctx.alpha)
            .into(),
        None => Container::new(Text::new(ctx.i18n.tr("about-profile-missing")))
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    };
    let portrait = Container::new(portrait)
        .padding(spacing::XXS)
        .style(styles::container::portrait(ctx.colors));

    let copy = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::PROSE_MAX_WIDTH)
        .align_x(if wide {
            Horizontal::Left
        } else {
            Horizontal::Center
        })
        .push(
            Text::new(ctx.i18n.tr("about-title"))
                .size(typography::TITLE_LG)
                .color(ctx.colors.ink),
        )
        .push(
            Text::new(ctx.i18n.tr("about-body"))
                .size(typography::BODY_LG)
                .color(ctx.colors.ink),
        )
        .push(
            button(Text::new(ctx.i18n.tr("about-profile-button")).size(typography::BODY))
                .on_press(Message::OpenUrl(PROFILE_URL))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::pill(ctx.colors)),
        );

    let content: Element<'a, Message> = if wide {
        Row::new()
            .spacing(spacing::XXL)
            .align_y(Vertical::Center)
            .push(portrait)
            .push(copy)
            .into()
    } else {
        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(portrait)
            .push(copy)
            .into()
    };

    Container::new(content)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

/// Lays `items` out in rows of `columns`.
fn grid<'a>(
    items: Vec<Element<'a, Message>>,
    columns: usize,
    gap: f32,
) -> Column<'a, Message> {
    let columns = columns.max(1);
    let mut items = items.into_iter().peekable();
    let mut rows = Column::new().spacing(gap).width(Length::Fill);
    while items.peek().is_some() {
        let row = items
            .by_ref()
            .take(columns)
            .fold(Row::new().spacing(gap).width(Length::Fill), |row, item| {
                row.push(item)
            });
        rows = rows.push(row);
    }
    rows
}
