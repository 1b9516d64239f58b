// SPDX-License-Identifier: MPL-2.0
//! Top-level sections of the landing view.

use std::fmt;
use std::str::FromStr;

/// Id accepted for [`Section::Gallery`] besides `"gallery"`. Links shared
/// from the first web edition of the exhibition used this spelling.
const LEGACY_GALLERY_ID: &str = "gallary";

/// The closed set of destinations the landing view can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Hero, featured topics and the about block.
    #[default]
    Home,
    /// The virtual gallery viewer.
    Gallery,
}

impl Section {
    /// Every section, in navigation order.
    pub const ALL: [Section; 2] = [Section::Home, Section::Gallery];

    /// Stable identifier used on the command line and in logs.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Gallery => "gallery",
        }
    }

    /// Parses a section id. Returns `None` for anything outside the set.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Section::Home),
            "gallery" | LEGACY_GALLERY_ID => Some(Section::Gallery),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = InvalidSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::from_id(s).ok_or_else(|| InvalidSection(s.to_string()))
    }
}

/// A section id that is not part of [`Section::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSection(pub String);

impl fmt::Display for InvalidSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for InvalidSection {}

/// A navigation destination as offered by the desktop nav and the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: Section,
    /// Fluent key of the label.
    pub label_key: &'static str,
}

/// Navigation entries shared by both navigation surfaces.
pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        id: Section::Home,
        label_key: "nav-home",
    },
    NavItem {
        id: Section::Gallery,
        label_key: "nav-gallery",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_for_every_section() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
    }

    #[test]
    fn legacy_gallery_id_is_accepted() {
        assert_eq!(Section::from_id("gallary"), Some(Section::Gallery));
    }

    #[test]
    fn parsing_ignores_case_and_surrounding_whitespace() {
        assert_eq!(Section::from_id("  Gallery "), Some(Section::Gallery));
        assert_eq!(Section::from_id("HOME"), Some(Section::Home));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert_eq!(Section::from_id("topics"), None);
        assert_eq!(Section::from_id(""), None);
        let err = "about".parse::<Section>().unwrap_err();
        assert_eq!(err, InvalidSection("about".to_string()));
        assert_eq!(err.to_string(), "unknown section 'about'");
    }

    #[test]
    fn nav_items_cover_every_section_in_order() {
        let ids: Vec<Section> = NAV_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids, Section::ALL.to_vec());
    }

    #[test]
    fn default_section_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }
}
