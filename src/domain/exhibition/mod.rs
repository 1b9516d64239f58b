// SPDX-License-Identifier: MPL-2.0
//! Static exhibition catalog: featured topics, poster references and the
//! external resources the landing view links to.
//!
//! Everything here is read-only reference data. Display strings are Fluent
//! keys resolved by the UI layer.

/// A featured exhibition topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub name_key: &'static str,
    pub description_key: &'static str,
}

/// A poster image shown on the hero wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poster {
    /// File name relative to the configured assets directory.
    pub file_name: &'static str,
}

/// The five featured topics, in display order.
pub const TOPICS: [Topic; 5] = [
    Topic {
        id: "nature-sustainability",
        name_key: "topic-nature-name",
        description_key: "topic-nature-description",
    },
    Topic {
        id: "connection",
        name_key: "topic-connection-name",
        description_key: "topic-connection-description",
    },
    Topic {
        id: "balance",
        name_key: "topic-balance-name",
        description_key: "topic-balance-description",
    },
    Topic {
        id: "awakening",
        name_key: "topic-awakening-name",
        description_key: "topic-awakening-description",
    },
    Topic {
        id: "dream-imagination",
        name_key: "topic-dream-name",
        description_key: "topic-dream-description",
    },
];

/// Posters on the hero wall, in display order.
pub const POSTERS: [Poster; 6] = [
    Poster {
        file_name: "poster1.jpg",
    },
    Poster {
        file_name: "poster2.jpg",
    },
    Poster {
        file_name: "poster3.jpg",
    },
    Poster {
        file_name: "poster4.jpg",
    },
    Poster {
        file_name: "poster5.jpg",
    },
    Poster {
        file_name: "poster6.png",
    },
];

/// Curator portrait shown in the about block.
pub const PROFILE_IMAGE: &str = "66.jpg";

/// Curator's profile page, opened by the about block's link button.
pub const PROFILE_URL: &str = "https://www.instagram.com/saurabh_zore.arts/?igsh=NTh1YnppOGxnMGNr";

/// A framed view of the third-party gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryEmbed {
    pub url: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Embed used on wide windows.
pub const GALLERY_EMBED_WIDE: GalleryEmbed = GalleryEmbed {
    url: "https://www.artsteps.com/embed/6759d4c63584a28c3d785c19/1280/720",
    width: 1280,
    height: 720,
};

/// Embed used on narrow windows.
pub const GALLERY_EMBED_COMPACT: GalleryEmbed = GalleryEmbed {
    url: "https://www.artsteps.com/embed/6759d4c63584a28c3d785c19/560/315",
    width: 350,
    height: 750,
};
