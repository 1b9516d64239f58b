// SPDX-License-Identifier: MPL-2.0
//! `poster_gallery` is the landing view of a virtual poster-art exhibition,
//! built with the Iced GUI framework.
//!
//! It shows a hero with the poster wall, the featured topics, the curator's
//! notes, and a panel leading into the hosted virtual gallery. Navigation
//! between the two sections is driven by a small state machine in
//! [`application::navigation`].

#![doc(html_root_url = "https://docs.rs/poster_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
