// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`browser`]: Opens URLs with the platform's default handler
//!   (implements [`UrlOpener`])
//!
//! [`UrlOpener`]: crate::application::port::UrlOpener

pub mod browser;

pub use browser::SystemBrowser;
