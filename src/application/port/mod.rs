// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`browser`]: Handing external URLs to the user's browser
//!
//! # Design Notes
//!
//! - No Iced types in port signatures
//! - Methods return the crate [`Result`](crate::error::Result)

pub mod browser;

pub use browser::UrlOpener;
