// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and the static exhibition catalog.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`navigation`]: Navigation types ([`Section`](navigation::Section),
//!   [`NavItem`](navigation::NavItem), [`ViewState`](navigation::ViewState))
//! - [`exhibition`]: Read-only catalog ([`Topic`](exhibition::Topic),
//!   [`Poster`](exhibition::Poster), gallery embeds and external links)

pub mod exhibition;
pub mod navigation;
