// SPDX-License-Identifier: MPL-2.0
//! Navigation domain types.
//!
//! - [`Section`]: the closed set of top-level destinations
//! - [`NavItem`] / [`NAV_ITEMS`]: the ordered navigation entries
//! - [`ViewState`]: active section and mobile menu flag

mod section;
mod view_state;

pub use section::{InvalidSection, NavItem, Section, NAV_ITEMS};
pub use view_state::ViewState;
