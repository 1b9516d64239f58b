// SPDX-License-Identifier: MPL-2.0
//! Port for opening external links outside the application window.

use crate::error::Result;

/// Opens a URL in a new browsing context.
///
/// Opening is fire-and-forget: implementations return as soon as the request
/// is handed off and never report what the browser does with it.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}
