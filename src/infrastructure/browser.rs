// SPDX-License-Identifier: MPL-2.0
//! Opens external links with the operating system's default URL handler.

use crate::application::port::UrlOpener;
use crate::error::{Error, Result};
use std::process::{Command, Stdio};

/// [`UrlOpener`] backed by the platform opener command
/// (`xdg-open`, `open` or `start`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Command {
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            // The empty string is the window title `start` expects first.
            cmd.args(["/C", "start", "", url]);
            cmd
        }
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        if !is_web_url(url) {
            return Err(Error::Launch(format!("refusing to open non-web URL: {url}")));
        }

        let mut child = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Launch(format!("failed to start URL opener: {e}")))?;

        // Reap the opener in the background.
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        tracing::info!(%url, "opened external link");
        Ok(())
    }
}

/// Only `http`/`https` links are handed to the platform opener.
fn is_web_url(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    (lower.starts_with("https://") || lower.starts_with("http://"))
        && !url.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_links() {
        assert!(is_web_url("https://www.artsteps.com/embed/abc/1280/720"));
        assert!(is_web_url("HTTP://example.org"));
    }

    #[test]
    fn rejects_other_schemes_and_whitespace() {
        assert!(!is_web_url("file:///etc/passwd"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url("https://example.org/a b"));
    }

    #[test]
    fn non_web_url_is_a_launch_error() {
        let err = SystemBrowser.open("ftp://example.org").unwrap_err();
        assert!(matches!(err, Error::Launch(_)));
    }
}
