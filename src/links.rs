//! Opening playlist links outside the terminal.

use tracing::debug;

use crate::errors::LinkError;

pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkError>;
}

/// Opens links in the default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        if url.trim().is_empty() {
            return Err(LinkError::Empty);
        }

        debug!(url, "opening link in browser");
        webbrowser::open(url).map_err(|source| LinkError::Open {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_link_is_rejected() {
        assert!(matches!(BrowserOpener.open("  "), Err(LinkError::Empty)));
    }
}
