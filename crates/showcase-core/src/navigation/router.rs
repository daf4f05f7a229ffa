//! Top-level router: fragment page segment → [`Page`].

use super::fragment::{Fragment, WriteMode};
use super::page::Page;
use super::port::NavigationPort;
use crate::error::ShowcaseResult;

/// Result of resolving a fragment at the top level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Selected page
    pub page: Page,
    /// True when the fragment did not name a declared page and was rewritten
    pub rewritten: bool,
}

/// Owns only the page selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    default_page: Page,
    current: Page,
}

impl Router {
    pub fn new() -> Self {
        Self::with_default(Page::default())
    }

    /// Router falling back to `default_page` for unknown or empty fragments
    pub fn with_default(default_page: Page) -> Self {
        Self {
            default_page,
            current: default_page,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn default_page(&self) -> Page {
        self.default_page
    }

    /// Pure mapping, no side effects
    pub fn page_for(&self, raw: &str) -> ShowcaseResult<Page> {
        Fragment::parse(raw).page.parse()
    }

    /// Read the port, select a page, and rewrite the fragment (replace) when
    /// it does not name a declared page.
    pub fn resolve<P: NavigationPort + ?Sized>(&mut self, port: &P) -> Resolution {
        let raw = port.read();
        match self.page_for(&raw) {
            Ok(page) => {
                self.current = page;
                Resolution {
                    page,
                    rewritten: false,
                }
            }
            Err(err) => {
                if !raw.is_empty() {
                    tracing::warn!(fragment = %raw, default = %self.default_page, "{}, using default", err);
                }
                self.current = self.default_page;
                port.write(&self.default_page.href(), WriteMode::Replace);
                Resolution {
                    page: self.default_page,
                    rewritten: true,
                }
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowcaseError;
    use crate::navigation::port::MemoryPort;

    #[test]
    fn empty_fragment_resolves_to_default_with_replace() {
        let port = MemoryPort::new("");
        let mut router = Router::new();
        let resolution = router.resolve(&port);
        assert_eq!(resolution.page, Page::Design);
        assert!(resolution.rewritten);
        assert_eq!(port.entries(), vec!["#design"]);
    }

    #[test]
    fn known_page_keeps_fragment() {
        let port = MemoryPort::new("#icons/status");
        let mut router = Router::new();
        let resolution = router.resolve(&port);
        assert_eq!(resolution.page, Page::Icons);
        assert!(!resolution.rewritten);
        assert_eq!(port.read(), "#icons/status");
    }

    #[test]
    fn match_is_exact_on_the_first_segment() {
        let router = Router::new();
        assert_eq!(router.page_for("#mobile-components/tag"), Ok(Page::MobileComponents));
        assert!(router.page_for("#designs").is_err());
        assert!(router.page_for("#design-color").is_err());
        assert_eq!(router.page_for("icons"), Ok(Page::Icons));
        assert_eq!(
            router.page_for("#Design/color"),
            Err(ShowcaseError::UnknownPage("Design".to_string()))
        );
    }

    #[test]
    fn custom_default_page() {
        let port = MemoryPort::new("#nowhere");
        let mut router = Router::with_default(Page::Examples);
        assert_eq!(router.resolve(&port).page, Page::Examples);
        assert_eq!(port.read(), "#examples");
    }
}
