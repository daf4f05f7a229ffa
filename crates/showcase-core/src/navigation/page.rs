//! Top-level pages of the showcase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, Section};
use crate::error::ShowcaseError;

/// One of the showcase's top-level views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    /// Design tokens: color, typography, border
    #[default]
    Design,
    /// Component gallery
    Components,
    /// Icon gallery
    Icons,
    /// Illustrative example screens
    Examples,
    /// Mobile variants of the gallery components
    MobileComponents,
}

impl Page {
    /// Every page, in declaration order
    pub const ALL: [Page; 5] = [
        Page::Design,
        Page::Components,
        Page::Icons,
        Page::Examples,
        Page::MobileComponents,
    ];

    /// Fragment segment identifying this page
    pub fn segment(&self) -> &'static str {
        match self {
            Page::Design => "design",
            Page::Components => "components",
            Page::Icons => "icons",
            Page::Examples => "examples",
            Page::MobileComponents => "mobile-components",
        }
    }

    /// Exact match of a fragment segment against the declared pages
    pub fn from_segment(segment: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.segment() == segment)
    }

    /// Display label used by the top navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Page::Design => "设计规范",
            Page::Components => "UI组件",
            Page::Icons => "图标",
            Page::Examples => "示例",
            Page::MobileComponents => "移动端组件",
        }
    }

    /// Declared sections of this page; the first one is the default
    pub fn sections(&self) -> &'static [Section] {
        catalog::sections_for(*self)
    }

    /// Fragment of the page itself, e.g. `#design`
    pub fn href(&self) -> String {
        format!("#{}", self.segment())
    }

    /// Canonical fragment: the page with its default section
    pub fn canonical_fragment(&self) -> String {
        match self.sections().first() {
            Some(section) => format!("#{}/{}", self.segment(), section.id),
            None => self.href(),
        }
    }
}

/// Exact, case-sensitive match on the fragment segment
impl FromStr for Page {
    type Err = ShowcaseError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        Page::from_segment(segment).ok_or_else(|| ShowcaseError::UnknownPage(segment.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_segment(page.segment()), Some(page));
        }
    }

    #[test]
    fn unknown_segment() {
        assert_eq!(Page::from_segment("settings"), None);
        assert_eq!(Page::from_segment(""), None);
        assert_eq!(Page::from_segment("Design"), None);
    }

    #[test]
    fn parse_reports_unknown_segment() {
        assert_eq!("icons".parse::<Page>(), Ok(Page::Icons));
        assert_eq!(
            "settings".parse::<Page>(),
            Err(ShowcaseError::UnknownPage("settings".to_string()))
        );
    }

    #[test]
    fn default_is_design() {
        assert_eq!(Page::default(), Page::Design);
        assert_eq!(Page::Design.canonical_fragment(), "#design/color");
    }

    #[test]
    fn every_page_declares_sections() {
        for page in Page::ALL {
            assert!(!page.sections().is_empty(), "{} has no sections", page);
        }
    }
}
