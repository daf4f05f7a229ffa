//! Address fragment grammar: `#<page>[/<section>]`

use std::fmt;

use serde::{Deserialize, Serialize};

/// Parsed address fragment.
///
/// Parsing is total: any string yields a `Fragment`. Whether the page and
/// section are actually declared is decided by the router and the page
/// controller, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fragment {
    /// Top-level segment (text before the first `/`)
    pub page: String,
    /// Everything after the first `/`, if a `/` was present
    pub section: Option<String>,
}

impl Fragment {
    /// Parse a fragment. The leading `#` is optional.
    pub fn parse(raw: &str) -> Self {
        let body = raw.strip_prefix('#').unwrap_or(raw);
        match body.split_once('/') {
            Some((page, section)) => Self {
                page: page.to_string(),
                section: Some(section.to_string()),
            },
            None => Self {
                page: body.to_string(),
                section: None,
            },
        }
    }

    /// Fragment naming only a page
    pub fn page(page: &str) -> Self {
        Self {
            page: page.to_string(),
            section: None,
        }
    }

    /// Fragment naming a page and a section
    pub fn with_section(page: &str, section: &str) -> Self {
        Self {
            page: page.to_string(),
            section: Some(section.to_string()),
        }
    }

    /// True when the fragment carries no page segment at all
    pub fn is_empty(&self) -> bool {
        self.page.is_empty() && self.section.is_none()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.section {
            Some(section) => write!(f, "#{}/{}", self.page, section),
            None => write!(f, "#{}", self.page),
        }
    }
}

/// How a fragment write is recorded in history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteMode {
    /// New history entry (deliberate user navigation)
    Push,
    /// Overwrite the current entry (self-correcting rewrites)
    Replace,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Push => write!(f, "push"),
            WriteMode::Replace => write!(f, "replace"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_page_and_section() {
        let frag = Fragment::parse("#design/color");
        assert_eq!(frag.page, "design");
        assert_eq!(frag.section.as_deref(), Some("color"));
    }

    #[test]
    fn parse_without_hash() {
        assert_eq!(Fragment::parse("icons/ai"), Fragment::with_section("icons", "ai"));
    }

    #[test]
    fn parse_page_only() {
        let frag = Fragment::parse("#examples");
        assert_eq!(frag, Fragment::page("examples"));
        assert_eq!(frag.to_string(), "#examples");
    }

    #[test]
    fn parse_empty() {
        assert!(Fragment::parse("").is_empty());
        assert!(Fragment::parse("#").is_empty());
    }

    #[test]
    fn trailing_segments_stay_in_section() {
        let frag = Fragment::parse("#components/table/extra");
        assert_eq!(frag.page, "components");
        assert_eq!(frag.section.as_deref(), Some("table/extra"));
    }

    #[test]
    fn empty_section_is_kept_distinct_from_none() {
        let frag = Fragment::parse("#design/");
        assert_eq!(frag.section.as_deref(), Some(""));
        assert_eq!(frag.to_string(), "#design/");
    }
}
