//! Page controller: one generic section state machine per page.
//!
//! ```text
//!            select(S), S declared          fragment #page/S, S declared
//!   ┌──────────────────────────────┐     ┌──────────────────────────────┐
//!   │  adopt S, write push         │     │  adopt S, no write           │
//!   ▼                              │     ▼                              │
//! [active section] ────────────────┴─────┴──────────────────────────────┘
//!   ▲
//!   │ anything else on this page: reset to first section, write replace
//! ```

use serde::{Deserialize, Serialize};

use super::fragment::{Fragment, WriteMode};
use super::page::Page;
use super::port::NavigationPort;
use crate::catalog::Section;
use crate::error::{ShowcaseError, ShowcaseResult};

/// Outcome of feeding a fragment or a click into a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Fragment already named the active section
    Unchanged,
    /// A declared section was adopted
    Adopted,
    /// Fragment was invalid for this page; reset to the default section
    FellBack,
    /// Fragment belongs to another page; this controller ignored it
    Ignored,
}

/// Active-section state for a single page.
///
/// Parametrized by the page's static section list. The first section is both
/// the initial state and the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionController {
    page: Page,
    sections: &'static [Section],
    active: usize,
}

impl SectionController {
    /// Controller in its initial state (first declared section)
    pub fn new(page: Page) -> Self {
        Self::with_sections(page, page.sections())
    }

    /// Controller over an explicit section list
    pub fn with_sections(page: Page, sections: &'static [Section]) -> Self {
        debug_assert!(!sections.is_empty(), "page {} declares no sections", page);
        Self {
            page,
            sections,
            active: 0,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    /// The active section
    pub fn active(&self) -> &'static Section {
        &self.sections[self.active]
    }

    /// Id of the active section
    pub fn active_id(&self) -> &'static str {
        self.active().id
    }

    /// Canonical fragment for the active section
    pub fn fragment(&self) -> String {
        format!("#{}/{}", self.page.segment(), self.active_id())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    /// User picked a section from the sidebar: adopt it and push the fragment.
    pub fn select<P: NavigationPort + ?Sized>(
        &mut self,
        id: &str,
        port: &P,
    ) -> ShowcaseResult<Transition> {
        let index = self.position(id).ok_or_else(|| ShowcaseError::UnknownSection {
            page: self.page.segment().to_string(),
            section: id.to_string(),
        })?;

        let transition = if index == self.active {
            Transition::Unchanged
        } else {
            Transition::Adopted
        };
        self.active = index;
        port.write(&self.fragment(), WriteMode::Push);
        tracing::debug!(page = %self.page, section = id, "section selected");
        Ok(transition)
    }

    /// Mirror an externally changed fragment into local state.
    ///
    /// Fragments for other pages are ignored. On this page an undeclared or
    /// missing section resets to the default and rewrites the fragment with
    /// a replace so the address never disagrees with what is shown.
    pub fn sync<P: NavigationPort + ?Sized>(&mut self, raw: &str, port: &P) -> Transition {
        let fragment = Fragment::parse(raw);
        if fragment.page != self.page.segment() {
            return Transition::Ignored;
        }

        if let Some(index) = fragment.section.as_deref().and_then(|id| self.position(id)) {
            let transition = if index == self.active {
                Transition::Unchanged
            } else {
                Transition::Adopted
            };
            self.active = index;
            return transition;
        }

        tracing::warn!(
            page = %self.page,
            fragment = raw,
            fallback = self.sections[0].id,
            "unknown section in fragment, falling back"
        );
        self.active = 0;
        port.write(&self.fragment(), WriteMode::Replace);
        Transition::FellBack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::port::MemoryPort;

    #[test]
    fn starts_at_first_section() {
        let controller = SectionController::new(Page::Design);
        assert_eq!(controller.active_id(), "color");
        assert_eq!(controller.fragment(), "#design/color");
    }

    #[test]
    fn select_pushes_fragment() {
        let port = MemoryPort::new("#icons/status");
        let mut controller = SectionController::new(Page::Icons);
        controller.sync(&port.read(), &port);

        let transition = controller.select("common", &port).unwrap();
        assert_eq!(transition, Transition::Adopted);
        assert_eq!(controller.active_id(), "common");
        assert_eq!(port.read(), "#icons/common");
        assert_eq!(port.entries().len(), 2);
    }

    #[test]
    fn select_unknown_section_is_rejected() {
        let port = MemoryPort::new("#design/color");
        let mut controller = SectionController::new(Page::Design);
        let err = controller.select("spacing", &port).unwrap_err();
        assert!(matches!(err, ShowcaseError::UnknownSection { .. }));
        assert_eq!(controller.active_id(), "color");
        assert_eq!(port.read(), "#design/color");
    }

    #[test]
    fn sync_adopts_declared_section_without_writing() {
        let port = MemoryPort::new("#examples/exam");
        let mut controller = SectionController::new(Page::Examples);
        assert_eq!(controller.sync(&port.read(), &port), Transition::Adopted);
        assert_eq!(controller.active_id(), "exam");
        assert_eq!(port.entries(), vec!["#examples/exam"]);
    }

    #[test]
    fn sync_falls_back_with_replace() {
        let port = MemoryPort::new("#components/nonexistent-id");
        let mut controller = SectionController::new(Page::Components);
        assert_eq!(controller.sync(&port.read(), &port), Transition::FellBack);
        assert_eq!(controller.active_id(), "button");
        assert_eq!(port.entries(), vec!["#components/button"]);
    }

    #[test]
    fn sync_completes_bare_page_fragment() {
        let port = MemoryPort::new("#design");
        let mut controller = SectionController::new(Page::Design);
        assert_eq!(controller.sync(&port.read(), &port), Transition::FellBack);
        assert_eq!(port.read(), "#design/color");
    }

    #[test]
    fn sync_ignores_other_pages() {
        let port = MemoryPort::new("#icons/ai");
        let mut controller = SectionController::new(Page::Design);
        assert_eq!(controller.sync(&port.read(), &port), Transition::Ignored);
        assert_eq!(port.read(), "#icons/ai");
    }

    #[test]
    fn section_ids_are_case_sensitive() {
        let port = MemoryPort::new("#examples/learningassistant");
        let mut controller = SectionController::new(Page::Examples);
        assert_eq!(controller.sync(&port.read(), &port), Transition::FellBack);
        assert_eq!(port.read(), "#examples/login");
    }
}
