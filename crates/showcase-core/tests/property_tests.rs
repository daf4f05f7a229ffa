//! Property-based tests for fragment navigation
//!
//! Uses proptest to verify that whatever the address holds, the displayed
//! view and the fragment always agree.

use proptest::prelude::*;
use showcase_core::navigation::Fragment;
use showcase_core::{MemoryPort, NavigationPort, Navigator, Page};

// ============================================================================
// Strategy Generators
// ============================================================================

fn page_strategy() -> impl Strategy<Value = Page> {
    prop::sample::select(Page::ALL.to_vec())
}

/// A declared (page, section) pair
fn declared_strategy() -> impl Strategy<Value = (Page, &'static str)> {
    page_strategy().prop_flat_map(|page| {
        let ids: Vec<&'static str> = page.sections().iter().map(|s| s.id).collect();
        prop::sample::select(ids).prop_map(move |id| (page, id))
    })
}

/// Arbitrary fragments, including ones that happen to be valid
fn raw_fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("#?[a-zA-Z/-]{0,24}").expect("valid regex"),
        declared_strategy().prop_map(|(page, id)| format!("#{}/{}", page.segment(), id)),
        page_strategy().prop_map(|page| format!("#{}/", page.segment())),
    ]
}

fn is_declared(raw: &str) -> bool {
    let fragment = Fragment::parse(raw);
    match Page::from_segment(&fragment.page) {
        Some(page) => fragment
            .section
            .as_deref()
            .map(|id| page.sections().iter().any(|s| s.id == id))
            .unwrap_or(false),
        None => false,
    }
}

fn navigate(raw: &str) -> (MemoryPort, Navigator<MemoryPort>) {
    let port = MemoryPort::new(raw);
    let navigator = Navigator::started(port.clone());
    (port, navigator)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Fragments whose first segment is not a page land on `#design/color`
    #[test]
    fn unknown_pages_land_on_default(raw in prop::string::string_regex("#?[a-z]{0,12}(/[a-z]{0,8})?").expect("valid regex")) {
        let segment = Fragment::parse(&raw).page;
        prop_assume!(Page::from_segment(&segment).is_none());

        let (port, navigator) = navigate(&raw);
        prop_assert_eq!(navigator.view().page, Page::Design);
        prop_assert_eq!(port.read(), "#design/color");
    }

    /// Every declared `#P/S` shows P/S and leaves the fragment untouched
    #[test]
    fn declared_fragments_are_stable((page, id) in declared_strategy()) {
        let raw = format!("#{}/{}", page.segment(), id);
        let (port, navigator) = navigate(&raw);

        let view = navigator.view();
        prop_assert_eq!(view.page, page);
        prop_assert_eq!(view.section.as_str(), id);
        prop_assert_eq!(port.read(), raw);
        prop_assert_eq!(port.entries().len(), 1);
    }

    /// Reading the fragment after any navigation reproduces the view
    #[test]
    fn fragment_always_matches_view(raw in raw_fragment_strategy()) {
        let (port, navigator) = navigate(&raw);
        prop_assert_eq!(port.read(), navigator.view().fragment());
        prop_assert!(is_declared(&port.read()));
        // Self-correction never adds history.
        prop_assert_eq!(port.entries().len(), 1);
    }

    /// Applying the same external navigation twice changes nothing the second time
    #[test]
    fn external_navigation_is_idempotent(start in raw_fragment_strategy(), target in raw_fragment_strategy()) {
        let (port, mut navigator) = navigate(&start);
        let mut events = navigator.subscribe();

        port.navigate(&target);
        navigator.pump(&mut events);
        let first_view = navigator.view();
        let first_entries = port.entries();

        port.navigate(&target);
        navigator.pump(&mut events);
        prop_assert_eq!(navigator.view(), first_view);
        if is_declared(&target) {
            // The push already matches the current value.
            prop_assert_eq!(port.entries(), first_entries);
        }
    }

    /// The sidebar path and a manual address edit reach the same state
    #[test]
    fn sidebar_matches_manual_navigation((page, id) in declared_strategy()) {
        let (click_port, mut clicked) = navigate(&page.canonical_fragment());
        clicked.select_section(id).unwrap();

        let (typed_port, mut typed) = navigate(&page.canonical_fragment());
        let mut events = typed.subscribe();
        typed_port.navigate(&format!("#{}/{}", page.segment(), id));
        typed.pump(&mut events);

        prop_assert_eq!(clicked.view(), typed.view());
        prop_assert_eq!(click_port.read(), typed_port.read());
        prop_assert_eq!(click_port.entries(), typed_port.entries());
    }

    /// Fragment parsing and formatting agree for anything with a page segment
    #[test]
    fn fragment_display_reparses(raw in "#[a-z-]{1,12}(/[a-zA-Z-]{0,12})?") {
        let parsed = Fragment::parse(&raw);
        prop_assert_eq!(parsed.to_string(), raw.clone());
        prop_assert_eq!(Fragment::parse(&parsed.to_string()), parsed);
    }
}
