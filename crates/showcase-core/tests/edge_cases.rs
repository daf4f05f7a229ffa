//! Edge case and boundary condition tests
//!
//! Odd fragments the address bar can hold, and widget demo data boundaries.

use showcase_core::catalog::{routes, RouteEntry};
use showcase_core::widgets::{transfer, tree, Side, TransferState, TreeState};
use showcase_core::{MemoryPort, NavigationPort, Navigator, Page};

fn landing(raw: &str) -> (String, Page, String) {
    let port = MemoryPort::new(raw);
    let mut navigator = Navigator::new(port.clone());
    let view = navigator.start();
    (port.read(), view.page, view.section)
}

// ============================================================================
// Malformed fragments
// ============================================================================

#[test]
fn test_double_hash() {
    let (fragment, page, _) = landing("##design/color");
    assert_eq!(page, Page::Design);
    assert_eq!(fragment, "#design/color");
}

#[test]
fn test_bare_hash() {
    assert_eq!(landing("#").0, "#design/color");
}

#[test]
fn test_trailing_slash_on_page() {
    let (fragment, page, section) = landing("#icons/");
    assert_eq!(page, Page::Icons);
    assert_eq!(section, "direction");
    assert_eq!(fragment, "#icons/direction");
}

#[test]
fn test_extra_segments_fall_back() {
    let (fragment, _, section) = landing("#components/table/sorted");
    assert_eq!(section, "button");
    assert_eq!(fragment, "#components/button");
}

#[test]
fn test_case_mismatch_on_page() {
    let (fragment, page, _) = landing("#Icons/status");
    assert_eq!(page, Page::Design);
    assert_eq!(fragment, "#design/color");
}

#[test]
fn test_unicode_fragment() {
    let (fragment, page, _) = landing("#设计/颜色");
    assert_eq!(page, Page::Design);
    assert_eq!(fragment, "#design/color");
}

#[test]
fn test_very_long_fragment() {
    let raw = format!("#examples/{}", "x".repeat(10_000));
    let (fragment, page, section) = landing(&raw);
    assert_eq!(page, Page::Examples);
    assert_eq!(section, "login");
    assert_eq!(fragment, "#examples/login");
}

#[test]
fn test_shared_section_ids_stay_page_scoped() {
    // "button" exists on both gallery pages; each keeps its own meaning.
    let (fragment, page, section) = landing("#mobile-components/button");
    assert_eq!(page, Page::MobileComponents);
    assert_eq!(section, "button");
    assert_eq!(fragment, "#mobile-components/button");
}

// ============================================================================
// Route table
// ============================================================================

#[test]
fn test_route_table_serializes() {
    let routes: Vec<RouteEntry> = routes();
    let json = serde_json::to_value(&routes).unwrap();
    assert_eq!(json[0]["fragment"], "#design/color");
    assert_eq!(json[0]["page"], "Design");
}

#[test]
fn test_every_route_is_a_fixed_point() {
    for route in routes() {
        let port = MemoryPort::new(&route.fragment);
        let mut navigator = Navigator::new(port.clone());
        navigator.start();
        assert_eq!(port.read(), route.fragment);
    }
}

// ============================================================================
// Widget demo data
// ============================================================================

#[test]
fn test_transfer_move_everything_enabled() {
    let mut state = TransferState::new(transfer::demo_items());
    let keys: Vec<String> = state
        .items(Side::Source)
        .iter()
        .map(|item| item.key.clone())
        .collect();
    for key in &keys {
        state.set_checked(Side::Source, key, true);
    }
    state.move_to_target();

    // Only the disabled item stays behind.
    let left: Vec<&str> = state.items(Side::Source).iter().map(|i| i.key.as_str()).collect();
    assert_eq!(left, vec!["6"]);
}

#[test]
fn test_tree_fully_expanded_row_count() {
    let mut state = TreeState::new(tree::demo_tree());
    for id in ["1", "2", "5", "8"] {
        state.click(id);
    }
    assert_eq!(state.visible_rows().len(), 10);
}
