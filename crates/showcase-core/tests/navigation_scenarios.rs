//! End-to-end navigation scenarios
//!
//! Drive a `Navigator` over a `MemoryPort` the way the desktop shell does:
//! load, sidebar clicks, top-bar clicks, back/forward and address edits.

use showcase_core::{ChangeCause, MemoryPort, NavigationPort, Navigator, Page};

fn started(initial: &str) -> (MemoryPort, Navigator<MemoryPort>) {
    let _ = tracing_subscriber::fmt::try_init();
    let port = MemoryPort::new(initial);
    let mut navigator = Navigator::new(port.clone());
    navigator.start();
    (port, navigator)
}

// ============================================================================
// Load-time scenarios
// ============================================================================

#[test]
fn test_empty_fragment_at_load() {
    let (port, navigator) = started("");

    let view = navigator.view();
    assert_eq!(view.page, Page::Design);
    assert_eq!(view.section, "color");
    assert_eq!(port.read(), "#design/color");
    // Fallback rewrites replace, never push.
    assert_eq!(port.entries().len(), 1);
}

#[test]
fn test_unknown_component_section() {
    let (port, navigator) = started("#components/nonexistent-id");

    assert_eq!(navigator.view().page, Page::Components);
    assert_eq!(navigator.view().section, "button");
    assert_eq!(port.entries(), vec!["#components/button"]);
}

#[test]
fn test_unknown_page_falls_back_to_canonical_default() {
    let (port, navigator) = started("#settings/profile");

    assert_eq!(navigator.view().page, Page::Design);
    assert_eq!(port.read(), "#design/color");
}

#[test]
fn test_mobile_components_deep_link() {
    let (port, navigator) = started("#mobile-components/bottom-nav");

    assert_eq!(navigator.view().page, Page::MobileComponents);
    assert_eq!(navigator.view().section, "bottom-nav");
    assert_eq!(port.read(), "#mobile-components/bottom-nav");
}

// ============================================================================
// Sidebar and history
// ============================================================================

#[test]
fn test_icons_sidebar_click() {
    let (port, mut navigator) = started("#icons/status");

    let view = navigator.select_section("common").unwrap();
    assert_eq!(view.section, "common");
    assert_eq!(port.read(), "#icons/common");

    let mut events = navigator.subscribe();
    assert!(port.back());
    let view = navigator.pump(&mut events).unwrap();
    assert_eq!(view.section, "status");
    assert_eq!(port.read(), "#icons/status");

    assert!(port.forward());
    assert_eq!(navigator.pump(&mut events).unwrap().section, "common");
}

#[test]
fn test_sidebar_click_on_active_section_adds_no_history() {
    let (port, mut navigator) = started("#design/typography");

    navigator.select_section("typography").unwrap();
    navigator.select_section("typography").unwrap();
    assert_eq!(port.entries(), vec!["#design/typography"]);
}

#[test]
fn test_rejected_sidebar_click_leaves_state() {
    let (port, mut navigator) = started("#examples/chat");

    assert!(navigator.select_section("dashboard").is_err());
    assert_eq!(navigator.view().section, "chat");
    assert_eq!(port.entries(), vec!["#examples/chat"]);
}

#[test]
fn test_address_edit_to_invalid_section_heals_in_place() {
    let (port, mut navigator) = started("#examples/chat");
    let mut events = navigator.subscribe();

    port.navigate("#examples/unknown");
    let view = navigator.pump(&mut events).unwrap();
    assert_eq!(view.section, "login");
    // The edit pushed one entry, the fallback replaced it.
    assert_eq!(port.entries(), vec!["#examples/chat", "#examples/login"]);
}

#[test]
fn test_top_nav_then_back_restores_previous_page() {
    let (port, mut navigator) = started("#design/border");
    let mut events = navigator.subscribe();

    navigator.open_page(Page::Components);
    navigator.select_section("transfer").unwrap();
    assert_eq!(port.read(), "#components/transfer");

    port.back();
    port.back();
    let view = navigator.pump(&mut events).unwrap();
    assert_eq!(view.page, Page::Design);
    assert_eq!(view.section, "border");
}

// ============================================================================
// Async event loop, as run by the desktop shell
// ============================================================================

#[tokio::test]
async fn test_event_loop_mirrors_external_changes() {
    let (port, mut navigator) = started("#design/color");
    let mut events = navigator.subscribe();

    port.navigate("#icons/medical");
    let event = events.recv().await.expect("event delivered");
    assert_eq!(event.cause, ChangeCause::External);
    assert_eq!(event.fragment, "#icons/medical");

    let view = navigator.handle_change();
    assert_eq!(view.page, Page::Icons);
    assert_eq!(view.section, "medical");
}
