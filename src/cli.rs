//! Headless command-line modes: route listing and fragment resolution.

use serde::Serialize;
use showcase_core::catalog::{routes, RouteEntry};
use showcase_core::navigation::normalize;
use showcase_core::{MemoryPort, NavigationPort, Navigator, View};

/// Outcome of resolving one fragment against a fresh navigator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Fragment as given on the command line
    pub input: String,
    /// What would be displayed
    pub view: View,
    /// Fragment after self-correction
    pub fragment: String,
    /// True when the fragment had to be rewritten
    pub rewritten: bool,
}

/// Every canonical `#page/section` fragment with its title
pub fn route_table() -> Vec<RouteEntry> {
    routes()
}

/// Run the navigator over an in-memory port, as the app would at load
pub fn resolve(input: &str) -> Resolution {
    let port = MemoryPort::new(input);
    let mut navigator = Navigator::new(port.clone());
    let view = navigator.start();
    let fragment = port.read();
    let rewritten = fragment != normalize(input);

    tracing::debug!(%input, %fragment, rewritten, "resolved fragment");

    Resolution {
        input: input.to_string(),
        view,
        fragment,
        rewritten,
    }
}

/// Pretty JSON for stdout
pub fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::Page;

    #[test]
    fn resolve_valid_fragment_is_untouched() {
        let resolution = resolve("#icons/medical");
        assert_eq!(resolution.view.page, Page::Icons);
        assert_eq!(resolution.view.section, "medical");
        assert_eq!(resolution.fragment, "#icons/medical");
        assert!(!resolution.rewritten);
    }

    #[test]
    fn resolve_accepts_missing_hash() {
        let resolution = resolve("components/tree");
        assert_eq!(resolution.fragment, "#components/tree");
        assert!(!resolution.rewritten);
    }

    #[test]
    fn resolve_heals_unknown_section() {
        let resolution = resolve("#components/nonexistent-id");
        assert_eq!(resolution.fragment, "#components/button");
        assert!(resolution.rewritten);
    }

    #[test]
    fn resolve_empty_lands_on_design() {
        let resolution = resolve("");
        assert_eq!(resolution.view.page, Page::Design);
        assert_eq!(resolution.fragment, "#design/color");
        assert!(resolution.rewritten);
    }

    #[test]
    fn route_table_as_json() {
        let json = to_json(&route_table()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), 41);
        assert_eq!(entries[0]["fragment"], "#design/color");
    }
}
