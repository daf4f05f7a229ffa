//! Navigation context for the showcase.
//!
//! Provides the app-wide [`Navigator`] to all components via use_context,
//! backed by a [`WebviewPort`] on the desktop webview's `location.hash`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut navigator = use_navigator();
//! let view = navigator.read().view();
//! navigator.write().select_section("tree")?;
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use parking_lot::Mutex;
use showcase_core::navigation::{normalize, EVENT_CHANNEL_CAPACITY};
use showcase_core::{ChangeCause, NavigationEvent, NavigationPort, Navigator, WriteMode};
use tokio::sync::broadcast;

/// Navigator type shared through context
pub type SharedNavigator = Signal<Navigator<WebviewPort>>;

/// Script installed once in the webview: forwards every `hashchange`
/// (back, forward, in-page links) to the Rust side.
pub const HASH_LISTENER: &str = r#"
window.addEventListener('hashchange', () => dioxus.send(window.location.hash));
"#;

/// Navigation port over the webview's address fragment.
///
/// The last known fragment is cached on the Rust side so `read()` stays
/// synchronous. Writes update the cache and mirror into the webview with
/// `history.pushState`/`replaceState`, which do not fire `hashchange`.
#[derive(Debug, Clone)]
pub struct WebviewPort {
    current: Arc<Mutex<String>>,
    events: broadcast::Sender<NavigationEvent>,
}

impl WebviewPort {
    pub fn new(initial: &str) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            current: Arc::new(Mutex::new(normalize(initial))),
            events,
        }
    }

    /// Record a `hashchange` reported by the webview. Returns false (and emits
    /// nothing) when the value matches what the port already holds.
    pub fn receive(&self, raw: &str) -> bool {
        let fragment = normalize(raw);
        {
            let mut current = self.current.lock();
            if *current == fragment {
                return false;
            }
            *current = fragment.clone();
        }
        tracing::debug!(%fragment, "webview hashchange");
        // No receivers simply means nobody is mounted yet
        let _ = self.events.send(NavigationEvent {
            fragment,
            cause: ChangeCause::External,
        });
        true
    }

    /// Make the webview's fragment match the cached value without adding history
    pub fn mirror_to_webview(&self) {
        let fragment = self.read();
        let _ = document::eval(&history_script(&fragment, WriteMode::Replace));
    }
}

impl NavigationPort for WebviewPort {
    fn read(&self) -> String {
        self.current.lock().clone()
    }

    fn write(&self, fragment: &str, mode: WriteMode) {
        let fragment = normalize(fragment);
        {
            let mut current = self.current.lock();
            if mode == WriteMode::Push && *current == fragment {
                return;
            }
            *current = fragment.clone();
        }
        tracing::debug!(%fragment, %mode, "webview history write");
        let _ = document::eval(&history_script(&fragment, mode));
    }

    fn subscribe(&self) -> broadcast::Receiver<NavigationEvent> {
        self.events.subscribe()
    }
}

/// JavaScript that applies a history write in the webview
pub fn history_script(fragment: &str, mode: WriteMode) -> String {
    let method = match mode {
        WriteMode::Push => "pushState",
        WriteMode::Replace => "replaceState",
    };
    // An empty fragment clears the hash but keeps path and query
    let target = if fragment.is_empty() {
        "window.location.pathname + window.location.search".to_string()
    } else {
        js_string(fragment)
    };
    format!("window.history.{}(null, '', {});", method, target)
}

/// Quote a string as a JavaScript literal
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Hook to access the navigator from context.
///
/// # Example
///
/// ```ignore
/// let navigator = use_navigator();
/// let view = navigator.read().view();
/// ```
pub fn use_navigator() -> SharedNavigator {
    use_context::<SharedNavigator>()
}

/// Hook returning the current fragment, for active-state styling
pub fn use_fragment() -> String {
    let navigator = use_navigator();
    let fragment = navigator.read().port().read();
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receive_emits_only_on_change() {
        let port = WebviewPort::new("#design/color");
        let mut events = port.subscribe();

        assert!(!port.receive("#design/color"));
        assert!(port.receive("#icons/ai"));
        assert_eq!(port.read(), "#icons/ai");

        let event = events.try_recv().expect("event");
        assert_eq!(event.fragment, "#icons/ai");
        assert_eq!(event.cause, ChangeCause::External);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn receive_normalizes_bare_hash() {
        let port = WebviewPort::new("#design/color");
        assert!(port.receive("#"));
        assert_eq!(port.read(), "");
    }

    #[test]
    fn push_and_replace_scripts() {
        assert_eq!(
            history_script("#icons/ai", WriteMode::Push),
            r##"window.history.pushState(null, '', "#icons/ai");"##
        );
        assert_eq!(
            history_script("#design/color", WriteMode::Replace),
            r##"window.history.replaceState(null, '', "#design/color");"##
        );
    }

    #[test]
    fn empty_fragment_clears_hash() {
        assert_eq!(
            history_script("", WriteMode::Replace),
            "window.history.replaceState(null, '', window.location.pathname + window.location.search);"
        );
    }

    #[test]
    fn js_string_escapes_quotes() {
        assert_eq!(js_string(r#"#a"b\c"#), r##""#a\"b\\c""##);
        assert_eq!(js_string("#</script>"), r##""#\u003c/script>""##);
    }
}
