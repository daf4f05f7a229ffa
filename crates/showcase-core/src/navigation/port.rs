//! Navigation port: the injected handle on the address fragment.
//!
//! The fragment is the only shared state in the showcase. Everything that
//! reads or writes it goes through a [`NavigationPort`], so the router and the
//! page controllers run the same way against a desktop webview or against the
//! in-memory [`MemoryPort`] used by tests and the `--resolve` CLI mode.
//!
//! ```text
//! ┌────────────┐  write(push|replace)  ┌──────────────┐
//! │ Navigator  │ ────────────────────▶ │    Port      │
//! │            │ ◀──────────────────── │  (fragment)  │
//! └────────────┘   NavigationEvent     └──────────────┘
//!                  (back / forward / edit)
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use super::fragment::WriteMode;

/// Capacity of the navigation event channel
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// What caused an external fragment change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// History moved back one entry
    Back,
    /// History moved forward one entry
    Forward,
    /// Fragment was set from outside (address bar edit, link, hashchange)
    External,
}

/// Emitted by a port when the fragment changed without the navigator writing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    /// Fragment value after the change
    pub fragment: String,
    /// Origin of the change
    pub cause: ChangeCause,
}

/// Read/write access to the address fragment plus change notifications.
///
/// Writes through the port never emit a [`NavigationEvent`]; the writer has
/// already updated its own state. A push equal to the current value must not
/// create a history entry.
pub trait NavigationPort {
    /// Current fragment including the leading `#`, or an empty string
    fn read(&self) -> String;

    /// Set the fragment
    fn write(&self, fragment: &str, mode: WriteMode);

    /// Subscribe to external changes
    fn subscribe(&self) -> broadcast::Receiver<NavigationEvent>;
}

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, fragment: &str) -> bool {
        if self.current() == fragment {
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(fragment.to_string());
        self.cursor += 1;
        true
    }

    fn replace(&mut self, fragment: &str) {
        self.entries[self.cursor] = fragment.to_string();
    }
}

/// In-memory port with a browser-like history stack.
///
/// Clones share the same history and event channel, so a test can hand one
/// clone to the navigator and keep another to simulate back/forward.
#[derive(Debug, Clone)]
pub struct MemoryPort {
    history: Arc<Mutex<History>>,
    events: broadcast::Sender<NavigationEvent>,
}

impl MemoryPort {
    /// Create a port whose fragment starts at `initial` (may be empty)
    pub fn new(initial: &str) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            history: Arc::new(Mutex::new(History {
                entries: vec![normalize(initial)],
                cursor: 0,
            })),
            events,
        }
    }

    /// Simulate an address-bar edit. Setting the current value is a no-op,
    /// matching `hashchange` semantics.
    pub fn navigate(&self, fragment: &str) -> bool {
        let fragment = normalize(fragment);
        let pushed = self.history.lock().push(&fragment);
        if pushed {
            self.emit(fragment, ChangeCause::External);
        }
        pushed
    }

    /// Move one entry back. Returns false at the start of history.
    pub fn back(&self) -> bool {
        let fragment = {
            let mut history = self.history.lock();
            if history.cursor == 0 {
                return false;
            }
            history.cursor -= 1;
            history.current().to_string()
        };
        self.emit(fragment, ChangeCause::Back);
        true
    }

    /// Move one entry forward. Returns false at the end of history.
    pub fn forward(&self) -> bool {
        let fragment = {
            let mut history = self.history.lock();
            if history.cursor + 1 >= history.entries.len() {
                return false;
            }
            history.cursor += 1;
            history.current().to_string()
        };
        self.emit(fragment, ChangeCause::Forward);
        true
    }

    /// Snapshot of all history entries
    pub fn entries(&self) -> Vec<String> {
        self.history.lock().entries.clone()
    }

    /// Index of the current entry
    pub fn cursor(&self) -> usize {
        self.history.lock().cursor
    }

    fn emit(&self, fragment: String, cause: ChangeCause) {
        tracing::debug!(%fragment, ?cause, "memory port change");
        // No receivers is fine: nobody is mounted yet.
        let _ = self.events.send(NavigationEvent { fragment, cause });
    }
}

impl Default for MemoryPort {
    fn default() -> Self {
        Self::new("")
    }
}

impl NavigationPort for MemoryPort {
    fn read(&self) -> String {
        self.history.lock().current().to_string()
    }

    fn write(&self, fragment: &str, mode: WriteMode) {
        let fragment = normalize(fragment);
        let mut history = self.history.lock();
        match mode {
            WriteMode::Push => {
                history.push(&fragment);
            }
            WriteMode::Replace => history.replace(&fragment),
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<NavigationEvent> {
        self.events.subscribe()
    }
}

/// Bring a fragment into the form `location.hash` reports: `#...` or empty
pub fn normalize(fragment: &str) -> String {
    if fragment.is_empty() || fragment == "#" {
        String::new()
    } else if fragment.starts_with('#') {
        fragment.to_string()
    } else {
        format!("#{}", fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_deduplicates_current_value() {
        let port = MemoryPort::new("#design/color");
        port.write("#design/color", WriteMode::Push);
        assert_eq!(port.entries().len(), 1);

        port.write("#design/border", WriteMode::Push);
        port.write("#design/border", WriteMode::Push);
        assert_eq!(port.entries(), vec!["#design/color", "#design/border"]);
    }

    #[test]
    fn replace_keeps_history_length() {
        let port = MemoryPort::new("");
        port.write("#design", WriteMode::Replace);
        port.write("#design/color", WriteMode::Replace);
        assert_eq!(port.entries(), vec!["#design/color"]);
        assert_eq!(port.read(), "#design/color");
    }

    #[test]
    fn writes_do_not_emit_events() {
        let port = MemoryPort::new("");
        let mut rx = port.subscribe();
        port.write("#icons/ai", WriteMode::Push);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn back_and_forward_emit_events() {
        let port = MemoryPort::new("#icons/status");
        port.write("#icons/common", WriteMode::Push);
        let mut rx = port.subscribe();

        assert!(port.back());
        let event = rx.try_recv().unwrap();
        assert_eq!(event.fragment, "#icons/status");
        assert_eq!(event.cause, ChangeCause::Back);
        assert!(!port.back());

        assert!(port.forward());
        assert_eq!(rx.try_recv().unwrap().fragment, "#icons/common");
        assert!(!port.forward());
    }

    #[test]
    fn push_after_back_truncates_forward_entries() {
        let port = MemoryPort::new("#a");
        port.write("#b", WriteMode::Push);
        port.write("#c", WriteMode::Push);
        port.back();
        port.back();
        port.write("#d", WriteMode::Push);
        assert_eq!(port.entries(), vec!["#a", "#d"]);
        assert_eq!(port.cursor(), 1);
    }

    #[test]
    fn navigate_to_current_value_is_silent() {
        let port = MemoryPort::new("#design/color");
        let mut rx = port.subscribe();
        assert!(!port.navigate("design/color"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn normalize_forms() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("#"), "");
        assert_eq!(normalize("icons"), "#icons");
        assert_eq!(normalize("#icons"), "#icons");
    }
}
