//! Navigator: the router plus the mounted page's controller over one port.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::{self, error::TryRecvError};

use super::controller::{SectionController, Transition};
use super::fragment::WriteMode;
use super::page::Page;
use super::port::{NavigationEvent, NavigationPort};
use super::router::Router;
use crate::error::ShowcaseResult;

/// What the showcase currently displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub page: Page,
    pub section: String,
}

impl View {
    /// Fragment that reproduces this view when re-parsed
    pub fn fragment(&self) -> String {
        format!("#{}/{}", self.page.segment(), self.section)
    }
}

/// Drives navigation for the whole app.
///
/// The controller is recreated in its initial state whenever the router
/// selects a different page, so section state never leaks between pages.
#[derive(Debug)]
pub struct Navigator<P: NavigationPort> {
    port: P,
    router: Router,
    controller: SectionController,
}

impl<P: NavigationPort> Navigator<P> {
    /// Create a navigator without touching the port. Call [`Navigator::start`]
    /// before reading the view.
    pub fn new(port: P) -> Self {
        let router = Router::new();
        let controller = SectionController::new(router.current());
        Self {
            port,
            router,
            controller,
        }
    }

    /// Create a navigator and resolve the fragment already on the port, so
    /// the first view read is the one the fragment names.
    pub fn started(port: P) -> Self {
        let mut navigator = Self::new(port);
        navigator.start();
        navigator
    }

    /// Process the fragment present at load time
    pub fn start(&mut self) -> View {
        let view = self.handle_change();
        tracing::info!(fragment = %self.port.read(), "navigation started");
        view
    }

    /// Re-derive everything from the current fragment
    pub fn handle_change(&mut self) -> View {
        let resolution = self.router.resolve(&self.port);
        if self.controller.page() != resolution.page || resolution.rewritten {
            tracing::debug!(
                from = %self.controller.page(),
                to = %resolution.page,
                rewritten = resolution.rewritten,
                "mounting page"
            );
            self.controller = SectionController::new(resolution.page);
        }

        let raw = self.port.read();
        let transition = self.controller.sync(&raw, &self.port);
        debug_assert_ne!(transition, Transition::Ignored);
        self.view()
    }

    /// Sidebar click on the mounted page
    pub fn select_section(&mut self, id: &str) -> ShowcaseResult<View> {
        self.controller.select(id, &self.port)?;
        Ok(self.view())
    }

    /// Top navigation click: push the page's canonical fragment and mount it
    pub fn open_page(&mut self, page: Page) -> View {
        if self.controller.page() == page {
            return self.view();
        }
        self.port.write(&page.canonical_fragment(), WriteMode::Push);
        self.handle_change()
    }

    /// Drain queued port events. Returns the view after the last one, or
    /// `None` if nothing was pending.
    pub fn pump(&mut self, events: &mut broadcast::Receiver<NavigationEvent>) -> Option<View> {
        let mut latest = None;
        loop {
            match events.try_recv() {
                Ok(event) => {
                    tracing::debug!(fragment = %event.fragment, cause = ?event.cause, "navigation event");
                    latest = Some(self.handle_change());
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "navigation events lagged, resyncing");
                    latest = Some(self.handle_change());
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        latest
    }

    /// Currently displayed page and section
    pub fn view(&self) -> View {
        View {
            page: self.controller.page(),
            section: self.controller.active_id().to_string(),
        }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NavigationEvent> {
        self.port.subscribe()
    }
}
