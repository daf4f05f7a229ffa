//! Kaixin Design Showcase Core Library
//!
//! Headless logic behind the design-system showcase: fragment navigation,
//! the page/section catalog and the state of the interactive gallery widgets.
//!
//! ## Overview
//!
//! The address fragment (`#<page>[/<section>]`) is the single source of truth
//! for what is on screen. A [`Router`] maps its first segment to a [`Page`],
//! and one generic [`SectionController`] per mounted page keeps the active
//! section in step with it. Both talk to the fragment only through a
//! [`NavigationPort`], so the whole mechanism runs against [`MemoryPort`] in
//! tests.
//!
//! ## Quick Start
//!
//! ```
//! use showcase_core::{MemoryPort, Navigator, NavigationPort, Page};
//!
//! let port = MemoryPort::new("#components/nonexistent-id");
//! let mut navigator = Navigator::new(port.clone());
//!
//! let view = navigator.start();
//! assert_eq!(view.page, Page::Components);
//! assert_eq!(port.read(), "#components/button");
//!
//! navigator.select_section("tree").unwrap();
//! assert_eq!(port.read(), "#components/tree");
//! ```

pub mod catalog;
pub mod error;
pub mod navigation;
pub mod widgets;

// Re-exports
pub use catalog::Section;
pub use error::{ShowcaseError, ShowcaseResult};
pub use navigation::{
    ChangeCause, Fragment, MemoryPort, NavigationEvent, NavigationPort, Navigator, Page, Router,
    SectionController, Transition, View, WriteMode,
};
