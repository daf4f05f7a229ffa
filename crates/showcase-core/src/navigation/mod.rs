//! Fragment-driven navigation.
//!
//! ## Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  Fragment:          #<page>[/<section>] (sole source of truth)  │
//! │  Router:            page segment → Page, default `design`       │
//! │  SectionController: per-page active section, default = first   │
//! │  NavigationPort:    read / write(push|replace) / subscribe      │
//! │  Navigator:         router + mounted controller over one port   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rewrite rule: user actions push, self-correcting fallbacks replace.

mod controller;
mod fragment;
mod navigator;
mod page;
mod port;
mod router;

pub use controller::{SectionController, Transition};
pub use fragment::{Fragment, WriteMode};
pub use navigator::{Navigator, View};
pub use page::Page;
pub use port::{
    normalize, ChangeCause, MemoryPort, NavigationEvent, NavigationPort, EVENT_CHANNEL_CAPACITY,
};
pub use router::{Resolution, Router};
