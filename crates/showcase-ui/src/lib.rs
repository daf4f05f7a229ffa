//! Kaixin Design Showcase UI Components
//!
//! Dioxus components for the health-education design system. Interactive
//! widgets keep their state in a `Signal` over the matching
//! `showcase_core::widgets` model, so behaviour is tested headless in the
//! core crate and these components only render and forward events.
//!
//! ## Palette
//!
//! Components reference the `--b2`, `--r2`, `--neutral-5` ... custom
//! properties declared by the host app, never literal colors.
//!
//! - **B2 (#2E57E6)**: primary actions, active navigation
//! - **R2 (#E6455F)**: destructive actions, validation errors
//! - **G2 (#12B881)**: success states
//! - **neutral-0..9**: text, borders and backgrounds

pub mod components;

pub use components::*;
