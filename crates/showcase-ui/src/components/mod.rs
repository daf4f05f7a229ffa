//! Reusable UI components
//!
//! Class names follow the stylesheet in the binary's `theme::styles`.

mod badge;
mod button;
mod data_table;
mod input;
mod pagination;
mod sidebar;
mod time_picker;
mod transfer;
mod tree;

pub use badge::*;
pub use button::*;
pub use data_table::*;
pub use input::*;
pub use pagination::*;
pub use sidebar::*;
pub use time_picker::*;
pub use transfer::*;
pub use tree::*;
