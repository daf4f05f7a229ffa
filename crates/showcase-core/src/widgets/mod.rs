//! Headless state for the interactive gallery widgets.
//!
//! Each model owns only its own demo state and is rendered by a component in
//! `showcase-ui`.

pub mod masonry;
pub mod pagination;
pub mod table;
pub mod time;
pub mod transfer;
pub mod tree;

pub use pagination::Pagination;
pub use table::{Appointment, Column, SortDirection, TableState};
pub use time::{TimeField, TimePickerState, TIME_PLACEHOLDER};
pub use transfer::{Side, TransferItem, TransferState};
pub use tree::{TreeNode, TreeRow, TreeState};
