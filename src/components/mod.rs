//! Application shell components

mod page_layout;
mod showcase_card;
mod top_nav;

pub use page_layout::{scroll_to_section, PageLayout};
pub use showcase_card::ShowcaseCard;
pub use top_nav::TopNav;
