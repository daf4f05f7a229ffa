//! Theme: design tokens as CSS custom properties plus the global stylesheet.

mod colors;
mod styles;

pub use colors::token_variables;
pub use styles::GLOBAL_STYLES;
