//! Column layout for the icon gallery.

/// Sidebar width subtracted from the window before picking a column count
pub const SIDEBAR_WIDTH: f64 = 256.0;

/// Content narrower than this gets two columns instead of three
pub const WIDE_BREAKPOINT: f64 = 1024.0;

/// Column count for a window width
pub fn columns_for_width(window_width: f64) -> usize {
    if window_width - SIDEBAR_WIDTH < WIDE_BREAKPOINT {
        2
    } else {
        3
    }
}

/// Deal items round-robin into `columns` columns: item `i` → column `i % columns`.
pub fn distribute<T>(items: impl IntoIterator<Item = T>, columns: usize) -> Vec<Vec<T>> {
    let columns = columns.max(1);
    let mut out: Vec<Vec<T>> = (0..columns).map(|_| Vec::new()).collect();
    for (index, item) in items.into_iter().enumerate() {
        out[index % columns].push(item);
    }
    out
}
