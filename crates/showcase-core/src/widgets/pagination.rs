//! Page number navigation.

use crate::error::{ShowcaseError, ShowcaseResult};

/// 1-based pager over `total` pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total: u32,
    current: u32,
}

impl Pagination {
    /// `total` is at least 1; `current` is clamped into range
    pub fn new(total: u32, current: u32) -> Self {
        let total = total.max(1);
        Self {
            total,
            current: current.clamp(1, total),
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.current -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }

    pub fn go_to(&mut self, page: u32) -> ShowcaseResult<()> {
        if page == 0 || page > self.total {
            return Err(ShowcaseError::OutOfRange(format!(
                "page {} outside 1..={}",
                page, self.total
            )));
        }
        self.current = page;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_at_bounds() {
        let mut pager = Pagination::new(5, 3);
        pager.next();
        pager.next();
        pager.next();
        assert_eq!(pager.current(), 5);
        assert!(!pager.has_next());

        pager.go_to(1).unwrap();
        pager.previous();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut pager = Pagination::new(5, 9);
        assert_eq!(pager.current(), 5);
        assert!(pager.go_to(0).is_err());
        assert!(pager.go_to(6).is_err());
        assert_eq!(pager.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }
}
