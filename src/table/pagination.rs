//! Pagination State
//!
//! Page bounds and next/previous transitions for a remotely paged list.
//! Invalid transitions are silently suppressed rather than reported.

use crate::constants::DEFAULT_ITEMS_PER_PAGE;

/// Current position within a remotely paged result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    items_per_page: u32,
    total_items: u64,
}

impl PaginationState {
    /// Create a pagination state on page 1
    ///
    /// `items_per_page` of zero is bumped to one.
    pub fn new(items_per_page: u32) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            total_items: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// `ceil(total_items / items_per_page)`, zero for an empty result set
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.items_per_page));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether another page exists after the current one
    pub fn has_next(&self) -> bool {
        u64::from(self.current_page) * u64::from(self.items_per_page) < self.total_items
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Advance one page; returns whether the page changed
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; returns whether the page changed
    pub fn previous_page(&mut self) -> bool {
        if self.has_previous() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Replace the total reported by the server
    pub fn set_total(&mut self, total_items: u64) {
        self.total_items = total_items;
    }

    /// Remove `count` items from the total and pull the current page back
    /// if it no longer exists. Returns whether the page changed.
    pub fn items_removed(&mut self, count: u64) -> bool {
        self.total_items = self.total_items.saturating_sub(count);
        self.clamp()
    }

    /// Pull `current_page` back inside `1..=max(1, total_pages)`
    pub fn clamp(&mut self) -> bool {
        let last = self.total_pages().max(1);
        if self.current_page > last {
            self.current_page = last;
            true
        } else {
            false
        }
    }

    /// Zero-based index of the first item on the current page
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page - 1) * u64::from(self.items_per_page)
    }

    /// One-based `(first, last)` item numbers shown on the current page,
    /// `None` when the page is empty
    pub fn visible_range(&self) -> Option<(u64, u64)> {
        let first = self.offset() + 1;
        if first > self.total_items {
            return None;
        }
        let last = (self.offset() + u64::from(self.items_per_page)).min(self.total_items);
        Some((first, last))
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn state(current_page: u32, items_per_page: u32, total_items: u64) -> PaginationState {
        PaginationState {
            current_page,
            items_per_page,
            total_items,
        }
    }

    #[test]
    fn test_last_page_next_is_noop_and_previous_steps_back() {
        let mut p = state(3, 10, 25);
        assert!(!p.next_page());
        assert_eq!(p.current_page(), 3);
        assert!(p.previous_page());
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn test_previous_on_first_page_is_noop() {
        let mut p = state(1, 10, 25);
        assert!(!p.previous_page());
        assert_eq!(p.current_page(), 1);
    }

    #[rstest]
    #[case(0, 10, 0)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(25, 10, 3)]
    fn test_total_pages(#[case] total: u64, #[case] per_page: u32, #[case] expected: u32) {
        assert_eq!(state(1, per_page, total).total_pages(), expected);
    }

    #[test]
    fn test_items_removed_clamps_page() {
        // 21 items, page 3 holds a single item
        let mut p = state(3, 10, 21);
        assert!(p.items_removed(1));
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.total_items(), 20);
    }

    #[test]
    fn test_clamp_on_empty_set_keeps_page_one() {
        let mut p = state(1, 10, 0);
        assert!(!p.clamp());
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        assert_eq!(PaginationState::new(0).items_per_page(), 1);
    }

    #[rstest]
    #[case(state(1, 10, 25), Some((1, 10)))]
    #[case(state(3, 10, 25), Some((21, 25)))]
    #[case(state(1, 10, 0), None)]
    fn test_visible_range(#[case] p: PaginationState, #[case] expected: Option<(u64, u64)>) {
        assert_eq!(p.visible_range(), expected);
    }

    proptest! {
        #[test]
        fn next_page_never_passes_last_page(
            total in 0u64..500,
            per_page in 1u32..50,
            steps in 0usize..60,
        ) {
            let mut p = state(1, per_page, total);
            for _ in 0..steps {
                p.next_page();
            }
            prop_assert!(p.current_page() <= p.total_pages().max(1));
        }

        #[test]
        fn previous_page_steps_by_exactly_one(
            current in 1u32..100,
            per_page in 1u32..50,
        ) {
            let mut p = state(current, per_page, 10_000);
            let changed = p.previous_page();
            if current > 1 {
                prop_assert!(changed);
                prop_assert_eq!(p.current_page(), current - 1);
            } else {
                prop_assert!(!changed);
                prop_assert_eq!(p.current_page(), 1);
            }
        }
    }
}
