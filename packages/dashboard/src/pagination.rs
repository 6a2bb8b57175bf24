//! # Pagination: the row window over the `users` table
//!
//! [`Pagination`] owns three numbers: the fixed page size, the total row count
//! reported by the last successful fetch, and the current [`PageWindow`]. Every
//! interaction (page click, next/previous, a new total) is a single synchronous
//! transition that recomputes the window.
//!
//! Windows are inclusive on both ends, matching the range query sent to the
//! backend. For a page size `n` every window holds exactly `n` rows except the
//! final page, which may hold fewer; `end` never exceeds `total - 1`.
//!
//! While the total is still unknown (or zero) the controller reports the first
//! full window `{0, n-1}` so the initial fetch asks for one page of rows.

use serde::{Deserialize, Serialize};

/// Inclusive row range `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageWindow {
    pub start: u64,
    pub end: u64,
}

impl PageWindow {
    /// The window of the first page for the given page size.
    pub fn first(items_per_page: u64) -> Self {
        Self {
            start: 0,
            end: items_per_page.max(1) - 1,
        }
    }

    /// Number of rows covered by the window; zero when `end < start`.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

/// Page window state for a table with a fixed page size.
#[derive(Clone, Debug, PartialEq)]
pub struct Pagination {
    items_per_page: u64,
    total: u64,
    window: PageWindow,
}

impl Pagination {
    /// A page size of zero is treated as one.
    pub fn new(items_per_page: u64) -> Self {
        let items_per_page = items_per_page.max(1);
        Self {
            items_per_page,
            total: 0,
            window: PageWindow::first(items_per_page),
        }
    }

    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Record a new total and re-clamp the current window to it.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
        self.window = self.window_for(self.current_page());
    }

    pub fn page_count(&self) -> u64 {
        self.total.div_ceil(self.items_per_page)
    }

    /// Zero-based index of the page the window starts on.
    pub fn current_page(&self) -> u64 {
        self.window.start / self.items_per_page
    }

    /// Whether there is anything to paginate. The paginator is hidden otherwise.
    pub fn has_pages(&self) -> bool {
        self.total > 0
    }

    pub fn is_first(&self) -> bool {
        self.current_page() == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_page() + 1 >= self.page_count()
    }

    /// The window for `page`, clamped to the rows that exist.
    pub fn window_for(&self, page: u64) -> PageWindow {
        if self.total == 0 {
            return PageWindow::first(self.items_per_page);
        }
        let page = page.min(self.page_count() - 1);
        let start = page * self.items_per_page;
        let end = (start + self.items_per_page - 1).min(self.total - 1);
        PageWindow { start, end }
    }

    /// Move to `page` and return the new window.
    pub fn jump_to(&mut self, page: u64) -> PageWindow {
        self.window = self.window_for(page);
        self.window
    }

    /// Adopt a window produced elsewhere (e.g. by a paginator control).
    ///
    /// Only the page the window starts on is taken from it; the bounds are
    /// recomputed so the size invariant always holds.
    pub fn set_window(&mut self, window: PageWindow) -> PageWindow {
        self.jump_to(window.start / self.items_per_page)
    }

    pub fn next(&mut self) -> PageWindow {
        self.jump_to(self.current_page() + 1)
    }

    pub fn prev(&mut self) -> PageWindow {
        self.jump_to(self.current_page().saturating_sub(1))
    }

    /// Up to `span` consecutive page indices around the current page.
    pub fn page_numbers(&self, span: u64) -> Vec<u64> {
        let count = self.page_count();
        if count == 0 {
            return Vec::new();
        }
        let span = span.clamp(1, count);
        let mut first = self.current_page().saturating_sub(span / 2);
        if first + span > count {
            first = count - span;
        }
        (first..first + span).collect()
    }

    /// Footer text under the user table.
    pub fn showing_label(&self) -> String {
        format!(
            "Showing {} - {} users of {}",
            self.window.start + 1,
            self.window.end + 1,
            self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_window_is_empty() {
        let w = PageWindow { start: 5, end: 3 };
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);

        let w = PageWindow { start: 4, end: 4 };
        assert!(!w.is_empty());
        assert_eq!(w.len(), 1);
    }

    #[test]
    fn test_initial_window_is_first_page() {
        let p = Pagination::new(3);
        assert_eq!(p.window(), PageWindow { start: 0, end: 2 });
        assert_eq!(p.total(), 0);
        assert!(!p.has_pages());
        assert_eq!(p.page_count(), 0);
    }

    #[test]
    fn test_zero_page_size_becomes_one() {
        let mut p = Pagination::new(0);
        assert_eq!(p.items_per_page(), 1);
        p.set_total(4);
        assert_eq!(p.jump_to(2), PageWindow { start: 2, end: 2 });
    }

    #[test]
    fn test_window_size_invariant_holds_everywhere() {
        for per in 1..=6u64 {
            for total in 0..=40u64 {
                let mut p = Pagination::new(per);
                p.set_total(total);
                for page in 0..=15u64 {
                    let w = p.jump_to(page);
                    assert!(w.start <= w.end, "per={per} total={total} page={page}");
                    if total == 0 {
                        assert_eq!(w, PageWindow::first(per));
                        continue;
                    }
                    assert!(w.end <= total - 1);
                    if p.is_last() {
                        assert!(w.len() <= per);
                    } else {
                        assert_eq!(w.len(), per);
                    }
                }
            }
        }
    }

    #[test]
    fn test_jump_past_end_clamps_to_last_page() {
        let mut p = Pagination::new(3);
        p.set_total(10);
        assert_eq!(p.page_count(), 4);
        assert_eq!(p.jump_to(99), PageWindow { start: 9, end: 9 });
        assert!(p.is_last());
        assert_eq!(p.current_page(), 3);
    }

    #[test]
    fn test_shrinking_total_reclamps_window() {
        let mut p = Pagination::new(3);
        p.set_total(10);
        p.jump_to(3);
        p.set_total(5);
        assert_eq!(p.window(), PageWindow { start: 3, end: 4 });
    }

    #[test]
    fn test_next_and_prev_stop_at_edges() {
        let mut p = Pagination::new(2);
        p.set_total(5);
        assert!(p.is_first());
        assert_eq!(p.prev(), PageWindow { start: 0, end: 1 });
        p.next();
        p.next();
        assert_eq!(p.next(), PageWindow { start: 4, end: 4 });
        assert!(p.is_last());
    }

    #[test]
    fn test_set_window_recomputes_bounds() {
        let mut p = Pagination::new(3);
        p.set_total(7);
        let w = p.set_window(PageWindow { start: 4, end: 100 });
        assert_eq!(w, PageWindow { start: 3, end: 5 });
    }

    #[test]
    fn test_page_numbers_centre_on_current_page() {
        let mut p = Pagination::new(1);
        p.set_total(10);
        assert_eq!(p.page_numbers(5), vec![0, 1, 2, 3, 4]);
        p.jump_to(5);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);
        p.jump_to(9);
        assert_eq!(p.page_numbers(5), vec![5, 6, 7, 8, 9]);
        p.set_total(2);
        assert_eq!(p.page_numbers(5), vec![0, 1]);
    }

    #[test]
    fn test_showing_label() {
        let mut p = Pagination::new(3);
        p.set_total(8);
        p.jump_to(2);
        assert_eq!(p.showing_label(), "Showing 7 - 8 users of 8");
    }
}
