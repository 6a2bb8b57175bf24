//! # User listing: view state of the user-management page
//!
//! [`UserListing`] bundles everything the page keeps between renders: the rows
//! currently shown, the total row count, the loading flag, the page window and
//! the filter facets. The page drives it through a small set of transitions:
//!
//! 1. [`begin_load`](UserListing::begin_load) when a fetch starts,
//! 2. [`finish_load`](UserListing::finish_load) with the fetch result,
//! 3. [`change_page`](UserListing::change_page) / [`set_facet`](UserListing::set_facet)
//!    on user interaction.
//!
//! A failed load never clears what is already on screen; it only turns the
//! loading flag off and hands the error back so the caller can alert.

use crate::error::DataError;
use crate::filter::{Facet, FilterState};
use crate::models::{UserPage, UserRow};
use crate::pagination::{PageWindow, Pagination};

#[derive(Clone, Debug, PartialEq)]
pub struct UserListing {
    /// `None` until the first successful load.
    pub users: Option<Vec<UserRow>>,
    pub loading: bool,
    pub pagination: Pagination,
    pub filter: FilterState,
}

impl UserListing {
    pub fn new(items_per_page: u64) -> Self {
        Self {
            users: None,
            loading: true,
            pagination: Pagination::new(items_per_page),
            filter: FilterState::default(),
        }
    }

    pub fn total(&self) -> u64 {
        self.pagination.total()
    }

    pub fn window(&self) -> PageWindow {
        self.pagination.window()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch result. Returns the error, if any, for the caller to surface.
    pub fn finish_load(&mut self, result: Result<UserPage, DataError>) -> Option<DataError> {
        self.loading = false;
        match result {
            Ok(page) => {
                self.users = Some(page.to_rows());
                self.pagination.set_total(page.total);
                None
            }
            Err(e) => Some(e),
        }
    }

    /// Move to the page containing `window`. Returns the window to fetch next.
    pub fn change_page(&mut self, window: PageWindow) -> PageWindow {
        self.pagination.set_window(window)
    }

    pub fn set_facet<I, S>(&mut self, facet: Facet, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = self.filter.with_selection(facet, codes);
    }

    /// Header text above the table, e.g. "12 Users".
    pub fn heading(&self) -> String {
        format!("{} Users", self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_record;
    use crate::source::fetch_page;
    use crate::MemoryStore;

    fn page(uids: &[&str], total: u64) -> UserPage {
        UserPage {
            rows: uids.iter().map(|u| sample_record(u)).collect(),
            total,
        }
    }

    #[test]
    fn test_new_listing_is_loading_and_empty() {
        let listing = UserListing::new(3);
        assert!(listing.loading);
        assert!(listing.users.is_none());
        assert_eq!(listing.window(), PageWindow { start: 0, end: 2 });
        assert_eq!(listing.heading(), "0 Users");
    }

    #[test]
    fn test_successful_load_numbers_rows() {
        let mut listing = UserListing::new(3);
        let err = listing.finish_load(Ok(page(&["a", "b"], 5)));
        assert!(err.is_none());
        assert!(!listing.loading);
        assert_eq!(listing.total(), 5);
        let users = listing.users.as_ref().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].display_index, 1);
        assert_eq!(users[1].display_index, 2);
    }

    #[test]
    fn test_failed_load_keeps_previous_rows() {
        let mut listing = UserListing::new(3);
        listing.finish_load(Ok(page(&["a", "b", "c"], 9)));
        let before = listing.users.clone();

        listing.begin_load();
        assert!(listing.loading);
        let err = listing.finish_load(Err(DataError::load_failed("boom")));

        assert_eq!(err, Some(DataError::load_failed("boom")));
        assert!(!listing.loading);
        assert_eq!(listing.users, before);
        assert_eq!(listing.total(), 9);
    }

    #[test]
    fn test_empty_table_has_no_pages() {
        let mut listing = UserListing::new(3);
        listing.finish_load(Ok(UserPage::default()));
        assert_eq!(listing.users, Some(Vec::new()));
        assert!(!listing.pagination.has_pages());
    }

    #[test]
    fn test_change_page_and_facets() {
        let mut listing = UserListing::new(3);
        listing.finish_load(Ok(page(&["a", "b", "c"], 8)));
        let next = listing.change_page(PageWindow { start: 6, end: 8 });
        assert_eq!(next, PageWindow { start: 6, end: 7 });

        listing.set_facet(Facet::Status, ["1"]);
        listing.set_facet(Facet::Gender, ["2"]);
        listing.set_facet(Facet::Status, ["2"]);
        assert!(listing.filter.status.contains("2"));
        assert_eq!(listing.filter.status.len(), 1);
        assert!(listing.filter.gender.contains("2"));
        assert!(listing.filter.account_type.is_empty());
    }

    #[tokio::test]
    async fn test_load_from_failing_source() {
        let store = MemoryStore::with_users(vec![sample_record("a")]);
        let mut listing = UserListing::new(3);
        let window = listing.window();
        listing.finish_load(fetch_page(&store, window).await);
        assert_eq!(listing.users.as_ref().map(Vec::len), Some(1));

        store.set_failing(true);
        listing.begin_load();
        let result = fetch_page(&store, window).await;
        let err = listing.finish_load(result);
        assert!(err.is_some());
        assert_eq!(listing.users.as_ref().map(Vec::len), Some(1));
    }
}
