//! # Data access: the user table behind an async trait
//!
//! The dashboard only ever asks two things of the backend: how many users exist,
//! and which users fall inside a [`PageWindow`]. [`UserSource`] captures exactly
//! that, so the same page-fetch logic runs against Postgres on the server
//! (`api::users::PgUserSource`) and against the in-memory `MemoryStore` in tests.
//!
//! [`fetch_page`] issues the count query and then the range query, one after the
//! other. If either fails the whole fetch fails with [`DataError::LoadFailed`];
//! there is no retry and no partial result.

use std::future::Future;

use crate::error::DataError;
use crate::models::{UserPage, UserRecord};
use crate::pagination::PageWindow;

/// Async access to the `users` table.
pub trait UserSource {
    /// Exact number of rows in the table.
    fn count(&self) -> impl Future<Output = Result<u64, DataError>> + Send;

    /// Rows inside the inclusive `window`, in a stable order.
    fn range(
        &self,
        window: PageWindow,
    ) -> impl Future<Output = Result<Vec<UserRecord>, DataError>> + Send;
}

/// Fetch one page of users plus the total count.
pub async fn fetch_page<S: UserSource>(
    source: &S,
    window: PageWindow,
) -> Result<UserPage, DataError> {
    let total = source.count().await?;
    let rows = source.range(window).await?;
    Ok(UserPage { rows, total })
}
