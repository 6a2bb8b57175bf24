pub mod analytics;
pub mod charts;
pub mod config;
pub mod error;
pub mod filter;
pub mod listing;
pub mod models;
pub mod pagination;
pub mod source;

#[cfg(test)]
mod memory;
#[cfg(test)]
pub(crate) use memory::MemoryStore;

pub use config::{DashboardConfig, MAX_ITEMS_PER_PAGE};
pub use error::DataError;
pub use filter::{Facet, FacetOption, FilterState};
pub use listing::UserListing;
pub use models::{profile_path, UserPage, UserRecord, UserRow};
pub use pagination::{PageWindow, Pagination};
pub use source::{fetch_page, UserSource};
