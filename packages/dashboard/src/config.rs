//! # Dashboard configuration
//!
//! Display settings shared by the server (which loads them as part of its
//! settings) and the client (which receives them through `api::get_dashboard_config`).
//!
//! ```toml
//! [users]
//! items_per_page = 3       # rows per page in the user table
//! max_selected_labels = 3  # names shown on a facet before "N items selected"
//! ```
//!
//! Every field has a default, so a missing or empty section is equivalent to
//! [`DashboardConfig::default`]. The page size is clamped to
//! [`MAX_ITEMS_PER_PAGE`], the most rows `api::list_users` returns per call.

use serde::{Deserialize, Serialize};

/// Largest page the server hands out in one request.
pub const MAX_ITEMS_PER_PAGE: u64 = 100;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub users: UsersConfig,
}

/// User-management table settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsersConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u64,
    #[serde(default = "default_max_selected_labels")]
    pub max_selected_labels: usize,
}

fn default_items_per_page() -> u64 {
    3
}

fn default_max_selected_labels() -> usize {
    3
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            max_selected_labels: default_max_selected_labels(),
        }
    }
}

impl DashboardConfig {
    /// Builder method to set the user table page size.
    pub fn with_items_per_page(mut self, n: u64) -> Self {
        self.users.items_per_page = n;
        self
    }

    /// Clamp the page size into `1..=MAX_ITEMS_PER_PAGE` so a page never asks for
    /// more rows than the server returns.
    pub fn validated(self) -> Self {
        let n = self.users.items_per_page.clamp(1, MAX_ITEMS_PER_PAGE);
        self.with_items_per_page(n)
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(s).map(Self::validated)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.users.items_per_page, 3);
    }

    #[test]
    fn test_partial_section() {
        let config = DashboardConfig::from_toml("[users]\nitems_per_page = 25\n").unwrap();
        assert_eq!(config.users.items_per_page, 25);
        assert_eq!(config.users.max_selected_labels, 3);
    }

    #[test]
    fn test_page_size_is_clamped_to_server_cap() {
        let config = DashboardConfig::from_toml("[users]\nitems_per_page = 150\n").unwrap();
        assert_eq!(config.users.items_per_page, MAX_ITEMS_PER_PAGE);

        let config = DashboardConfig::default().with_items_per_page(0).validated();
        assert_eq!(config.users.items_per_page, 1);

        let n = config.with_items_per_page(150).validated().users.items_per_page;
        let window = crate::Pagination::new(n).window();
        assert_eq!(window.len(), MAX_ITEMS_PER_PAGE);
    }

    #[test]
    fn test_toml_output_parses_back() {
        let config = DashboardConfig::default().with_items_per_page(10);
        let text = config.to_toml().unwrap();
        assert!(text.contains("items_per_page = 10"));
        assert_eq!(DashboardConfig::from_toml(&text).unwrap(), config);
    }
}
