//! This crate contains all shared UI for the dashboard.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod charts;
pub mod views;

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

mod alert;
pub use alert::show_alert;

mod auth;
pub use auth::{use_access, use_auth, AuthProvider, AuthState, LogoutButton};

mod header;
pub use header::{Crumb, Header};

mod sidebar;
pub use sidebar::{NavPage, Sidebar};

mod layout;
pub use layout::DashboardLayout;

mod multi_select;
pub use multi_select::MultiSelect;

mod paginator;
pub use paginator::Paginator;

mod user_table;
pub use user_table::UserTable;

#[cfg(test)]
pub(crate) fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
