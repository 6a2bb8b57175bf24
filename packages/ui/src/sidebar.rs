use dioxus::prelude::*;

use crate::icons::{FaChartLine, FaGear, FaRightFromBracket, FaUsers};
use crate::Icon;

/// Top-level dashboard pages reachable from the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPage {
    Analytics,
    UserManagement,
    Settings,
}

impl NavPage {
    pub const ALL: [NavPage; 3] = [NavPage::Analytics, NavPage::UserManagement, NavPage::Settings];

    pub fn title(self) -> &'static str {
        match self {
            NavPage::Analytics => "Analytics",
            NavPage::UserManagement => "User Management",
            NavPage::Settings => "Settings",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            NavPage::Analytics => "/analytics",
            NavPage::UserManagement => "/usermanage",
            NavPage::Settings => "/setting",
        }
    }
}

#[component]
fn NavIcon(page: NavPage) -> Element {
    match page {
        NavPage::Analytics => rsx! { Icon { width: 16, height: 16, icon: FaChartLine } },
        NavPage::UserManagement => rsx! { Icon { width: 16, height: 16, icon: FaUsers } },
        NavPage::Settings => rsx! { Icon { width: 16, height: 16, icon: FaGear } },
    }
}

#[component]
pub fn Sidebar(active: Option<NavPage>, on_navigate: EventHandler<NavPage>) -> Element {
    let auth = crate::use_auth();

    rsx! {
        aside {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                span { class: "sidebar-brand-name", "Backoffice" }
                if let Some(ref admin) = auth().user {
                    span {
                        class: "sidebar-user-name",
                        "{admin.display_name()}"
                    }
                }
            }

            nav {
                class: "sidebar-nav",
                for page in NavPage::ALL {
                    button {
                        key: "{page.path()}",
                        class: if active == Some(page) { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(page),
                        NavIcon { page }
                        span { "{page.title()}" }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                LogoutItem {}
            }
        }
    }
}

#[component]
fn LogoutItem() -> Element {
    rsx! {
        div {
            class: "sidebar-item",
            Icon { width: 16, height: 16, icon: FaRightFromBracket }
            crate::LogoutButton { class: "sidebar-logout" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_match_routes() {
        assert_eq!(NavPage::Analytics.path(), "/analytics");
        assert_eq!(NavPage::UserManagement.path(), "/usermanage");
        assert_eq!(NavPage::Settings.path(), "/setting");
    }
}
