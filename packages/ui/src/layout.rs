use dioxus::prelude::*;

use crate::{NavPage, Sidebar};

/// Sidebar plus main content area shared by every signed-in page.
#[component]
pub fn DashboardLayout(
    active: Option<NavPage>,
    on_navigate: EventHandler<NavPage>,
    children: Element,
) -> Element {
    rsx! {
        document::Stylesheet { href: crate::DASHBOARD_CSS }

        div {
            class: "dashboard",
            Sidebar { active, on_navigate }
            main {
                class: "dashboard-main",
                {children}
            }
        }
    }
}
