use dioxus::prelude::*;
use ui::{DashboardLayout, NavPage};

use crate::Route;

impl From<NavPage> for Route {
    fn from(page: NavPage) -> Self {
        match page {
            NavPage::Analytics => Route::Analytics {},
            NavPage::UserManagement => Route::UserManage {},
            NavPage::Settings => Route::Setting {},
        }
    }
}

fn active_page(route: &Route) -> Option<NavPage> {
    match route {
        Route::Analytics {} => Some(NavPage::Analytics),
        Route::UserManage {} | Route::UserProfile { .. } => Some(NavPage::UserManagement),
        Route::Setting {} => Some(NavPage::Settings),
        Route::Root {} | Route::Login {} | Route::Register {} => None,
    }
}

/// Sidebar chrome around every signed-in route.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        DashboardLayout {
            active: active_page(&route),
            on_navigate: move |page: NavPage| {
                nav.push(Route::from(page));
            },
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_pages_round_trip_through_routes() {
        for page in NavPage::ALL {
            assert_eq!(active_page(&Route::from(page)), Some(page));
        }
        assert_eq!(
            active_page(&Route::UserProfile { uid: "u1".to_string() }),
            Some(NavPage::UserManagement)
        );
        assert_eq!(active_page(&Route::Login {}), None);
        assert_eq!(active_page(&Route::Register {}), None);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::from(NavPage::Settings).to_string(), "/setting");
        assert_eq!(Route::Register {}.to_string(), "/register");
        assert_eq!(
            Route::UserProfile { uid: "abc".to_string() }.to_string(),
            format!("/{}", dashboard::profile_path("abc"))
        );
    }
}
