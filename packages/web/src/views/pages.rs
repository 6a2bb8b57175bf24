//! Route components: thin wrappers binding the shared views to the router.

use dioxus::prelude::*;
use ui::views::{AnalyticsView, SettingsView, UserManageView, UserProfileView};

use crate::Route;

#[component]
pub fn Analytics() -> Element {
    rsx! { AnalyticsView {} }
}

#[component]
pub fn UserManage() -> Element {
    let nav = use_navigator();

    rsx! {
        UserManageView {
            on_select_user: move |uid: String| {
                nav.push(Route::UserProfile { uid });
            },
        }
    }
}

#[component]
pub fn UserProfile(uid: String) -> Element {
    rsx! { UserProfileView { uid } }
}

#[component]
pub fn Setting() -> Element {
    rsx! { SettingsView {} }
}
