use dioxus::prelude::*;

use crate::{use_access, Crumb, Header, LogoutButton};

/// Signed-in account and the listing settings in effect.
#[component]
pub fn SettingsView() -> Element {
    let auth = use_access();
    let config = use_resource(|| async move { api::get_dashboard_config().await });

    rsx! {
        Header { crumbs: vec![Crumb::new("/setting", "Settings")] }

        section {
            class: "panel",
            h2 { "Account" }
            if let Some(ref admin) = auth().user {
                dl {
                    class: "settings-list",
                    dt { "Name" }
                    dd { "{admin.display_name()}" }
                    dt { "Email" }
                    dd { "{admin.email}" }
                }
            }
            LogoutButton { class: "btn" }
        }

        section {
            class: "panel",
            h2 { "User listing" }
            match &*config.read() {
                Some(Ok(cfg)) => rsx! {
                    dl {
                        class: "settings-list",
                        dt { "Rows per page" }
                        dd { "{cfg.users.items_per_page}" }
                        dt { "Labels before count" }
                        dd { "{cfg.users.max_selected_labels}" }
                    }
                    match cfg.to_toml() {
                        Ok(text) => rsx! {
                            pre { class: "settings-toml", "{text}" }
                        },
                        Err(e) => {
                            tracing::warn!("Could not render listing settings: {}", e);
                            rsx! {}
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    p { class: "error", "Could not load settings: {e}" }
                },
                None => rsx! {
                    p { class: "muted", "Loading..." }
                },
            }
        }
    }
}
