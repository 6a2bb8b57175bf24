use dashboard::{DashboardConfig, DataError, Facet, PageWindow, UserListing};
use dioxus::prelude::*;

use crate::icons::FaArrowRight;
use crate::{show_alert, use_access, Crumb, Header, Icon, MultiSelect, Paginator, UserTable};

/// User management page. Waits for the listing settings, then shows the table.
#[component]
pub fn UserManageView(on_select_user: EventHandler<String>) -> Element {
    let _auth = use_access();
    let config = use_resource(|| async move { api::get_dashboard_config().await });

    rsx! {
        Header { crumbs: vec![Crumb::new("/usermanage", "User Management")] }

        match &*config.read() {
            Some(Ok(cfg)) => rsx! {
                UserPanel { config: cfg.clone(), on_select_user }
            },
            Some(Err(e)) => {
                tracing::warn!("Falling back to default listing settings: {}", e);
                rsx! {
                    UserPanel { config: DashboardConfig::default(), on_select_user }
                }
            }
            None => rsx! {
                p { class: "muted", "Loading..." }
            },
        }
    }
}

#[component]
fn UserPanel(config: DashboardConfig, on_select_user: EventHandler<String>) -> Element {
    let auth = crate::use_auth();
    let config = config.validated();
    let items_per_page = config.users.items_per_page;
    let max_labels = config.users.max_selected_labels;

    let mut listing = use_signal(|| UserListing::new(items_per_page));
    let mut window = use_signal(|| PageWindow::first(items_per_page));

    // Refetch whenever the session or the page window changes
    let _loader = use_resource(move || async move {
        let signed_in = auth().user.is_some();
        let w = window();
        if !signed_in {
            return;
        }

        listing.write().begin_load();
        let result = api::list_users(w.start, w.end)
            .await
            .map_err(|e| DataError::load_failed(e.to_string()));
        if let Some(err) = listing.write().finish_load(result) {
            tracing::error!(start = w.start, end = w.end, cause = err.detail(), "user load failed");
            show_alert(&err.to_string());
        }
    });

    let state = listing();

    rsx! {
        section {
            class: "panel user-panel",

            div {
                class: "user-toolbar",
                h2 { "{state.heading()}" }
                div {
                    class: "user-filters",
                    for facet in Facet::ALL {
                        MultiSelect {
                            key: "{facet.placeholder()}",
                            facet,
                            selected: state.filter.selected(facet).clone(),
                            max_labels,
                            on_toggle: move |code: String| listing.write().filter.toggle(facet, &code),
                            on_clear: move |_| listing.write().set_facet(facet, Vec::<String>::new()),
                        }
                    }
                    if !state.filter.is_empty() {
                        button {
                            class: "filter-reset",
                            onclick: move |_| listing.write().filter.clear(),
                            "Reset"
                        }
                    }
                    button {
                        class: "filter-apply",
                        disabled: true,
                        title: "Filtering is not available yet",
                        Icon { width: 14, height: 14, icon: FaArrowRight }
                    }
                }
            }

            UserListBody {
                listing: state.clone(),
                on_select: move |uid: String| on_select_user.call(uid),
            }

            if state.pagination.has_pages() {
                div {
                    class: "user-footer",
                    span { class: "muted", "{state.pagination.showing_label()}" }
                    Paginator {
                        pagination: state.pagination.clone(),
                        on_change: move |w: PageWindow| {
                            let next = listing.write().change_page(w);
                            window.set(next);
                        },
                    }
                }
            }
        }
    }
}

/// Table area: a loading line while any fetch is in flight, an empty state when
/// the last load found no users, otherwise the rows.
#[component]
fn UserListBody(listing: UserListing, on_select: EventHandler<String>) -> Element {
    if listing.loading {
        return rsx! {
            p { class: "muted user-loading", "Loading..." }
        };
    }

    match listing.users {
        None => rsx! {},
        Some(users) if users.is_empty() => rsx! {
            div {
                class: "user-empty",
                p { "No users" }
                p { class: "muted", "There are no user accounts to show yet." }
            }
        },
        Some(users) => rsx! {
            UserTable { users, on_select }
        },
    }
}
