use dashboard::UserRow;
use dioxus::prelude::*;

/// Table of user rows. Clicking a row reports its `uid` once.
#[component]
pub fn UserTable(users: Vec<UserRow>, on_select: EventHandler<String>) -> Element {
    rsx! {
        table {
            class: "user-table",
            thead {
                tr {
                    th { "#" }
                    th { "UID" }
                    th { "Created" }
                    th { "Phone" }
                    th { "Email" }
                    th { "Provider" }
                    th { "Status" }
                }
            }
            tbody {
                for user in users {
                    tr {
                        key: "{user.uid}",
                        class: if user.is_disabled { "user-row disabled" } else { "user-row" },
                        onclick: {
                            let uid = user.uid.clone();
                            move |_| on_select.call(uid.clone())
                        },
                        td { "{user.display_index}" }
                        td { class: "uid", "{user.uid}" }
                        td { "{user.created_at}" }
                        td { "{user.phone_number}" }
                        td { "{user.email}" }
                        td { "{user.provider}" }
                        td { "{user.status_label()}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard::{UserPage, UserRecord};

    fn record(uid: &str, disabled: bool) -> UserRecord {
        UserRecord {
            uid: uid.to_string(),
            created_at: Default::default(),
            phone_number: None,
            email: Some(format!("{uid}@example.com")),
            provider: Some("password".to_string()),
            is_disabled: disabled,
        }
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        fn app() -> Element {
            let page = UserPage {
                rows: vec![record("alpha", false), record("beta", true)],
                total: 2,
            };
            rsx! {
                UserTable { users: page.to_rows(), on_select: |_| {} }
            }
        }

        let html = crate::render(app);
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>2</td>"));
        assert!(html.contains("alpha@example.com"));
        assert!(html.contains("user-row disabled"));
    }
}
