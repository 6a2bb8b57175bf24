use dioxus::prelude::*;

/// One breadcrumb entry. The last crumb is rendered as plain text.
#[derive(Clone, Debug, PartialEq)]
pub struct Crumb {
    pub href: String,
    pub name: String,
}

impl Crumb {
    pub fn new(href: &str, name: &str) -> Self {
        Self {
            href: href.to_string(),
            name: name.to_string(),
        }
    }
}

/// Page header with breadcrumbs.
#[component]
pub fn Header(crumbs: Vec<Crumb>) -> Element {
    let last = crumbs.len().saturating_sub(1);

    rsx! {
        header {
            class: "page-header",
            nav {
                class: "breadcrumbs",
                for (i, crumb) in crumbs.iter().enumerate() {
                    if i == last {
                        span {
                            key: "{crumb.href}",
                            class: "breadcrumb current",
                            "{crumb.name}"
                        }
                    } else {
                        a {
                            key: "{crumb.href}",
                            class: "breadcrumb",
                            href: "{crumb.href}",
                            "{crumb.name}"
                        }
                        span { class: "breadcrumb-sep", "/" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_crumb_is_not_a_link() {
        fn app() -> Element {
            rsx! {
                Header {
                    crumbs: vec![
                        Crumb::new("/usermanage", "User Management"),
                        Crumb::new("/usermanage/profile/u1", "Profile"),
                    ],
                }
            }
        }

        let html = crate::render(app);
        assert!(html.contains(r#"href="/usermanage""#));
        assert!(!html.contains(r#"href="/usermanage/profile/u1""#));
        assert!(html.contains("Profile"));
    }
}
