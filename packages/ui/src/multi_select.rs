use std::collections::BTreeSet;

use dashboard::Facet;
use dioxus::prelude::*;

/// Dropdown of checkboxes over one facet's options.
///
/// The closed button shows [`Facet::summary`]. The parent owns the selection:
/// each checkbox reports its option code through `on_toggle`, and the "Clear"
/// entry fires `on_clear`.
#[component]
pub fn MultiSelect(
    facet: Facet,
    selected: BTreeSet<String>,
    #[props(default = 3)] max_labels: usize,
    on_toggle: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    let mut open = use_signal(|| false);
    let summary = facet.summary(&selected, max_labels);

    rsx! {
        div {
            class: if open() { "multi-select open" } else { "multi-select" },
            button {
                class: if selected.is_empty() { "multi-select-toggle placeholder" } else { "multi-select-toggle" },
                onclick: move |_| open.set(!open()),
                "{summary}"
            }
            if open() {
                ul {
                    class: "multi-select-menu",
                    for option in facet.options() {
                        li {
                            key: "{option.code}",
                            label {
                                input {
                                    r#type: "checkbox",
                                    checked: selected.contains(option.code),
                                    onchange: {
                                        let code = option.code;
                                        move |_| on_toggle.call(code.to_string())
                                    },
                                }
                                "{option.name}"
                            }
                        }
                    }
                    if !selected.is_empty() {
                        li {
                            button {
                                class: "multi-select-clear",
                                onclick: move |_| on_clear.call(()),
                                "Clear"
                            }
                        }
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
    fn test_closed_shows_placeholder() {
        fn app() -> Element {
            rsx! {
                MultiSelect {
                    facet: Facet::Gender,
                    selected: BTreeSet::new(),
                    on_toggle: |_| {},
                    on_clear: |_| {},
                }
            }
        }

        let html = crate::render(app);
        assert!(html.contains("Gender"));
        assert!(!html.contains("multi-select-menu"));
    }

    #[test]
    fn test_closed_shows_selected_names() {
        fn app() -> Element {
            let selected: BTreeSet<String> = ["1".to_string(), "2".to_string()].into();
            rsx! {
                MultiSelect {
                    facet: Facet::AccountType,
                    selected,
                    on_toggle: |_| {},
                    on_clear: |_| {},
                }
            }
        }

        assert!(crate::render(app).contains("Premium, Standard"));
    }
}
