use dashboard::{PageWindow, Pagination};
use dioxus::prelude::*;

const PAGE_SPAN: u64 = 5;

/// Page links for a [`Pagination`]. Renders nothing until there is at least one row.
#[component]
pub fn Paginator(pagination: Pagination, on_change: EventHandler<PageWindow>) -> Element {
    if !pagination.has_pages() {
        return rsx! {};
    }

    let current = pagination.current_page();
    let pages = pagination.page_numbers(PAGE_SPAN);
    let prev = {
        let mut p = pagination.clone();
        p.prev()
    };
    let next = {
        let mut p = pagination.clone();
        p.next()
    };

    rsx! {
        nav {
            class: "paginator",
            button {
                class: "page-link",
                disabled: pagination.is_first(),
                onclick: move |_| on_change.call(prev),
                "\u{2039}"
            }
            for page in pages {
                button {
                    key: "{page}",
                    class: if page == current { "page-link active" } else { "page-link" },
                    onclick: {
                        let window = pagination.window_for(page);
                        move |_| on_change.call(window)
                    },
                    {(page + 1).to_string()}
                }
            }
            button {
                class: "page-link",
                disabled: pagination.is_last(),
                onclick: move |_| on_change.call(next),
                "\u{203A}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_rendered_without_rows() {
        fn app() -> Element {
            rsx! {
                Paginator { pagination: Pagination::new(3), on_change: |_| {} }
            }
        }

        assert!(!crate::render(app).contains("paginator"));
    }

    #[test]
    fn test_page_links_for_total() {
        fn app() -> Element {
            let mut pagination = Pagination::new(3);
            pagination.set_total(7);
            pagination.jump_to(1);
            rsx! {
                Paginator { pagination, on_change: |_| {} }
            }
        }

        let html = crate::render(app);
        assert!(html.contains("paginator"));
        assert!(html.contains(">1</button>"));
        assert!(html.contains(">3</button>"));
        assert!(!html.contains(">4</button>"));
        assert!(html.contains("page-link active"));
    }
}
