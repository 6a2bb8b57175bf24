use dashboard::charts::{ChartOption, Dataset};
use dioxus::prelude::*;

use super::LineChart;

/// Summary card: title, headline number and a trend line.
#[component]
pub fn TotalNum(
    title: String,
    value: u64,
    data: Vec<Dataset>,
    #[props(default)] option: ChartOption,
) -> Element {
    rsx! {
        div {
            class: "total-num",
            div {
                class: "total-num-text",
                span { class: "total-num-title", "{title}" }
                span { class: "total-num-value", "{value}" }
            }
            div {
                class: "total-num-chart",
                LineChart { data, option }
            }
        }
    }
}
