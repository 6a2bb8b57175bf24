//! Inline SVG chart widgets. Geometry comes from [`dashboard::charts`]; these
//! components only emit markup.

mod bubble_chart;
pub use bubble_chart::BubbleChart;

mod line_chart;
pub use line_chart::LineChart;

mod total_num;
pub use total_num::TotalNum;

use dioxus::prelude::*;

/// Colour swatch plus label, shared by the full line chart and the bubble chart.
#[component]
fn Legend(entries: Vec<(String, String)>) -> Element {
    rsx! {
        ul {
            class: "chart-legend",
            for (label, color) in entries {
                li {
                    key: "{label}",
                    span {
                        class: "chart-legend-swatch",
                        style: "background: {color};",
                    }
                    "{label}"
                }
            }
        }
    }
}
