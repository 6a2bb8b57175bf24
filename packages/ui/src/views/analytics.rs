use dashboard::analytics::AnalyticsData;
use dashboard::charts::ChartOption;
use dioxus::prelude::*;

use crate::charts::{BubbleChart, LineChart, TotalNum};
use crate::{use_access, Crumb, Header};

/// Analytics overview: summary cards, monthly views and top locations.
#[component]
pub fn AnalyticsView() -> Element {
    let _auth = use_access();
    let data = use_hook(AnalyticsData::placeholder);

    rsx! {
        Header { crumbs: vec![Crumb::new("/analytics", "Analytics")] }

        section {
            class: "analytics-cards",
            for card in data.summaries.iter().cloned() {
                TotalNum {
                    key: "{card.title}",
                    title: card.title.clone(),
                    value: card.value,
                    data: card.data,
                }
            }
        }

        div {
            class: "analytics-charts",
            section {
                class: "panel",
                h2 { "Monthly Views" }
                LineChart { data: data.monthly_views.clone(), option: ChartOption::Full }
            }
            section {
                class: "panel",
                h2 { "Top Locations" }
                BubbleChart { data: data.top_locations.clone() }
            }
        }
    }
}
