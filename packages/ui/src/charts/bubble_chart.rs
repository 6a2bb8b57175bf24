use dashboard::charts::{bubble_layout, BubbleDataset, Viewport};
use dioxus::prelude::*;

use super::Legend;

#[component]
pub fn BubbleChart(data: Vec<BubbleDataset>) -> Element {
    let viewport = Viewport::new(400.0, 260.0, 20.0);
    let bubbles = bubble_layout(&data, &viewport);
    let legend: Vec<(String, String)> = data
        .iter()
        .map(|d| (d.label.clone(), d.color.clone()))
        .collect();

    rsx! {
        div {
            class: "bubble-chart-wrap",
            svg {
                class: "bubble-chart",
                view_box: viewport.view_box(),
                for (i, b) in bubbles.into_iter().enumerate() {
                    circle {
                        key: "{i}",
                        cx: "{b.cx:.2}",
                        cy: "{b.cy:.2}",
                        r: "{b.radius:.2}",
                        fill: "{b.color}",
                        fill_opacity: "0.7",
                        title { "{b.label}" }
                    }
                }
            }
            Legend { entries: legend }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard::analytics::AnalyticsData;

    #[test]
    fn test_one_circle_per_point() {
        fn app() -> Element {
            rsx! { BubbleChart { data: AnalyticsData::placeholder().top_locations } }
        }

        let html = crate::render(app);
        assert_eq!(html.matches("<circle").count(), 3);
        assert!(html.contains("Australia"));
    }
}
