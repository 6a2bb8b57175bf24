use dashboard::charts::{
    line_points, svg_polyline, x_for, Bounds, ChartOption, Dataset, Viewport, MONTH_LABELS,
};
use dioxus::prelude::*;

use super::Legend;

const TICK_COUNT: usize = 5;

fn viewport_for(option: ChartOption) -> Viewport {
    match option {
        ChartOption::Compact => Viewport::new(200.0, 60.0, 4.0),
        ChartOption::Full => Viewport::new(600.0, 260.0, 30.0),
    }
}

#[component]
pub fn LineChart(data: Vec<Dataset>, #[props(default)] option: ChartOption) -> Element {
    let viewport = viewport_for(option);
    let full = option == ChartOption::Full;

    let Some(bounds) = Bounds::of(&data) else {
        return rsx! {
            svg { class: "line-chart empty", view_box: viewport.view_box() }
        };
    };
    let bounds = if full { bounds.including_zero() } else { bounds };

    let lines: Vec<(String, String, String)> = data
        .iter()
        .map(|d| {
            let points = svg_polyline(&line_points(&d.data, &bounds, &viewport));
            (d.label.clone(), d.color.clone(), points)
        })
        .collect();

    let ticks: Vec<(f64, String)> = if full {
        bounds
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|t| (viewport.y_for(t, &bounds), format!("{t:.0}")))
            .collect()
    } else {
        Vec::new()
    };

    let months: Vec<(f64, &str)> = if full {
        MONTH_LABELS
            .iter()
            .take(bounds.len)
            .enumerate()
            .map(|(i, m)| (x_for(i, bounds.len, &viewport), *m))
            .collect()
    } else {
        Vec::new()
    };

    let legend: Vec<(String, String)> = data
        .iter()
        .map(|d| (d.label.clone(), d.color.clone()))
        .collect();

    let left = viewport.padding;
    let right = viewport.width - viewport.padding;
    let tick_x = left - 4.0;
    let baseline = viewport.height - viewport.padding / 3.0;

    rsx! {
        div {
            class: if full { "line-chart-wrap full" } else { "line-chart-wrap compact" },
            svg {
                class: "line-chart",
                view_box: viewport.view_box(),
                preserve_aspect_ratio: "none",

                for (y, label) in ticks {
                    g {
                        key: "{label}",
                        line {
                            class: "chart-grid",
                            x1: "{left}",
                            x2: "{right}",
                            y1: "{y:.2}",
                            y2: "{y:.2}",
                        }
                        text {
                            class: "chart-tick",
                            x: "{tick_x}",
                            y: "{y:.2}",
                            text_anchor: "end",
                            "{label}"
                        }
                    }
                }

                for (x, month) in months {
                    text {
                        key: "{month}",
                        class: "chart-month",
                        x: "{x:.2}",
                        y: "{baseline:.2}",
                        text_anchor: "middle",
                        "{month}"
                    }
                }

                for (label, color, points) in lines {
                    polyline {
                        key: "{label}",
                        class: "chart-line",
                        fill: "none",
                        stroke: "{color}",
                        stroke_width: if full { "2" } else { "1.5" },
                        points: "{points}",
                    }
                }
            }
            if full {
                Legend { entries: legend }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_has_no_legend_or_axes() {
        fn app() -> Element {
            rsx! {
                LineChart { data: vec![Dataset::new("Visits", &[1.0, 2.0, 3.0], "#000")] }
            }
        }

        let html = crate::render(app);
        assert!(html.contains("<polyline"));
        assert!(!html.contains("chart-legend"));
        assert!(!html.contains("chart-month"));
    }

    #[test]
    fn test_full_has_months_and_legend() {
        fn app() -> Element {
            rsx! {
                LineChart {
                    data: vec![Dataset::new("Free Members", &[1.0, 2.0, 3.0], "#6C60FF")],
                    option: ChartOption::Full,
                }
            }
        }

        let html = crate::render(app);
        assert!(html.contains("Free Members"));
        assert!(html.contains(">Mar<"));
        assert!(!html.contains(">Apr<"));
        assert!(html.contains("chart-grid"));
    }

    #[test]
    fn test_empty_data_draws_no_line() {
        fn app() -> Element {
            rsx! { LineChart { data: Vec::new() } }
        }

        assert!(!crate::render(app).contains("<polyline"));
    }
}
