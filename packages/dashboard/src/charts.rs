//! # Chart series and SVG geometry
//!
//! Chart widgets are pure: they receive already-shaped series and draw them. This
//! module holds the series types plus the arithmetic that maps values onto an SVG
//! viewport, so the components in `ui::charts` only emit markup.
//!
//! | Type | Used by |
//! |------|---------|
//! | [`Dataset`] | Line charts and summary cards: one labelled, coloured sequence of values. |
//! | [`BubbleDataset`] | Bubble chart: labelled, coloured `(x, y, r)` points. |
//! | [`ChartOption`] | Compact sparkline vs. full chart with axes and legend. |
//! | [`Viewport`] / [`Bounds`] | Drawing area and value range used for scaling. |

use serde::{Deserialize, Serialize};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A named series of values for a line chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    /// CSS colour for stroke and legend swatch.
    pub color: String,
}

impl Dataset {
    pub fn new(label: &str, data: &[f64], color: &str) -> Self {
        Self {
            label: label.to_string(),
            data: data.to_vec(),
            color: color.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

/// A named set of bubbles for a bubble chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BubbleDataset {
    pub label: String,
    pub points: Vec<BubblePoint>,
    pub color: String,
}

impl BubbleDataset {
    pub fn new(label: &str, points: &[BubblePoint], color: &str) -> Self {
        Self {
            label: label.to_string(),
            points: points.to_vec(),
            color: color.to_string(),
        }
    }
}

/// How much chrome a line chart draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartOption {
    /// Line only: no axes, no legend. Fits inside a summary card.
    #[default]
    Compact,
    /// Grid lines, value ticks, month labels and a legend.
    Full,
}

/// Drawing area in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// SVG y coordinate for `value` within `bounds`; larger values sit higher.
    pub fn y_for(&self, value: f64, bounds: &Bounds) -> f64 {
        self.padding + self.inner_height() * (1.0 - bounds.fraction(value))
    }
}

/// Value range across one or more series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    /// Length of the longest series.
    pub len: usize,
}

impl Bounds {
    /// Range of every value in `datasets`, or `None` when there is nothing to plot.
    pub fn of(datasets: &[Dataset]) -> Option<Self> {
        let len = datasets.iter().map(|d| d.data.len()).max().unwrap_or(0);
        let mut values = datasets.iter().flat_map(|d| d.data.iter().copied());
        let first = values.next()?;
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max, len })
    }

    /// Stretch the range so it starts at zero (for charts with a value axis).
    pub fn including_zero(self) -> Self {
        Self {
            min: self.min.min(0.0),
            max: self.max.max(0.0),
            ..self
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` in the range, 0.0 at `min` and 1.0 at `max`.
    /// A flat range puts everything in the middle.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.span() == 0.0 {
            0.5
        } else {
            (value - self.min) / self.span()
        }
    }

    /// `count` evenly spaced values from `min` to `max`, inclusive.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![self.min],
            _ => (0..count)
                .map(|i| self.min + self.span() * i as f64 / (count - 1) as f64)
                .collect(),
        }
    }
}

/// Map a series onto the viewport. Points are spread evenly across the width
/// using the longest series in `bounds`; a lone point sits in the centre.
pub fn line_points(data: &[f64], bounds: &Bounds, viewport: &Viewport) -> Vec<(f64, f64)> {
    let slots = bounds.len.max(data.len());
    data.iter()
        .enumerate()
        .map(|(i, v)| (x_for(i, slots, viewport), viewport.y_for(*v, bounds)))
        .collect()
}

/// SVG x coordinate of slot `index` out of `slots`.
pub fn x_for(index: usize, slots: usize, viewport: &Viewport) -> f64 {
    if slots <= 1 {
        viewport.padding + viewport.inner_width() / 2.0
    } else {
        viewport.padding + viewport.inner_width() * index as f64 / (slots - 1) as f64
    }
}

/// `points` attribute of an SVG `<polyline>`.
pub fn svg_polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A bubble positioned in SVG coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedBubble {
    pub label: String,
    pub color: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// Lay out every bubble in `datasets`. The largest radius in the data is drawn
/// at a quarter of the shorter inner side; the rest scale proportionally.
pub fn bubble_layout(datasets: &[BubbleDataset], viewport: &Viewport) -> Vec<PlacedBubble> {
    let points: Vec<(&BubbleDataset, &BubblePoint)> = datasets
        .iter()
        .flat_map(|d| d.points.iter().map(move |p| (d, p)))
        .collect();
    if points.is_empty() {
        return Vec::new();
    }

    let range = |f: fn(&BubblePoint) -> f64| {
        let lo = points.iter().map(|(_, p)| f(*p)).fold(f64::INFINITY, f64::min);
        let hi = points.iter().map(|(_, p)| f(*p)).fold(f64::NEG_INFINITY, f64::max);
        Bounds {
            min: lo,
            max: hi,
            len: points.len(),
        }
    };
    let xs = range(|p| p.x);
    let ys = range(|p| p.y);
    let max_r = points.iter().map(|(_, p)| p.r).fold(0.0, f64::max);
    let max_px = viewport.inner_width().min(viewport.inner_height()) / 4.0;

    points
        .into_iter()
        .map(|(d, p)| PlacedBubble {
            label: d.label.clone(),
            color: d.color.clone(),
            cx: viewport.padding + viewport.inner_width() * xs.fraction(p.x),
            cy: viewport.y_for(p.y, &ys),
            radius: if max_r > 0.0 { p.r / max_r * max_px } else { 0.0 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> Viewport {
        Viewport::new(120.0, 60.0, 10.0)
    }

    #[test]
    fn test_bounds_of_multiple_series() {
        let data = vec![
            Dataset::new("a", &[0.1, 0.3, 1.0], "#000"),
            Dataset::new("b", &[0.15, -0.2], "#fff"),
        ];
        let b = Bounds::of(&data).unwrap();
        assert_eq!(b.min, -0.2);
        assert_eq!(b.max, 1.0);
        assert_eq!(b.len, 3);
        assert!(Bounds::of(&[]).is_none());
        assert!(Bounds::of(&[Dataset::new("e", &[], "#000")]).is_none());
    }

    #[test]
    fn test_line_points_span_the_viewport() {
        let bounds = Bounds { min: 0.0, max: 10.0, len: 3 };
        let pts = line_points(&[0.0, 5.0, 10.0], &bounds, &vp());
        assert_eq!(pts[0], (10.0, 50.0));
        assert_eq!(pts[1], (60.0, 30.0));
        assert_eq!(pts[2], (110.0, 10.0));
    }

    #[test]
    fn test_single_point_and_flat_series_are_centred() {
        let bounds = Bounds { min: 4.0, max: 4.0, len: 1 };
        let pts = line_points(&[4.0], &bounds, &vp());
        assert_eq!(pts, vec![(60.0, 30.0)]);
    }

    #[test]
    fn test_polyline_format() {
        assert_eq!(svg_polyline(&[(1.0, 2.5), (3.333, 4.0)]), "1.00,2.50 3.33,4.00");
        assert_eq!(svg_polyline(&[]), "");
    }

    #[test]
    fn test_ticks_include_both_ends() {
        let b = Bounds { min: 0.0, max: 100.0, len: 12 };
        assert_eq!(b.ticks(5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert!(b.ticks(0).is_empty());
        let b = Bounds { min: 10.0, max: 90.0, len: 12 }.including_zero();
        assert_eq!(b.min, 0.0);
    }

    #[test]
    fn test_bubble_layout_scales_radius() {
        let data = vec![
            BubbleDataset::new("A", &[BubblePoint { x: 0.0, y: 0.0, r: 60.0 }], "#1"),
            BubbleDataset::new("B", &[BubblePoint { x: 1.0, y: 0.1, r: 80.0 }], "#2"),
        ];
        let placed = bubble_layout(&data, &vp());
        assert_eq!(placed.len(), 2);
        // inner 100x40 -> largest radius 10
        assert_eq!(placed[1].radius, 10.0);
        assert_eq!(placed[0].radius, 7.5);
        assert_eq!(placed[0].cx, 10.0);
        assert_eq!(placed[1].cx, 110.0);
        assert_eq!(placed[1].cy, 10.0);
        assert!(bubble_layout(&[], &vp()).is_empty());
    }
}
