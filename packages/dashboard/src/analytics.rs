//! Static series for the analytics page. There is no analytics backend yet;
//! these values only give the charts something to draw.

use crate::charts::{BubbleDataset, BubblePoint, Dataset};

const YELLOW: &str = "#FBBC05";
const VIOLET: &str = "#7B61FF";

/// A numeric summary card: headline value plus a small trend chart.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryCard {
    pub title: String,
    pub value: u64,
    pub data: Vec<Dataset>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsData {
    pub summaries: Vec<SummaryCard>,
    pub monthly_views: Vec<Dataset>,
    pub top_locations: Vec<BubbleDataset>,
}

impl AnalyticsData {
    pub fn placeholder() -> Self {
        let single = || vec![Dataset::new("Dataset 1", &[0.1, 0.3, 0.4, 0.6, 0.9, 1.0], YELLOW)];
        let pair = || {
            vec![
                Dataset::new("Dataset 1", &[0.1, 0.3, 0.4, 0.6, 0.9, 1.0], YELLOW),
                Dataset::new("Dataset 2", &[0.15, 0.35, 0.45, 0.62, 0.88, 0.97], VIOLET),
            ]
        };
        let card = |title: &str, data: Vec<Dataset>| SummaryCard {
            title: title.to_string(),
            value: 430,
            data,
        };

        Self {
            summaries: vec![
                card("Total Sessions", single()),
                card("Total Visitors", pair()),
                card("Time Spent", single()),
                card("Bounce Rate", pair()),
            ],
            monthly_views: vec![
                Dataset::new(
                    "Free Members",
                    &[20.0, 25.0, 10.0, 15.0, 70.0, 50.0, 70.0, 90.0, 80.0, 85.0, 80.0, 100.0],
                    "#6C60FF",
                ),
                Dataset::new(
                    "Premium Members",
                    &[10.0, 15.0, 5.0, 10.0, 40.0, 30.0, 50.0, 30.0, 50.0, 65.0, 70.0, 90.0],
                    "#CE2A96",
                ),
            ],
            top_locations: vec![
                BubbleDataset::new("USA", &[BubblePoint { x: 0.0, y: 0.0, r: 60.0 }], "#356235"),
                BubbleDataset::new(
                    "Australia",
                    &[BubblePoint { x: 0.5, y: 0.0, r: 80.0 }],
                    "#3576F4",
                ),
                BubbleDataset::new("England", &[BubblePoint { x: 1.0, y: 0.1, r: 70.0 }], VIOLET),
            ],
        }
    }
}
