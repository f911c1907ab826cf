//! Chart data projection.
//!
//! Turns segment tallies into fixed-shape series for the dashboard charts.
//! Every expected segment appears in its chart even when no response fell
//! into it; such series are zero-filled and carry no `total`.

use serde::{Deserialize, Serialize};

use super::segments::{SegmentTallies, SegmentTally};
use crate::models::Sentiment;

/// (label, segment key) pairs for the location × gender chart, in display order.
const LOCATION_GENDER_SERIES: [(&str, &str); 4] = [
    ("Urban Male", "urban_male"),
    ("Urban Female", "urban_female"),
    ("Rural Male", "rural_male"),
    ("Rural Female", "rural_female"),
];

const AGE_SERIES: [(&str, &str); 3] = [
    ("Young (20-35)", "age_young"),
    ("Adult (35-50)", "age_adult"),
    ("Old (50+)", "age_old"),
];

const INCOME_SERIES: [(&str, &str); 4] = [
    ("<20k", "income_<20k"),
    ("20-50k", "income_20-50k"),
    ("50-100k", "income_50-100k"),
    (">100k", "income_>100k"),
];

pub const POSITIVE_COLOR: &str = "#10B981";
pub const NEGATIVE_COLOR: &str = "#EF4444";
pub const NEUTRAL_COLOR: &str = "#6B7280";

/// One labeled bar group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    /// Present only when the segment had responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl ChartSeries {
    fn from_tally(name: &str, tally: Option<&SegmentTally>) -> Self {
        match tally {
            Some(tally) => Self {
                name: name.to_string(),
                positive: tally.positive,
                negative: tally.negative,
                neutral: tally.neutral,
                total: Some(tally.total),
            },
            None => Self {
                name: name.to_string(),
                positive: 0,
                negative: 0,
                neutral: 0,
                total: None,
            },
        }
    }
}

/// One slice of the overall sentiment pie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: u64,
    pub color: String,
}

impl PieSlice {
    fn new(name: &str, value: u64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            color: color.to_string(),
        }
    }
}

/// Everything the dashboard charts need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub location_gender: [ChartSeries; 4],
    pub age: [ChartSeries; 3],
    pub income: [ChartSeries; 4],
    pub pie: [PieSlice; 3],
    pub overall: SegmentTally,
}

fn series<const N: usize>(tallies: &SegmentTallies, layout: [(&str, &str); N]) -> [ChartSeries; N] {
    layout.map(|(name, key)| ChartSeries::from_tally(name, tallies.get(key)))
}

/// Project tallies onto the fixed chart layout.
pub fn project(tallies: &SegmentTallies) -> ChartData {
    let overall = tallies.overall().copied().unwrap_or_default();

    ChartData {
        location_gender: series(tallies, LOCATION_GENDER_SERIES),
        age: series(tallies, AGE_SERIES),
        income: series(tallies, INCOME_SERIES),
        pie: [
            PieSlice::new("Positive", overall.count(Sentiment::Positive), POSITIVE_COLOR),
            PieSlice::new("Negative", overall.count(Sentiment::Negative), NEGATIVE_COLOR),
            PieSlice::new("Neutral", overall.count(Sentiment::Neutral), NEUTRAL_COLOR),
        ],
        overall,
    }
}
