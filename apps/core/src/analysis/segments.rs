//! Demographic segmentation of responses.
//!
//! Every record lands in exactly four overlapping segments:
//! `{location}_{gender}`, `age_{bucket}`, `income_{band}` and `overall`.
//! Tallies are rebuilt from the full record set on every call.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::{AgeGroup, ResponseRecord, Sentiment};

/// Key of the segment counting every response.
pub const OVERALL_KEY: &str = "overall";

/// Coarse age bucket used in segment keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBucket {
    Young,
    Adult,
    Old,
}

impl AgeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBucket::Young => "young",
            AgeBucket::Adult => "adult",
            AgeBucket::Old => "old",
        }
    }
}

impl From<AgeGroup> for AgeBucket {
    fn from(age: AgeGroup) -> Self {
        match age {
            AgeGroup::From20To35 => AgeBucket::Young,
            AgeGroup::From35To50 => AgeBucket::Adult,
            AgeGroup::Over50 => AgeBucket::Old,
        }
    }
}

/// Sentiment counters for one segment.
///
/// `total` always equals `positive + negative + neutral`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentTally {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub total: u64,
}

impl SegmentTally {
    /// Count one response with the given sentiment.
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Neutral => self.neutral += 1,
        }
        self.total += 1;
    }

    pub fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// Segment key → tally, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentTallies(IndexMap<String, SegmentTally>);

impl SegmentTallies {
    pub fn get(&self, key: &str) -> Option<&SegmentTally> {
        self.0.get(key)
    }

    /// The tally across all responses, if any were aggregated.
    pub fn overall(&self) -> Option<&SegmentTally> {
        self.get(OVERALL_KEY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SegmentTally)> {
        self.0.iter().map(|(key, tally)| (key.as_str(), tally))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn record(&mut self, key: String, sentiment: Sentiment) {
        self.0.entry(key).or_default().record(sentiment);
    }
}

/// The four segment keys a record contributes to.
pub fn segment_keys(record: &ResponseRecord) -> [String; 4] {
    let bucket = AgeBucket::from(record.age_group);
    [
        format!("{}_{}", record.location, record.gender),
        format!("age_{}", bucket.as_str()),
        format!("income_{}", record.income_band),
        OVERALL_KEY.to_string(),
    ]
}

/// Bucket records into segment tallies.
///
/// Segments no record falls into are absent from the result.
pub fn aggregate(records: &[ResponseRecord]) -> SegmentTallies {
    let mut tallies = SegmentTallies::default();
    for record in records {
        for key in segment_keys(record) {
            tallies.record(key, record.sentiment);
        }
    }
    tallies
}
