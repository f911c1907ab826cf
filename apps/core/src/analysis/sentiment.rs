//! Keyword-based sentiment classification.
//!
//! Fast, deterministic stand-in for an NLP model: a response is positive or
//! negative only when it matches keywords of exactly one polarity.
//! English and Urdu keywords are matched as case-insensitive substrings.

use crate::models::Sentiment;

/// Positive keywords (English, then Urdu)
const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "excellent",
    "great",
    "positive",
    "happy",
    "satisfied",
    "اچھا",
    "بہترین",
    "خوش",
];

/// Negative keywords (English, then Urdu)
const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "negative",
    "sad",
    "angry",
    "برا",
    "غصہ",
    "ناراض",
];

/// Maps free text to a sentiment label.
///
/// Implementations must be pure: the same text always yields the same label.
pub trait SentimentClassifier: Send + Sync + 'static {
    fn classify(&self, text: &str) -> Sentiment;
}

/// Substring keyword matcher.
pub struct KeywordClassifier {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordClassifier {
    /// Create a classifier with the built-in English/Urdu keyword sets
    pub fn new() -> Self {
        Self::with_keywords(POSITIVE_KEYWORDS, NEGATIVE_KEYWORDS)
    }

    /// Create a classifier with custom keyword sets
    pub fn with_keywords(positive: &[&str], negative: &[&str]) -> Self {
        Self {
            positive: positive.iter().map(|k| k.to_lowercase()).collect(),
            negative: negative.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches_any(text: &str, keywords: &[String]) -> bool {
        keywords.iter().any(|keyword| text.contains(keyword.as_str()))
    }
}

impl SentimentClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();
        let has_positive = Self::matches_any(&lower, &self.positive);
        let has_negative = Self::matches_any(&lower, &self.negative);

        match (has_positive, has_negative) {
            (true, false) => Sentiment::Positive,
            (false, true) => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}
