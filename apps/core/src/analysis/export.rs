//! CSV export of segment tallies.

use csv::{Terminator, WriterBuilder};
use std::io::Write;

use super::segments::SegmentTallies;
use crate::error::AppError;

/// Default file name for exported tallies.
pub const EXPORT_FILE_NAME: &str = "medicine_survey_analysis.csv";

const HEADER: [&str; 5] = ["Segment", "Positive", "Negative", "Neutral", "Total"];

/// Write one row per segment, in tally order, after the header row.
pub fn write_csv<W: Write>(tallies: &SegmentTallies, sink: W) -> Result<(), AppError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record(HEADER)?;
    for (segment, tally) in tallies.iter() {
        writer.write_record([
            segment.to_string(),
            tally.positive.to_string(),
            tally.negative.to_string(),
            tally.neutral.to_string(),
            tally.total.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Render the export as a string.
pub fn to_csv(tallies: &SegmentTallies) -> Result<String, AppError> {
    let mut buffer = Vec::new();
    write_csv(tallies, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| AppError::Internal(format!("CSV output is not UTF-8: {}", e)))
}
