//! # Analysis Module
//!
//! Pure, I/O-free survey analysis.
//!
//! ## Components
//! - `sentiment`: keyword sentiment classification (at submission time)
//! - `translate`: translation capability applied before classification
//! - `segments`: demographic segmentation into sentiment tallies
//! - `charts`: fixed-shape chart series from tallies
//! - `report`: text report from the overall tally
//! - `export`: CSV rendering of tallies

pub mod charts;
pub mod export;
pub mod report;
pub mod segments;
pub mod sentiment;
pub mod translate;

pub use charts::{project, ChartData, ChartSeries, PieSlice};
pub use export::{to_csv, write_csv, EXPORT_FILE_NAME};
pub use report::{synthesize, NO_DATA_MESSAGE};
pub use segments::{aggregate, segment_keys, AgeBucket, SegmentTallies, SegmentTally, OVERALL_KEY};
pub use sentiment::{KeywordClassifier, SentimentClassifier};
pub use translate::{PassThroughTranslator, Translator};
