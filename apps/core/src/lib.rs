//! Survey sentiment segmentation.
//!
//! Collects demographic survey responses, classifies their sentiment once at
//! submission, and aggregates them into overlapping demographic segments for
//! charts, a text report and CSV export.

pub mod analysis;
pub mod config;
pub mod error;
pub mod fs_manager;
pub mod models;
pub mod phrases;
pub mod store;
pub mod survey;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use error::AppError;
pub use survey::{Dashboard, SurveyService};
