//! Test Module
//!
//! Cross-module test suite for the survey backend.
//!
//! ## Test Categories
//! - `store_tests`: SQLite and local store contract (insert, newest-first fetch, persistence)
//! - `survey_tests`: submission pipeline, failure handling and dashboard assembly
//! - `config_tests`: environment-driven configuration

pub mod survey_tests;

use crate::models::{AgeGroup, Gender, IncomeBand, Language, Location, NewResponse, Sentiment, SurveySubmission};

/// A classified response with the given demographics.
pub fn new_response(
    age_group: AgeGroup,
    gender: Gender,
    location: Location,
    income_band: IncomeBand,
    sentiment: Sentiment,
    text: &str,
) -> NewResponse {
    NewResponse {
        age_group,
        gender,
        location,
        income_band,
        original_text: text.to_string(),
        translated_text: text.to_string(),
        sentiment,
        submission_language: Language::English,
    }
}

/// A complete English form.
pub fn form(age: &str, gender: &str, location: &str, income: &str, response: &str) -> SurveySubmission {
    SurveySubmission {
        age: age.to_string(),
        gender: gender.to_string(),
        location: location.to_string(),
        income: income.to_string(),
        response: response.to_string(),
        language: Language::English,
    }
}
