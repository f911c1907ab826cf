//! Survey service: submission pipeline and dashboard assembly.
//!
//! Submission runs validate → translate → classify → persist. Sentiment is
//! computed exactly once here; every later read uses the stored label.

use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use validator::Validate;

use crate::analysis::{
    aggregate, project, synthesize, ChartData, KeywordClassifier, PassThroughTranslator,
    SegmentTallies, SentimentClassifier, Translator,
};
use crate::error::AppError;
use crate::models::{
    AgeGroup, Gender, IncomeBand, Location, NewResponse, ResponseRecord, SurveySubmission,
};
use crate::phrases::Phrase;
use crate::store::ResponseStore;

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCards {
    pub total_responses: usize,
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

/// Everything the results view renders, computed from one snapshot of the store.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub summary: SummaryCards,
    pub segments: SegmentTallies,
    pub charts: ChartData,
    pub report: String,
}

impl Dashboard {
    /// Builds the dashboard from a full record set.
    pub fn from_records(records: &[ResponseRecord]) -> Self {
        let segments = aggregate(records);
        let charts = project(&segments);
        let report = synthesize(&charts.overall);

        Self {
            summary: SummaryCards {
                total_responses: records.len(),
                positive: charts.overall.positive,
                negative: charts.overall.negative,
                neutral: charts.overall.neutral,
            },
            segments,
            charts,
            report,
        }
    }
}

pub struct SurveyService {
    store: Arc<dyn ResponseStore>,
    classifier: Arc<dyn SentimentClassifier>,
    translator: Arc<dyn Translator>,
    store_timeout: Duration,
}

impl SurveyService {
    /// Service with the keyword classifier and pass-through translator.
    pub fn new(store: Arc<dyn ResponseStore>, store_timeout: Duration) -> Self {
        Self::with_components(
            store,
            Arc::new(KeywordClassifier::new()),
            Arc::new(PassThroughTranslator),
            store_timeout,
        )
    }

    pub fn with_components(
        store: Arc<dyn ResponseStore>,
        classifier: Arc<dyn SentimentClassifier>,
        translator: Arc<dyn Translator>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store,
            classifier,
            translator,
            store_timeout,
        }
    }

    /// Bounds a store call by the configured timeout. No retry.
    async fn with_timeout<T>(
        &self,
        operation: &str,
        call: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(result) => result,
            Err(elapsed) => {
                error!("Store {} timed out after {:?}", operation, self.store_timeout);
                Err(elapsed.into())
            }
        }
    }

    /// Turns a raw form into a classified response, or rejects it.
    ///
    /// Performs no I/O.
    pub fn prepare(&self, form: &SurveySubmission) -> Result<NewResponse, AppError> {
        if let Err(errors) = form.validate() {
            debug!("Submission rejected: {}", errors);
            return Err(AppError::Validation(
                Phrase::FillAllFields.text(form.language).to_string(),
            ));
        }

        let age_group: AgeGroup = form.age.parse()?;
        let gender: Gender = form.gender.parse()?;
        let location: Location = form.location.parse()?;
        let income_band: IncomeBand = form.income.parse()?;

        let translated_text = self.translator.to_english(&form.response, form.language);
        let sentiment = self.classifier.classify(&translated_text);

        Ok(NewResponse {
            age_group,
            gender,
            location,
            income_band,
            original_text: form.response.clone(),
            translated_text,
            sentiment,
            submission_language: form.language,
        })
    }

    /// Validates, classifies and stores one submission.
    #[instrument(skip_all, fields(language = %form.language))]
    pub async fn submit(&self, form: &SurveySubmission) -> Result<ResponseRecord, AppError> {
        let response = self.prepare(form)?;
        let sentiment = response.sentiment;

        let record = self
            .with_timeout("insert", self.store.insert(response))
            .await
            .map_err(|e| {
                error!("Error submitting survey via {}: {}", self.store.backend(), e);
                e
            })?;

        info!("Stored response {} ({})", record.id, sentiment);
        Ok(record)
    }

    /// All stored responses, newest first.
    pub async fn responses(&self) -> Result<Vec<ResponseRecord>, AppError> {
        self.with_timeout("fetch", self.store.fetch_all())
            .await
            .map_err(|e| {
                error!("Error loading responses via {}: {}", self.store.backend(), e);
                e
            })
    }

    /// Tallies across the current record set.
    pub async fn segments(&self) -> Result<SegmentTallies, AppError> {
        Ok(aggregate(&self.responses().await?))
    }

    /// Full dashboard over the current record set.
    pub async fn dashboard(&self) -> Result<Dashboard, AppError> {
        let records = self.responses().await?;
        Ok(Dashboard::from_records(&records))
    }
}
