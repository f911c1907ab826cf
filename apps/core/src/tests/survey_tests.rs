//! Survey Service Tests
//!
//! Submission pipeline against real and failing stores, plus dashboard assembly.

use super::form;
use crate::analysis::{PassThroughTranslator, SentimentClassifier, NO_DATA_MESSAGE};
use crate::error::AppError;
use crate::models::{AgeGroup, Language, NewResponse, ResponseRecord, Sentiment};
use crate::store::{LocalStore, ResponseStore};
use crate::survey::SurveyService;
use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

const TIMEOUT: Duration = Duration::from_secs(5);

fn create_service() -> (SurveyService, Arc<LocalStore>) {
    let store = Arc::new(LocalStore::in_memory());
    (SurveyService::new(store.clone(), TIMEOUT), store)
}

/// Store double that counts calls and fails or stalls on demand.
#[derive(Default)]
struct ScriptedStore {
    inserts: AtomicUsize,
    fail: bool,
    delay: Option<Duration>,
}

#[async_trait]
impl ResponseStore for ScriptedStore {
    async fn insert(&self, _response: NewResponse) -> Result<ResponseRecord, AppError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Err(AppError::Io(io::Error::new(io::ErrorKind::Other, "disk unavailable")))
    }

    async fn fetch_all(&self) -> Result<Vec<ResponseRecord>, AppError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(AppError::Io(io::Error::new(io::ErrorKind::Other, "disk unavailable")));
        }
        Ok(Vec::new())
    }

    fn backend(&self) -> &'static str {
        "scripted"
    }
}

/// Labels everything with a fixed sentiment.
struct FixedClassifier(Sentiment);

impl SentimentClassifier for FixedClassifier {
    fn classify(&self, _text: &str) -> Sentiment {
        self.0
    }
}

#[cfg(test)]
mod submission_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_classifies_once_and_stores() {
        let (service, store) = create_service();

        let record = service
            .submit(&form("20-35", "male", "urban", "<20k", "This is excellent and great"))
            .await
            .expect("Submission should succeed");

        assert_eq!(record.sentiment, Sentiment::Positive);
        assert_eq!(record.age_group, AgeGroup::From20To35);
        assert_eq!(record.translated_text, "This is excellent and great");

        let stored = store.fetch_all().await.unwrap();
        assert_eq!(stored, vec![record]);
    }

    #[tokio::test]
    async fn test_missing_field_never_reaches_store() {
        let store = Arc::new(ScriptedStore::default());
        let service = SurveyService::new(store.clone(), TIMEOUT);

        let err = service
            .submit(&form("20-35", "", "urban", "<20k", "fine"))
            .await
            .expect_err("Blank gender must be rejected");

        assert!(matches!(err, AppError::Validation(ref m) if m == "Please fill in all fields"));
        assert!(!err.is_persistence());
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_response_text_is_rejected() {
        let (service, store) = create_service();

        let err = service
            .submit(&form("35-50", "female", "rural", "20-50k", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_option_is_rejected() {
        let (service, store) = create_service();

        let err = service
            .submit(&form("65+", "male", "urban", "<20k", "good"))
            .await
            .unwrap_err();

        match err {
            AppError::Validation(message) => assert!(message.contains("65+")),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_urdu_submission_keeps_language_and_text() {
        let (service, _store) = create_service();
        let mut urdu = form("50+", "female", "rural", ">100k", "یہ بہت برا ہے");
        urdu.language = Language::Urdu;

        let record = service.submit(&urdu).await.unwrap();

        assert_eq!(record.submission_language, Language::Urdu);
        assert_eq!(record.original_text, "یہ بہت برا ہے");
        assert_eq!(record.sentiment, Sentiment::Negative);
    }

    #[tokio::test]
    async fn test_urdu_validation_message_falls_back_to_english() {
        let (service, _store) = create_service();
        let mut urdu = form("", "female", "rural", ">100k", "ٹھیک");
        urdu.language = Language::Urdu;

        let err = service.submit(&urdu).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Please fill in all fields"));
    }

    #[tokio::test]
    async fn test_injected_classifier_is_used() {
        let store = Arc::new(LocalStore::in_memory());
        let service = SurveyService::with_components(
            store,
            Arc::new(FixedClassifier(Sentiment::Neutral)),
            Arc::new(PassThroughTranslator),
            TIMEOUT,
        );

        let record = service
            .submit(&form("35-50", "male", "urban", "50-100k", "terrible and bad"))
            .await
            .unwrap();
        assert_eq!(record.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_prepare_performs_no_io() {
        let store = Arc::new(ScriptedStore::default());
        let service = SurveyService::new(store.clone(), TIMEOUT);

        let prepared = service
            .prepare(&form("20-35", "female", "urban", "<20k", "I am angry"))
            .unwrap();

        assert_eq!(prepared.sentiment, Sentiment::Negative);
        assert_eq!(store.inserts.load(Ordering::SeqCst), 0);
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_store_failure_is_surfaced() {
        let store = Arc::new(ScriptedStore {
            fail: true,
            ..Default::default()
        });
        let service = SurveyService::new(store.clone(), TIMEOUT);

        let err = service
            .submit(&form("20-35", "male", "urban", "<20k", "good"))
            .await
            .unwrap_err();

        assert!(err.is_persistence());
        assert_eq!(store.inserts.load(Ordering::SeqCst), 1);

        let err = service.dashboard().await.unwrap_err();
        assert!(err.is_persistence());
    }

    #[tokio::test]
    async fn test_slow_store_times_out() {
        let store = Arc::new(ScriptedStore {
            delay: Some(Duration::from_secs(60)),
            ..Default::default()
        });
        let service = SurveyService::new(store, Duration::from_millis(20));

        let err = service
            .submit(&form("20-35", "male", "urban", "<20k", "good"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Timeout(_)));
        assert!(err.is_persistence());

        let err = service.responses().await.unwrap_err();
        assert!(matches!(err, AppError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_timed_out_local_insert_keeps_file_and_memory_in_step() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("survey_responses.json");
        let store = Arc::new(LocalStore::open(&path).await.unwrap());

        let mut stored = 0;
        for micros in 0..200 {
            let service = SurveyService::new(store.clone(), Duration::from_micros(micros));
            let result = service
                .submit(&form("35-50", "female", "rural", "20-50k", "bad"))
                .await;
            if let Err(err) = &result {
                assert!(matches!(err, AppError::Timeout(_)), "unexpected error: {:?}", err);
            }

            let in_memory = store.fetch_all().await.unwrap();
            let on_disk = LocalStore::open(&path).await.unwrap().fetch_all().await.unwrap();
            assert_eq!(in_memory, on_disk, "file and memory diverged at {}µs", micros);

            assert!(in_memory.len() >= stored);
            stored = in_memory.len();
            if let Ok(record) = result {
                assert_eq!(in_memory[0].id, record.id);
            }
        }
        assert!(!path.with_extension("json.tmp").exists());
    }
}

#[cfg(test)]
mod dashboard_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_dashboard() {
        let (service, _store) = create_service();

        let dashboard = service.dashboard().await.unwrap();

        assert_eq!(dashboard.summary.total_responses, 0);
        assert!(dashboard.segments.is_empty());
        assert_eq!(dashboard.report, NO_DATA_MESSAGE);
        assert!(dashboard.charts.age.iter().all(|s| s.positive + s.negative + s.neutral == 0));
    }

    #[tokio::test]
    async fn test_dashboard_reflects_stored_labels() {
        let (service, _store) = create_service();
        let submissions = [
            form("20-35", "male", "urban", "<20k", "great prices"),
            form("20-35", "female", "urban", "<20k", "happy"),
            form("35-50", "male", "rural", "20-50k", "terrible"),
            form("50+", "female", "rural", ">100k", "no comment"),
        ];
        for submission in &submissions {
            service.submit(submission).await.unwrap();
        }

        let dashboard = service.dashboard().await.unwrap();

        assert_eq!(dashboard.summary.total_responses, 4);
        assert_eq!(dashboard.summary.positive, 2);
        assert_eq!(dashboard.summary.negative, 1);
        assert_eq!(dashboard.summary.neutral, 1);

        let young = dashboard.segments.get("age_young").unwrap();
        assert_eq!((young.positive, young.total), (2, 2));
        assert_eq!(dashboard.segments.get("rural_female").unwrap().neutral, 1);
        assert!(dashboard.segments.get("income_50-100k").is_none());

        let age_totals: u64 = dashboard.charts.age.iter().filter_map(|s| s.total).sum();
        assert_eq!(age_totals, 4);
        assert!(dashboard.report.contains("**Total Responses:** 4"));
        assert!(dashboard.report.contains("50.0%"));
    }

    #[tokio::test]
    async fn test_dashboard_is_stable_across_reads() {
        let (service, _store) = create_service();
        service
            .submit(&form("35-50", "female", "urban", "50-100k", "satisfied"))
            .await
            .unwrap();

        let first = service.dashboard().await.unwrap();
        let second = service.dashboard().await.unwrap();

        assert_eq!(first.segments, second.segments);
        assert_eq!(first.report, second.report);
    }
}
