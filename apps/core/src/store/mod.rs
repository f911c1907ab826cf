//! Response persistence.
//!
//! Two interchangeable backends sit behind [`ResponseStore`]: a durable
//! SQLite database and a process-local fallback.

pub mod local;
pub mod sqlite;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::SurveyConfig;
use crate::error::AppError;
use crate::models::{NewResponse, ResponseRecord};

pub use local::LocalStore;
pub use sqlite::SqliteStore;

/// Defines the persistence contract for survey responses.
///
/// Responses are only ever inserted; nothing is updated or deleted.
#[async_trait]
pub trait ResponseStore: Send + Sync + 'static {
    /// Persists a response, assigning its id and creation timestamp.
    ///
    /// On failure nothing is stored.
    async fn insert(&self, response: NewResponse) -> Result<ResponseRecord, AppError>;

    /// Every stored response, newest first.
    async fn fetch_all(&self) -> Result<Vec<ResponseRecord>, AppError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// Opens the store selected by the configuration.
///
/// A configured database URL selects SQLite; otherwise responses are kept in
/// the local JSON file under the data directory.
pub async fn open_store(config: &SurveyConfig) -> Result<Arc<dyn ResponseStore>, AppError> {
    match &config.database_url {
        Some(url) => {
            let store = SqliteStore::connect(url, config.max_connections).await?;
            Ok(Arc::new(store))
        }
        None => {
            warn!("No database configured, falling back to the local response file");
            config.data_dir.init()?;
            let path = config.data_dir.local_store_file();
            let store = LocalStore::open(&path).await?;
            info!("Local store ready at {:?}", path);
            Ok(Arc::new(store))
        }
    }
}
