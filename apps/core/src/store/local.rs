use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::ResponseStore;
use crate::error::AppError;
use crate::models::{NewResponse, ResponseRecord};

/// Process-local fallback store.
///
/// Keeps responses newest first in memory. When opened on a file, the whole
/// list is rewritten as a JSON array on every insert.
///
/// An insert runs its file write and memory update on a spawned task that
/// owns the lock, so dropping the caller's future (e.g. on timeout) never
/// leaves the file and memory disagreeing.
pub struct LocalStore {
    path: Option<PathBuf>,
    records: Arc<Mutex<Vec<ResponseRecord>>>,
}

impl LocalStore {
    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Opens the JSON file at `path`, starting empty if it does not exist yet.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let records = match fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice::<Vec<ResponseRecord>>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!("Loaded {} stored responses from {:?}", records.len(), path);

        Ok(Self {
            path: Some(path),
            records: Arc::new(Mutex::new(records)),
        })
    }

    /// Writes through a sibling temp file so a failed write leaves the old file intact.
    async fn persist(path: &Path, records: &[ResponseRecord]) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(records)?;
        let tmp = path.with_extension("json.tmp");

        let written = match fs::write(&tmp, json).await {
            Ok(()) => fs::rename(&tmp, path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&tmp).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!("Could not remove temp file {:?}: {}", tmp, cleanup);
                }
            }
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl ResponseStore for LocalStore {
    async fn insert(&self, response: NewResponse) -> Result<ResponseRecord, AppError> {
        let record = ResponseRecord::from_new(response, Uuid::new_v4().to_string(), Utc::now());
        let mut records = self.records.clone().lock_owned().await;
        let path = self.path.clone();

        let task = tokio::spawn(async move {
            let mut updated = Vec::with_capacity(records.len() + 1);
            updated.push(record.clone());
            updated.extend(records.iter().cloned());

            if let Some(path) = &path {
                if let Err(e) = Self::persist(path, &updated).await {
                    error!("Error saving survey response to {:?}: {}", path, e);
                    return Err(e);
                }
            }

            *records = updated;
            debug!("Stored survey response {} locally", record.id);
            Ok(record)
        });

        task.await
            .map_err(|e| AppError::Internal(format!("Local store write task failed: {}", e)))?
    }

    async fn fetch_all(&self) -> Result<Vec<ResponseRecord>, AppError> {
        Ok(self.records.lock().await.clone())
    }

    fn backend(&self) -> &'static str {
        "local"
    }
}
