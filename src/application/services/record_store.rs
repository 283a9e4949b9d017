use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{KeyValueStore, KeyValueStoreError};
use crate::domain::{Job, Pin};

pub const JOBS_KEY: &str = "tasklab.jobs.v1";
pub const PIN_KEY: &str = "tasklab.pin.v1";

/// Persistence for the job collection and the optional PIN.
///
/// The collection is always read and written whole. Corrupt content reads as
/// an empty collection; only failures of the underlying store surface as
/// errors.
pub struct RecordStore {
    store: Arc<dyn KeyValueStore>,
}

impl RecordStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn load_jobs(&self) -> Result<Vec<Job>, RecordStoreError> {
        let Some(raw) = self.store.get(JOBS_KEY).await? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => items,
            Ok(_) => {
                tracing::warn!(key = JOBS_KEY, "Stored jobs are not an array, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                tracing::warn!(key = JOBS_KEY, error = %e, "Stored jobs are not valid JSON, treating as empty");
                return Ok(Vec::new());
            }
        };

        let total = items.len();
        let jobs: Vec<Job> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<Job>(item) {
                Ok(job) if job.is_well_formed() => Some(job),
                Ok(job) => {
                    tracing::warn!(index, job_id = %job.id, "Skipping stored job with invalid amounts");
                    None
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping undecodable stored job");
                    None
                }
            })
            .collect();

        tracing::debug!(loaded = jobs.len(), stored = total, "Jobs loaded");
        Ok(jobs)
    }

    /// Replaces the persisted collection with exactly `jobs`.
    pub async fn save_jobs(&self, jobs: &[Job]) -> Result<(), RecordStoreError> {
        let raw = serde_json::to_string(jobs)?;
        self.store.set(JOBS_KEY, &raw).await?;
        tracing::debug!(count = jobs.len(), "Jobs saved");
        Ok(())
    }

    pub async fn load_pin(&self) -> Result<Option<String>, RecordStoreError> {
        Ok(self.store.get(PIN_KEY).await?)
    }

    pub async fn save_pin(&self, pin: &Pin) -> Result<(), RecordStoreError> {
        self.store.set(PIN_KEY, pin.as_str()).await?;
        Ok(())
    }

    pub async fn clear_pin(&self) -> Result<(), RecordStoreError> {
        self.store.remove(PIN_KEY).await?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("storage: {0}")]
    Storage(#[from] KeyValueStoreError),
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}
