use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::application::ports::DeliveryError;
use crate::application::services::{ExportOutcome, RecordStore, RecordStoreError, ReportingEngine};
use crate::domain::{Job, JobDraft, JobId, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct JobTotals {
    pub count: usize,
    pub income: f64,
    pub materials: f64,
    pub miles: f64,
}

impl JobTotals {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        jobs.iter().fold(Self::default(), |acc, job| Self {
            count: acc.count + 1,
            income: acc.income + job.flat_rate,
            materials: acc.materials + job.materials.unwrap_or(0.0),
            miles: acc.miles + job.miles.unwrap_or(0.0),
        })
    }
}

/// Job entry, listing, deletion and export on top of the record store.
///
/// Every mutation reads the whole collection, changes it in memory and writes
/// it back; overlapping mutations are last-write-wins.
pub struct LedgerService {
    records: Arc<RecordStore>,
    reporting: Arc<ReportingEngine>,
}

impl LedgerService {
    pub fn new(records: Arc<RecordStore>, reporting: Arc<ReportingEngine>) -> Self {
        Self { records, reporting }
    }

    pub async fn add_job(&self, draft: JobDraft) -> Result<Job, LedgerError> {
        let job = draft.into_job(Utc::now())?;

        let mut jobs = self.records.load_jobs().await?;
        jobs.push(job.clone());
        self.records.save_jobs(&jobs).await?;

        tracing::info!(job_id = %job.id, customer = %job.customer, "Job added");
        Ok(job)
    }

    /// All jobs, newest first.
    pub async fn list_jobs(&self) -> Result<Vec<Job>, LedgerError> {
        let mut jobs = self.records.load_jobs().await?;
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    pub async fn totals(&self) -> Result<JobTotals, LedgerError> {
        let jobs = self.records.load_jobs().await?;
        Ok(JobTotals::from_jobs(&jobs))
    }

    pub async fn get_job(&self, id: &JobId) -> Result<Option<Job>, LedgerError> {
        let jobs = self.records.load_jobs().await?;
        Ok(jobs.into_iter().find(|job| &job.id == id))
    }

    /// Returns `false` without writing when no job has `id`.
    pub async fn delete_job(&self, id: &JobId) -> Result<bool, LedgerError> {
        let jobs = self.records.load_jobs().await?;
        let before = jobs.len();
        let remaining: Vec<Job> = jobs.into_iter().filter(|job| &job.id != id).collect();

        if remaining.len() == before {
            return Ok(false);
        }

        self.records.save_jobs(&remaining).await?;
        tracing::info!(job_id = %id, "Job deleted");
        Ok(true)
    }

    pub async fn export(&self) -> Result<ExportOutcome, LedgerError> {
        let jobs = self.list_jobs().await?;
        Ok(self.reporting.export_jobs(&jobs).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("store: {0}")]
    Store(#[from] RecordStoreError),
    #[error("delivery: {0}")]
    Delivery(#[from] DeliveryError),
}
