use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{JobTotals, LedgerError};
use crate::domain::{Job, JobDraft, JobId};
use crate::presentation::handlers::error::{error_response, rejection_response};
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    pub created_at: i64,
    pub date: Option<String>,
    pub customer: String,
    pub description: String,
    pub flat_rate: f64,
    pub materials: Option<f64>,
    pub miles: Option<f64>,
    pub total: f64,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            total: job.total(),
            date: job.iso_date(),
            id: job.id.to_string(),
            created_at: job.created_at,
            customer: job.customer,
            description: job.description,
            flat_rate: job.flat_rate,
            materials: job.materials,
            miles: job.miles,
        }
    }
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobResponse>,
    pub totals: JobTotals,
}

#[tracing::instrument(skip(state))]
pub async fn list_jobs_handler(State(state): State<AppState>) -> Result<Response, LedgerError> {
    let jobs = state.ledger_service.list_jobs().await?;
    let totals = JobTotals::from_jobs(&jobs);

    tracing::debug!(count = totals.count, "Listing jobs");

    let response = JobListResponse {
        jobs: jobs.into_iter().map(JobResponse::from).collect(),
        totals,
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}

#[tracing::instrument(skip(state, payload))]
pub async fn create_job_handler(
    State(state): State<AppState>,
    payload: Result<Json<JobDraft>, JsonRejection>,
) -> Result<Response, LedgerError> {
    let Json(draft) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Ok(rejection_response(rejection)),
    };
    let job = state.ledger_service.add_job(draft).await?;
    Ok((StatusCode::CREATED, Json(JobResponse::from(job))).into_response())
}

#[tracing::instrument(skip(state))]
pub async fn get_job_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Response, LedgerError> {
    match state.ledger_service.get_job(&JobId::new(job_id.clone())).await? {
        Some(job) => Ok((StatusCode::OK, Json(JobResponse::from(job))).into_response()),
        None => Ok(error_response(
            StatusCode::NOT_FOUND,
            format!("Job not found: {}", job_id),
        )),
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_job_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Response, LedgerError> {
    if state.ledger_service.delete_job(&JobId::new(job_id.clone())).await? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(error_response(
            StatusCode::NOT_FOUND,
            format!("Job not found: {}", job_id),
        ))
    }
}
