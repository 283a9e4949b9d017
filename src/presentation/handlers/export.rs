use axum::Json;
use axum::extract::State;
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::Delivery;
use crate::application::services::LedgerError;
use crate::presentation::state::AppState;

pub const EXPORT_FILENAME_HEADER: HeaderName = HeaderName::from_static("x-export-filename");

#[derive(Serialize)]
pub struct SavedExportResponse {
    pub filename: String,
    pub path: String,
    pub shared: bool,
}

/// Downloads come back as a CSV attachment; file deliveries report where the
/// report was written.
#[tracing::instrument(skip(state))]
pub async fn export_handler(State(state): State<AppState>) -> Result<Response, LedgerError> {
    let outcome = state.ledger_service.export().await?;

    let response = match outcome.delivery {
        Delivery::Download(download) => {
            let disposition = format!("attachment; filename=\"{}\"", download.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, download.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                    (EXPORT_FILENAME_HEADER, outcome.filename),
                ],
                download.content,
            )
                .into_response()
        }
        Delivery::SavedFile { path, shared } => (
            StatusCode::OK,
            Json(SavedExportResponse {
                filename: outcome.filename,
                path: path.display().to_string(),
                shared,
            }),
        )
            .into_response(),
    };

    Ok(response)
}
