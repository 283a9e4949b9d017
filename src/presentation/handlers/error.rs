use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{LedgerError, PinError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Body errors keep the extractor's status but use the JSON error shape.
pub fn rejection_response(rejection: JsonRejection) -> Response {
    tracing::warn!(error = %rejection.body_text(), "Rejected request body");
    error_response(rejection.status(), rejection.body_text())
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        match self {
            LedgerError::Validation(e) => {
                tracing::warn!(error = %e, "Rejected job entry");
                error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            LedgerError::Store(e) => {
                tracing::error!(error = %e, "Job store failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Storage failed: {}", e))
            }
            LedgerError::Delivery(e) => {
                tracing::error!(error = %e, "CSV export failed");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Export failed: {}", e))
            }
        }
    }
}

impl IntoResponse for PinError {
    fn into_response(self) -> Response {
        match self {
            PinError::Validation(e) => error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            PinError::Store(e) => {
                tracing::error!(error = %e, "PIN store failure");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Storage failed: {}", e))
            }
        }
    }
}
