use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::PinError;
use crate::presentation::handlers::error::rejection_response;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct PinRequest {
    pub pin: String,
}

#[derive(Serialize)]
pub struct LockStatusResponse {
    pub enabled: bool,
}

#[derive(Serialize)]
pub struct UnlockResponse {
    pub unlocked: bool,
}

pub async fn lock_status_handler(State(state): State<AppState>) -> Result<Response, PinError> {
    let enabled = state.pin_service.is_enabled().await?;
    Ok((StatusCode::OK, Json(LockStatusResponse { enabled })).into_response())
}

#[tracing::instrument(skip(state, payload))]
pub async fn unlock_handler(
    State(state): State<AppState>,
    payload: Result<Json<PinRequest>, JsonRejection>,
) -> Result<Response, PinError> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Ok(rejection_response(rejection)),
    };
    let unlocked = state.pin_service.verify(&request.pin).await?;
    if !unlocked {
        tracing::warn!("Unlock attempt with wrong PIN");
    }
    Ok((StatusCode::OK, Json(UnlockResponse { unlocked })).into_response())
}

#[tracing::instrument(skip(state, payload))]
pub async fn set_pin_handler(
    State(state): State<AppState>,
    payload: Result<Json<PinRequest>, JsonRejection>,
) -> Result<Response, PinError> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return Ok(rejection_response(rejection)),
    };
    state.pin_service.set_pin(&request.pin).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[tracing::instrument(skip(state))]
pub async fn clear_pin_handler(State(state): State<AppState>) -> Result<Response, PinError> {
    state.pin_service.clear_pin().await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
