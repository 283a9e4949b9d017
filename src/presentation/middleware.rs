use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::presentation::handlers::error_response;
use crate::presentation::state::AppState;

pub const PIN_HEADER: &str = "x-task-lab-pin";

/// Rejects requests without the stored PIN in `x-task-lab-pin`. Passes
/// everything through while no PIN is set.
pub async fn pin_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let candidate = request
        .headers()
        .get(PIN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    match state.pin_service.verify(candidate).await {
        Ok(true) => next.run(request).await,
        Ok(false) => {
            tracing::warn!(uri = %request.uri().path(), "Locked ledger, missing or wrong PIN");
            error_response(StatusCode::UNAUTHORIZED, "Ledger is locked")
        }
        Err(e) => e.into_response(),
    }
}
