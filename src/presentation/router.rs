use axum::Router;
use axum::middleware;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    clear_pin_handler, create_job_handler, delete_job_handler, export_handler, get_job_handler,
    health_handler, list_jobs_handler, lock_status_handler, set_pin_handler, unlock_handler,
};
use crate::presentation::middleware::pin_guard;
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let locked = Router::new()
        .route(
            "/api/v1/jobs",
            get(list_jobs_handler).post(create_job_handler),
        )
        .route(
            "/api/v1/jobs/{job_id}",
            get(get_job_handler).delete(delete_job_handler),
        )
        .route("/api/v1/export", post(export_handler))
        .route("/api/v1/pin", put(set_pin_handler).delete(clear_pin_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), pin_guard));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/lock", get(lock_status_handler))
        .route("/api/v1/lock/unlock", post(unlock_handler))
        .merge(locked)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
