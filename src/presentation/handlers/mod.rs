mod error;
mod export;
mod health;
mod jobs;
mod pin;

pub use error::{ErrorResponse, error_response};
pub use export::{EXPORT_FILENAME_HEADER, SavedExportResponse, export_handler};
pub use health::health_handler;
pub use jobs::{
    JobListResponse, JobResponse, create_job_handler, delete_job_handler, get_job_handler,
    list_jobs_handler,
};
pub use pin::{clear_pin_handler, lock_status_handler, set_pin_handler, unlock_handler};
