mod job;
mod job_draft;
mod job_id;
mod pin;
mod validation_error;

pub use job::Job;
pub use job_draft::{AmountInput, JobDraft, parse_amount};
pub use job_id::JobId;
pub use pin::Pin;
pub use validation_error::ValidationError;
