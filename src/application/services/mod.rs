mod ledger_service;
mod pin_service;
mod record_store;
mod reporting_engine;

pub use ledger_service::{JobTotals, LedgerError, LedgerService};
pub use pin_service::{PinError, PinService};
pub use record_store::{JOBS_KEY, PIN_KEY, RecordStore, RecordStoreError};
pub use reporting_engine::{
    CSV_HEADERS, DEFAULT_MILEAGE_RATE, ExportOutcome, ReportRow, ReportingEngine, escape_field,
    export_filename,
};
