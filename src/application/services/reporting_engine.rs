use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::application::ports::{Delivery, DeliveryError, DeliveryStrategy};
use crate::domain::Job;

pub const DEFAULT_MILEAGE_RATE: f64 = 0.67;

pub const CSV_HEADERS: [&str; 13] = [
    "id",
    "createdAt",
    "date",
    "customer",
    "description",
    "flatRate",
    "materials",
    "miles",
    "mileageRate",
    "mileageDeduction",
    "net",
    "netAfterMileage",
    "total",
];

/// Derived financial view of one job.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow<'a> {
    pub job: &'a Job,
    pub date: String,
    pub mileage_rate: f64,
    pub mileage_deduction: f64,
    pub net: f64,
    pub net_after_mileage: f64,
    pub total: f64,
}

impl<'a> ReportRow<'a> {
    pub fn new(job: &'a Job, mileage_rate: f64) -> Self {
        let materials_value = job.materials.unwrap_or(0.0);
        let miles_value = job.miles.unwrap_or(0.0);

        let net = job.flat_rate - materials_value;
        let mileage_deduction = miles_value * mileage_rate;

        Self {
            job,
            date: job.iso_date().unwrap_or_default(),
            mileage_rate,
            mileage_deduction,
            net,
            net_after_mileage: net - mileage_deduction,
            total: job.flat_rate + materials_value,
        }
    }

    /// Cells in header order. Untracked materials and miles stay empty.
    pub fn fields(&self) -> [String; 13] {
        let optional = |v: Option<f64>| v.map(number).unwrap_or_default();

        [
            self.job.id.to_string(),
            self.job.created_at.to_string(),
            self.date.clone(),
            self.job.customer.clone(),
            self.job.description.clone(),
            number(self.job.flat_rate),
            optional(self.job.materials),
            optional(self.job.miles),
            number(self.mileage_rate),
            number(self.mileage_deduction),
            number(self.net),
            number(self.net_after_mileage),
            number(self.total),
        ]
    }
}

/// Shortest round-trip decimal; negative zero prints as `0`.
fn number(value: f64) -> String {
    (value + 0.0).to_string()
}

/// Quotes a cell only when it contains a comma, a double quote or a newline.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("task-lab-jobs-{}.csv", date.format("%Y-%m-%d"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub filename: String,
    pub delivery: Delivery,
}

/// Turns job collections into CSV reports and hands them to a delivery
/// strategy chosen when the engine is built.
pub struct ReportingEngine {
    mileage_rate: f64,
    delivery: Arc<dyn DeliveryStrategy>,
}

impl ReportingEngine {
    pub fn new(mileage_rate: f64, delivery: Arc<dyn DeliveryStrategy>) -> Self {
        Self {
            mileage_rate,
            delivery,
        }
    }

    pub fn mileage_rate(&self) -> f64 {
        self.mileage_rate
    }

    /// Rows follow the order of `jobs`; no sorting happens here.
    pub fn render_csv(&self, jobs: &[Job]) -> String {
        let mut lines = Vec::with_capacity(jobs.len() + 1);
        lines.push(CSV_HEADERS.join(","));

        for job in jobs {
            let row = ReportRow::new(job, self.mileage_rate);
            let cells: Vec<String> = row.fields().iter().map(|f| escape_field(f)).collect();
            lines.push(cells.join(","));
        }

        lines.join("\n")
    }

    pub async fn export_jobs(&self, jobs: &[Job]) -> Result<ExportOutcome, DeliveryError> {
        self.export_jobs_at(jobs, Utc::now()).await
    }

    pub async fn export_jobs_at(
        &self,
        jobs: &[Job],
        now: DateTime<Utc>,
    ) -> Result<ExportOutcome, DeliveryError> {
        let filename = export_filename(now.date_naive());
        let csv = self.render_csv(jobs);

        tracing::info!(filename = %filename, rows = jobs.len(), "Exporting jobs");

        let delivery = self.delivery.deliver(&filename, csv).await?;

        Ok(ExportOutcome { filename, delivery })
    }
}
