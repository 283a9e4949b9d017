use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::JobId;

/// One billable unit of work.
///
/// `materials` and `miles` are `None` when the user did not track them, which
/// is not the same as tracking a zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub created_at: i64,
    pub customer: String,
    #[serde(default)]
    pub description: String,
    pub flat_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miles: Option<f64>,
}

impl Job {
    /// Flat rate plus materials, with untracked materials counted as zero.
    pub fn total(&self) -> f64 {
        self.flat_rate + self.materials.unwrap_or(0.0)
    }

    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created_at)
    }

    /// `created_at` as UTC ISO-8601 with milliseconds, e.g. `2024-03-01T14:05:09.000Z`.
    pub fn iso_date(&self) -> Option<String> {
        self.created_at_utc().map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Whether the numeric fields satisfy the collection invariants.
    pub fn is_well_formed(&self) -> bool {
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;

        non_negative(self.flat_rate)
            && self.materials.is_none_or(non_negative)
            && self.miles.is_none_or(non_negative)
    }
}
