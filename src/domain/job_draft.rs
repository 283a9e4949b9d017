use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Job, JobId, ValidationError};

/// A numeric entry as typed by the user, either a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Text input keeps only ASCII digits and `.` before parsing; anything
    /// that still fails to parse, or overflows, counts as zero.
    pub fn value(&self) -> f64 {
        match self {
            // `+ 0.0` turns a negative zero into zero.
            Self::Number(n) if n.is_finite() => *n + 0.0,
            Self::Number(_) => 0.0,
            Self::Text(text) => parse_amount(text),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

pub fn parse_amount(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Unvalidated job entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub customer: String,
    #[serde(default)]
    pub description: String,
    pub flat_rate: AmountInput,
    #[serde(default)]
    pub materials: Option<AmountInput>,
    #[serde(default)]
    pub miles: Option<AmountInput>,
}

impl JobDraft {
    /// Validates the draft and stamps it with a fresh id and `now`.
    pub fn into_job(self, now: DateTime<Utc>) -> Result<Job, ValidationError> {
        let customer = self.customer.trim();
        if customer.is_empty() {
            return Err(ValidationError::MissingCustomer);
        }

        let flat_rate = self.flat_rate.value();
        if flat_rate <= 0.0 {
            return Err(ValidationError::NonPositiveFlatRate);
        }

        let materials = optional_amount(self.materials, "materials")?;
        let miles = optional_amount(self.miles, "miles")?;

        Ok(Job {
            id: JobId::generate(),
            created_at: now.timestamp_millis(),
            customer: customer.to_string(),
            description: self.description.trim().to_string(),
            flat_rate,
            materials,
            miles,
        })
    }
}

fn optional_amount(
    input: Option<AmountInput>,
    field: &'static str,
) -> Result<Option<f64>, ValidationError> {
    match input {
        None => Ok(None),
        Some(input) if input.is_blank() => Ok(None),
        Some(input) => {
            let value = input.value();
            if value < 0.0 {
                return Err(ValidationError::NegativeAmount(field));
            }
            Ok(Some(value))
        }
    }
}
