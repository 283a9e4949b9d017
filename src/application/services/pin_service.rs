use std::sync::Arc;

use crate::application::services::{RecordStore, RecordStoreError};
use crate::domain::{Pin, ValidationError};

pub struct PinService {
    records: Arc<RecordStore>,
}

impl PinService {
    pub fn new(records: Arc<RecordStore>) -> Self {
        Self { records }
    }

    pub async fn is_enabled(&self) -> Result<bool, PinError> {
        Ok(self.records.load_pin().await?.is_some())
    }

    pub async fn set_pin(&self, raw: &str) -> Result<(), PinError> {
        let pin = Pin::parse(raw)?;
        self.records.save_pin(&pin).await?;
        tracing::info!("PIN updated");
        Ok(())
    }

    pub async fn clear_pin(&self) -> Result<(), PinError> {
        self.records.clear_pin().await?;
        tracing::info!("PIN removed");
        Ok(())
    }

    /// With no PIN stored every candidate unlocks.
    pub async fn verify(&self, candidate: &str) -> Result<bool, PinError> {
        match self.records.load_pin().await? {
            Some(stored) => Ok(stored == candidate),
            None => Ok(true),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PinError {
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("store: {0}")]
    Store(#[from] RecordStoreError),
}
