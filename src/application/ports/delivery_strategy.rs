use std::io;
use std::path::PathBuf;

/// Hands a finished CSV report to the host environment.
#[async_trait::async_trait]
pub trait DeliveryStrategy: Send + Sync {
    async fn deliver(&self, filename: &str, csv: String) -> Result<Delivery, DeliveryError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The client downloads the content under the given filename.
    Download(CsvDownload),
    /// The content was written to disk and, when a share sheet was
    /// available, offered through it.
    SavedFile { path: PathBuf, shared: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub filename: String,
    pub content_type: &'static str,
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("write failed: {0}")]
    WriteFailed(#[from] io::Error),
    #[error("share failed: {0}")]
    ShareFailed(String),
}
