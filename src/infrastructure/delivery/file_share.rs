use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{
    Delivery, DeliveryError, DeliveryStrategy, ShareRequest, ShareSheet,
};

pub const SHARE_MIME_TYPE: &str = "text/csv";
pub const SHARE_DIALOG_TITLE: &str = "Export Task.Lab jobs (CSV)";
pub const SHARE_UTI: &str = "public.comma-separated-values-text";

/// Writes the report into the documents directory, then offers it through
/// the share sheet when one is available.
pub struct FileShareDelivery {
    documents_dir: PathBuf,
    share_sheet: Option<Arc<dyn ShareSheet>>,
}

impl FileShareDelivery {
    pub fn new(documents_dir: PathBuf, share_sheet: Option<Arc<dyn ShareSheet>>) -> Self {
        Self {
            documents_dir,
            share_sheet,
        }
    }
}

#[async_trait::async_trait]
impl DeliveryStrategy for FileShareDelivery {
    async fn deliver(&self, filename: &str, csv: String) -> Result<Delivery, DeliveryError> {
        tokio::fs::create_dir_all(&self.documents_dir).await?;
        let path = self.documents_dir.join(filename);
        tokio::fs::write(&path, csv.as_bytes()).await?;

        tracing::info!(path = %path.display(), "CSV written");

        let Some(share_sheet) = self.share_sheet.as_ref() else {
            return Ok(Delivery::SavedFile {
                path,
                shared: false,
            });
        };

        if !share_sheet.is_available().await {
            tracing::debug!("Share sheet unavailable, keeping the written file");
            return Ok(Delivery::SavedFile {
                path,
                shared: false,
            });
        }

        share_sheet
            .share(ShareRequest {
                path: &path,
                mime_type: SHARE_MIME_TYPE,
                dialog_title: SHARE_DIALOG_TITLE,
                uti: SHARE_UTI,
            })
            .await
            .map_err(|e| DeliveryError::ShareFailed(e.to_string()))?;

        Ok(Delivery::SavedFile { path, shared: true })
    }
}
