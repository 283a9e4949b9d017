use crate::application::ports::{CsvDownload, Delivery, DeliveryError, DeliveryStrategy};

pub const CSV_DOWNLOAD_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

/// Browser-style delivery: the report travels back to the client as a
/// download and nothing touches the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DownloadDelivery;

#[async_trait::async_trait]
impl DeliveryStrategy for DownloadDelivery {
    async fn deliver(&self, filename: &str, csv: String) -> Result<Delivery, DeliveryError> {
        tracing::debug!(filename = %filename, bytes = csv.len(), "Packaging CSV download");
        Ok(Delivery::Download(CsvDownload {
            filename: filename.to_string(),
            content_type: CSV_DOWNLOAD_CONTENT_TYPE,
            content: csv,
        }))
    }
}
