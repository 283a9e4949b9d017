use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{DeliveryStrategy, ShareSheet};
use crate::presentation::config::{DeliveryModeSetting, ExportSettings};

use super::command_share_sheet::CommandShareSheet;
use super::download::DownloadDelivery;
use super::file_share::FileShareDelivery;

pub struct DeliveryStrategyFactory;

impl DeliveryStrategyFactory {
    pub fn create(settings: &ExportSettings) -> Arc<dyn DeliveryStrategy> {
        match settings.delivery {
            DeliveryModeSetting::Download => {
                tracing::info!("Exports delivered as downloads");
                Arc::new(DownloadDelivery)
            }
            DeliveryModeSetting::File => {
                let share_sheet = settings
                    .share_command
                    .as_deref()
                    .filter(|c| !c.trim().is_empty())
                    .map(|c| Arc::new(CommandShareSheet::new(c)) as Arc<dyn ShareSheet>);

                tracing::info!(
                    documents_dir = %settings.documents_dir,
                    share = share_sheet.is_some(),
                    "Exports written to the documents directory"
                );
                Arc::new(FileShareDelivery::new(
                    PathBuf::from(&settings.documents_dir),
                    share_sheet,
                ))
            }
        }
    }
}
