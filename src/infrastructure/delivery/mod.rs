mod command_share_sheet;
mod delivery_factory;
mod download;
mod file_share;

pub use command_share_sheet::CommandShareSheet;
pub use delivery_factory::DeliveryStrategyFactory;
pub use download::{CSV_DOWNLOAD_CONTENT_TYPE, DownloadDelivery};
pub use file_share::{FileShareDelivery, SHARE_DIALOG_TITLE, SHARE_MIME_TYPE, SHARE_UTI};
