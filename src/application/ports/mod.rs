mod delivery_strategy;
mod key_value_store;
mod share_sheet;

pub use delivery_strategy::{CsvDownload, Delivery, DeliveryError, DeliveryStrategy};
pub use key_value_store::{KeyValueStore, KeyValueStoreError};
pub use share_sheet::{ShareRequest, ShareSheet, ShareSheetError};
