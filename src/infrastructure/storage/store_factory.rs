use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{KeyValueStore, KeyValueStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::local_store::LocalKeyValueStore;
use super::memory_store::InMemoryKeyValueStore;

pub struct KeyValueStoreFactory;

impl KeyValueStoreFactory {
    pub fn create(
        settings: &StorageSettings,
    ) -> Result<Arc<dyn KeyValueStore>, KeyValueStoreError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                tracing::info!(path = %settings.local_path, "Using local key-value store");
                let path = PathBuf::from(&settings.local_path);
                let store = LocalKeyValueStore::new(path)?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Memory => {
                tracing::warn!("Using in-memory key-value store, jobs will not survive a restart");
                Ok(Arc::new(InMemoryKeyValueStore::new()))
            }
        }
    }
}
