use std::path::PathBuf;
use std::sync::Arc;

use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{KeyValueStore, KeyValueStoreError};

/// One file per key under `base_path`. Writes go through a temporary file and
/// a rename, so a reader never sees half a value.
pub struct LocalKeyValueStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalKeyValueStore {
    pub fn new(base_path: PathBuf) -> Result<Self, KeyValueStoreError> {
        std::fs::create_dir_all(&base_path).map_err(KeyValueStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| KeyValueStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl KeyValueStore for LocalKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let store_path = StorePath::from(key);
        let result = match self.inner.get(&store_path).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(KeyValueStoreError::ReadFailed(e.to_string())),
        };

        let bytes = result
            .bytes()
            .await
            .map_err(|e| KeyValueStoreError::ReadFailed(e.to_string()))?;

        // Invalid UTF-8 is corrupt content, not an I/O failure; callers decide.
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let store_path = StorePath::from(key);
        self.inner
            .put(&store_path, PutPayload::from(value.to_string()))
            .await
            .map_err(|e| KeyValueStoreError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError> {
        let store_path = StorePath::from(key);
        match self.inner.delete(&store_path).await {
            Ok(()) | Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(KeyValueStoreError::DeleteFailed(e.to_string())),
        }
    }
}
