use std::io;

/// String-valued durable storage addressed by key.
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;

    /// Removing a key that does not exist succeeds.
    async fn remove(&self, key: &str) -> Result<(), KeyValueStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum KeyValueStoreError {
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
