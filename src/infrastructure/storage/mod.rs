mod local_store;
mod memory_store;
mod store_factory;

pub use local_store::LocalKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;
pub use store_factory::KeyValueStoreFactory;
