//! Key/value storage adapters for the storefront cart.
//!
//! Both stores hold plain string values keyed by string, mirroring browser
//! origin storage. The file store persists every key to a single JSON object.

mod file_store;
mod memory_store;

pub use file_store::{FileKeyValueStore, StorageError};
pub use memory_store::InMemoryKeyValueStore;
