//! Persistence boundary: a key-value medium plus the adapter that stores the
//! two serialized collections in it.

pub mod durable;
pub mod json_backend;
pub mod memory;

use thiserror::Error;

/// Failures raised by a persistence medium that is present but misbehaves.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over string key-value media able to hold serialized records.
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value under `key`. Readers never observe a partial write.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// `false` when no medium backs this store; reads then see nothing and
    /// writes are dropped.
    fn is_available(&self) -> bool {
        true
    }
}

pub use durable::{DurableStore, CATEGORIES_KEY, TRANSACTIONS_KEY};
pub use json_backend::JsonFileStore;
pub use memory::{MemoryStore, NullStore};
