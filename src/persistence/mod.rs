//! Cart persistence
//!
//! Bridges cart state to a durable key-value store:
//! - `storage`: backend trait plus file and memory implementations
//! - `bridge`: load/save of the full collection under one namespaced key
//! - `writer`: single-writer queue that serializes saves in mutation order

mod bridge;
mod storage;
#[cfg(test)]
pub(crate) mod testing;
mod writer;

pub use bridge::{CartKey, LoadPolicy, PersistenceBridge, DEFAULT_NAMESPACE};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use writer::{PendingSave, PersistenceWriter};

use crate::config::schema::StorageConfig;
use crate::config::ConfigManager;
use crate::error::{CartError, CartResult};
use std::sync::Arc;

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// One JSON file per key in the state directory
    File,
    /// Process-local, lost on exit
    Memory,
}

impl Backend {
    /// Parse a backend name from configuration
    pub fn parse(name: &str) -> CartResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(CartError::UnknownBackend(other.to_string())),
        }
    }
}

/// Create the storage backend described by `config`
pub fn create_storage(config: &StorageConfig) -> CartResult<Arc<dyn KeyValueStorage>> {
    match Backend::parse(&config.backend)? {
        Backend::File => {
            let dir = config
                .dir
                .clone()
                .unwrap_or_else(ConfigManager::storage_dir);
            Ok(Arc::new(FileStorage::new(dir)))
        }
        Backend::Memory => Ok(Arc::new(MemoryStorage::new())),
    }
}

/// Create a bridge for the configured backend and namespace
pub fn create_bridge(config: &StorageConfig) -> CartResult<PersistenceBridge> {
    let storage = create_storage(config)?;
    Ok(PersistenceBridge::new(
        storage,
        CartKey::for_namespace(&config.namespace),
    ))
}
