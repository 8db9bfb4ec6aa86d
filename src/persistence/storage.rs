//! Key-value storage abstraction
//!
//! Provides a trait for durable single-key storage that can be implemented
//! by different backends (files on disk, in-process memory).

use crate::error::{CartError, CartResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// Abstract key-value storage interface
///
/// Implementations only need to guarantee that a single `set` is an atomic
/// overwrite of one key. No transactions across keys are assumed.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent
    async fn get(&self, key: &str) -> CartResult<Option<Vec<u8>>>;

    /// Overwrite the value stored under `key`
    async fn set(&self, key: &str, value: Vec<u8>) -> CartResult<()>;

    /// Get the human-readable backend name for display
    fn backend_name(&self) -> &'static str;
}

/// File-backed storage: one file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }
}

/// Map a storage key onto a portable file name
///
/// Percent-encoding keeps ASCII alphanumerics and `-._~` and escapes `%`
/// itself, so distinct keys never share a file.
fn file_stem(key: &str) -> String {
    urlencoding::encode(key).into_owned()
}
