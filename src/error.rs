//! Error types for marketcart
//!
//! All modules use `CartResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// All errors that can occur in marketcart
#[derive(Error, Debug)]
pub enum CartError {
    // Input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Persistence errors
    #[error("Stored cart under {key} is corrupt: {reason}")]
    CorruptCart { key: String, reason: String },

    #[error("Failed to read {key} from storage: {reason}")]
    StorageRead { key: String, reason: String },

    #[error("Failed to write {key} to storage: {reason}")]
    StorageWrite { key: String, reason: String },

    #[error("Persistence writer has shut down")]
    WriterClosed,

    #[error("Unknown storage backend: {0}")]
    UnknownBackend(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl CartError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid input error
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Create a storage write error
    pub fn write_failed(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::StorageWrite {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if error is retryable
    ///
    /// A failed write leaves the in-memory cart intact, so the next mutation
    /// (or an explicit flush) will carry the unsaved state.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageRead { .. } | Self::StorageWrite { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CorruptCart { .. } => {
                Some("Fix or remove the stored cart, or run: marketcart config set storage.on_corrupt reset")
            }
            Self::UnknownBackend(_) => Some("Valid backends: file, memory"),
            Self::StorageWrite { .. } => Some("The cart was updated in memory; retry to persist it"),
            _ => None,
        }
    }
}
