//! Configuration schema for marketcart
//!
//! Configuration is stored at `~/.config/marketcart/config.toml`

use crate::persistence::{LoadPolicy, DEFAULT_NAMESPACE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cart storage settings
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
        }
    }
}

/// Where and how the cart is persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Backend: "file" or "memory"
    pub backend: String,

    /// Application namespace; the cart key is `<namespace>:products`
    pub namespace: String,

    /// Directory for the file backend (defaults to the state directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Handling of an undecodable stored cart: "fail" or "reset"
    pub on_corrupt: LoadPolicy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "file".to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            dir: None,
            on_corrupt: LoadPolicy::Fail,
        }
    }
}
