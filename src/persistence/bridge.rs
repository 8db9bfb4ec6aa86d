//! Loading and saving cart state under a fixed storage key

use crate::cart::{CartState, LineItem};
use crate::error::{CartError, CartResult};
use crate::persistence::storage::KeyValueStorage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "@GoMarketplace";

/// Namespaced storage key for the cart collection (`<namespace>:products`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartKey(String);

impl CartKey {
    /// Build the cart key for an application namespace
    pub fn for_namespace(namespace: &str) -> Self {
        Self(format!("{}:products", namespace))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CartKey {
    fn default() -> Self {
        Self::for_namespace(DEFAULT_NAMESPACE)
    }
}

impl fmt::Display for CartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What to do when the stored cart cannot be decoded at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Refuse to start; the stored value is left untouched
    #[default]
    Fail,
    /// Log a warning and start with an empty cart
    Reset,
}

/// Bridge between cart state and a key-value storage backend
#[derive(Clone)]
pub struct PersistenceBridge {
    storage: Arc<dyn KeyValueStorage>,
    key: CartKey,
}

impl PersistenceBridge {
    /// Create a bridge over `storage` using `key`
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: CartKey) -> Self {
        Self { storage, key }
    }

    /// Storage key this bridge reads and writes
    pub fn key(&self) -> &CartKey {
        &self.key
    }

    /// Name of the underlying storage backend
    pub fn backend_name(&self) -> &'static str {
        self.storage.backend_name()
    }

    /// Read the stored cart
    ///
    /// A missing value yields an empty cart. A value that does not decode into
    /// valid line items is a [`CartError::CorruptCart`].
    pub async fn load(&self) -> CartResult<CartState> {
        let Some(bytes) = self.storage.get(self.key.as_str()).await? else {
            debug!("No stored cart under {}, starting empty", self.key);
            return Ok(CartState::new());
        };

        let items: Vec<LineItem> =
            serde_json::from_slice(&bytes).map_err(|e| self.corrupt(e.to_string()))?;
        let state = CartState::from_items(items).map_err(|e| self.corrupt(e.to_string()))?;

        debug!("Loaded {} line item(s) from {}", state.len(), self.key);
        Ok(state)
    }

    /// Read the stored cart, applying `policy` to corrupt data
    pub async fn load_with_policy(&self, policy: LoadPolicy) -> CartResult<CartState> {
        match self.load().await {
            Err(CartError::CorruptCart { key, reason }) if policy == LoadPolicy::Reset => {
                warn!("Discarding corrupt cart under {}: {}", key, reason);
                Ok(CartState::new())
            }
            other => other,
        }
    }

    /// Overwrite the stored cart with the full collection
    pub async fn save(&self, state: &CartState) -> CartResult<()> {
        let bytes = serde_json::to_vec(state)?;
        self.storage.set(self.key.as_str(), bytes).await?;

        debug!("Saved {} line item(s) to {}", state.len(), self.key);
        Ok(())
    }

    fn corrupt(&self, reason: String) -> CartError {
        CartError::CorruptCart {
            key: self.key.to_string(),
            reason,
        }
    }
}

impl fmt::Debug for PersistenceBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceBridge")
            .field("backend", &self.storage.backend_name())
            .field("key", &self.key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::NewLineItem;
    use crate::persistence::storage::{FileStorage, MemoryStorage};
    use tempfile::TempDir;

    fn bridge(storage: &MemoryStorage) -> PersistenceBridge {
        PersistenceBridge::new(Arc::new(storage.clone()), CartKey::default())
    }

    #[test]
    fn default_key() {
        assert_eq!(CartKey::default().as_str(), "@GoMarketplace:products");
        assert_eq!(CartKey::for_namespace("@shop").to_string(), "@shop:products");
    }

    #[tokio::test]
    async fn load_missing_is_empty() {
        let storage = MemoryStorage::new();
        let state = bridge(&storage).load().await.unwrap();
        assert!(state.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_preserves_order_and_fields() {
        let storage = MemoryStorage::new();
        let bridge = bridge(&storage);

        let mut state = CartState::new();
        state.add(NewLineItem::new("b", "Bag", "https://img/b.png", 12.5));
        state.add(NewLineItem::new("a", "Apple", "https://img/a.png", 0.99));
        state.increment("b");

        bridge.save(&state).await.unwrap();
        let loaded = bridge.load().await.unwrap();

        assert_eq!(loaded, state);
        assert_eq!(loaded.items()[0].id, "b");
        assert_eq!(loaded.items()[0].quantity, 2);
    }

    #[tokio::test]
    async fn reads_plain_json_array() {
        let storage = MemoryStorage::new();
        storage
            .insert_raw(
                "@GoMarketplace:products",
                r#"[{"id":"x","title":"T","image_url":"u","price":3,"quantity":4}]"#,
            )
            .await;

        let state = bridge(&storage).load().await.unwrap();
        assert_eq!(state.get("x").unwrap().quantity, 4);
        assert_eq!(state.get("x").unwrap().price, 3.0);
    }

    #[tokio::test]
    async fn malformed_payload_is_corrupt() {
        let storage = MemoryStorage::new();
        storage.insert_raw("@GoMarketplace:products", "{not json").await;

        let err = bridge(&storage).load().await.unwrap_err();
        assert!(matches!(err, CartError::CorruptCart { .. }));
    }

    #[tokio::test]
    async fn invalid_items_are_corrupt() {
        let storage = MemoryStorage::new();
        storage
            .insert_raw(
                "@GoMarketplace:products",
                r#"[{"id":"x","title":"T","image_url":"u","price":1,"quantity":0}]"#,
            )
            .await;

        let err = bridge(&storage).load().await.unwrap_err();
        assert!(matches!(err, CartError::CorruptCart { .. }));
    }

    #[tokio::test]
    async fn reset_policy_starts_empty() {
        let storage = MemoryStorage::new();
        storage.insert_raw("@GoMarketplace:products", "garbage").await;
        let bridge = bridge(&storage);

        assert!(bridge.load_with_policy(LoadPolicy::Fail).await.is_err());
        let state = bridge.load_with_policy(LoadPolicy::Reset).await.unwrap();
        assert!(state.is_empty());

        // The stored value is only replaced by the next save
        let raw = storage.get("@GoMarketplace:products").await.unwrap();
        assert_eq!(raw.as_deref(), Some(&b"garbage"[..]));
    }

    #[tokio::test]
    async fn file_backed_round_trip() {
        let temp = TempDir::new().unwrap();
        let storage = Arc::new(FileStorage::new(temp.path()));
        let bridge = PersistenceBridge::new(storage.clone(), CartKey::for_namespace("@test"));

        let mut state = CartState::new();
        state.add(NewLineItem::new("a", "T", "u", 10.0));
        bridge.save(&state).await.unwrap();

        assert!(storage.path_for("@test:products").exists());
        assert_eq!(bridge.load().await.unwrap(), state);
    }
}
