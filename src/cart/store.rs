//! Persistent cart store
//!
//! `CartStore` owns the authoritative [`CartState`]. Each mutation is applied
//! in memory before the call returns, then the full post-mutation collection
//! is queued on the single-writer persistence queue.

use crate::cart::item::{validate_id, LineItem, NewLineItem};
use crate::cart::state::CartState;
use crate::error::CartResult;
use crate::persistence::{LoadPolicy, PendingSave, PersistenceBridge, PersistenceWriter};
use tracing::{debug, info};

/// Cart store handed to consumers by reference
///
/// Mutations take `&mut self`, so only one can run at a time and each one
/// snapshots the state it just produced.
#[derive(Debug)]
pub struct CartStore {
    state: CartState,
    writer: PersistenceWriter,
}

impl CartStore {
    /// Load the stored cart and start accepting mutations
    ///
    /// Must be called from within a tokio runtime.
    pub async fn open(bridge: PersistenceBridge, policy: LoadPolicy) -> CartResult<Self> {
        let state = bridge.load_with_policy(policy).await?;
        info!(
            "Loaded cart from {} ({} item(s), {} backend)",
            bridge.key(),
            state.len(),
            bridge.backend_name()
        );

        Ok(Self {
            state,
            writer: PersistenceWriter::spawn(bridge),
        })
    }

    /// Add a product, or increment it if the id is already in the cart
    pub fn add_to_cart(&mut self, candidate: NewLineItem) -> CartResult<PendingSave> {
        candidate.validate()?;

        let id = candidate.id.clone();
        self.state.add(candidate);
        debug!("Added {} (quantity {})", id, self.quantity_of(&id));

        Ok(self.persist())
    }

    /// Increase an item's quantity by one; unknown ids leave the cart unchanged
    pub fn increment(&mut self, id: &str) -> CartResult<PendingSave> {
        validate_id(id)?;

        if self.state.increment(id) {
            debug!("Incremented {} to {}", id, self.quantity_of(id));
        } else {
            debug!("Increment of unknown item {} ignored", id);
        }

        Ok(self.persist())
    }

    /// Decrease an item's quantity by one, removing it at zero
    pub fn decrement(&mut self, id: &str) -> CartResult<PendingSave> {
        validate_id(id)?;

        if !self.state.decrement(id) {
            debug!("Decrement of unknown item {} ignored", id);
        } else if self.state.contains(id) {
            debug!("Decremented {} to {}", id, self.quantity_of(id));
        } else {
            debug!("Removed {} from cart", id);
        }

        Ok(self.persist())
    }

    /// Current line items in insertion order
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    /// Current cart state
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Wait for all queued writes; see [`PersistenceWriter::flush`]
    pub async fn flush(&self) -> CartResult<()> {
        self.writer.flush().await
    }

    fn persist(&self) -> PendingSave {
        self.writer.enqueue(self.state.clone())
    }

    fn quantity_of(&self, id: &str) -> u32 {
        self.state.get(id).map_or(0, |item| item.quantity)
    }
}
