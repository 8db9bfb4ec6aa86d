//! CLI command implementations

pub mod add;
pub mod adjust;
pub mod config;
pub mod list;

pub use add::execute as add;
pub use adjust::{decrement, increment};
pub use config::execute as config;
pub use list::execute as list;

use crate::cart::CartStore;
use crate::config::Config;
use crate::error::CartResult;
use crate::persistence::{create_bridge, Backend};
use tracing::warn;

/// Open the cart store described by the configuration
///
/// Each CLI run is its own process, so the memory backend always starts
/// empty and loses its changes on exit.
pub(crate) async fn open_store(config: &Config) -> CartResult<CartStore> {
    if Backend::parse(&config.storage.backend)? == Backend::Memory {
        warn!("storage.backend is memory; cart changes will not persist after this command");
    }

    let bridge = create_bridge(&config.storage)?;
    CartStore::open(bridge, config.storage.on_corrupt).await
}
