//! marketcart - persistent shopping cart
//!
//! Holds cart line items in memory, reconciles add/increment/decrement
//! against them, and writes the full collection to durable key-value
//! storage after every mutation so the cart survives restarts.
//!
//! ```rust,ignore
//! use marketcart::cart::{CartStore, NewLineItem};
//! use marketcart::persistence::{CartKey, LoadPolicy, MemoryStorage, PersistenceBridge};
//! use std::sync::Arc;
//!
//! let bridge = PersistenceBridge::new(Arc::new(MemoryStorage::new()), CartKey::default());
//! let mut store = CartStore::open(bridge, LoadPolicy::Fail).await?;
//!
//! let _pending = store.add_to_cart(NewLineItem::new("a", "Apple", "https://img/a.png", 0.99))?;
//! store.increment("a")?.wait().await?;
//! assert_eq!(store.items()[0].quantity, 2);
//! ```

pub mod cart;
pub mod cli;
pub mod config;
pub mod error;
pub mod persistence;
pub mod ui;

pub use error::{CartError, CartResult};
