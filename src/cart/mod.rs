//! Cart module
//!
//! - `item`: line item and add-to-cart payload
//! - `state`: ordered collection and its add/increment/decrement rules
//! - `store`: the persistent store consumers hold

mod item;
mod state;
mod store;

pub use item::{LineItem, NewLineItem};
pub use state::CartState;
pub use store::CartStore;
