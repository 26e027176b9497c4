//! Read-only access to the chain as seen by the beacon node.
//!
//! [`ChainDataClient`] is what the duty coordinator queries. [`ChainDataStore`] implements it with
//! snapshots that whoever follows the chain replaces as the head moves.

pub use crate::{client::ChainDataClient, store::ChainDataStore};

mod client;
mod store;
