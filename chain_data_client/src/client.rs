use std::sync::Arc;

use types::phase0::{
    beacon_state::BeaconState,
    primitives::{Epoch, Slot, H256},
};

pub trait ChainDataClient: Send + Sync {
    /// Whether the store has been initialized with a head.
    fn is_store_available(&self) -> bool;

    fn is_finalized_epoch(&self, epoch: Epoch) -> bool;

    fn current_slot(&self) -> Slot;

    fn best_block_root(&self) -> Option<H256>;

    fn best_state(&self) -> Option<Arc<BeaconState>>;
}
