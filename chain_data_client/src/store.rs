use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use types::phase0::{
    beacon_state::BeaconState,
    consts::{GENESIS_EPOCH, GENESIS_SLOT},
    primitives::{Epoch, Slot, H256},
};

use crate::client::ChainDataClient;

struct Head {
    block_root: H256,
    state: Arc<BeaconState>,
}

/// A [`ChainDataClient`] backed by snapshots.
///
/// The head block root and state are replaced together, so readers never observe a root paired
/// with the state of a different block.
pub struct ChainDataStore {
    head: ArcSwapOption<Head>,
    current_slot: AtomicU64,
    finalized_epoch: AtomicU64,
}

impl Default for ChainDataStore {
    fn default() -> Self {
        Self {
            head: ArcSwapOption::empty(),
            current_slot: AtomicU64::new(GENESIS_SLOT),
            finalized_epoch: AtomicU64::new(GENESIS_EPOCH),
        }
    }
}

impl ChainDataStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_head(&self, block_root: H256, state: Arc<BeaconState>) {
        self.head.store(Some(Arc::new(Head { block_root, state })));
    }

    pub fn set_current_slot(&self, slot: Slot) {
        self.current_slot.store(slot, Ordering::Release);
    }

    /// Finality never moves backwards. Older epochs are ignored.
    pub fn set_finalized_epoch(&self, epoch: Epoch) {
        self.finalized_epoch.fetch_max(epoch, Ordering::AcqRel);
    }
}

impl ChainDataClient for ChainDataStore {
    fn is_store_available(&self) -> bool {
        self.head.load().is_some()
    }

    fn is_finalized_epoch(&self, epoch: Epoch) -> bool {
        epoch <= self.finalized_epoch.load(Ordering::Acquire)
    }

    fn current_slot(&self) -> Slot {
        self.current_slot.load(Ordering::Acquire)
    }

    fn best_block_root(&self) -> Option<H256> {
        self.head.load().as_ref().map(|head| head.block_root)
    }

    fn best_state(&self) -> Option<Arc<BeaconState>> {
        self.head
            .load()
            .as_ref()
            .map(|head| Arc::clone(&head.state))
    }
}
