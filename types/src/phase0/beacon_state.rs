use crate::phase0::{containers::Validator, primitives::Slot};

/// The parts of a beacon state needed to coordinate validator duties.
///
/// Snapshots of this are owned by whatever serves chain data and shared read-only.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct BeaconState {
    pub slot: Slot,
    pub validators: Vec<Validator>,
}

impl BeaconState {
    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.slot
    }

    #[must_use]
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }
}
