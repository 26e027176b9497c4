use anyhow::{ensure, Result};
use types::{
    config::Config,
    phase0::primitives::{CommitteeIndex, Epoch, Slot, SubnetId},
};

use crate::error::Error;

#[must_use]
pub const fn compute_epoch_at_slot(config: &Config, slot: Slot) -> Epoch {
    slot / config.slots_per_epoch.get()
}

#[must_use]
pub const fn compute_start_slot_at_epoch(config: &Config, epoch: Epoch) -> Slot {
    epoch.saturating_mul(config.slots_per_epoch.get())
}

#[must_use]
pub const fn slots_since_epoch_start(config: &Config, slot: Slot) -> u64 {
    slot % config.slots_per_epoch.get()
}

#[must_use]
pub fn committee_count_from_active_validator_count(
    config: &Config,
    active_validator_count: u64,
) -> u64 {
    (active_validator_count / config.slots_per_epoch / config.target_committee_size)
        .clamp(1, config.max_committees_per_slot.get())
}

/// [`compute_subnet_for_attestation`](https://github.com/ethereum/consensus-specs/blob/v1.4.0/specs/phase0/validator.md#broadcast-attestation)
pub fn compute_subnet_for_attestation(
    config: &Config,
    committees_per_slot: u64,
    slot: Slot,
    committee_index: CommitteeIndex,
) -> Result<SubnetId> {
    ensure!(
        committee_index < committees_per_slot,
        Error::CommitteeIndexOutOfBounds {
            committee_index,
            committees_per_slot,
        },
    );

    let committees_since_epoch_start = committees_per_slot
        .checked_mul(slots_since_epoch_start(config, slot))
        .ok_or(Error::SubnetIdOverflow)?;

    let subnet_id = committees_since_epoch_start
        .checked_add(committee_index)
        .ok_or(Error::SubnetIdOverflow)?;

    Ok(subnet_id % config.attestation_subnet_count)
}

/// The modulo used in [`is_aggregator`](https://github.com/ethereum/consensus-specs/blob/v1.4.0/specs/phase0/validator.md#aggregation-selection).
///
/// A validator is an aggregator if the hash of its selection proof is divisible by this.
#[must_use]
pub fn aggregator_modulo(config: &Config, committee_length: u64) -> u64 {
    (committee_length / config.target_aggregators_per_committee).max(1)
}
