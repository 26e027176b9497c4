use anyhow::Result;
use helper_functions::misc;
use types::{
    config::Config,
    phase0::primitives::{CommitteeIndex, Slot, SubnetId, ValidatorIndex},
};

/// Identifies who a committee subscription is for.
///
/// Aggregators subscribing ahead of time are not necessarily committee members and are sent as
/// [`ValidatorIndexId::Unknown`]. A separate variant keeps that from being mistaken for a real
/// validator index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ValidatorIndexId {
    Known(ValidatorIndex),
    Unknown,
}

impl From<ValidatorIndex> for ValidatorIndexId {
    fn from(validator_index: ValidatorIndex) -> Self {
        Self::Known(validator_index)
    }
}

impl ValidatorIndexId {
    #[must_use]
    pub const fn known(self) -> Option<ValidatorIndex> {
        match self {
            Self::Known(validator_index) => Some(validator_index),
            Self::Unknown => None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CommitteeSubscriptionRequest {
    pub validator_index: ValidatorIndexId,
    pub committee_index: CommitteeIndex,
    pub committees_at_slot: u64,
    pub slot: Slot,
    pub is_aggregator: bool,
}

impl CommitteeSubscriptionRequest {
    /// The attestation subnet the committee publishes to.
    pub fn subnet_id(&self, config: &Config) -> Result<SubnetId> {
        misc::compute_subnet_for_attestation(
            config,
            self.committees_at_slot,
            self.slot,
            self.committee_index,
        )
    }
}

/// A long-lived subscription to an attestation subnet.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubnetSubscription {
    pub subnet_id: SubnetId,
    pub unsubscription_slot: Slot,
}
