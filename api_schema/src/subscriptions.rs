use serde::{Deserialize, Serialize};
use types::phase0::primitives::{CommitteeIndex, Slot, SubnetId, ValidatorIndex};
use validator_api::{CommitteeSubscriptionRequest, ValidatorIndexId};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BeaconCommitteeSubscriptionRequest {
    #[serde(with = "serde_utils::string_or_native")]
    pub validator_index: ValidatorIndex,
    #[serde(with = "serde_utils::string_or_native")]
    pub committee_index: CommitteeIndex,
    #[serde(with = "serde_utils::string_or_native")]
    pub committees_at_slot: u64,
    #[serde(with = "serde_utils::string_or_native")]
    pub slot: Slot,
    pub is_aggregator: bool,
}

impl From<BeaconCommitteeSubscriptionRequest> for CommitteeSubscriptionRequest {
    fn from(request: BeaconCommitteeSubscriptionRequest) -> Self {
        let BeaconCommitteeSubscriptionRequest {
            validator_index,
            committee_index,
            committees_at_slot,
            slot,
            is_aggregator,
        } = request;

        Self {
            validator_index: ValidatorIndexId::Known(validator_index),
            committee_index,
            committees_at_slot,
            slot,
            is_aggregator,
        }
    }
}

/// A request to aggregate attestations of a committee without being a member of it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SubscribeToBeaconCommitteeRequest {
    #[serde(with = "serde_utils::string_or_native")]
    pub committee_index: CommitteeIndex,
    #[serde(with = "serde_utils::string_or_native")]
    pub aggregation_slot: Slot,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SubnetSubscription {
    #[serde(with = "serde_utils::string_or_native")]
    pub subnet_id: SubnetId,
    #[serde(with = "serde_utils::string_or_native")]
    pub unsubscription_slot: Slot,
}

impl From<SubnetSubscription> for validator_api::SubnetSubscription {
    fn from(subscription: SubnetSubscription) -> Self {
        let SubnetSubscription {
            subnet_id,
            unsubscription_slot,
        } = subscription;

        Self {
            subnet_id,
            unsubscription_slot,
        }
    }
}
