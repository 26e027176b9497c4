use std::collections::HashSet;

use anyhow::Result;
use bls::{PublicKey, SignatureBytes};
use futures::future::BoxFuture;
use types::phase0::{
    containers::{Attestation, BeaconBlock, SignedAggregateAndProof, SignedBeaconBlock},
    primitives::{CommitteeIndex, Epoch, Slot, ValidatorIndex, H256},
};

use crate::{
    block_result::SendSignedBlockResult,
    duties::{AttesterDuties, ProposerDuties, ValidatorDuties},
    subscriptions::{CommitteeSubscriptionRequest, SubnetSubscription},
};

/// Computes duties, builds unsigned artifacts and publishes signed ones.
///
/// Methods that produce a value return a future that resolves once the value is available.
/// `None` means the value could not be produced (for example, because the state at the requested
/// slot is missing). That is not an error.
///
/// Methods that only publish return immediately. Delivery is not acknowledged.
pub trait ValidatorApi: Send + Sync {
    fn create_unsigned_block(
        &self,
        slot: Slot,
        randao_reveal: SignatureBytes,
        graffiti: Option<H256>,
    ) -> BoxFuture<'static, Result<Option<BeaconBlock>>>;

    fn create_unsigned_attestation(
        &self,
        slot: Slot,
        committee_index: CommitteeIndex,
    ) -> BoxFuture<'static, Result<Option<Attestation>>>;

    fn get_duties(
        &self,
        epoch: Epoch,
        public_keys: Vec<PublicKey>,
    ) -> BoxFuture<'static, Result<Option<Vec<ValidatorDuties>>>>;

    fn get_attestation_duties(
        &self,
        epoch: Epoch,
        validator_indices: Vec<ValidatorIndex>,
    ) -> BoxFuture<'static, Result<Option<Vec<AttesterDuties>>>>;

    fn get_proposer_duties(
        &self,
        epoch: Epoch,
    ) -> BoxFuture<'static, Result<Option<Vec<ProposerDuties>>>>;

    fn create_aggregate(
        &self,
        slot: Slot,
        attestation_data_root: H256,
    ) -> BoxFuture<'static, Result<Option<Attestation>>>;

    fn send_signed_attestation(&self, attestation: Attestation);

    fn send_signed_block(
        &self,
        block: SignedBeaconBlock,
    ) -> BoxFuture<'static, Result<SendSignedBlockResult>>;

    fn send_aggregate_and_proof(&self, aggregate_and_proof: SignedAggregateAndProof);

    fn subscribe_to_beacon_committee(&self, requests: Vec<CommitteeSubscriptionRequest>);

    fn subscribe_to_persistent_subnets(&self, subscriptions: HashSet<SubnetSubscription>);
}
