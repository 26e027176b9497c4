use std::collections::HashSet;

use anyhow::Result;
use bls::{PublicKey, SignatureBytes};
use futures::{
    channel::{
        mpsc::UnboundedSender,
        oneshot::{self, Sender},
    },
    future::{BoxFuture, FutureExt as _},
};
use types::phase0::{
    containers::{Attestation, BeaconBlock, SignedAggregateAndProof, SignedBeaconBlock},
    primitives::{CommitteeIndex, Epoch, Slot, ValidatorIndex, H256},
};

use crate::{
    api::ValidatorApi,
    block_result::SendSignedBlockResult,
    duties::{AttesterDuties, ProposerDuties, ValidatorDuties},
    messages::ApiToValidator,
    subscriptions::{CommitteeSubscriptionRequest, SubnetSubscription},
};

/// [`ValidatorApi`] backed by an unbounded channel.
///
/// Requests carry a `oneshot` sender for the reply. If the receiving service drops the message
/// without replying, the returned future fails with [`oneshot::Canceled`].
#[derive(Clone)]
pub struct ValidatorApiChannel {
    tx: UnboundedSender<ApiToValidator>,
}

impl ValidatorApiChannel {
    #[must_use]
    pub const fn new(tx: UnboundedSender<ApiToValidator>) -> Self {
        Self { tx }
    }

    fn request<T: Send + 'static>(
        &self,
        message: impl FnOnce(Sender<Result<T>>) -> ApiToValidator,
    ) -> BoxFuture<'static, Result<T>> {
        let (sender, receiver) = oneshot::channel();

        message(sender).send(&self.tx);

        async move { receiver.await? }.boxed()
    }
}

impl ValidatorApi for ValidatorApiChannel {
    fn create_unsigned_block(
        &self,
        slot: Slot,
        randao_reveal: SignatureBytes,
        graffiti: Option<H256>,
    ) -> BoxFuture<'static, Result<Option<BeaconBlock>>> {
        self.request(|sender| ApiToValidator::UnsignedBlock {
            slot,
            randao_reveal,
            graffiti,
            sender,
        })
    }

    fn create_unsigned_attestation(
        &self,
        slot: Slot,
        committee_index: CommitteeIndex,
    ) -> BoxFuture<'static, Result<Option<Attestation>>> {
        self.request(|sender| ApiToValidator::UnsignedAttestation {
            slot,
            committee_index,
            sender,
        })
    }

    fn get_duties(
        &self,
        epoch: Epoch,
        public_keys: Vec<PublicKey>,
    ) -> BoxFuture<'static, Result<Option<Vec<ValidatorDuties>>>> {
        self.request(|sender| ApiToValidator::Duties {
            epoch,
            public_keys,
            sender,
        })
    }

    fn get_attestation_duties(
        &self,
        epoch: Epoch,
        validator_indices: Vec<ValidatorIndex>,
    ) -> BoxFuture<'static, Result<Option<Vec<AttesterDuties>>>> {
        self.request(|sender| ApiToValidator::AttestationDuties {
            epoch,
            validator_indices,
            sender,
        })
    }

    fn get_proposer_duties(
        &self,
        epoch: Epoch,
    ) -> BoxFuture<'static, Result<Option<Vec<ProposerDuties>>>> {
        self.request(|sender| ApiToValidator::ProposerDuties { epoch, sender })
    }

    fn create_aggregate(
        &self,
        slot: Slot,
        attestation_data_root: H256,
    ) -> BoxFuture<'static, Result<Option<Attestation>>> {
        self.request(|sender| ApiToValidator::Aggregate {
            slot,
            attestation_data_root,
            sender,
        })
    }

    fn send_signed_attestation(&self, attestation: Attestation) {
        ApiToValidator::SignedAttestation(Box::new(attestation)).send(&self.tx);
    }

    fn send_signed_block(
        &self,
        block: SignedBeaconBlock,
    ) -> BoxFuture<'static, Result<SendSignedBlockResult>> {
        self.request(|sender| ApiToValidator::SignedBlock {
            block: Box::new(block),
            sender,
        })
    }

    fn send_aggregate_and_proof(&self, aggregate_and_proof: SignedAggregateAndProof) {
        ApiToValidator::AggregateAndProof(Box::new(aggregate_and_proof)).send(&self.tx);
    }

    fn subscribe_to_beacon_committee(&self, requests: Vec<CommitteeSubscriptionRequest>) {
        ApiToValidator::BeaconCommitteeSubscriptions(requests).send(&self.tx);
    }

    fn subscribe_to_persistent_subnets(&self, subscriptions: HashSet<SubnetSubscription>) {
        ApiToValidator::PersistentSubnetSubscriptions(subscriptions).send(&self.tx);
    }
}
