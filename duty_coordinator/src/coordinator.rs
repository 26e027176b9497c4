use core::future::Future;
use std::{collections::HashSet, sync::Arc};

use anyhow::Result;
use api_schema::{
    block_result::{BlockResultStatus, ValidatorBlockResult},
    containers::{Attestation, BeaconBlock, SignedAggregateAndProof, SignedBeaconBlock},
    duties::{AttesterDuty, ProposerDuty, ValidatorDuties, ValidatorDutiesRequest},
    subscriptions::{
        BeaconCommitteeSubscriptionRequest, SubnetSubscription, SubscribeToBeaconCommitteeRequest,
    },
};
use bls::{PublicKey, SignatureBytes};
use chain_data_client::ChainDataClient;
use futures::future::{self, Either, TryFutureExt as _};
use helper_functions::{accessors, misc};
use itertools::Itertools as _;
use log::debug;
use types::{
    config::{Config, Error as ConfigError},
    phase0::primitives::{CommitteeIndex, Epoch, Slot, ValidatorIndex, H256},
};
use validator_api::{
    CommitteeSubscriptionRequest, SendSignedBlockResult, ValidatorApi, ValidatorIndexId,
};

use crate::error::Error;

/// Validates requests from validator clients and forwards them to the validator service.
///
/// Methods that return `Result<impl Future, Error>` reject invalid requests before anything is
/// sent. Errors produced while the request is being served are returned by the future.
pub struct DutyCoordinator<C, V> {
    config: Arc<Config>,
    chain: Arc<C>,
    validator_api: Arc<V>,
}

impl<C: ChainDataClient, V: ValidatorApi> DutyCoordinator<C, V> {
    pub fn new(
        config: Arc<Config>,
        chain: Arc<C>,
        validator_api: Arc<V>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            chain,
            validator_api,
        })
    }

    #[must_use]
    pub fn is_store_available(&self) -> bool {
        self.chain.is_store_available()
    }

    #[must_use]
    pub fn is_epoch_finalized(&self, epoch: Epoch) -> bool {
        self.chain.is_finalized_epoch(epoch)
    }

    /// Blocks may be requested for the current slot and up to one epoch ahead of it.
    pub fn produce_unsigned_block(
        &self,
        slot: Option<Slot>,
        randao_reveal: Option<SignatureBytes>,
        graffiti: Option<H256>,
    ) -> Result<impl Future<Output = Result<Option<BeaconBlock>>> + Send + 'static, Error> {
        let slot = slot.ok_or(Error::NoSlotProvided)?;
        let randao_reveal = randao_reveal.ok_or(Error::NoRandaoProvided)?;
        let current_slot = self.chain.current_slot();
        let slots_per_epoch = self.config.slots_per_epoch.get();

        if current_slot.saturating_add(slots_per_epoch) < slot {
            return Err(Error::CannotProduceFarFutureBlock { slots_per_epoch });
        }

        if slot < current_slot {
            return Err(Error::CannotProduceHistoricBlock);
        }

        debug!("producing unsigned block (slot: {slot}, current slot: {current_slot})");

        Ok(self
            .validator_api
            .create_unsigned_block(slot, randao_reveal, graffiti)
            .map_ok(|block| block.map(BeaconBlock::from)))
    }

    pub fn produce_unsigned_attestation(
        &self,
        slot: Slot,
        committee_index: CommitteeIndex,
    ) -> Result<impl Future<Output = Result<Option<Attestation>>> + Send + 'static, Error> {
        if !self.chain.is_store_available() {
            return Err(Error::ChainDataUnavailable);
        }

        Ok(self
            .validator_api
            .create_unsigned_attestation(slot, committee_index)
            .map_ok(|attestation| attestation.map(Attestation::from)))
    }

    /// Looks up duties for every key in the request.
    ///
    /// Keys are decoded before anything is sent. The first key that cannot be decoded fails the
    /// whole request.
    pub fn resolve_duties_for_keys(
        &self,
        request: ValidatorDutiesRequest,
    ) -> Result<impl Future<Output = Result<Option<Vec<ValidatorDuties>>>> + Send + 'static, Error>
    {
        let ValidatorDutiesRequest { epoch, pubkeys } = request;

        // Nothing to look up, so there is no need for the store to be ready.
        if pubkeys.is_empty() {
            return Ok(Either::Left(future::ok(Some(vec![]))));
        }

        if !self.chain.is_store_available() || self.chain.best_block_root().is_none() {
            return Err(Error::ChainDataUnavailable);
        }

        let public_keys: Vec<_> = pubkeys
            .into_iter()
            .enumerate()
            .map(|(index, bytes)| {
                PublicKey::try_from(bytes)
                    .map_err(|source| Error::InvalidPublicKey { index, source })
            })
            .try_collect()?;

        debug!(
            "resolving duties for {} keys (epoch: {epoch})",
            public_keys.len(),
        );

        Ok(Either::Right(
            self.validator_api
                .get_duties(epoch, public_keys)
                .map_ok(|duties| {
                    duties.map(|duties| duties.into_iter().map(ValidatorDuties::from).collect())
                }),
        ))
    }

    /// Duties whose public key could not be resolved are left out.
    pub fn resolve_attester_duties(
        &self,
        epoch: Epoch,
        validator_indices: Vec<ValidatorIndex>,
    ) -> impl Future<Output = Result<Option<Vec<AttesterDuty>>>> + Send + 'static {
        if validator_indices.is_empty() {
            return Either::Left(future::ok(Some(vec![])));
        }

        Either::Right(
            self.validator_api
                .get_attestation_duties(epoch, validator_indices)
                .map_ok(|duties| {
                    duties.map(|duties| {
                        duties
                            .into_iter()
                            .filter_map(AttesterDuty::resolved)
                            .collect()
                    })
                }),
        )
    }

    /// Duties whose public key could not be resolved are left out.
    pub fn resolve_proposer_duties(
        &self,
        epoch: Epoch,
    ) -> impl Future<Output = Result<Option<Vec<ProposerDuty>>>> + Send + 'static {
        self.validator_api
            .get_proposer_duties(epoch)
            .map_ok(|duties| {
                duties.map(|duties| {
                    duties
                        .into_iter()
                        .filter_map(ProposerDuty::resolved)
                        .collect()
                })
            })
    }

    pub fn produce_aggregate(
        &self,
        slot: Slot,
        attestation_data_root: H256,
    ) -> impl Future<Output = Result<Option<Attestation>>> + Send + 'static {
        self.validator_api
            .create_aggregate(slot, attestation_data_root)
            .map_ok(|attestation| attestation.map(Attestation::from))
    }

    pub fn submit_signed_attestation(&self, attestation: Attestation) -> Result<(), Error> {
        if attestation.signature.is_zero() {
            return Err(Error::ZeroSignature);
        }

        let attestation = attestation.into();
        self.validator_api.send_signed_attestation(attestation);

        Ok(())
    }

    pub fn submit_signed_block(
        &self,
        block: SignedBeaconBlock,
    ) -> impl Future<Output = Result<ValidatorBlockResult>> + Send + 'static {
        self.validator_api
            .send_signed_block(block.into())
            .map_ok(|result| {
                let status = block_result_status(&result);
                ValidatorBlockResult::new(status, result)
            })
    }

    pub fn send_aggregates_and_proofs(
        &self,
        aggregates_and_proofs: impl IntoIterator<Item = SignedAggregateAndProof>,
    ) {
        for aggregate_and_proof in aggregates_and_proofs {
            self.validator_api
                .send_aggregate_and_proof(aggregate_and_proof.into());
        }
    }

    pub fn subscribe_to_committees(
        &self,
        requests: impl IntoIterator<Item = BeaconCommitteeSubscriptionRequest>,
    ) {
        let requests = requests.into_iter().map(Into::into).collect();
        self.validator_api.subscribe_to_beacon_committee(requests);
    }

    /// Subscribes to the subnet of a committee in order to aggregate its attestations.
    ///
    /// Does nothing if there is no best state yet or if the best state is already past the
    /// aggregation slot.
    pub fn subscribe_for_aggregation(&self, request: SubscribeToBeaconCommitteeRequest) {
        let SubscribeToBeaconCommitteeRequest {
            committee_index,
            aggregation_slot,
        } = request;

        let Some(state) = self.chain.best_state() else {
            debug!("not subscribing for aggregation at slot {aggregation_slot}: no best state");
            return;
        };

        if state.slot() > aggregation_slot {
            debug!(
                "not subscribing for aggregation at slot {aggregation_slot}: \
                 best state is at slot {}",
                state.slot(),
            );
            return;
        }

        let epoch = misc::compute_epoch_at_slot(&self.config, aggregation_slot);
        let committees_at_slot =
            accessors::get_committee_count_per_slot(&self.config, &state, epoch);

        let requests = vec![CommitteeSubscriptionRequest {
            validator_index: ValidatorIndexId::Unknown,
            committee_index,
            committees_at_slot,
            slot: aggregation_slot,
            is_aggregator: true,
        }];

        self.validator_api.subscribe_to_beacon_committee(requests);
    }

    pub fn subscribe_to_persistent_subnets(
        &self,
        subscriptions: impl IntoIterator<Item = SubnetSubscription>,
    ) {
        let subscriptions = subscriptions
            .into_iter()
            .map(Into::into)
            .collect::<HashSet<_>>();

        self.validator_api
            .subscribe_to_persistent_subnets(subscriptions);
    }
}

fn block_result_status(result: &SendSignedBlockResult) -> BlockResultStatus {
    if result.rejection_reason().is_none() {
        BlockResultStatus::Ok
    } else if result.is_internal_error() {
        BlockResultStatus::InternalError
    } else {
        BlockResultStatus::Accepted
    }
}
