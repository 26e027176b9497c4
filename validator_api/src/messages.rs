use std::collections::HashSet;

use anyhow::Result;
use bls::{PublicKey, SignatureBytes};
use futures::channel::{mpsc::UnboundedSender, oneshot::Sender};
use log::warn;
use types::phase0::{
    containers::{Attestation, BeaconBlock, SignedAggregateAndProof, SignedBeaconBlock},
    primitives::{CommitteeIndex, Epoch, Slot, ValidatorIndex, H256},
};

use crate::{
    block_result::SendSignedBlockResult,
    duties::{AttesterDuties, ProposerDuties, ValidatorDuties},
    subscriptions::{CommitteeSubscriptionRequest, SubnetSubscription},
};

pub enum ApiToValidator {
    UnsignedBlock {
        slot: Slot,
        randao_reveal: SignatureBytes,
        graffiti: Option<H256>,
        sender: Sender<Result<Option<BeaconBlock>>>,
    },
    UnsignedAttestation {
        slot: Slot,
        committee_index: CommitteeIndex,
        sender: Sender<Result<Option<Attestation>>>,
    },
    Duties {
        epoch: Epoch,
        public_keys: Vec<PublicKey>,
        sender: Sender<Result<Option<Vec<ValidatorDuties>>>>,
    },
    AttestationDuties {
        epoch: Epoch,
        validator_indices: Vec<ValidatorIndex>,
        sender: Sender<Result<Option<Vec<AttesterDuties>>>>,
    },
    ProposerDuties {
        epoch: Epoch,
        sender: Sender<Result<Option<Vec<ProposerDuties>>>>,
    },
    Aggregate {
        slot: Slot,
        attestation_data_root: H256,
        sender: Sender<Result<Option<Attestation>>>,
    },
    SignedAttestation(Box<Attestation>),
    SignedBlock {
        block: Box<SignedBeaconBlock>,
        sender: Sender<Result<SendSignedBlockResult>>,
    },
    AggregateAndProof(Box<SignedAggregateAndProof>),
    BeaconCommitteeSubscriptions(Vec<CommitteeSubscriptionRequest>),
    PersistentSubnetSubscriptions(HashSet<SubnetSubscription>),
}

impl ApiToValidator {
    pub fn send(self, tx: &UnboundedSender<Self>) {
        if tx.unbounded_send(self).is_err() {
            warn!("send to validator failed because the receiver was dropped");
        }
    }
}
