use bls::{PublicKey, PublicKeyBytes};
use types::phase0::primitives::{CommitteeIndex, Slot, ValidatorIndex};

/// Duties of one validator in an epoch, looked up by public key.
///
/// `duties` is `None` when the validator has no assignment (for example, because it is not yet
/// active). That is a valid answer, not a failure.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidatorDuties {
    pub public_key: PublicKey,
    pub duties: Option<Duties>,
}

impl ValidatorDuties {
    #[must_use]
    pub const fn no_duties(public_key: PublicKey) -> Self {
        Self {
            public_key,
            duties: None,
        }
    }

    #[must_use]
    pub const fn with_duties(public_key: PublicKey, duties: Duties) -> Self {
        Self {
            public_key,
            duties: Some(duties),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Duties {
    pub validator_index: ValidatorIndex,
    pub attestation_committee_index: CommitteeIndex,
    pub attestation_committee_position: u64,
    pub aggregator_modulo: u64,
    pub block_proposal_slots: Vec<Slot>,
    pub attestation_slot: Slot,
}

/// An attestation duty looked up by validator index.
///
/// `public_key` is `None` if the index could not be resolved to a key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AttesterDuties {
    pub public_key: Option<PublicKeyBytes>,
    pub validator_index: ValidatorIndex,
    pub committee_index: CommitteeIndex,
    pub committee_length: u64,
    pub committees_at_slot: u64,
    pub validator_committee_index: u64,
    pub slot: Slot,
}

/// A block proposal duty.
///
/// `public_key` is `None` if the proposer index could not be resolved to a key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProposerDuties {
    pub public_key: Option<PublicKeyBytes>,
    pub validator_index: ValidatorIndex,
    pub slot: Slot,
}
