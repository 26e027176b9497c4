use bls::{PublicKey, PublicKeyBytes};
use serde::{Deserialize, Serialize};
use types::phase0::primitives::{CommitteeIndex, Epoch, Slot, ValidatorIndex};
use validator_api::{AttesterDuties, Duties, ProposerDuties};

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorDutiesRequest {
    #[serde(with = "serde_utils::string_or_native")]
    pub epoch: Epoch,
    pub pubkeys: Vec<PublicKeyBytes>,
}

/// Duties of one validator keyed by its public key.
///
/// A validator without duties has every duty field set to `null` and no proposal slots.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorDuties {
    pub validator_pubkey: PublicKeyBytes,
    #[serde(default, with = "serde_utils::string_or_native_option")]
    pub validator_index: Option<ValidatorIndex>,
    #[serde(default, with = "serde_utils::string_or_native_option")]
    pub attestation_committee_index: Option<CommitteeIndex>,
    #[serde(default, with = "serde_utils::string_or_native_option")]
    pub attestation_committee_position: Option<u64>,
    #[serde(default, with = "serde_utils::string_or_native_option")]
    pub aggregator_modulo: Option<u64>,
    #[serde(default, with = "serde_utils::string_or_native_sequence")]
    pub block_proposal_slots: Vec<Slot>,
    #[serde(default, with = "serde_utils::string_or_native_option")]
    pub attestation_slot: Option<Slot>,
}

impl From<validator_api::ValidatorDuties> for ValidatorDuties {
    fn from(duties: validator_api::ValidatorDuties) -> Self {
        let validator_api::ValidatorDuties { public_key, duties } = duties;
        let validator_pubkey = public_key.to_bytes();

        let Some(duties) = duties else {
            return Self {
                validator_pubkey,
                validator_index: None,
                attestation_committee_index: None,
                attestation_committee_position: None,
                aggregator_modulo: None,
                block_proposal_slots: vec![],
                attestation_slot: None,
            };
        };

        let Duties {
            validator_index,
            attestation_committee_index,
            attestation_committee_position,
            aggregator_modulo,
            block_proposal_slots,
            attestation_slot,
        } = duties;

        Self {
            validator_pubkey,
            validator_index: Some(validator_index),
            attestation_committee_index: Some(attestation_committee_index),
            attestation_committee_position: Some(attestation_committee_position),
            aggregator_modulo: Some(aggregator_modulo),
            block_proposal_slots,
            attestation_slot: Some(attestation_slot),
        }
    }
}

impl TryFrom<ValidatorDuties> for validator_api::ValidatorDuties {
    type Error = bls::Error;

    fn try_from(duties: ValidatorDuties) -> Result<Self, Self::Error> {
        let ValidatorDuties {
            validator_pubkey,
            validator_index,
            attestation_committee_index,
            attestation_committee_position,
            aggregator_modulo,
            block_proposal_slots,
            attestation_slot,
        } = duties;

        let public_key = PublicKey::try_from(validator_pubkey)?;

        // A partially filled record does not describe a usable assignment.
        let duties = match (
            validator_index,
            attestation_committee_index,
            attestation_committee_position,
            aggregator_modulo,
            attestation_slot,
        ) {
            (
                Some(validator_index),
                Some(attestation_committee_index),
                Some(attestation_committee_position),
                Some(aggregator_modulo),
                Some(attestation_slot),
            ) => Some(Duties {
                validator_index,
                attestation_committee_index,
                attestation_committee_position,
                aggregator_modulo,
                block_proposal_slots,
                attestation_slot,
            }),
            _ => None,
        };

        Ok(Self { public_key, duties })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AttesterDuty {
    pub pubkey: PublicKeyBytes,
    #[serde(with = "serde_utils::string_or_native")]
    pub validator_index: ValidatorIndex,
    #[serde(with = "serde_utils::string_or_native")]
    pub committee_index: CommitteeIndex,
    #[serde(with = "serde_utils::string_or_native")]
    pub committee_length: u64,
    #[serde(with = "serde_utils::string_or_native")]
    pub committees_at_slot: u64,
    #[serde(with = "serde_utils::string_or_native")]
    pub validator_committee_index: u64,
    #[serde(with = "serde_utils::string_or_native")]
    pub slot: Slot,
}

impl AttesterDuty {
    /// Returns `None` if the duty has no public key.
    #[must_use]
    pub fn resolved(duties: AttesterDuties) -> Option<Self> {
        let AttesterDuties {
            public_key,
            validator_index,
            committee_index,
            committee_length,
            committees_at_slot,
            validator_committee_index,
            slot,
        } = duties;

        Some(Self {
            pubkey: public_key?,
            validator_index,
            committee_index,
            committee_length,
            committees_at_slot,
            validator_committee_index,
            slot,
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProposerDuty {
    pub pubkey: PublicKeyBytes,
    #[serde(with = "serde_utils::string_or_native")]
    pub validator_index: ValidatorIndex,
    #[serde(with = "serde_utils::string_or_native")]
    pub slot: Slot,
}

impl ProposerDuty {
    /// Returns `None` if the duty has no public key.
    #[must_use]
    pub fn resolved(duties: ProposerDuties) -> Option<Self> {
        let ProposerDuties {
            public_key,
            validator_index,
            slot,
        } = duties;

        Some(Self {
            pubkey: public_key?,
            validator_index,
            slot,
        })
    }
}

#[cfg(test)]
mod tests {
    use blst::min_pk::SecretKey;
    use serde_json::json;

    use super::*;

    fn public_key(seed: u8) -> PublicKey {
        SecretKey::key_gen(&[seed; 32], &[])
            .expect("input keying material is long enough")
            .sk_to_pk()
            .into()
    }

    fn duties() -> Duties {
        Duties {
            validator_index: 4,
            attestation_committee_index: 1,
            attestation_committee_position: 9,
            aggregator_modulo: 2,
            block_proposal_slots: vec![33, 40],
            attestation_slot: 35,
        }
    }

    #[test]
    fn absent_duties_stay_absent() -> Result<(), bls::Error> {
        let internal = validator_api::ValidatorDuties::no_duties(public_key(1));
        let wire = ValidatorDuties::from(internal.clone());

        assert_eq!(wire.validator_index, None);
        assert_eq!(wire.attestation_slot, None);
        assert!(wire.block_proposal_slots.is_empty());
        assert_eq!(validator_api::ValidatorDuties::try_from(wire)?, internal);

        Ok(())
    }

    #[test]
    fn present_duties_are_preserved() -> Result<(), bls::Error> {
        let internal = validator_api::ValidatorDuties::with_duties(public_key(2), duties());
        let wire = ValidatorDuties::from(internal.clone());

        assert_eq!(validator_api::ValidatorDuties::try_from(wire)?, internal);

        Ok(())
    }

    #[test]
    fn partial_duties_are_absent() -> Result<(), bls::Error> {
        let internal = validator_api::ValidatorDuties::with_duties(public_key(3), duties());
        let wire = ValidatorDuties {
            aggregator_modulo: None,
            ..ValidatorDuties::from(internal)
        };

        let decoded = validator_api::ValidatorDuties::try_from(wire)?;

        assert_eq!(decoded.duties, None);

        Ok(())
    }

    #[test]
    fn undecodable_public_key_is_an_error() {
        let wire = ValidatorDuties::from(validator_api::ValidatorDuties::no_duties(public_key(4)));
        let wire = ValidatorDuties {
            validator_pubkey: PublicKeyBytes::zero(),
            ..wire
        };

        validator_api::ValidatorDuties::try_from(wire).expect_err("all zero bytes are not a key");
    }

    #[test]
    fn absent_duties_serialize_as_null() -> serde_json::Result<()> {
        let internal = validator_api::ValidatorDuties::no_duties(public_key(5));
        let pubkey = internal.public_key.to_bytes();
        let json = serde_json::to_value(ValidatorDuties::from(internal))?;

        assert_eq!(
            json,
            json!({
                "validator_pubkey": pubkey,
                "validator_index": null,
                "attestation_committee_index": null,
                "attestation_committee_position": null,
                "aggregator_modulo": null,
                "block_proposal_slots": [],
                "attestation_slot": null,
            }),
        );

        Ok(())
    }

    #[test]
    fn missing_duty_fields_deserialize_as_absent() -> serde_json::Result<()> {
        let pubkey = public_key(6).to_bytes();
        let json = json!({ "validator_pubkey": pubkey });
        let wire = serde_json::from_value::<ValidatorDuties>(json)?;

        assert_eq!(wire.validator_index, None);
        assert!(wire.block_proposal_slots.is_empty());

        Ok(())
    }

    #[test]
    fn duties_without_public_key_are_not_resolved() {
        let attester_duties = AttesterDuties {
            public_key: None,
            validator_index: 1,
            committee_index: 0,
            committee_length: 128,
            committees_at_slot: 4,
            validator_committee_index: 17,
            slot: 40,
        };

        let proposer_duties = ProposerDuties {
            public_key: Some(PublicKeyBytes::repeat_byte(1)),
            validator_index: 2,
            slot: 41,
        };

        assert_eq!(AttesterDuty::resolved(attester_duties), None);
        assert_eq!(
            ProposerDuty::resolved(proposer_duties),
            Some(ProposerDuty {
                pubkey: PublicKeyBytes::repeat_byte(1),
                validator_index: 2,
                slot: 41,
            }),
        );
    }

    #[test]
    fn attester_duty_uses_decimal_strings() -> serde_json::Result<()> {
        let duty = AttesterDuty {
            pubkey: PublicKeyBytes::repeat_byte(0xaa),
            validator_index: 1,
            committee_index: 2,
            committee_length: 3,
            committees_at_slot: 4,
            validator_committee_index: 5,
            slot: 6,
        };

        assert_eq!(
            serde_json::to_value(duty)?,
            json!({
                "pubkey": format!("0x{}", "aa".repeat(48)),
                "validator_index": "1",
                "committee_index": "2",
                "committee_length": "3",
                "committees_at_slot": "4",
                "validator_committee_index": "5",
                "slot": "6",
            }),
        );

        Ok(())
    }
}
