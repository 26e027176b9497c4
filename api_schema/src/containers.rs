use bls::SignatureBytes;
use serde::{Deserialize, Serialize};
use types::phase0::{
    containers as internal,
    primitives::{
        CommitteeIndex, DepositIndex, Epoch, ExecutionBlockHash, Slot, ValidatorIndex, H256,
    },
};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Checkpoint {
    #[serde(with = "serde_utils::string_or_native")]
    pub epoch: Epoch,
    pub root: H256,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AttestationData {
    #[serde(with = "serde_utils::string_or_native")]
    pub slot: Slot,
    #[serde(with = "serde_utils::string_or_native")]
    pub index: CommitteeIndex,
    pub beacon_block_root: H256,
    pub source: Checkpoint,
    pub target: Checkpoint,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Attestation {
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub aggregation_bits: Vec<u8>,
    pub data: AttestationData,
    pub signature: SignatureBytes,
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Eth1Data {
    pub deposit_root: H256,
    #[serde(with = "serde_utils::string_or_native")]
    pub deposit_count: DepositIndex,
    pub block_hash: ExecutionBlockHash,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BeaconBlockBody {
    pub randao_reveal: SignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: H256,
    pub attestations: Vec<Attestation>,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BeaconBlock {
    #[serde(with = "serde_utils::string_or_native")]
    pub slot: Slot,
    #[serde(with = "serde_utils::string_or_native")]
    pub proposer_index: ValidatorIndex,
    pub parent_root: H256,
    pub state_root: H256,
    pub body: BeaconBlockBody,
}

#[derive(Clone, PartialEq, Eq, Default, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SignedBeaconBlock {
    pub message: BeaconBlock,
    pub signature: SignatureBytes,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AggregateAndProof {
    #[serde(with = "serde_utils::string_or_native")]
    pub index: ValidatorIndex,
    pub attestation: Attestation,
    pub selection_proof: SignatureBytes,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SignedAggregateAndProof {
    pub message: AggregateAndProof,
    pub signature: SignatureBytes,
}

impl From<internal::Checkpoint> for Checkpoint {
    fn from(checkpoint: internal::Checkpoint) -> Self {
        let internal::Checkpoint { epoch, root } = checkpoint;
        Self { epoch, root }
    }
}

impl From<Checkpoint> for internal::Checkpoint {
    fn from(checkpoint: Checkpoint) -> Self {
        let Checkpoint { epoch, root } = checkpoint;
        Self { epoch, root }
    }
}

impl From<internal::AttestationData> for AttestationData {
    fn from(data: internal::AttestationData) -> Self {
        let internal::AttestationData {
            slot,
            index,
            beacon_block_root,
            source,
            target,
        } = data;

        Self {
            slot,
            index,
            beacon_block_root,
            source: source.into(),
            target: target.into(),
        }
    }
}

impl From<AttestationData> for internal::AttestationData {
    fn from(data: AttestationData) -> Self {
        let AttestationData {
            slot,
            index,
            beacon_block_root,
            source,
            target,
        } = data;

        Self {
            slot,
            index,
            beacon_block_root,
            source: source.into(),
            target: target.into(),
        }
    }
}

impl From<internal::Attestation> for Attestation {
    fn from(attestation: internal::Attestation) -> Self {
        let internal::Attestation {
            aggregation_bits,
            data,
            signature,
        } = attestation;

        Self {
            aggregation_bits,
            data: data.into(),
            signature,
        }
    }
}

impl From<Attestation> for internal::Attestation {
    fn from(attestation: Attestation) -> Self {
        let Attestation {
            aggregation_bits,
            data,
            signature,
        } = attestation;

        Self {
            aggregation_bits,
            data: data.into(),
            signature,
        }
    }
}

impl From<internal::Eth1Data> for Eth1Data {
    fn from(eth1_data: internal::Eth1Data) -> Self {
        let internal::Eth1Data {
            deposit_root,
            deposit_count,
            block_hash,
        } = eth1_data;

        Self {
            deposit_root,
            deposit_count,
            block_hash,
        }
    }
}

impl From<Eth1Data> for internal::Eth1Data {
    fn from(eth1_data: Eth1Data) -> Self {
        let Eth1Data {
            deposit_root,
            deposit_count,
            block_hash,
        } = eth1_data;

        Self {
            deposit_root,
            deposit_count,
            block_hash,
        }
    }
}

impl From<internal::BeaconBlockBody> for BeaconBlockBody {
    fn from(body: internal::BeaconBlockBody) -> Self {
        let internal::BeaconBlockBody {
            randao_reveal,
            eth1_data,
            graffiti,
            attestations,
        } = body;

        Self {
            randao_reveal,
            eth1_data: eth1_data.into(),
            graffiti,
            attestations: attestations.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<BeaconBlockBody> for internal::BeaconBlockBody {
    fn from(body: BeaconBlockBody) -> Self {
        let BeaconBlockBody {
            randao_reveal,
            eth1_data,
            graffiti,
            attestations,
        } = body;

        Self {
            randao_reveal,
            eth1_data: eth1_data.into(),
            graffiti,
            attestations: attestations.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<internal::BeaconBlock> for BeaconBlock {
    fn from(block: internal::BeaconBlock) -> Self {
        let internal::BeaconBlock {
            slot,
            proposer_index,
            parent_root,
            state_root,
            body,
        } = block;

        Self {
            slot,
            proposer_index,
            parent_root,
            state_root,
            body: body.into(),
        }
    }
}

impl From<BeaconBlock> for internal::BeaconBlock {
    fn from(block: BeaconBlock) -> Self {
        let BeaconBlock {
            slot,
            proposer_index,
            parent_root,
            state_root,
            body,
        } = block;

        Self {
            slot,
            proposer_index,
            parent_root,
            state_root,
            body: body.into(),
        }
    }
}

impl From<internal::SignedBeaconBlock> for SignedBeaconBlock {
    fn from(block: internal::SignedBeaconBlock) -> Self {
        let internal::SignedBeaconBlock { message, signature } = block;

        Self {
            message: message.into(),
            signature,
        }
    }
}

impl From<SignedBeaconBlock> for internal::SignedBeaconBlock {
    fn from(block: SignedBeaconBlock) -> Self {
        let SignedBeaconBlock { message, signature } = block;

        Self {
            message: message.into(),
            signature,
        }
    }
}

impl From<internal::AggregateAndProof> for AggregateAndProof {
    fn from(aggregate_and_proof: internal::AggregateAndProof) -> Self {
        let internal::AggregateAndProof {
            aggregator_index,
            aggregate,
            selection_proof,
        } = aggregate_and_proof;

        Self {
            index: aggregator_index,
            attestation: aggregate.into(),
            selection_proof,
        }
    }
}

impl From<AggregateAndProof> for internal::AggregateAndProof {
    fn from(aggregate_and_proof: AggregateAndProof) -> Self {
        let AggregateAndProof {
            index,
            attestation,
            selection_proof,
        } = aggregate_and_proof;

        Self {
            aggregator_index: index,
            aggregate: attestation.into(),
            selection_proof,
        }
    }
}

impl From<internal::SignedAggregateAndProof> for SignedAggregateAndProof {
    fn from(aggregate_and_proof: internal::SignedAggregateAndProof) -> Self {
        let internal::SignedAggregateAndProof { message, signature } = aggregate_and_proof;

        Self {
            message: message.into(),
            signature,
        }
    }
}

impl From<SignedAggregateAndProof> for internal::SignedAggregateAndProof {
    fn from(aggregate_and_proof: SignedAggregateAndProof) -> Self {
        let SignedAggregateAndProof { message, signature } = aggregate_and_proof;

        Self {
            message: message.into(),
            signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use serde_json::{json, Result, Value};

    use super::*;

    fn attestation_json() -> Value {
        json!({
            "aggregation_bits": "0x0d",
            "data": {
                "slot": "12",
                "index": "1",
                "beacon_block_root": format!("0x{}", "11".repeat(32)),
                "source": {
                    "epoch": "0",
                    "root": format!("0x{}", "00".repeat(32)),
                },
                "target": {
                    "epoch": "1",
                    "root": format!("0x{}", "22".repeat(32)),
                },
            },
            "signature": format!("0x{}", "33".repeat(96)),
        })
    }

    #[test]
    fn attestation_uses_decimal_strings_and_prefixed_hex() -> Result<()> {
        let attestation = serde_json::from_value::<Attestation>(attestation_json())?;

        assert_eq!(attestation.aggregation_bits, hex!("0d"));
        assert_eq!(attestation.data.slot, 12);
        assert_eq!(attestation.data.target.root, H256::repeat_byte(0x22));
        assert_eq!(attestation.signature, SignatureBytes::repeat_byte(0x33));
        assert_eq!(serde_json::to_value(attestation)?, attestation_json());

        Ok(())
    }

    #[test]
    fn attestation_accepts_native_integers() -> Result<()> {
        let mut json = attestation_json();
        json["data"]["slot"] = json!(12);

        let attestation = serde_json::from_value::<Attestation>(json)?;

        assert_eq!(attestation.data.slot, 12);

        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut json = attestation_json();
        json["committee_bits"] = json!("0x01");

        serde_json::from_value::<Attestation>(json).expect_err("committee_bits is not a field");
    }

    #[test]
    fn aggregate_index_maps_to_aggregator_index() {
        let wire = SignedAggregateAndProof {
            message: AggregateAndProof {
                index: 7,
                attestation: Attestation::default(),
                selection_proof: SignatureBytes::repeat_byte(1),
            },
            signature: SignatureBytes::repeat_byte(2),
        };

        let internal = internal::SignedAggregateAndProof::from(wire.clone());

        assert_eq!(internal.message.aggregator_index, 7);
        assert_eq!(
            internal.message.selection_proof,
            SignatureBytes::repeat_byte(1),
        );
        assert_eq!(SignedAggregateAndProof::from(internal), wire);
    }

    #[test]
    fn block_attestations_keep_their_order() {
        let attestation = |slot| internal::Attestation {
            data: internal::AttestationData {
                slot,
                ..internal::AttestationData::default()
            },
            ..internal::Attestation::default()
        };

        let block = internal::BeaconBlock {
            slot: 3,
            body: internal::BeaconBlockBody {
                attestations: vec![attestation(2), attestation(1)],
                ..internal::BeaconBlockBody::default()
            },
            ..internal::BeaconBlock::default()
        };

        let wire = BeaconBlock::from(block);
        let slots = wire
            .body
            .attestations
            .iter()
            .map(|attestation| attestation.data.slot)
            .collect::<Vec<_>>();

        assert_eq!(slots, [2, 1]);
    }
}
