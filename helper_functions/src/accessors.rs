use types::{
    config::Config,
    phase0::{beacon_state::BeaconState, primitives::Epoch},
};

use crate::{misc, predicates};

#[must_use]
pub fn active_validator_count(state: &BeaconState, epoch: Epoch) -> u64 {
    state
        .validators()
        .iter()
        .filter(|validator| predicates::is_active_validator(validator, epoch))
        .fold(0, |count, _| count + 1)
}

/// [`get_committee_count_per_slot`](https://github.com/ethereum/consensus-specs/blob/v1.4.0/specs/phase0/beacon-chain.md#get_committee_count_per_slot)
#[must_use]
pub fn get_committee_count_per_slot(config: &Config, state: &BeaconState, epoch: Epoch) -> u64 {
    let active_validator_count = active_validator_count(state, epoch);
    misc::committee_count_from_active_validator_count(config, active_validator_count)
}

#[cfg(test)]
mod tests {
    use bls::PublicKeyBytes;
    use types::phase0::{consts::FAR_FUTURE_EPOCH, containers::Validator};

    use super::*;

    fn state_with_validators(validators: impl IntoIterator<Item = (Epoch, Epoch)>) -> BeaconState {
        let validators = validators
            .into_iter()
            .map(|(activation_epoch, exit_epoch)| Validator {
                pubkey: PublicKeyBytes::zero(),
                activation_epoch,
                exit_epoch,
            })
            .collect();

        BeaconState {
            slot: 0,
            validators,
        }
    }

    #[test]
    fn only_active_validators_are_counted() {
        let state = state_with_validators([(0, FAR_FUTURE_EPOCH), (2, FAR_FUTURE_EPOCH), (0, 1)]);

        assert_eq!(active_validator_count(&state, 0), 2);
        assert_eq!(active_validator_count(&state, 1), 1);
        assert_eq!(active_validator_count(&state, 2), 2);
    }

    #[test]
    fn committee_count_depends_on_epoch() {
        // Minimal: 8 slots per epoch, target committee size 4, at most 4 committees per slot.
        let config = Config::minimal();
        let early = core::iter::repeat((0, FAR_FUTURE_EPOCH)).take(64);
        let late = core::iter::repeat((3, FAR_FUTURE_EPOCH)).take(64);
        let state = state_with_validators(early.chain(late));

        assert_eq!(get_committee_count_per_slot(&config, &state, 0), 2);
        assert_eq!(get_committee_count_per_slot(&config, &state, 3), 4);
    }
}
