use types::phase0::{containers::Validator, primitives::Epoch};

/// [`is_active_validator`](https://github.com/ethereum/consensus-specs/blob/v1.4.0/specs/phase0/beacon-chain.md#is_active_validator)
#[must_use]
pub const fn is_active_validator(validator: &Validator, epoch: Epoch) -> bool {
    validator.activation_epoch <= epoch && epoch < validator.exit_epoch
}

#[cfg(test)]
mod tests {
    use bls::PublicKeyBytes;
    use test_case::test_case;
    use types::phase0::consts::FAR_FUTURE_EPOCH;

    use super::*;

    #[test_case(0, FAR_FUTURE_EPOCH, 0 => true)]
    #[test_case(3, FAR_FUTURE_EPOCH, 2 => false; "not yet activated")]
    #[test_case(3, 5, 4 => true)]
    #[test_case(3, 5, 5 => false; "exited in requested epoch")]
    fn activity_window_is_half_open(
        activation_epoch: Epoch,
        exit_epoch: Epoch,
        epoch: Epoch,
    ) -> bool {
        let validator = Validator {
            pubkey: PublicKeyBytes::zero(),
            activation_epoch,
            exit_epoch,
        };

        is_active_validator(&validator, epoch)
    }
}
