use core::num::NonZeroU64;
use std::borrow::Cow;

use nonzero_ext::nonzero;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Protocol parameters the duty coordinator depends on.
///
/// Values are read at runtime rather than fixed at compile time so that the same binary can serve
/// networks with different epoch lengths. Keys follow the naming used in `consensus-specs`
/// configuration files. Missing keys take their mainnet values.
#[expect(
    clippy::unsafe_derive_deserialize,
    reason = "A false positive triggered by `nonzero!`. \
              `Config` is intended to be deserialized from user input and checked with `validate`."
)]
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    pub config_name: Cow<'static, str>,
    #[serde(with = "serde_utils::string_or_native")]
    pub slots_per_epoch: NonZeroU64,
    #[serde(with = "serde_utils::string_or_native")]
    pub target_committee_size: NonZeroU64,
    #[serde(with = "serde_utils::string_or_native")]
    pub max_committees_per_slot: NonZeroU64,
    #[serde(with = "serde_utils::string_or_native")]
    pub target_aggregators_per_committee: NonZeroU64,
    #[serde(with = "serde_utils::string_or_native")]
    pub attestation_subnet_count: NonZeroU64,
}

impl Default for Config {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl Config {
    #[must_use]
    pub fn mainnet() -> Self {
        Self {
            config_name: Cow::Borrowed("mainnet"),
            slots_per_epoch: nonzero!(32_u64),
            target_committee_size: nonzero!(128_u64),
            max_committees_per_slot: nonzero!(64_u64),
            target_aggregators_per_committee: nonzero!(16_u64),
            attestation_subnet_count: nonzero!(64_u64),
        }
    }

    #[must_use]
    pub fn minimal() -> Self {
        Self {
            config_name: Cow::Borrowed("minimal"),
            slots_per_epoch: nonzero!(8_u64),
            target_committee_size: nonzero!(4_u64),
            max_committees_per_slot: nonzero!(4_u64),
            target_aggregators_per_committee: nonzero!(16_u64),
            attestation_subnet_count: nonzero!(64_u64),
        }
    }

    pub const fn validate(&self) -> Result<(), Error> {
        let max_committees_per_slot = self.max_committees_per_slot.get();
        let attestation_subnet_count = self.attestation_subnet_count.get();

        // Every committee in a slot has to map to its own subnet.
        if attestation_subnet_count < max_committees_per_slot {
            return Err(Error::TooFewSubnets {
                attestation_subnet_count,
                max_committees_per_slot,
            });
        }

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "ATTESTATION_SUBNET_COUNT ({attestation_subnet_count}) is less than \
         MAX_COMMITTEES_PER_SLOT ({max_committees_per_slot})"
    )]
    TooFewSubnets {
        attestation_subnet_count: u64,
        max_committees_per_slot: u64,
    },
}
