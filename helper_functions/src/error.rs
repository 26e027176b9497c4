use thiserror::Error;
use types::phase0::primitives::CommitteeIndex;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "committee index {committee_index} is out of bounds \
         ({committees_per_slot} committees per slot)"
    )]
    CommitteeIndexOutOfBounds {
        committee_index: CommitteeIndex,
        committees_per_slot: u64,
    },
    #[error("subnet ID overflowed")]
    SubnetIdOverflow,
}
