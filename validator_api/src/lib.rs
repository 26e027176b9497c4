//! The interface through which duties are computed and signed artifacts are published.
//!
//! [`ValidatorApi`] is what the duty coordinator consumes. [`ValidatorApiChannel`] implements it by
//! forwarding every call as an [`ApiToValidator`] message to the service that does the work.

pub use crate::{
    api::ValidatorApi,
    block_result::{FailureReason, SendSignedBlockResult},
    channel::ValidatorApiChannel,
    duties::{AttesterDuties, Duties, ProposerDuties, ValidatorDuties},
    messages::ApiToValidator,
    subscriptions::{CommitteeSubscriptionRequest, SubnetSubscription, ValidatorIndexId},
};

mod api;
mod block_result;
mod channel;
mod duties;
mod messages;
mod subscriptions;
