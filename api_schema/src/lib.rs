//! Records exchanged with callers of the duty coordinator and their conversions to the internal
//! representation.
//!
//! Conversions are total except where bytes have to be decoded into a public key. They perform
//! no validation. That is left to the coordinator.

pub mod block_result;
pub mod containers;
pub mod duties;
pub mod subscriptions;
