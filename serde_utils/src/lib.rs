//! `serde` adapters for the shapes used by the validator API.
//!
//! The API represents integers as decimal strings and byte vectors as `0x`-prefixed hex.

pub mod prefixed_hex_bytes;
pub mod string_or_native;
pub mod string_or_native_option;
pub mod string_or_native_sequence;
