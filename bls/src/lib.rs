//! BLS12-381 byte containers and public key decoding.
//!
//! Keys and signatures are carried around as fixed-size byte arrays and only decoded when
//! something needs the group element. Signing and verification are not done here.

pub use crate::{
    error::Error,
    public_key::PublicKey,
    public_key_bytes::{PublicKeyBytes, COMPRESSED_SIZE as PUBLIC_KEY_SIZE},
    signature_bytes::{SignatureBytes, COMPRESSED_SIZE as SIGNATURE_SIZE},
};

mod error;
mod public_key;
mod public_key_bytes;
mod signature_bytes;
