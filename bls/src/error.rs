use blst::BLST_ERROR;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("public key decompression failed: {0:?}")]
    DecompressionFailed(BLST_ERROR),
    #[error("public key is not a valid group element: {0:?}")]
    InvalidPublicKey(BLST_ERROR),
}
