use http::StatusCode;
use thiserror::Error;

/// Errors detected before any request is made to the validator service.
///
/// Failures of the requests themselves are reported through the returned futures as
/// [`anyhow::Error`] and are passed through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot produce a block more than {slots_per_epoch} slots in the future")]
    CannotProduceFarFutureBlock { slots_per_epoch: u64 },
    #[error("cannot produce a block for a historic slot")]
    CannotProduceHistoricBlock,
    #[error("chain data is not available")]
    ChainDataUnavailable,
    #[error("public key at index {index} is invalid")]
    InvalidPublicKey {
        index: usize,
        #[source]
        source: bls::Error,
    },
    #[error("no randao_reveal was provided")]
    NoRandaoProvided,
    #[error("no slot was provided")]
    NoSlotProvided,
    #[error("signed attestations must have a non zero signature")]
    ZeroSignature,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// The request was malformed or violates a protocol bound. Retrying it will not help.
    Usage,
    /// The beacon node is not ready to answer yet.
    Unavailable,
    /// Bytes in the request could not be decoded.
    DataFormat,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CannotProduceFarFutureBlock { .. }
            | Self::CannotProduceHistoricBlock
            | Self::NoRandaoProvided
            | Self::NoSlotProvided
            | Self::ZeroSignature => ErrorKind::Usage,
            Self::ChainDataUnavailable => ErrorKind::Unavailable,
            Self::InvalidPublicKey { .. } => ErrorKind::DataFormat,
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Usage | ErrorKind::DataFormat => StatusCode::BAD_REQUEST,
            ErrorKind::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(&Error::NoSlotProvided, StatusCode::BAD_REQUEST)]
    #[test_case(&Error::ZeroSignature, StatusCode::BAD_REQUEST)]
    #[test_case(&Error::CannotProduceHistoricBlock, StatusCode::BAD_REQUEST)]
    #[test_case(&Error::ChainDataUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
    #[test_case(
        &Error::InvalidPublicKey {
            index: 0,
            source: bls::Error::DecompressionFailed(blst::BLST_ERROR::BLST_BAD_ENCODING),
        },
        StatusCode::BAD_REQUEST
    )]
    fn status_code_follows_kind(error: &Error, expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[test]
    fn far_future_message_names_epoch_length() {
        let error = Error::CannotProduceFarFutureBlock { slots_per_epoch: 8 };

        assert_eq!(
            error.to_string(),
            "cannot produce a block more than 8 slots in the future",
        );
    }
}
