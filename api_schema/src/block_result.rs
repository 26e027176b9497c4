use http::StatusCode;
use serde::{Deserialize, Serialize};
use types::phase0::primitives::H256;
use validator_api::SendSignedBlockResult;

/// How the outcome of publishing a block is reported to the caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BlockResultStatus {
    /// The block was imported.
    Ok,
    /// The block was not imported but may still become canonical.
    Accepted,
    /// Importing the block failed for reasons unrelated to the block.
    InternalError,
}

impl BlockResultStatus {
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::Ok => StatusCode::OK,
            Self::Accepted => StatusCode::ACCEPTED,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorBlockResult {
    // The absence of `#[serde(with = "serde_utils::string_or_native")]` is intentional.
    // Status codes are numbers.
    pub response_code: u16,
    pub rejection_reason: Option<String>,
    pub hash_root: Option<H256>,
}

impl ValidatorBlockResult {
    #[must_use]
    pub fn new(status: BlockResultStatus, result: SendSignedBlockResult) -> Self {
        let SendSignedBlockResult {
            block_root,
            rejection_reason,
        } = result;

        Self {
            response_code: status.status_code().as_u16(),
            rejection_reason,
            hash_root: block_root,
        }
    }

    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.response_code).ok()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Result};
    use test_case::test_case;
    use validator_api::FailureReason;

    use super::*;

    #[test_case(BlockResultStatus::Ok, 200)]
    #[test_case(BlockResultStatus::Accepted, 202)]
    #[test_case(BlockResultStatus::InternalError, 500)]
    fn status_codes(status: BlockResultStatus, expected: u16) {
        assert_eq!(status.status_code().as_u16(), expected);
    }

    #[test]
    fn block_result_serializes_response_code_as_number() -> Result<()> {
        let result = ValidatorBlockResult::new(
            BlockResultStatus::Accepted,
            SendSignedBlockResult::rejected(FailureReason::UnknownParent),
        );

        assert_eq!(result.status_code(), Some(StatusCode::ACCEPTED));
        assert_eq!(
            serde_json::to_value(result)?,
            json!({
                "response_code": 202,
                "rejection_reason": "UNKNOWN_PARENT",
                "hash_root": null,
            }),
        );

        Ok(())
    }

    #[test]
    fn block_root_becomes_hash_root() {
        let result = ValidatorBlockResult::new(
            BlockResultStatus::Ok,
            SendSignedBlockResult::success(H256::repeat_byte(5)),
        );

        assert_eq!(result.hash_root, Some(H256::repeat_byte(5)));
        assert_eq!(result.rejection_reason, None);
    }
}
