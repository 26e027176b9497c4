use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use types::phase0::primitives::H256;

/// Reasons a signed block may fail to be imported.
///
/// Rejection reasons travel as strings so that reasons this enum does not know about still reach
/// the caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug, AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    UnknownParent,
    FailedStateTransition,
    FailedWeakSubjectivityChecks,
    DescendantOfInvalidBlock,
    InternalError,
}

#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct SendSignedBlockResult {
    pub block_root: Option<H256>,
    pub rejection_reason: Option<String>,
}

impl SendSignedBlockResult {
    #[must_use]
    pub const fn success(block_root: H256) -> Self {
        Self {
            block_root: Some(block_root),
            rejection_reason: None,
        }
    }

    #[must_use]
    pub fn rejected(reason: FailureReason) -> Self {
        Self::not_imported(reason.as_ref())
    }

    #[must_use]
    pub fn not_imported(reason: impl Into<String>) -> Self {
        Self {
            block_root: None,
            rejection_reason: Some(reason.into()),
        }
    }

    /// Returns the rejection reason unless it is absent or empty.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason
            .as_deref()
            .filter(|reason| !reason.is_empty())
    }

    #[must_use]
    pub fn is_internal_error(&self) -> bool {
        self.rejection_reason() == Some(FailureReason::InternalError.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(FailureReason::UnknownParent, "UNKNOWN_PARENT")]
    #[test_case(FailureReason::FailedStateTransition, "FAILED_STATE_TRANSITION")]
    #[test_case(FailureReason::InternalError, "INTERNAL_ERROR")]
    fn failure_reasons_use_screaming_snake_case(reason: FailureReason, expected: &str) {
        assert_eq!(reason.as_ref(), expected);
        assert_eq!(expected.parse(), Ok(reason));
    }

    #[test]
    fn empty_rejection_reason_counts_as_none() {
        let result = SendSignedBlockResult::not_imported("");

        assert_eq!(result.rejection_reason(), None);
        assert!(!result.is_internal_error());
    }

    #[test]
    fn internal_error_is_recognized() {
        let internal_error = SendSignedBlockResult::rejected(FailureReason::InternalError);
        let unknown_parent = SendSignedBlockResult::rejected(FailureReason::UnknownParent);
        let success = SendSignedBlockResult::success(H256::zero());

        assert!(internal_error.is_internal_error());
        assert!(!unknown_parent.is_internal_error());
        assert!(!success.is_internal_error());
    }
}
