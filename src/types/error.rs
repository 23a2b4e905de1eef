use thiserror::Error;

use super::condition::ConditionOp;
use super::state::Mode;
use super::token::LogicalOp;

/// Usage errors: an intent the builder refuses in its current state.
/// The builder is left untouched when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("'{op}' needs a flag before it; only NOT may start an expression")]
    LeadingOperator { op: LogicalOp },

    #[error("{intent} is only available in {expected} mode")]
    WrongMode { intent: &'static str, expected: Mode },

    #[error("token index {index} is out of range for {len} tokens")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid flag name '{name}'")]
    InvalidFlagName { name: String },

    #[error("invalid field name '{field}' for {op} condition")]
    InvalidField { field: String, op: ConditionOp },
}

/// Why a token sequence is classified `invalid-syntax`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "issue", rename_all = "snake_case"))]
pub enum SyntaxIssue {
    #[error("')' at token {position} has no matching '('")]
    UnmatchedClose { position: usize },

    #[error("{count} unclosed '(' at end of expression")]
    UnclosedOpen { count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_operator_message() {
        let err = BuilderError::LeadingOperator { op: LogicalOp::And };
        assert_eq!(
            err.to_string(),
            "'AND' needs a flag before it; only NOT may start an expression"
        );
    }

    #[test]
    fn wrong_mode_message() {
        let err = BuilderError::WrongMode {
            intent: "appending a token",
            expected: Mode::Complex,
        };
        assert_eq!(
            err.to_string(),
            "appending a token is only available in complex mode"
        );
    }

    #[test]
    fn index_out_of_range_message() {
        let err = BuilderError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "token index 4 is out of range for 2 tokens");
    }

    #[test]
    fn invalid_field_message() {
        let err = BuilderError::InvalidField {
            field: "bad field".into(),
            op: ConditionOp::NotIn,
        };
        assert_eq!(
            err.to_string(),
            "invalid field name 'bad field' for NOT IN condition"
        );
    }

    #[test]
    fn unmatched_close_message() {
        let issue = SyntaxIssue::UnmatchedClose { position: 0 };
        assert_eq!(issue.to_string(), "')' at token 0 has no matching '('");
    }
}
