use thiserror::Error;

use crate::parse::ParseError;
use crate::BuilderError;

/// Unified error type for string-driven entry points.
///
/// Returned by [`ConditionBuilder::confirm_parts()`](crate::ConditionBuilder::confirm_parts),
/// where the operator arrives as text and the confirm itself may be refused.
#[derive(Debug, Error)]
pub enum RulecondError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Builder(#[from] BuilderError),
}
