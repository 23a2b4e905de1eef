//! Structured state to canonical predicate text.
//!
//! Simple mode renders `field OPERATOR value` with operator-specific value
//! formatting; Complex mode joins token text with single spaces. Every
//! reachable state serializes, and an empty state serializes to `""`.

use crate::{BooleanLiterals, Condition, ConditionOp, Draft, Token};

/// Serialize whichever mode's structured state `draft` holds.
#[must_use]
pub fn serialize(draft: &Draft, policy: BooleanLiterals) -> String {
    match draft {
        Draft::Simple { condition: None } => String::new(),
        Draft::Simple {
            condition: Some(condition),
        } => serialize_condition(condition, policy),
        Draft::Complex { tokens } => serialize_tokens(tokens),
    }
}

/// Render one Simple-mode condition as `field OPERATOR formatted_value`.
#[must_use]
pub fn serialize_condition(condition: &Condition, policy: BooleanLiterals) -> String {
    format!(
        "{} {} {}",
        condition.field,
        condition.op.keyword(),
        format_value(condition, policy)
    )
}

/// Join token text with single spaces, left to right.
#[must_use]
pub fn serialize_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_value(condition: &Condition, policy: BooleanLiterals) -> String {
    match condition.op {
        ConditionOp::Equals | ConditionOp::NotEquals => {
            match (policy, boolean_literal(&condition.value)) {
                (BooleanLiterals::Unquoted, Some(literal)) => literal.to_owned(),
                _ => quote(&condition.value),
            }
        }
        ConditionOp::Like | ConditionOp::NotLike => quote(&format!("%{}%", condition.value)),
        ConditionOp::In | ConditionOp::NotIn => {
            let items: Vec<String> = condition.list_values().map(quote).collect();
            format!("({})", items.join(", "))
        }
    }
}

/// `Some("true")` / `Some("false")` when the trimmed value is a boolean word
/// in any letter case.
pub(crate) fn boolean_literal(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some("true")
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some("false")
    } else {
        None
    }
}

/// Single-quote a literal, doubling embedded quotes.
pub(crate) fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
