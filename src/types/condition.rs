use std::fmt;
use std::str::FromStr;

use crate::parse::ParseError;

use super::config::BooleanLiterals;

/// Operators available to a single Simple-mode condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConditionOp {
    Equals,
    NotEquals,
    Like,
    NotLike,
    In,
    NotIn,
}

impl ConditionOp {
    /// The fixed operator enumeration, in the order editors list them.
    pub const ALL: [ConditionOp; 6] = [
        ConditionOp::Equals,
        ConditionOp::NotEquals,
        ConditionOp::Like,
        ConditionOp::NotLike,
        ConditionOp::In,
        ConditionOp::NotIn,
    ];

    /// Canonical operator name, e.g. `"not_in"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ConditionOp::Equals => "equals",
            ConditionOp::NotEquals => "not_equals",
            ConditionOp::Like => "like",
            ConditionOp::NotLike => "not_like",
            ConditionOp::In => "in",
            ConditionOp::NotIn => "not_in",
        }
    }

    /// The operator as written in a canonical predicate string.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            ConditionOp::Equals => "=",
            ConditionOp::NotEquals => "!=",
            ConditionOp::Like => "LIKE",
            ConditionOp::NotLike => "NOT LIKE",
            ConditionOp::In => "IN",
            ConditionOp::NotIn => "NOT IN",
        }
    }

    /// Whether the unquoted `true`/`false` short-circuit applies.
    #[must_use]
    pub fn is_equality(self) -> bool {
        matches!(self, ConditionOp::Equals | ConditionOp::NotEquals)
    }

    /// Whether the value is a comma-separated list.
    #[must_use]
    pub fn is_list(self) -> bool {
        matches!(self, ConditionOp::In | ConditionOp::NotIn)
    }
}

impl fmt::Display for ConditionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for ConditionOp {
    type Err = ParseError;

    /// Accepts canonical names (`not_in`) and predicate syntax (`NOT IN`, `<>`),
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();
        let op = match normalized.as_str() {
            "=" | "==" | "equals" | "eq" => ConditionOp::Equals,
            "!=" | "<>" | "not_equals" | "neq" => ConditionOp::NotEquals,
            "like" => ConditionOp::Like,
            "not like" | "not_like" => ConditionOp::NotLike,
            "in" => ConditionOp::In,
            "not in" | "not_in" => ConditionOp::NotIn,
            _ => {
                return Err(ParseError::new(format!(
                    "unknown condition operator '{}'",
                    s.trim()
                )))
            }
        };
        Ok(op)
    }
}

/// A single structured `field OPERATOR value` condition.
///
/// `value` is kept exactly as the operator entered it; list operators hold
/// the raw comma-separated text. Formatting happens in
/// [`serialize_condition`](crate::serialize_condition).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    pub field: String,
    pub op: ConditionOp,
    pub value: String,
}

impl Condition {
    #[must_use]
    pub fn new(field: impl Into<String>, op: ConditionOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// The individual list entries for `IN` / `NOT IN`: split on commas,
    /// trimmed, empty pieces dropped.
    pub fn list_values(&self) -> impl Iterator<Item = &str> {
        self.value
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
    }
}

/// Renders with the default [`BooleanLiterals::Unquoted`] policy.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize::serialize_condition(
            self,
            BooleanLiterals::default(),
        ))
    }
}

impl FromStr for Condition {
    type Err = ParseError;

    /// Parse a stored single-condition predicate. Text outside the
    /// single-condition subset is an error here; use
    /// [`parse_simple`](crate::parse::parse_simple) for the opaque fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match crate::parse::parse_simple(s) {
            crate::parse::Parsed::Simple(condition) => Ok(condition),
            crate::parse::Parsed::Empty => Err(ParseError::new("empty predicate")),
            _ => Err(ParseError::new(format!(
                "'{}' is not a single-condition predicate",
                s.trim()
            ))),
        }
    }
}

/// Intermediate builder for a [`Condition`] on one field.
/// Created by [`field()`]; requires an operator method to produce a condition.
#[derive(Debug, Clone)]
pub struct FieldCondition {
    name: String,
}

impl FieldCondition {
    fn with(self, op: ConditionOp, value: impl Into<String>) -> Condition {
        Condition::new(self.name, op, value)
    }

    #[must_use]
    pub fn equals(self, value: impl Into<String>) -> Condition {
        self.with(ConditionOp::Equals, value)
    }

    #[must_use]
    pub fn not_equals(self, value: impl Into<String>) -> Condition {
        self.with(ConditionOp::NotEquals, value)
    }

    #[must_use]
    pub fn like(self, value: impl Into<String>) -> Condition {
        self.with(ConditionOp::Like, value)
    }

    #[must_use]
    pub fn not_like(self, value: impl Into<String>) -> Condition {
        self.with(ConditionOp::NotLike, value)
    }

    #[must_use]
    pub fn is_in(self, values: impl Into<String>) -> Condition {
        self.with(ConditionOp::In, values)
    }

    #[must_use]
    pub fn not_in(self, values: impl Into<String>) -> Condition {
        self.with(ConditionOp::NotIn, values)
    }
}

#[must_use]
pub fn field(name: &str) -> FieldCondition {
    FieldCondition {
        name: name.to_owned(),
    }
}

/// Whether `name` is usable as a condition field: an ASCII letter or `_`,
/// followed by letters, digits, `_` or `.`.
#[must_use]
pub fn is_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
