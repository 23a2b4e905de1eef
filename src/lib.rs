//! Condition expression builder and canonical predicate serializer.
//!
//! A rule condition is edited in one of two modes: a single
//! `field OPERATOR value` condition ([`Mode::Simple`]) or a boolean
//! expression over named flags ([`Mode::Complex`]). [`ConditionBuilder`]
//! owns the editing state and keeps the canonical predicate string, the only
//! artifact persisted, in sync with it.

mod builder;
mod error;
pub mod parse;
mod serialize;
mod types;
mod validate;

pub use builder::{BuilderSnapshot, ConditionBuilder};
pub use error::RulecondError;
pub use serialize::{serialize, serialize_condition, serialize_tokens};
pub use types::{
    BooleanLiterals, BuilderConfig, BuilderError, Condition, ConditionOp, Draft, FieldCondition,
    FlagRegistry, LogicalOp, Mode, Paren, Phase, SyntaxIssue, Token, ValidationReport, Validity,
    field, flag, is_field_name, is_valid_flag_name,
};
pub use validate::validate;
