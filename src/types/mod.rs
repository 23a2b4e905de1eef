mod condition;
mod config;
mod error;
mod flag_registry;
mod state;
mod token;
mod validity;

pub use condition::{Condition, ConditionOp, FieldCondition, field, is_field_name};
pub use config::{BooleanLiterals, BuilderConfig};
pub use error::{BuilderError, SyntaxIssue};
pub use flag_registry::FlagRegistry;
pub use state::{Draft, Mode, Phase};
pub use token::{LogicalOp, Paren, Token, flag, is_valid_flag_name};
pub use validity::{ValidationReport, Validity};
