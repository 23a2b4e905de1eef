use super::state::Mode;

/// How equality conditions render a `true`/`false` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BooleanLiterals {
    /// `active = TRUE` serializes as `active = true`.
    #[default]
    Unquoted,
    /// Every value is a quoted string: `active = 'TRUE'`.
    Quoted,
}

/// Settings for a [`ConditionBuilder`](crate::ConditionBuilder).
///
/// # Example
///
/// ```
/// use rulecond::{BooleanLiterals, BuilderConfig, Mode};
///
/// let config = BuilderConfig::new()
///     .with_boolean_literals(BooleanLiterals::Quoted)
///     .with_initial_mode(Mode::Complex);
/// assert_eq!(config.initial_mode, Mode::Complex);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuilderConfig {
    pub boolean_literals: BooleanLiterals,
    pub initial_mode: Mode,
}

impl BuilderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_boolean_literals(mut self, policy: BooleanLiterals) -> Self {
        self.boolean_literals = policy;
        self
    }

    #[must_use]
    pub fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.initial_mode = mode;
        self
    }
}
