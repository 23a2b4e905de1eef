use std::fmt;

use super::condition::Condition;
use super::token::Token;

/// The two mutually exclusive editing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// One `field OPERATOR value` condition.
    #[default]
    Simple,
    /// A free-form boolean expression over flags.
    Complex,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Simple => write!(f, "simple"),
            Mode::Complex => write!(f, "complex"),
        }
    }
}

/// The builder's position in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Phase {
    SimpleEmpty,
    SimpleSet,
    ComplexEmpty,
    ComplexBuilding,
}

impl Phase {
    #[must_use]
    pub fn mode(self) -> Mode {
        match self {
            Phase::SimpleEmpty | Phase::SimpleSet => Mode::Simple,
            Phase::ComplexEmpty | Phase::ComplexBuilding => Mode::Complex,
        }
    }
}

/// Structured state for exactly one mode. Holding the other mode's data is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
pub enum Draft {
    Simple { condition: Option<Condition> },
    Complex { tokens: Vec<Token> },
}

impl Draft {
    #[must_use]
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Simple => Draft::Simple { condition: None },
            Mode::Complex => Draft::Complex { tokens: Vec::new() },
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Draft::Simple { .. } => Mode::Simple,
            Draft::Complex { .. } => Mode::Complex,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Draft::Simple { condition: None } => Phase::SimpleEmpty,
            Draft::Simple { condition: Some(_) } => Phase::SimpleSet,
            Draft::Complex { tokens } if tokens.is_empty() => Phase::ComplexEmpty,
            Draft::Complex { .. } => Phase::ComplexBuilding,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.phase(), Phase::SimpleEmpty | Phase::ComplexEmpty)
    }
}

impl Default for Draft {
    fn default() -> Self {
        Draft::empty(Mode::default())
    }
}
