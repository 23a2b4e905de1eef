use crate::{Condition, Draft, Mode, Token};

/// Structured state reconstructed from stored predicate text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// Blank text: no condition.
    Empty,
    /// Text matched one of the single-condition patterns.
    Simple(Condition),
    /// Whitespace-separated tokens of a Complex expression.
    Complex(Vec<Token>),
    /// Text outside the restricted grammar, kept verbatim (trimmed) for
    /// display. No structure is invented for it.
    Opaque(String),
}

impl Parsed {
    /// The mode this result populates, if any.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Parsed::Simple(_) => Some(Mode::Simple),
            Parsed::Complex(_) => Some(Mode::Complex),
            Parsed::Empty | Parsed::Opaque(_) => None,
        }
    }

    /// Convert into editable state. `Empty` becomes the empty state of
    /// `mode`; `Opaque` has no structured form.
    #[must_use]
    pub fn into_draft(self, mode: Mode) -> Option<Draft> {
        match self {
            Parsed::Empty => Some(Draft::empty(mode)),
            Parsed::Simple(condition) => Some(Draft::Simple {
                condition: Some(condition),
            }),
            Parsed::Complex(tokens) => Some(Draft::Complex { tokens }),
            Parsed::Opaque(_) => None,
        }
    }
}
