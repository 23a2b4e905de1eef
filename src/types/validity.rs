use std::fmt;

use super::error::SyntaxIssue;

/// Whether an expression is acceptable for saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Validity {
    #[default]
    Empty,
    Valid,
    InvalidSyntax,
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validity::Empty => write!(f, "empty"),
            Validity::Valid => write!(f, "valid"),
            Validity::InvalidSyntax => write!(f, "invalid-syntax"),
        }
    }
}

/// Result of [`validate`](crate::validate). `reason` is set only for
/// [`Validity::InvalidSyntax`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[must_use]
pub struct ValidationReport {
    validity: Validity,
    reason: Option<SyntaxIssue>,
}

impl ValidationReport {
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn valid() -> Self {
        Self {
            validity: Validity::Valid,
            reason: None,
        }
    }

    pub(crate) fn invalid(reason: SyntaxIssue) -> Self {
        Self {
            validity: Validity::InvalidSyntax,
            reason: Some(reason),
        }
    }

    #[must_use]
    pub fn validity(&self) -> Validity {
        self.validity
    }

    #[must_use]
    pub fn reason(&self) -> Option<&SyntaxIssue> {
        self.reason.as_ref()
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "{}: {reason}", self.validity),
            None => write!(f, "{}", self.validity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_display() {
        assert_eq!(Validity::Empty.to_string(), "empty");
        assert_eq!(Validity::Valid.to_string(), "valid");
        assert_eq!(Validity::InvalidSyntax.to_string(), "invalid-syntax");
    }

    #[test]
    fn report_display_includes_reason() {
        let report = ValidationReport::invalid(SyntaxIssue::UnclosedOpen { count: 2 });
        assert_eq!(
            report.to_string(),
            "invalid-syntax: 2 unclosed '(' at end of expression"
        );
        assert_eq!(ValidationReport::valid().to_string(), "valid");
    }
}
