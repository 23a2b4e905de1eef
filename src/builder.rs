use crate::parse::{self, Parsed};
use crate::serialize::serialize;
use crate::validate::validate;
use crate::{
    BuilderConfig, BuilderError, Condition, ConditionOp, Draft, FlagRegistry, LogicalOp, Mode,
    Paren, Phase, RulecondError, SyntaxIssue, Token, ValidationReport, Validity, is_field_name,
    is_valid_flag_name,
};

/// Editing state for one rule condition.
///
/// The only thing that mutates structured state. Every successful intent
/// re-serializes the canonical predicate and re-classifies it; a rejected
/// intent leaves the builder untouched. One instance belongs to one edit
/// session and is dropped when that session closes.
///
/// # Example
///
/// ```
/// use rulecond::{ConditionBuilder, LogicalOp, Mode, Paren, Validity};
///
/// let mut builder = ConditionBuilder::new();
/// builder.switch_mode(Mode::Complex);
/// builder.append_flag("is_specialty").unwrap();
/// builder.append_operator(LogicalOp::And).unwrap();
/// builder.append_paren(Paren::Open).unwrap();
/// builder.append_flag("is_generic").unwrap();
/// assert_eq!(builder.validity(), Validity::InvalidSyntax);
///
/// builder.append_paren(Paren::Close).unwrap();
/// assert_eq!(builder.predicate(), "is_specialty AND ( is_generic )");
/// assert_eq!(builder.validity(), Validity::Valid);
/// ```
#[derive(Debug, Clone)]
pub struct ConditionBuilder {
    config: BuilderConfig,
    flags: Option<FlagRegistry>,
    draft: Draft,
    /// The last non-empty Complex predicate, or loaded text that was not a
    /// single condition; re-tokenized when switching into Complex mode.
    last_expression: Option<String>,
    /// Stored text that matched no structure, shown verbatim.
    opaque: Option<String>,
    predicate: String,
    report: ValidationReport,
}

impl Default for ConditionBuilder {
    fn default() -> Self {
        Self::with_config(BuilderConfig::default())
    }
}

impl ConditionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: BuilderConfig) -> Self {
        let draft = Draft::empty(config.initial_mode);
        Self {
            config,
            flags: None,
            draft,
            last_expression: None,
            opaque: None,
            predicate: String::new(),
            report: ValidationReport::empty(),
        }
    }

    /// Attach the flag registry used for load-time detection and
    /// [`unknown_flags()`](Self::unknown_flags).
    #[must_use]
    pub fn with_flags(mut self, flags: FlagRegistry) -> Self {
        self.flags = Some(flags);
        self
    }

    // -- Observation ---------------------------------------------------------

    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.draft.mode()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.draft.phase()
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The Simple-mode condition, if one is set.
    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        match &self.draft {
            Draft::Simple { condition } => condition.as_ref(),
            Draft::Complex { .. } => None,
        }
    }

    /// The Complex-mode token sequence; empty in Simple mode.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        match &self.draft {
            Draft::Complex { tokens } => tokens,
            Draft::Simple { .. } => &[],
        }
    }

    /// The canonical predicate string for the current state.
    #[must_use]
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    #[must_use]
    pub fn validity(&self) -> Validity {
        self.report.validity()
    }

    #[must_use]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Stored text that could not be reconstructed, exactly as given, if the
    /// last load degraded to raw display.
    #[must_use]
    pub fn opaque(&self) -> Option<&str> {
        self.opaque.as_deref()
    }

    /// Flags in the current expression that the attached registry does not
    /// know. Empty when no registry is attached.
    #[must_use]
    pub fn unknown_flags(&self) -> Vec<&str> {
        let Some(registry) = &self.flags else {
            return Vec::new();
        };
        self.tokens()
            .iter()
            .filter_map(Token::flag_name)
            .filter(|name| !registry.contains(name))
            .collect()
    }

    /// A read-only view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> BuilderSnapshot {
        BuilderSnapshot {
            mode: self.mode(),
            phase: self.phase(),
            condition: self.condition().cloned(),
            tokens: self.tokens().to_vec(),
            predicate: self.predicate.clone(),
            validity: self.validity(),
            reason: self.report.reason().cloned(),
            opaque: self.opaque.clone(),
        }
    }

    // -- Simple mode ---------------------------------------------------------

    /// Set the single condition, replacing any existing one.
    ///
    /// # Errors
    ///
    /// [`BuilderError::WrongMode`] outside Simple mode;
    /// [`BuilderError::InvalidField`] if the field is not an identifier.
    pub fn confirm_condition(&mut self, condition: Condition) -> Result<(), BuilderError> {
        self.require_mode(Mode::Simple, "confirming a condition")?;
        if !is_field_name(&condition.field) {
            return Err(BuilderError::InvalidField {
                field: condition.field,
                op: condition.op,
            });
        }
        self.draft = Draft::Simple {
            condition: Some(condition),
        };
        self.refresh("condition confirmed");
        Ok(())
    }

    /// Confirm a condition from raw editor inputs; `op` may be a canonical
    /// name (`not_in`) or predicate syntax (`NOT IN`).
    ///
    /// # Errors
    ///
    /// Returns [`RulecondError`] if `op` is unknown or the confirm is refused.
    pub fn confirm_parts(&mut self, field: &str, op: &str, value: &str) -> Result<(), RulecondError> {
        let op: ConditionOp = op.parse()?;
        self.confirm_condition(Condition::new(field.trim(), op, value))?;
        Ok(())
    }

    /// Remove the single condition, returning it.
    ///
    /// # Errors
    ///
    /// [`BuilderError::WrongMode`] outside Simple mode.
    pub fn remove_condition(&mut self) -> Result<Option<Condition>, BuilderError> {
        self.require_mode(Mode::Simple, "removing the condition")?;
        let removed = match &mut self.draft {
            Draft::Simple { condition } => condition.take(),
            Draft::Complex { .. } => None,
        };
        self.refresh("condition removed");
        Ok(removed)
    }

    // -- Complex mode --------------------------------------------------------

    /// Append a token to the expression.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::WrongMode`] outside Complex mode.
    /// - [`BuilderError::LeadingOperator`] for `AND`/`OR` on an empty
    ///   expression.
    /// - [`BuilderError::InvalidFlagName`] for a flag name rejected by
    ///   [`is_valid_flag_name`].
    pub fn append(&mut self, token: Token) -> Result<(), BuilderError> {
        self.require_mode(Mode::Complex, "appending a token")?;
        match &token {
            Token::Operator { op } if op.is_binary() && self.tokens().is_empty() => {
                return Err(BuilderError::LeadingOperator { op: *op });
            }
            Token::Flag { name } if !is_valid_flag_name(name) => {
                return Err(BuilderError::InvalidFlagName { name: name.clone() });
            }
            _ => {}
        }
        if let Draft::Complex { tokens } = &mut self.draft {
            tokens.push(token);
        }
        self.refresh("token appended");
        Ok(())
    }

    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn append_flag(&mut self, name: &str) -> Result<(), BuilderError> {
        self.append(crate::flag(name))
    }

    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn append_operator(&mut self, op: LogicalOp) -> Result<(), BuilderError> {
        self.append(op.into())
    }

    /// # Errors
    ///
    /// See [`append`](Self::append).
    pub fn append_paren(&mut self, paren: Paren) -> Result<(), BuilderError> {
        self.append(paren.into())
    }

    /// Remove the token at `index`, returning it.
    ///
    /// # Errors
    ///
    /// [`BuilderError::WrongMode`] outside Complex mode;
    /// [`BuilderError::IndexOutOfRange`] if there is no such token.
    pub fn remove_token(&mut self, index: usize) -> Result<Token, BuilderError> {
        let Draft::Complex { tokens } = &mut self.draft else {
            return Err(BuilderError::WrongMode {
                intent: "removing a token",
                expected: Mode::Complex,
            });
        };
        if index >= tokens.len() {
            return Err(BuilderError::IndexOutOfRange {
                index,
                len: tokens.len(),
            });
        }
        let removed = tokens.remove(index);
        self.refresh("token removed");
        Ok(removed)
    }

    // -- Whole-state transitions ----------------------------------------------

    /// Switch editing mode, discarding the other mode's structured state.
    ///
    /// Entering Complex mode re-tokenizes the last expression text, if
    /// there is one. Entering Simple mode always starts empty. Switching
    /// to the current mode does nothing.
    pub fn switch_mode(&mut self, mode: Mode) {
        if mode == self.mode() {
            return;
        }
        self.opaque = None;
        self.draft = match mode {
            Mode::Simple => Draft::empty(Mode::Simple),
            Mode::Complex => {
                let tokens = self
                    .last_expression
                    .as_deref()
                    .map(parse::tokenize)
                    .unwrap_or_default();
                Draft::Complex { tokens }
            }
        };
        self.refresh("mode switched");
    }

    /// Reconstruct state from a stored predicate, detecting the mode.
    ///
    /// Text matching no structure is kept as [`opaque`](Self::opaque): the
    /// predicate stays the stored text and the builder sits in Simple mode
    /// with no condition.
    pub fn load(&mut self, text: &str) {
        let parsed = parse::detect(text, self.flags.as_ref());
        self.apply_parsed(parsed);
    }

    /// Reconstruct state from a stored predicate for a known mode.
    pub fn load_as(&mut self, text: &str, mode: Mode) {
        let parsed = parse::parse(text, mode);
        self.apply_parsed(parsed);
    }

    /// Discard all structured state, staying in the current mode.
    pub fn clear(&mut self) {
        self.draft = Draft::empty(self.mode());
        self.opaque = None;
        self.last_expression = None;
        self.refresh("cleared");
    }

    // -- Internals -------------------------------------------------------------

    fn apply_parsed(&mut self, parsed: Parsed) {
        self.opaque = None;
        self.last_expression = match &parsed {
            Parsed::Complex(tokens) => Some(crate::serialize_tokens(tokens)),
            Parsed::Opaque(raw) => Some(raw.clone()),
            Parsed::Empty | Parsed::Simple(_) => None,
        };

        match parsed {
            Parsed::Opaque(raw) => {
                tracing::warn!(predicate = %raw, "stored predicate kept as opaque text");
                self.draft = Draft::empty(Mode::Simple);
                self.report = validate(&parse::tokenize(&raw));
                self.predicate = raw.clone();
                self.opaque = Some(raw);
                return;
            }
            other => {
                let mode = other.mode().unwrap_or(self.mode());
                if let Some(draft) = other.into_draft(mode) {
                    self.draft = draft;
                }
            }
        }

        let unknown = self.unknown_flags();
        if !unknown.is_empty() {
            tracing::warn!(flags = ?unknown, "loaded expression references unregistered flags");
        }
        self.refresh("predicate loaded");
    }

    fn require_mode(&self, expected: Mode, intent: &'static str) -> Result<(), BuilderError> {
        if self.mode() == expected {
            Ok(())
        } else {
            Err(BuilderError::WrongMode { intent, expected })
        }
    }

    /// Re-serialize and re-classify after a mutation.
    fn refresh(&mut self, event: &'static str) {
        self.predicate = serialize(&self.draft, self.config.boolean_literals);
        self.report = match &self.draft {
            Draft::Complex { tokens } => validate(tokens),
            Draft::Simple { condition: None } => ValidationReport::empty(),
            Draft::Simple { condition: Some(_) } => ValidationReport::valid(),
        };
        if matches!(self.draft, Draft::Complex { .. }) {
            self.last_expression = (!self.predicate.is_empty()).then(|| self.predicate.clone());
        }
        tracing::debug!(
            event,
            mode = %self.mode(),
            phase = ?self.phase(),
            predicate = %self.predicate,
            validity = %self.report.validity(),
            "condition builder updated"
        );
    }
}

/// Everything a renderer needs to draw the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuilderSnapshot {
    pub mode: Mode,
    pub phase: Phase,
    pub condition: Option<Condition>,
    pub tokens: Vec<Token>,
    pub predicate: String,
    pub validity: Validity,
    pub reason: Option<SyntaxIssue>,
    pub opaque: Option<String>,
}
