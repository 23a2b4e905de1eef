mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::Parsed;

use crate::{FlagRegistry, Mode, Token, is_valid_flag_name};

/// Parse stored predicate text for editing in `mode`.
#[must_use]
pub fn parse(text: &str, mode: Mode) -> Parsed {
    match mode {
        Mode::Simple => parse_simple(text),
        Mode::Complex => parse_complex(text),
    }
}

/// Match `text` against the single-condition patterns, most specific first:
/// `NOT IN`, `IN`, `NOT LIKE`, `LIKE`, `!=`/`<>`, `=`. The first match wins.
/// Text matching none of them is returned untrimmed as [`Parsed::Opaque`].
#[must_use]
pub fn parse_simple(text: &str) -> Parsed {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Parsed::Empty;
    }
    match grammar::match_condition(trimmed) {
        Some(condition) => Parsed::Simple(condition),
        None => Parsed::Opaque(text.to_owned()),
    }
}

/// Tokenize `text` as a Complex expression. Never fails.
#[must_use]
pub fn parse_complex(text: &str) -> Parsed {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        Parsed::Empty
    } else {
        Parsed::Complex(tokens)
    }
}

/// Split on runs of whitespace; each piece is one token. Pieces outside the
/// operator and parenthesis sets become flag references, so text not
/// produced by the builder (quoted literals with spaces, `(flag` without a
/// gap) tokenizes lossily.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::from_text).collect()
}

/// Reconstruct state without knowing the mode the text was saved from.
///
/// A single-condition match is Simple. Otherwise the text is Complex when
/// every flag token is a known flag (with a registry) or a name
/// [`is_valid_flag_name`] accepts (without one). Anything else is opaque.
#[must_use]
pub fn detect(text: &str, registry: Option<&FlagRegistry>) -> Parsed {
    match parse_simple(text) {
        Parsed::Opaque(raw) => {
            let tokens = tokenize(&raw);
            if tokens.iter().all(|token| is_flag_reference(token, registry)) {
                Parsed::Complex(tokens)
            } else {
                Parsed::Opaque(raw)
            }
        }
        other => other,
    }
}

fn is_flag_reference(token: &Token, registry: Option<&FlagRegistry>) -> bool {
    match (token.flag_name(), registry) {
        (None, _) => true,
        (Some(name), Some(registry)) => registry.contains(name),
        (Some(name), None) => is_valid_flag_name(name),
    }
}
