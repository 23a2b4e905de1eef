use std::fmt;
use std::str::FromStr;

use crate::parse::ParseError;

/// Logical connectives of a Complex-mode expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum LogicalOp {
    And,
    Or,
    Not,
}

impl LogicalOp {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
            LogicalOp::Not => "NOT",
        }
    }

    /// `AND` and `OR` need a left operand; `NOT` does not.
    #[must_use]
    pub fn is_binary(self) -> bool {
        !matches!(self, LogicalOp::Not)
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalOp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AND") {
            Ok(LogicalOp::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Ok(LogicalOp::Or)
        } else if s.eq_ignore_ascii_case("NOT") {
            Ok(LogicalOp::Not)
        } else {
            Err(ParseError::new(format!("unknown logical operator '{s}'")))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Paren {
    Open,
    Close,
}

impl Paren {
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Paren::Open => '(',
            Paren::Close => ')',
        }
    }
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One lexical unit of a Complex-mode expression. The sequence of tokens,
/// left to right, is the expression itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Token {
    Flag { name: String },
    Operator { op: LogicalOp },
    Paren { symbol: Paren },
}

impl Token {
    /// Classify one whitespace-free piece of predicate text. Operator words
    /// match case-insensitively; anything outside the operator and
    /// parenthesis sets is a flag reference.
    #[must_use]
    pub fn from_text(text: &str) -> Token {
        match text {
            "(" => Token::Paren {
                symbol: Paren::Open,
            },
            ")" => Token::Paren {
                symbol: Paren::Close,
            },
            _ => match text.parse::<LogicalOp>() {
                Ok(op) => Token::Operator { op },
                Err(_) => flag(text),
            },
        }
    }

    #[must_use]
    pub fn is_flag(&self) -> bool {
        matches!(self, Token::Flag { .. })
    }

    #[must_use]
    pub fn flag_name(&self) -> Option<&str> {
        match self {
            Token::Flag { name } => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Flag { name } => f.write_str(name),
            Token::Operator { op } => write!(f, "{op}"),
            Token::Paren { symbol } => write!(f, "{symbol}"),
        }
    }
}

impl From<LogicalOp> for Token {
    fn from(op: LogicalOp) -> Self {
        Token::Operator { op }
    }
}

impl From<Paren> for Token {
    fn from(symbol: Paren) -> Self {
        Token::Paren { symbol }
    }
}

#[must_use]
pub fn flag(name: &str) -> Token {
    Token::Flag {
        name: name.to_owned(),
    }
}

/// Words the Simple-condition grammar treats as keywords. A flag spelled
/// like one could make a saved expression read back as a condition.
const CONDITION_KEYWORDS: [&str; 2] = ["IN", "LIKE"];

/// Whether `name` survives a serialize/load round trip as a single flag
/// token: identifier-shaped (`[A-Za-z_][A-Za-z0-9_.-]*`), and not an
/// operator word or condition keyword in any letter case.
#[must_use]
pub fn is_valid_flag_name(name: &str) -> bool {
    let mut chars = name.chars();
    let leading = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    leading
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        && name.parse::<LogicalOp>().is_err()
        && !CONDITION_KEYWORDS
            .iter()
            .any(|keyword| name.eq_ignore_ascii_case(keyword))
}
