use crate::{Paren, SyntaxIssue, Token, ValidationReport};

/// Classify a token sequence by parenthesis balance.
///
/// An empty sequence is `empty`. A `)` that would take the open count below
/// zero, or a non-zero count at the end, is `invalid-syntax`. Anything else
/// is `valid`: operand placement (e.g. two adjacent flags) is not checked.
pub fn validate(tokens: &[Token]) -> ValidationReport {
    if tokens.is_empty() {
        return ValidationReport::empty();
    }

    let mut open: usize = 0;
    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::Paren {
                symbol: Paren::Open,
            } => open += 1,
            Token::Paren {
                symbol: Paren::Close,
            } => {
                if open == 0 {
                    return ValidationReport::invalid(SyntaxIssue::UnmatchedClose { position });
                }
                open -= 1;
            }
            Token::Flag { .. } | Token::Operator { .. } => {}
        }
    }

    if open == 0 {
        ValidationReport::valid()
    } else {
        ValidationReport::invalid(SyntaxIssue::UnclosedOpen { count: open })
    }
}
