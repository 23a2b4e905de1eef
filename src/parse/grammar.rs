use winnow::ascii::Caseless;
use winnow::combinator::{alt, delimited, opt, separated};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{any, literal, take_while};

use crate::{Condition, ConditionOp};

/// A single-condition matcher. Succeeds only on its own operator syntax.
type Pattern = fn(&mut &str) -> ModalResult<Condition>;

/// Tried in order; the first pattern that consumes the whole input wins.
const PATTERNS: [(&str, Pattern); 6] = [
    ("not_in", not_in),
    ("in", is_in),
    ("not_like", not_like),
    ("like", like),
    ("not_equals", not_equals),
    ("equals", equals),
];

/// Run the pattern list against trimmed predicate text.
pub(crate) fn match_condition(text: &str) -> Option<Condition> {
    for (name, pattern) in PATTERNS {
        let mut input = text;
        match pattern(&mut input) {
            Ok(condition) if input.is_empty() => {
                tracing::trace!(pattern = name, "predicate matched");
                return Some(condition);
            }
            _ => tracing::trace!(pattern = name, "predicate did not match"),
        }
    }
    None
}

// -- Whitespace -------------------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

fn ws1(input: &mut &str) -> ModalResult<()> {
    take_while(1.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

// -- Fields and literals ----------------------------------------------------

fn field_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '.'
        }),
    )
        .take()
        .parse_next(input)
}

/// `'...'` with `''` standing for one embedded quote.
fn quoted(input: &mut &str) -> ModalResult<String> {
    '\''.parse_next(input)?;
    let mut s = String::new();
    loop {
        match any.parse_next(input)? {
            '\'' => {
                if opt('\'').parse_next(input)?.is_some() {
                    s.push('\'');
                } else {
                    return Ok(s);
                }
            }
            c => s.push(c),
        }
    }
}

/// `'%...%'`, yielding the text between the wildcards.
fn wildcard_literal(input: &mut &str) -> ModalResult<String> {
    quoted
        .verify_map(|s: String| {
            s.strip_prefix('%')
                .and_then(|rest| rest.strip_suffix('%'))
                .map(str::to_owned)
        })
        .parse_next(input)
}

/// A quoted string, or a bare `true`/`false` normalised to lowercase.
fn equality_value(input: &mut &str) -> ModalResult<String> {
    alt((
        quoted,
        alt((literal(Caseless("true")), literal(Caseless("false"))))
            .map(|word: &str| word.to_ascii_lowercase()),
    ))
    .parse_next(input)
}

/// `( 'a', 'b' )`, possibly empty.
fn value_list(input: &mut &str) -> ModalResult<Vec<String>> {
    delimited(
        '(',
        separated(0.., delimited(ws, quoted, ws), ','),
        (ws, ')'),
    )
    .parse_next(input)
}

// -- Patterns ---------------------------------------------------------------

fn not_in(input: &mut &str) -> ModalResult<Condition> {
    let name = field_name.parse_next(input)?;
    (ws1, literal(Caseless("NOT")), ws1, literal(Caseless("IN")), ws).parse_next(input)?;
    let values = value_list.parse_next(input)?;
    Ok(Condition::new(name, ConditionOp::NotIn, values.join(", ")))
}

fn is_in(input: &mut &str) -> ModalResult<Condition> {
    let name = field_name.parse_next(input)?;
    (ws1, literal(Caseless("IN")), ws).parse_next(input)?;
    let values = value_list.parse_next(input)?;
    Ok(Condition::new(name, ConditionOp::In, values.join(", ")))
}

fn not_like(input: &mut &str) -> ModalResult<Condition> {
    let name = field_name.parse_next(input)?;
    (ws1, literal(Caseless("NOT")), ws1, literal(Caseless("LIKE")), ws).parse_next(input)?;
    let value = wildcard_literal.parse_next(input)?;
    Ok(Condition::new(name, ConditionOp::NotLike, value))
}

fn like(input: &mut &str) -> ModalResult<Condition> {
    let name = field_name.parse_next(input)?;
    (ws1, literal(Caseless("LIKE")), ws).parse_next(input)?;
    let value = wildcard_literal.parse_next(input)?;
    Ok(Condition::new(name, ConditionOp::Like, value))
}

fn not_equals(input: &mut &str) -> ModalResult<Condition> {
    let name = field_name.parse_next(input)?;
    (ws, alt(("!=", "<>")), ws).parse_next(input)?;
    let value = equality_value.parse_next(input)?;
    Ok(Condition::new(name, ConditionOp::NotEquals, value))
}

fn equals(input: &mut &str) -> ModalResult<Condition> {
    let name = field_name.parse_next(input)?;
    (ws, '=', ws).parse_next(input)?;
    let value = equality_value.parse_next(input)?;
    Ok(Condition::new(name, ConditionOp::Equals, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    #[test]
    fn match_not_in() {
        assert_eq!(
            match_condition("pbm NOT IN ('CVS', 'ESI')"),
            Some(field("pbm").not_in("CVS, ESI"))
        );
    }

    #[test]
    fn match_in_normalises_separators() {
        assert_eq!(
            match_condition("pbm in('CVS','ESI' ,  'Humana')"),
            Some(field("pbm").is_in("CVS, ESI, Humana"))
        );
    }

    #[test]
    fn match_empty_in_list() {
        assert_eq!(match_condition("pbm IN ( )"), Some(field("pbm").is_in("")));
    }

    #[test]
    fn match_like_strips_wildcards() {
        assert_eq!(
            match_condition("ndc LIKE '%00002%'"),
            Some(field("ndc").like("00002"))
        );
        assert_eq!(
            match_condition("ndc not like '%a%b%'"),
            Some(field("ndc").not_like("a%b"))
        );
    }

    #[test]
    fn like_without_wildcards_does_not_match() {
        assert_eq!(match_condition("ndc LIKE '00002'"), None);
        assert_eq!(match_condition("ndc LIKE '%'"), None);
    }

    #[test]
    fn match_not_equals_both_spellings() {
        assert_eq!(
            match_condition("plan != 'gold'"),
            Some(field("plan").not_equals("gold"))
        );
        assert_eq!(
            match_condition("plan<>'gold'"),
            Some(field("plan").not_equals("gold"))
        );
    }

    #[test]
    fn match_equals_quoted_and_boolean() {
        assert_eq!(
            match_condition("active = 'Yes'"),
            Some(field("active").equals("Yes"))
        );
        assert_eq!(
            match_condition("active = TRUE"),
            Some(field("active").equals("true"))
        );
        assert_eq!(
            match_condition("active != false"),
            Some(field("active").not_equals("false"))
        );
    }

    #[test]
    fn doubled_quotes_unescape() {
        assert_eq!(
            match_condition("name = 'O''Brien'"),
            Some(field("name").equals("O'Brien"))
        );
    }

    #[test]
    fn no_match_for_other_syntax() {
        for text in [
            "some_column BETWEEN 1 AND 5",
            "a = 5",
            "a == 'x'",
            "a = 'x' AND b = 'y'",
            "a = 'unterminated",
            "a IN ('x',)",
            "= 'x'",
            "a = truex",
        ] {
            assert_eq!(match_condition(text), None, "unexpected match for {text}");
        }
    }
}
