use rulecond::parse::{Parsed, parse_simple};
use rulecond::{
    BooleanLiterals, ConditionBuilder, ConditionOp, LogicalOp, Mode, Paren, Phase, Validity, field,
    flag, serialize_condition, validate,
};

#[test]
fn boolean_equality_is_unquoted_and_lowercased() {
    let mut builder = ConditionBuilder::new();
    builder.confirm_parts("active", "=", "TRUE").unwrap();
    assert_eq!(builder.predicate(), "active = true");
}

#[test]
fn non_boolean_equality_is_quoted() {
    let mut builder = ConditionBuilder::new();
    builder.confirm_parts("active", "=", "Yes").unwrap();
    assert_eq!(builder.predicate(), "active = 'Yes'");
}

#[test]
fn in_list_is_split_trimmed_and_quoted() {
    let mut builder = ConditionBuilder::new();
    builder.confirm_parts("pbm", "in", "CVS, ESI,Humana").unwrap();
    assert_eq!(builder.predicate(), "pbm IN ('CVS', 'ESI', 'Humana')");
}

#[test]
fn like_wraps_value_in_wildcards() {
    let mut builder = ConditionBuilder::new();
    builder.confirm_parts("ndc", "like", "00002").unwrap();
    assert_eq!(builder.predicate(), "ndc LIKE '%00002%'");
}

#[test]
fn complex_validity_tracks_parenthesis_balance() {
    let tokens = vec![
        flag("flagA"),
        LogicalOp::And.into(),
        Paren::Open.into(),
        flag("flagB"),
        LogicalOp::Or.into(),
        flag("flagC"),
    ];
    let mut with_close = tokens.clone();
    with_close.push(Paren::Close.into());
    assert_eq!(validate(&with_close[..6]).validity(), Validity::InvalidSyntax);
    assert_eq!(validate(&with_close).validity(), Validity::Valid);

    let mut builder = ConditionBuilder::new();
    builder.switch_mode(Mode::Complex);
    for token in tokens {
        builder.append(token).unwrap();
    }
    assert_eq!(builder.validity(), Validity::InvalidSyntax);
    builder.append_paren(Paren::Close).unwrap();
    assert_eq!(builder.validity(), Validity::Valid);
    assert_eq!(builder.predicate(), "flagA AND ( flagB OR flagC )");
}

#[test]
fn unsupported_syntax_falls_back_to_opaque() {
    assert_eq!(
        parse_simple("some_column BETWEEN 1 AND 5"),
        Parsed::Opaque("some_column BETWEEN 1 AND 5".to_owned())
    );

    let mut builder = ConditionBuilder::new();
    builder.load_as("some_column BETWEEN 1 AND 5", Mode::Simple);
    assert!(builder.condition().is_none());
    assert_eq!(builder.opaque(), Some("some_column BETWEEN 1 AND 5"));
}

#[test]
fn edit_session_reopens_saved_condition() {
    let mut editor = ConditionBuilder::new();
    editor.confirm_parts("pbm", "not in", "CVS,ESI").unwrap();
    let saved = editor.predicate().to_owned();

    let mut reopened = ConditionBuilder::new();
    reopened.load(&saved);
    assert_eq!(reopened.phase(), Phase::SimpleSet);
    let condition = reopened.condition().unwrap();
    assert_eq!(condition.field, "pbm");
    assert_eq!(condition.op, ConditionOp::NotIn);
    assert_eq!(condition.value, "CVS, ESI");
    assert_eq!(reopened.predicate(), saved);
}

#[test]
fn edit_session_reopens_saved_expression() {
    let mut editor = ConditionBuilder::new();
    editor.switch_mode(Mode::Complex);
    editor.append_operator(LogicalOp::Not).unwrap();
    editor.append_flag("is_generic").unwrap();
    editor.append_operator(LogicalOp::Or).unwrap();
    editor.append_flag("is_specialty").unwrap();
    let saved = editor.predicate().to_owned();

    let mut reopened = ConditionBuilder::new();
    reopened.load(&saved);
    assert_eq!(reopened.mode(), Mode::Complex);
    assert_eq!(reopened.tokens(), editor.tokens());
    assert_eq!(reopened.predicate(), saved);
}

#[test]
fn quoted_policy_from_config() {
    let condition = field("active").not_equals("false");
    assert_eq!(
        serialize_condition(&condition, BooleanLiterals::Quoted),
        "active != 'false'"
    );
    assert_eq!(
        serialize_condition(&condition, BooleanLiterals::Unquoted),
        "active != false"
    );
}
