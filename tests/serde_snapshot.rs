#![cfg(feature = "serde")]

use rulecond::{
    BooleanLiterals, BuilderConfig, BuilderSnapshot, ConditionBuilder, Draft, LogicalOp, Mode,
    Paren, Token, field,
};
use serde_json::json;

#[test]
fn snapshot_serializes_for_renderers() {
    let mut builder = ConditionBuilder::new();
    builder.switch_mode(Mode::Complex);
    builder.append_flag("is_generic").unwrap();
    builder.append_operator(LogicalOp::And).unwrap();
    builder.append_paren(Paren::Open).unwrap();

    let value = serde_json::to_value(builder.snapshot()).unwrap();
    assert_eq!(
        value,
        json!({
            "mode": "complex",
            "phase": "COMPLEX_BUILDING",
            "condition": null,
            "tokens": [
                { "kind": "flag", "name": "is_generic" },
                { "kind": "operator", "op": "AND" },
                { "kind": "paren", "symbol": "open" }
            ],
            "predicate": "is_generic AND (",
            "validity": "invalid-syntax",
            "reason": { "issue": "unclosed_open", "count": 1 },
            "opaque": null
        })
    );
}

#[test]
fn snapshot_round_trips() {
    let mut builder = ConditionBuilder::new();
    builder.confirm_condition(field("pbm").not_in("CVS")).unwrap();
    let snapshot = builder.snapshot();
    let text = serde_json::to_string(&snapshot).unwrap();
    let back: BuilderSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn draft_is_tagged_by_mode() {
    let draft = Draft::Simple {
        condition: Some(field("active").equals("true")),
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        json!({
            "mode": "simple",
            "condition": { "field": "active", "op": "equals", "value": "true" }
        })
    );
    let tokens: Vec<Token> =
        serde_json::from_value(json!([{ "kind": "operator", "op": "NOT" }])).unwrap();
    assert_eq!(tokens, vec![Token::from(LogicalOp::Not)]);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: BuilderConfig =
        serde_json::from_value(json!({ "boolean_literals": "quoted" })).unwrap();
    assert_eq!(config.boolean_literals, BooleanLiterals::Quoted);
    assert_eq!(config.initial_mode, Mode::Simple);
}
