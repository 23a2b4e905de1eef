use std::thread;

use rulecond::{ConditionBuilder, FlagRegistry, LogicalOp, Mode, Paren, Validity};

#[test]
fn each_session_owns_its_builder() {
    let registry: FlagRegistry = ["is_generic", "is_specialty", "is_compound"]
        .into_iter()
        .collect();

    let mut handles = vec![];

    // Session 1: single IN condition
    let flags = registry.clone();
    handles.push(thread::spawn(move || {
        let mut builder = ConditionBuilder::new().with_flags(flags);
        builder.confirm_parts("pbm", "in", "CVS, ESI").unwrap();
        (builder.predicate().to_owned(), builder.validity())
    }));

    // Session 2: balanced expression
    let flags = registry.clone();
    handles.push(thread::spawn(move || {
        let mut builder = ConditionBuilder::new().with_flags(flags);
        builder.switch_mode(Mode::Complex);
        builder.append_paren(Paren::Open).unwrap();
        builder.append_flag("is_generic").unwrap();
        builder.append_operator(LogicalOp::Or).unwrap();
        builder.append_flag("is_compound").unwrap();
        builder.append_paren(Paren::Close).unwrap();
        (builder.predicate().to_owned(), builder.validity())
    }));

    // Session 3: unbalanced expression
    let flags = registry.clone();
    handles.push(thread::spawn(move || {
        let mut builder = ConditionBuilder::new().with_flags(flags);
        builder.switch_mode(Mode::Complex);
        builder.append_operator(LogicalOp::Not).unwrap();
        builder.append_paren(Paren::Open).unwrap();
        builder.append_flag("is_specialty").unwrap();
        (builder.predicate().to_owned(), builder.validity())
    }));

    // Session 4: reopened legacy text
    let flags = registry;
    handles.push(thread::spawn(move || {
        let mut builder = ConditionBuilder::new().with_flags(flags);
        builder.load("days_supply BETWEEN 30 AND 90");
        (builder.predicate().to_owned(), builder.validity())
    }));

    let results: Vec<(String, Validity)> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0], ("pbm IN ('CVS', 'ESI')".to_owned(), Validity::Valid));
    assert_eq!(
        results[1],
        ("( is_generic OR is_compound )".to_owned(), Validity::Valid)
    );
    assert_eq!(
        results[2],
        ("NOT ( is_specialty".to_owned(), Validity::InvalidSyntax)
    );
    assert_eq!(
        results[3],
        ("days_supply BETWEEN 30 AND 90".to_owned(), Validity::Valid)
    );
}
