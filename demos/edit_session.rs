use rulecond::{ConditionBuilder, FlagRegistry, LogicalOp, Mode, Paren};

fn main() {
    let flags: FlagRegistry = ["is_generic", "is_specialty", "is_compound"]
        .into_iter()
        .collect();

    // Simple mode: one field/operator/value condition.
    let mut builder = ConditionBuilder::new().with_flags(flags.clone());
    builder
        .confirm_parts("pbm", "in", "CVS, ESI,Humana")
        .expect("valid condition");
    println!("simple:  {} [{}]", builder.predicate(), builder.validity());

    // Complex mode: a boolean expression over flags.
    builder.switch_mode(Mode::Complex);
    builder.append_flag("is_specialty").expect("flag");
    builder.append_operator(LogicalOp::And).expect("operator");
    builder.append_paren(Paren::Open).expect("paren");
    builder.append_flag("is_generic").expect("flag");
    builder.append_operator(LogicalOp::Or).expect("operator");
    builder.append_flag("is_compound").expect("flag");
    println!("complex: {} [{}]", builder.predicate(), builder.report());
    builder.append_paren(Paren::Close).expect("paren");
    println!("complex: {} [{}]", builder.predicate(), builder.report());

    // Reopen stored text, including text outside the supported grammar.
    for stored in [
        "ndc LIKE '%00002%'",
        "NOT is_generic OR is_specialty",
        "days_supply BETWEEN 30 AND 90",
    ] {
        let mut reopened = ConditionBuilder::new().with_flags(flags.clone());
        reopened.load(stored);
        match reopened.opaque() {
            Some(raw) => println!("opaque:  {raw}"),
            None => println!("{:?}: {}", reopened.phase(), reopened.predicate()),
        }
    }
}
