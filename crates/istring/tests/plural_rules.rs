//! Integration tests for plural rule decoding and evaluation.

use istring::PluralCategory;
use istring::plural::{
    Operand, Operands, PluralData, RangeItem, RangeSet, Rule, RuleError, evaluate,
};
use serde_json::json;

const PLURALS: &str = include_str!("fixtures/plurals.json");

fn rule(value: serde_json::Value) -> Rule {
    Rule::from_json(&value).unwrap()
}

fn category(language: &str, operands: impl Into<Operands>) -> PluralCategory {
    let data = PluralData::from_json_str(PLURALS).unwrap();
    data.rules_for(Some(language)).category_for(&operands.into())
}

// =========================================================================
// Operands
// =========================================================================

#[test]
fn integer_operands() {
    let ops = Operands::from(-42_i64);
    assert_eq!((ops.n, ops.i, ops.v, ops.w, ops.f, ops.t), (42.0, 42.0, 0.0, 0.0, 0.0, 0.0));
    assert_eq!(ops.get(Operand::E), 0.0);
    assert_eq!(ops.get(Operand::C), 0.0);
}

#[test]
fn fractional_operands() {
    let ops = Operands::from(0.25);
    assert_eq!((ops.n, ops.i, ops.v, ops.f), (0.25, 0.0, 2.0, 25.0));
    assert_eq!(ops.w, ops.v);
    assert_eq!(ops.t, ops.f);

    let ops = Operands::from(3.0);
    assert_eq!((ops.i, ops.v, ops.f), (3.0, 0.0, 0.0));
}

// =========================================================================
// Decoding
// =========================================================================

#[test]
fn decodes_leaves() {
    assert_eq!(rule(json!(3)), Rule::Literal(3.0));
    assert_eq!(rule(json!("v")), Rule::Symbol(Operand::V));
    assert_eq!(rule(json!({"n": []})), Rule::Identity);
}

#[test]
fn decodes_bare_ranges() {
    assert_eq!(
        rule(json!([2, 4])),
        Rule::Range(RangeSet::new(vec![RangeItem::Value(2.0), RangeItem::Value(4.0)]))
    );
    assert_eq!(
        rule(json!([[0, 1], 5])),
        Rule::Range(RangeSet::new(vec![RangeItem::Span(0.0, 1.0), RangeItem::Value(5.0)]))
    );
}

#[test]
fn decodes_subject_ranges() {
    assert_eq!(
        rule(json!({"inrange": ["i", [0, 1]]})),
        Rule::InRange(
            Box::new(Rule::Symbol(Operand::I)),
            RangeSet::new(vec![RangeItem::Value(0.0), RangeItem::Value(1.0)])
        )
    );
    assert_eq!(
        rule(json!({"notin": ["n", 7]})),
        Rule::NotIn(
            Box::new(Rule::Symbol(Operand::N)),
            RangeSet::new(vec![RangeItem::Value(7.0)])
        )
    );
}

#[test]
fn unknown_operator_suggests_close_names() {
    let err = Rule::from_json(&json!({"eqq": ["i", 1]})).unwrap_err();
    assert_eq!(
        err,
        RuleError::UnknownOperator {
            name: "eqq".to_string(),
            suggestions: vec!["eq".to_string()],
        }
    );
    insta::assert_snapshot!(err, @"unknown plural rule operator 'eqq', did you mean: eq?");
}

#[test]
fn unknown_operand_suggests_close_names() {
    let err = Rule::from_json(&json!({"eq": ["nn", 1]})).unwrap_err();
    insta::assert_snapshot!(err, @"unknown plural operand 'nn', did you mean: n?");

    let err = Rule::from_json(&json!("zzzz")).unwrap_err();
    insta::assert_snapshot!(err, @"unknown plural operand 'zzzz'");
}

#[test]
fn operator_objects_need_exactly_one_key() {
    assert_eq!(
        Rule::from_json(&json!({})).unwrap_err(),
        RuleError::OperatorCount { count: 0 }
    );
    assert_eq!(
        Rule::from_json(&json!({"eq": [1, 1], "neq": [1, 2]})).unwrap_err(),
        RuleError::OperatorCount { count: 2 }
    );
}

#[test]
fn malformed_operator_bodies() {
    let err = Rule::from_json(&json!({"eq": [1]})).unwrap_err();
    insta::assert_snapshot!(err, @"malformed 'eq' node: expected two operands, found 1");

    let err = Rule::from_json(&json!({"and": 1})).unwrap_err();
    insta::assert_snapshot!(err, @"malformed 'and' node: expected an array of rules");

    let err = Rule::from_json(&json!([[1, 2, 3]])).unwrap_err();
    insta::assert_snapshot!(err, @"malformed 'inrange' node: interval must have two bounds");
}

#[test]
fn unexpected_json_values() {
    assert_eq!(
        Rule::from_json(&json!(true)).unwrap_err(),
        RuleError::UnexpectedValue { kind: "boolean" }
    );
    assert_eq!(
        Rule::from_json(&json!(null)).unwrap_err(),
        RuleError::UnexpectedValue { kind: "null" }
    );
}

#[test]
fn invalid_data_fails_to_load() {
    let err = PluralData::from_json_str(r#"{"en": {"one": {"eqq": ["i", 1]}}}"#).unwrap_err();
    assert!(err.to_string().contains("unknown plural rule operator 'eqq'"));

    assert!(PluralData::from_json_str(r#"{"en": {"several": 1}}"#).is_err());
    assert!(PluralData::from_json_str("not json").is_err());
}

// =========================================================================
// Rule sets and data
// =========================================================================

#[test]
fn fixture_languages() {
    let data = PluralData::from_json_str(PLURALS).unwrap();
    assert_eq!(
        data.languages(),
        vec!["ar", "cs", "en", "fr", "ja", "lv", "pl", "ru", "uk"]
    );
    assert_eq!(
        data.get("ru").unwrap().categories(),
        vec![PluralCategory::One, PluralCategory::Few, PluralCategory::Many]
    );
    assert!(data.get("ja").unwrap().is_empty());
    assert!(data.get("de").is_none());
}

#[test]
fn other_always_matches_and_missing_rules_never_do() {
    let data = PluralData::from_json_str(PLURALS).unwrap();
    let english = data.rules_for(Some("en"));
    let ops = Operands::from(5_i64);
    assert!(english.matches(PluralCategory::Other, &ops));
    assert!(!english.matches(PluralCategory::Few, &ops));
}

#[test]
fn default_rules_match_integer_one() {
    let data = PluralData::new();
    let rules = data.rules_for(None);
    assert!(rules.matches(PluralCategory::One, &Operands::from(1_i64)));
    assert!(rules.matches(PluralCategory::One, &Operands::from(-1_i64)));
    assert!(!rules.matches(PluralCategory::One, &Operands::from(1.5)));
    assert!(!rules.matches(PluralCategory::One, &Operands::from(0_i64)));
}

// =========================================================================
// Evaluation per language
// =========================================================================

#[test]
fn english_categories() {
    assert_eq!(category("en", 1_i64), PluralCategory::One);
    assert_eq!(category("en", 1.0), PluralCategory::One);
    assert_eq!(category("en", 1.5), PluralCategory::Other);
    assert_eq!(category("en", 0_i64), PluralCategory::Other);
}

#[test]
fn russian_categories() {
    assert_eq!(category("ru", 1_i64), PluralCategory::One);
    assert_eq!(category("ru", -21_i64), PluralCategory::One);
    assert_eq!(category("ru", 11_i64), PluralCategory::Many);
    assert_eq!(category("ru", 22_i64), PluralCategory::Few);
    assert_eq!(category("ru", 112_i64), PluralCategory::Many);
    assert_eq!(category("ru", 100_i64), PluralCategory::Many);
    assert_eq!(category("ru", 2.5), PluralCategory::Other);
}

#[test]
fn polish_categories() {
    assert_eq!(category("pl", 0_i64), PluralCategory::Many);
    assert_eq!(category("pl", 1_i64), PluralCategory::One);
    assert_eq!(category("pl", 2_i64), PluralCategory::Few);
    assert_eq!(category("pl", 12_i64), PluralCategory::Many);
    assert_eq!(category("pl", 22_i64), PluralCategory::Few);
    assert_eq!(category("pl", 21_i64), PluralCategory::Many);
    assert_eq!(category("pl", 1.5), PluralCategory::Other);
}

#[test]
fn czech_categories() {
    assert_eq!(category("cs", 1_i64), PluralCategory::One);
    assert_eq!(category("cs", 3_i64), PluralCategory::Few);
    assert_eq!(category("cs", 5_i64), PluralCategory::Other);
    assert_eq!(category("cs", 2.5), PluralCategory::Many);
}

#[test]
fn latvian_categories() {
    assert_eq!(category("lv", 0_i64), PluralCategory::Zero);
    assert_eq!(category("lv", 11_i64), PluralCategory::Zero);
    assert_eq!(category("lv", 1_i64), PluralCategory::One);
    assert_eq!(category("lv", 21_i64), PluralCategory::One);
    assert_eq!(category("lv", 111_i64), PluralCategory::Zero);
    assert_eq!(category("lv", 2_i64), PluralCategory::Other);
    assert_eq!(category("lv", 0.1), PluralCategory::One);
}

// =========================================================================
// Operators
// =========================================================================

#[test]
fn within_and_notin() {
    let within = rule(json!({"within": ["n", [[0, 2]]]}));
    assert!(evaluate(&within, &Operands::from(1.5)));
    assert!(!evaluate(&within, &Operands::from(3_i64)));

    let notin = rule(json!({"notin": [{"mod": ["n", 10]}, [[2, 4]]]}));
    assert!(!evaluate(&notin, &Operands::from(13_i64)));
    assert!(evaluate(&notin, &Operands::from(15_i64)));
}

#[test]
fn is_and_isnot() {
    let is = rule(json!({"is": [{"mod": ["n", 10]}, 3]}));
    assert!(evaluate(&is, &Operands::from(13_i64)));
    assert!(!evaluate(&is, &Operands::from(14_i64)));

    let isnot = rule(json!({"isnot": ["n", 3]}));
    assert!(!evaluate(&isnot, &Operands::from(3_i64)));
    assert!(evaluate(&isnot, &Operands::from(4_i64)));
}

#[test]
fn empty_logical_lists() {
    assert!(!evaluate(&rule(json!({"or": []})), &Operands::from(1_i64)));
    assert!(evaluate(&rule(json!({"and": []})), &Operands::from(1_i64)));
}

#[test]
fn ranges_mix_values_and_intervals() {
    let mixed = rule(json!({"eq": [{"mod": ["n", 100]}, [[11, 14], 20]]}));
    assert!(evaluate(&mixed, &Operands::from(112_i64)));
    assert!(evaluate(&mixed, &Operands::from(120_i64)));
    assert!(!evaluate(&mixed, &Operands::from(117_i64)));
}

#[test]
fn leading_values_also_form_an_interval() {
    let listed = rule(json!({"eq": [{"mod": ["n", 10]}, [2, 4, 7]]}));
    assert!(evaluate(&listed, &Operands::from(3_i64)));
    assert!(evaluate(&listed, &Operands::from(7_i64)));
    assert!(!evaluate(&listed, &Operands::from(6_i64)));
}

#[test]
fn wrapped_range_lists_test_n() {
    assert_eq!(
        rule(json!({"inrange": [2, 4]})),
        Rule::InRange(
            Box::new(Rule::Symbol(Operand::N)),
            RangeSet::new(vec![RangeItem::Value(2.0), RangeItem::Value(4.0)])
        )
    );

    let wrapped = rule(json!({"eq": [{"mod": ["n", 10]}, {"inrange": [2, 4]}]}));
    let bare = rule(json!({"eq": [{"mod": ["n", 10]}, [2, 4]]}));
    for n in [3_i64, 13, 15, 24] {
        let ops = Operands::from(n);
        assert_eq!(evaluate(&wrapped, &ops), evaluate(&bare, &ops), "n = {n}");
    }
    assert!(evaluate(&rule(json!({"inrange": [[0, 2]]})), &Operands::from(1.5)));
}

#[test]
fn neq_shortcut_applies_only_to_bare_lists() {
    let bare = rule(json!({"neq": ["i", [12, 14]]}));
    let wrapped = rule(json!({"neq": ["i", {"inrange": [12, 14]}]}));
    let five = Operands::from(5_i64);
    assert!(evaluate(&bare, &five));
    assert!(!evaluate(&wrapped, &five));
    assert!(!evaluate(&wrapped, &Operands::from(13_i64)));
}
