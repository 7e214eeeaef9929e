//! Integration tests for choice selection.

use istring::plural::PluralData;
use istring::{ChoiceError, IString, Value, params};

const PLURALS: &str = include_str!("fixtures/plurals.json");

fn plurals() -> PluralData {
    PluralData::from_json_str(PLURALS).unwrap()
}

// =========================================================================
// Numeric limits
// =========================================================================

#[test]
fn exact_number_choice() {
    let pattern =
        IString::from("0#There are no objects.|1#There is one object.|2#There are {number} objects.");
    let result = pattern.format_choice(2, &params! { "number" => 2 }).unwrap();
    assert_eq!(result, "There are 2 objects.");
}

#[test]
fn default_choice_when_nothing_matches() {
    let pattern =
        IString::from("0#There are no objects.|1#There is one object.|#There are {number} objects.");
    let result = pattern.format_choice(22, &params! { "number" => 22 }).unwrap();
    assert_eq!(result, "There are 22 objects.");
}

#[test]
fn default_position_does_not_matter() {
    let pattern = IString::from("#fallback|1#one");
    assert_eq!(pattern.format_choice(1, &params! {}).unwrap(), "one");
    assert_eq!(pattern.format_choice(5, &params! {}).unwrap(), "fallback");
}

#[test]
fn no_match_and_no_default_is_empty() {
    let pattern = IString::from("0#zero|1#one");
    assert_eq!(pattern.format_choice(7, &params! {}).unwrap(), "");
}

#[test]
fn first_match_wins() {
    let pattern = IString::from("<10#small|<100#medium|#large");
    assert_eq!(pattern.format_choice(5, &params! {}).unwrap(), "small");
    assert_eq!(pattern.format_choice(50, &params! {}).unwrap(), "medium");
    assert_eq!(pattern.format_choice(500, &params! {}).unwrap(), "large");
}

#[test]
fn comparison_limits() {
    let pattern = IString::from("<=1#at most one|>=10#ten or more|>5#over five|<3#under three|#between");
    assert_eq!(pattern.format_choice(1, &params! {}).unwrap(), "at most one");
    assert_eq!(pattern.format_choice(10, &params! {}).unwrap(), "ten or more");
    assert_eq!(pattern.format_choice(6, &params! {}).unwrap(), "over five");
    assert_eq!(pattern.format_choice(2, &params! {}).unwrap(), "under three");
    assert_eq!(pattern.format_choice(4, &params! {}).unwrap(), "between");
    assert_eq!(pattern.format_choice(1.5, &params! {}).unwrap(), "under three");
}

#[test]
fn comparisons_use_absolute_value() {
    let pattern = IString::from("<0#negative|#other");
    assert_eq!(pattern.format_choice(-5, &params! {}).unwrap(), "other");
}

#[test]
fn range_limits_are_inclusive() {
    let pattern = IString::from("0#none|1-5#a few|6-10#some|#many");
    assert_eq!(pattern.format_choice(1, &params! {}).unwrap(), "a few");
    assert_eq!(pattern.format_choice(5, &params! {}).unwrap(), "a few");
    assert_eq!(pattern.format_choice(7, &params! {}).unwrap(), "some");
    assert_eq!(pattern.format_choice(5.5, &params! {}).unwrap(), "many");
    assert_eq!(pattern.format_choice(11, &params! {}).unwrap(), "many");
}

#[test]
fn other_limit_matches_anything() {
    let pattern = IString::from("one#single|other#{n} things|#unreachable");
    assert_eq!(pattern.format_choice(3, &params! { "n" => 3 }).unwrap(), "3 things");
}

// =========================================================================
// Plural categories
// =========================================================================

#[test]
fn default_rules_without_plural_data() {
    let data = PluralData::new();
    let pattern = IString::from("one#one item|#{n} items");
    let format = |n: i64| pattern.format_choice_with(&data, n, &params! { "n" => n }).unwrap();
    assert_eq!(format(1), "one item");
    assert_eq!(format(0), "0 items");
    assert_eq!(format(2), "2 items");
    assert_eq!(
        pattern.format_choice_with(&data, 1.0, &params! { "n" => 1.0 }).unwrap(),
        "one item"
    );
}

#[test]
fn unknown_language_falls_back_to_default_rules() {
    let pattern = IString::with_locale("one#one|#many", "xx-XX");
    assert_eq!(pattern.format_choice_with(&plurals(), 1, &params! {}).unwrap(), "one");
}

#[test]
fn language_without_rules_uses_only_other() {
    let pattern = IString::with_locale("one#one|#other", "ja-JP");
    assert_eq!(pattern.format_choice_with(&plurals(), 1, &params! {}).unwrap(), "other");
}

#[test]
fn russian_categories() {
    let data = plurals();
    let pattern = IString::with_locale("one#{n} файл|few#{n} файла|many#{n} файлов|#{n} файла", "ru-RU");
    let format = |n: f64| pattern.format_choice_with(&data, n, &params! { "n" => n }).unwrap();
    assert_eq!(format(1.0), "1 файл");
    assert_eq!(format(21.0), "21 файл");
    assert_eq!(format(11.0), "11 файлов");
    assert_eq!(format(3.0), "3 файла");
    assert_eq!(format(14.0), "14 файлов");
    assert_eq!(format(25.0), "25 файлов");
    assert_eq!(format(1.5), "1.5 файла");
}

#[test]
fn french_one_covers_zero_and_fractions() {
    let data = plurals();
    let pattern = IString::with_locale("one#un|many#beaucoup|#plusieurs", "fr-FR");
    let format = |n: f64| pattern.format_choice_with(&data, n, &params! {}).unwrap();
    assert_eq!(format(0.0), "un");
    assert_eq!(format(1.5), "un");
    assert_eq!(format(2.0), "plusieurs");
    assert_eq!(format(1_000_000.0), "beaucoup");
}

#[test]
fn arabic_uses_every_category() {
    let data = plurals();
    let pattern = IString::with_locale("zero#z|one#o|two#t|few#f|many#m|#x", "ar");
    let format = |n: i64| pattern.format_choice_with(&data, n, &params! {}).unwrap();
    assert_eq!(format(0), "z");
    assert_eq!(format(1), "o");
    assert_eq!(format(2), "t");
    assert_eq!(format(103), "f");
    assert_eq!(format(111), "m");
    assert_eq!(format(100), "x");
}

#[test]
fn set_locale_changes_rules() {
    let data = plurals();
    let mut pattern = IString::from("many#many|#other");
    assert_eq!(pattern.format_choice_with(&data, 5, &params! {}).unwrap(), "other");
    pattern.set_locale("pl-PL");
    assert_eq!(pattern.format_choice_with(&data, 5, &params! {}).unwrap(), "many");
}

// =========================================================================
// Multiple arguments
// =========================================================================

#[test]
fn multi_argument_choice() {
    let pattern = IString::from(
        "zero,zero#There are no objects on zero pages.|one,one#There is 1 object on 1 page.|other,one#There are {number} objects on 1 page.|#There are {number} objects on {pages} pages.",
    );
    let result = pattern
        .format_choice(vec![4, 1], &params! { "number" => 4, "pages" => 1 })
        .unwrap();
    assert_eq!(result, "There are 4 objects on 1 page.");

    let result = pattern
        .format_choice(vec![4, 3], &params! { "number" => 4, "pages" => 3 })
        .unwrap();
    assert_eq!(result, "There are 4 objects on 3 pages.");
}

#[test]
fn extra_arguments_and_extra_limits_are_ignored() {
    let pattern = IString::from("1#one|#other");
    assert_eq!(pattern.format_choice(vec![1, 99], &params! {}).unwrap(), "one");

    let pattern = IString::from("1,5,9#first|#other");
    assert_eq!(pattern.format_choice(1, &params! {}).unwrap(), "first");
}

#[test]
fn mixed_argument_kinds() {
    let pattern = IString::from("one,true#one yes|other,false#many no|#?");
    let args = Value::List(vec![1.into(), true.into()]);
    assert_eq!(pattern.format_choice(args, &params! {}).unwrap(), "one yes");
    let args = Value::List(vec![3.into(), false.into()]);
    assert_eq!(pattern.format_choice(args, &params! {}).unwrap(), "many no");
}

// =========================================================================
// Boolean and string arguments
// =========================================================================

#[test]
fn boolean_limits() {
    let pattern = IString::from("true#yes|false#no");
    assert_eq!(pattern.format_choice(true, &params! {}).unwrap(), "yes");
    assert_eq!(pattern.format_choice(false, &params! {}).unwrap(), "no");

    let pattern = IString::from("TRUE#yes|#fallback");
    assert_eq!(pattern.format_choice(true, &params! {}).unwrap(), "fallback");
}

#[test]
fn string_limits_are_case_insensitive_patterns() {
    let pattern = IString::from("^a.*#starts with a|[0-9]+#has digits|#other");
    assert_eq!(pattern.format_choice("Apple", &params! {}).unwrap(), "starts with a");
    assert_eq!(pattern.format_choice("item 42", &params! {}).unwrap(), "has digits");
    assert_eq!(pattern.format_choice("pear", &params! {}).unwrap(), "other");
}

#[test]
fn string_limit_matches_anywhere() {
    let pattern = IString::from("m#contains m|#other");
    assert_eq!(pattern.format_choice("Hammer", &params! {}).unwrap(), "contains m");
}

// =========================================================================
// Pattern parsing
// =========================================================================

#[test]
fn text_after_first_hash_is_kept() {
    let pattern = IString::from("1#item #1|#item #{n}");
    assert_eq!(pattern.format_choice(1, &params! {}).unwrap(), "item #1");
    assert_eq!(pattern.format_choice(2, &params! { "n" => 2 }).unwrap(), "item #2");
}

#[test]
fn empty_receiver_returns_empty_text() {
    let pattern = IString::new();
    assert_eq!(pattern.format_choice(1, &params! { "n" => 1 }).unwrap(), "");
    let nested = Value::List(vec![vec![1].into()]);
    assert_eq!(pattern.format_choice(nested, &params! {}).unwrap(), "");
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn segment_without_hash_is_a_syntax_error() {
    let pattern = IString::from("0#none|oops|#other");
    let err = pattern.format_choice(0, &params! {}).unwrap_err();
    assert!(matches!(err, ChoiceError::Syntax { ref segment } if segment == "oops"));
    assert_eq!(err.to_string(), "syntax error in choice format pattern: oops");
}

#[test]
fn syntax_error_wins_over_an_early_match() {
    let pattern = IString::from("0#none|broken");
    assert!(matches!(
        pattern.format_choice(0, &params! {}),
        Err(ChoiceError::Syntax { .. })
    ));
}

#[test]
fn nested_list_argument_is_rejected() {
    let pattern = IString::from("1#one|#other");
    let nested = Value::List(vec![1.into(), vec![2, 3].into()]);
    let err = pattern.format_choice(nested, &params! {}).unwrap_err();
    assert!(matches!(err, ChoiceError::NonPrimitiveArgument));
}

#[test]
fn invalid_regex_limit_is_reported() {
    let pattern = IString::from("(unclosed#x|#y");
    let err = pattern.format_choice("text", &params! {}).unwrap_err();
    match err {
        ChoiceError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn huge_unsigned_argument_is_not_one() {
    let pattern = IString::from("one#one item|#{n} items");
    let result = pattern
        .format_choice(u64::MAX, &params! { "n" => u64::MAX })
        .unwrap();
    assert_eq!(result, "18446744073709552000 items");
    assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
    assert_eq!(Value::from(7_usize), Value::Number(7));
}

#[test]
fn limits_past_i64_still_match() {
    let pattern = IString::from("99999999999999999999#huge|1-99999999999999999999#big|#other");
    assert_eq!(pattern.format_choice(1e20, &params! {}).unwrap(), "huge");
    assert_eq!(pattern.format_choice(u64::MAX, &params! {}).unwrap(), "big");
    assert_eq!(pattern.format_choice(0, &params! {}).unwrap(), "other");
}
