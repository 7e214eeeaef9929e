//! Decoding of legacy JSON plural rules into [`Rule`] trees.
//!
//! The legacy data encodes operators purely by shape: a number is a
//! literal, a string names an operand, an array is a range test and an
//! object's single key names the operator applied to its value.

use std::slice;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;
use strsim::levenshtein;

use super::error::RuleError;
use super::operands::Operand;
use super::rule::{RangeItem, RangeSet, Rule};

/// Operator keys understood by the decoder.
const OPERATORS: &[&str] = &[
    "eq", "neq", "is", "isnot", "mod", "inrange", "notin", "within", "or", "and", "n",
];

impl Rule {
    /// Decode one JSON rule node.
    ///
    /// ```
    /// use istring::plural::{Operand, Rule};
    /// use serde_json::json;
    ///
    /// let rule = Rule::from_json(&json!({"eq": ["i", 1]})).unwrap();
    /// assert_eq!(
    ///     rule,
    ///     Rule::Eq(Box::new(Rule::Symbol(Operand::I)), Box::new(Rule::Literal(1.0)))
    /// );
    /// ```
    pub fn from_json(value: &JsonValue) -> Result<Rule, RuleError> {
        match value {
            JsonValue::Number(number) => number
                .as_f64()
                .map(Rule::Literal)
                .ok_or(RuleError::UnexpectedValue {
                    kind: "non-finite number",
                }),
            JsonValue::String(name) => decode_operand(name).map(Rule::Symbol),
            JsonValue::Array(items) => decode_range_node(items),
            JsonValue::Object(map) => {
                let mut entries = map.iter();
                let (Some((key, body)), None) = (entries.next(), entries.next()) else {
                    return Err(RuleError::OperatorCount { count: map.len() });
                };
                decode_operator(key, body)
            }
            JsonValue::Bool(_) => Err(RuleError::UnexpectedValue { kind: "boolean" }),
            JsonValue::Null => Err(RuleError::UnexpectedValue { kind: "null" }),
        }
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = JsonValue::deserialize(deserializer)?;
        Rule::from_json(&raw).map_err(DeError::custom)
    }
}

fn decode_operand(name: &str) -> Result<Operand, RuleError> {
    name.parse().map_err(|()| RuleError::UnknownOperand {
        name: name.to_string(),
        suggestions: compute_suggestions(name, &Operand::NAMES),
    })
}

fn decode_operator(key: &str, body: &JsonValue) -> Result<Rule, RuleError> {
    match key {
        "eq" => decode_binary("eq", body, Rule::Eq),
        "neq" => decode_binary("neq", body, Rule::Neq),
        "is" => decode_binary("is", body, Rule::Is),
        "isnot" => decode_binary("isnot", body, Rule::IsNot),
        "mod" => decode_binary("mod", body, Rule::Mod),
        // A wrapped range list names its subject `n` explicitly, so `neq`
        // treats it as a computed value rather than a bare `[lo, hi]` list.
        "inrange" => match body {
            JsonValue::Array(items) => decode_range_node(items).map(|rule| match rule {
                Rule::Range(ranges) => Rule::InRange(Box::new(Rule::Symbol(Operand::N)), ranges),
                other => other,
            }),
            _ => Err(malformed("inrange", "expected an array")),
        },
        "notin" => decode_subject_range("notin", body).map(|(s, r)| Rule::NotIn(s, r)),
        "within" => decode_subject_range("within", body).map(|(s, r)| Rule::Within(s, r)),
        "or" => decode_list("or", body).map(Rule::Or),
        "and" => decode_list("and", body).map(Rule::And),
        "n" => Ok(Rule::Identity),
        _ => Err(RuleError::UnknownOperator {
            name: key.to_string(),
            suggestions: compute_suggestions(key, OPERATORS),
        }),
    }
}

fn decode_binary(
    operator: &'static str,
    body: &JsonValue,
    make: fn(Box<Rule>, Box<Rule>) -> Rule,
) -> Result<Rule, RuleError> {
    let [left, right] = pair(operator, body)?;
    Ok(Rule::binary(make, Rule::from_json(left)?, Rule::from_json(right)?))
}

fn decode_subject_range(
    operator: &'static str,
    body: &JsonValue,
) -> Result<(Box<Rule>, RangeSet), RuleError> {
    let [subject, range] = pair(operator, body)?;
    Ok((Box::new(Rule::from_json(subject)?), decode_range_set(operator, range)?))
}

fn decode_list(operator: &'static str, body: &JsonValue) -> Result<Vec<Rule>, RuleError> {
    let JsonValue::Array(items) = body else {
        return Err(malformed(operator, "expected an array of rules"));
    };
    items.iter().map(Rule::from_json).collect()
}

/// Classify an array node: a leading number or array makes a bare range
/// list, anything else is a `[subject, ranges]` pair.
fn decode_range_node(items: &[JsonValue]) -> Result<Rule, RuleError> {
    match items {
        [] => Err(malformed("inrange", "empty range")),
        [JsonValue::Number(_) | JsonValue::Array(_), ..] => {
            decode_range_items("inrange", items).map(Rule::Range)
        }
        [subject, range] => Ok(Rule::InRange(
            Box::new(Rule::from_json(subject)?),
            decode_range_set("inrange", range)?,
        )),
        _ => Err(malformed(
            "inrange",
            format!("expected [subject, ranges], found {} elements", items.len()),
        )),
    }
}

fn decode_range_set(operator: &'static str, value: &JsonValue) -> Result<RangeSet, RuleError> {
    match value {
        JsonValue::Array(items) => decode_range_items(operator, items),
        JsonValue::Number(_) => decode_range_items(operator, slice::from_ref(value)),
        _ => Err(malformed(operator, "expected a range list")),
    }
}

fn decode_range_items(operator: &'static str, items: &[JsonValue]) -> Result<RangeSet, RuleError> {
    items
        .iter()
        .map(|item| match item {
            JsonValue::Number(_) => number(operator, item).map(RangeItem::Value),
            JsonValue::Array(bounds) => match bounds.as_slice() {
                [lo, hi] => Ok(RangeItem::Span(number(operator, lo)?, number(operator, hi)?)),
                _ => Err(malformed(operator, "interval must have two bounds")),
            },
            _ => Err(malformed(operator, "range entries must be numbers or intervals")),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(RangeSet::new)
}

fn pair<'a>(operator: &'static str, body: &'a JsonValue) -> Result<[&'a JsonValue; 2], RuleError> {
    match body {
        JsonValue::Array(items) => match items.as_slice() {
            [left, right] => Ok([left, right]),
            _ => Err(malformed(
                operator,
                format!("expected two operands, found {}", items.len()),
            )),
        },
        _ => Err(malformed(operator, "expected a two-element array")),
    }
}

fn number(operator: &'static str, value: &JsonValue) -> Result<f64, RuleError> {
    value
        .as_f64()
        .ok_or_else(|| malformed(operator, "range bounds must be numbers"))
}

fn malformed(operator: &'static str, reason: impl Into<String>) -> RuleError {
    RuleError::Malformed {
        operator,
        reason: reason.into(),
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// Returns up to three candidates within distance 1 (names of three
/// characters or fewer) or 2, closest first.
///
/// ```
/// use istring::plural::compute_suggestions;
///
/// assert_eq!(compute_suggestions("iss", &["is", "isnot", "eq"]), vec!["is"]);
/// assert!(compute_suggestions("xyz", &["is", "eq"]).is_empty());
/// ```
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
