//! The decoded plural rule tree.

use super::Operand;

/// One node of a plural rule.
///
/// Legacy rule data carries no explicit operator tag; the decoder in this
/// module's sibling classifies each JSON node by shape once, so evaluation
/// can match exhaustively on this enum.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// A numeric literal.
    Literal(f64),

    /// An operand lookup such as `i` or `v`.
    Symbol(Operand),

    /// `{"n": ..}`: yields the evaluation subject itself.
    Identity,

    /// Loose equality with the legacy symbol/range special cases.
    Eq(Box<Rule>, Box<Rule>),

    /// Inequality with the legacy symbol/range special cases.
    Neq(Box<Rule>, Box<Rule>),

    /// Plain loose equality.
    Is(Box<Rule>, Box<Rule>),

    /// Plain loose inequality.
    IsNot(Box<Rule>, Box<Rule>),

    /// Numeric modulo.
    Mod(Box<Rule>, Box<Rule>),

    /// A bare range list tested against the current subject.
    Range(RangeSet),

    /// A range list tested against an explicit subject.
    InRange(Box<Rule>, RangeSet),

    /// Negated range membership of a subject.
    NotIn(Box<Rule>, RangeSet),

    /// Range membership of a subject.
    Within(Box<Rule>, RangeSet),

    /// True when any child is truthy.
    Or(Vec<Rule>),

    /// True when every child is truthy.
    And(Vec<Rule>),
}

impl Rule {
    /// Whether this node is a range test the legacy data would classify as
    /// `inrange`.
    pub fn is_range(&self) -> bool {
        matches!(self, Rule::Range(_) | Rule::InRange(..))
    }

    pub(crate) fn binary(make: fn(Box<Rule>, Box<Rule>) -> Rule, left: Rule, right: Rule) -> Rule {
        make(Box::new(left), Box::new(right))
    }
}

/// One entry of a range list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeItem {
    /// Matches exactly this value.
    Value(f64),
    /// Matches any value in the inclusive interval.
    Span(f64, f64),
}

/// An ordered list of discrete values and inclusive intervals.
///
/// When the first two items are both discrete values they additionally act
/// as an inclusive interval, so the CLDR shorthand `[2, 4]` matches 2, 3
/// and 4 (and 3.5).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeSet {
    items: Vec<RangeItem>,
}

impl RangeSet {
    pub fn new(items: Vec<RangeItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[RangeItem] {
        &self.items
    }

    /// The interval formed by the first two items, if both are values.
    pub fn leading_pair(&self) -> Option<(f64, f64)> {
        match self.items.as_slice() {
            [RangeItem::Value(lo), RangeItem::Value(hi), ..] => Some((*lo, *hi)),
            _ => None,
        }
    }

    /// Test membership.
    ///
    /// `exact` is used for discrete matches and is `None` when the tested
    /// value is not a number at all; `numeric` is the value coerced to a
    /// number for interval checks.
    pub fn contains(&self, exact: Option<f64>, numeric: f64) -> bool {
        let leading = self.leading_pair();
        self.items.iter().any(|item| match *item {
            RangeItem::Value(value) => {
                exact == Some(value)
                    || leading.is_some_and(|(lo, hi)| numeric >= lo && numeric <= hi)
            }
            RangeItem::Span(lo, hi) => numeric >= lo && numeric <= hi,
        })
    }
}
