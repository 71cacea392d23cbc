//! Parsed form of constraint expressions

use crate::constraint::duration::DurationUnit;
use regex::Regex;

/// A constraint expression after tokenization and classification
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedConstraint {
    /// Leading `not` was present
    pub negated: bool,
    pub kind: OperatorKind,
}

/// Operator forms, in classification priority order
#[derive(Debug, Clone, PartialEq)]
pub enum OperatorKind {
    /// `> N`
    GreaterThan(i64),
    /// `< N`
    LessThan(i64),
    /// `= TOKEN`, numeric when the input is numeric, literal otherwise
    Equals(String),
    /// `between LOWER and UPPER`, exclusive on both ends
    Between { lower: i64, upper: i64 },
    /// `contains PHRASE`
    Contains(String),
    /// `starts_with PHRASE`
    StartsWith(String),
    /// `ends_with PHRASE`
    EndsWith(String),
    /// `matches REGEX`
    Matches(Pattern),
    /// `older_than AMOUNT UNIT`
    OlderThan { amount: i64, unit: DurationUnit },
    /// Fallback: all tokens joined without separators
    ExactJoin(String),
}

/// A regular expression anchored to match the whole input
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub(crate) fn new(source: String, regex: Regex) -> Self {
        Self { source, regex }
    }

    /// The pattern as written in the expression, without anchors
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_full_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}
