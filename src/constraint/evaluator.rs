//! Constraint evaluator

use crate::constraint::ast::{OperatorKind, ParsedConstraint};
use crate::constraint::duration::threshold_millis;
use crate::constraint::parser::parse_integer;
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Evaluate a parsed constraint against the textual form of a value
///
/// `now` is only consulted by `older_than`.
pub fn check(parsed: &ParsedConstraint, value: &str, now: DateTime<Utc>) -> Result<bool> {
    let matched = match &parsed.kind {
        OperatorKind::GreaterThan(bound) => parse_integer(value)? > *bound,
        OperatorKind::LessThan(bound) => parse_integer(value)? < *bound,
        OperatorKind::Equals(operand) => match value.parse::<i64>() {
            Ok(number) => number == parse_integer(operand)?,
            Err(_) => value == operand,
        },
        OperatorKind::Between { lower, upper } => {
            let number = parse_integer(value)?;
            *lower < number && number < *upper
        }
        OperatorKind::Contains(phrase) => value.contains(phrase.as_str()),
        OperatorKind::StartsWith(phrase) => value.starts_with(phrase.as_str()),
        OperatorKind::EndsWith(phrase) => value.ends_with(phrase.as_str()),
        OperatorKind::Matches(pattern) => pattern.is_full_match(value),
        OperatorKind::OlderThan { amount, unit } => {
            let timestamp = parse_integer(value)?;
            timestamp < threshold_millis(now, *amount, *unit)?
        }
        OperatorKind::ExactJoin(joined) => value == joined,
    };

    let result = matched ^ parsed.negated;
    tracing::trace!(value, matched, negated = parsed.negated, result, "evaluated constraint");

    Ok(result)
}
