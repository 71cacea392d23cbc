//! Constraint expression parser

use crate::constraint::ast::{OperatorKind, ParsedConstraint, Pattern};
use crate::constraint::duration::DurationUnit;
use crate::error::{ConstraintError, Result};
use regex::Regex;
use smallvec::SmallVec;

pub const NOT: &str = "not";
pub const GREATER_THAN: &str = ">";
pub const LESS_THAN: &str = "<";
pub const EQUALS: &str = "=";
pub const BETWEEN: &str = "between";
pub const AND: &str = "and";
pub const CONTAINS: &str = "contains";
pub const STARTS_WITH: &str = "starts_with";
pub const ENDS_WITH: &str = "ends_with";
pub const MATCHES: &str = "matches";
pub const OLDER_THAN: &str = "older_than";

type Tokens<'a> = SmallVec<[&'a str; 8]>;

/// Parse a constraint expression
///
/// Blank input and a bare `not` are rejected. Operands that do not depend on
/// the checked value are validated here; anything that fits no operator form
/// becomes an exact-match literal.
pub fn parse(constraint: &str) -> Result<ParsedConstraint> {
    let mut tokens: Tokens<'_> = constraint.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ConstraintError::InvalidConstraint(
            "Empty constraint, cannot evaluate".to_string(),
        ));
    }

    let negated = tokens[0].eq_ignore_ascii_case(NOT);
    if negated {
        tokens.remove(0);
        if tokens.is_empty() {
            return Err(ConstraintError::InvalidConstraint(
                "Negation without a constraint".to_string(),
            ));
        }
    }

    let kind = classify(&tokens)?;
    tracing::debug!(constraint, negated, ?kind, "classified constraint");

    Ok(ParsedConstraint { negated, kind })
}

fn classify(tokens: &[&str]) -> Result<OperatorKind> {
    let kind = match tokens {
        [GREATER_THAN, bound] => OperatorKind::GreaterThan(parse_integer(bound)?),
        [LESS_THAN, bound] => OperatorKind::LessThan(parse_integer(bound)?),
        [EQUALS, operand] => OperatorKind::Equals(operand.to_string()),
        [keyword, lower, and, upper]
            if keyword.eq_ignore_ascii_case(BETWEEN) && and.eq_ignore_ascii_case(AND) =>
        {
            OperatorKind::Between {
                lower: parse_integer(lower)?,
                upper: parse_integer(upper)?,
            }
        }
        [keyword, phrase @ ..] if !phrase.is_empty() && keyword.eq_ignore_ascii_case(CONTAINS) => {
            OperatorKind::Contains(phrase.join(" "))
        }
        [keyword, phrase @ ..]
            if !phrase.is_empty() && keyword.eq_ignore_ascii_case(STARTS_WITH) =>
        {
            OperatorKind::StartsWith(phrase.join(" "))
        }
        [keyword, phrase @ ..] if !phrase.is_empty() && keyword.eq_ignore_ascii_case(ENDS_WITH) => {
            OperatorKind::EndsWith(phrase.join(" "))
        }
        [keyword, phrase @ ..] if !phrase.is_empty() && keyword.eq_ignore_ascii_case(MATCHES) => {
            OperatorKind::Matches(compile_pattern(phrase.join(" "))?)
        }
        [keyword, amount, unit] if keyword.eq_ignore_ascii_case(OLDER_THAN) => {
            let unit = DurationUnit::parse(unit)?;
            OperatorKind::OlderThan {
                amount: parse_integer(amount)?,
                unit,
            }
        }
        _ => OperatorKind::ExactJoin(tokens.concat()),
    };

    Ok(kind)
}

/// Parse a token as a 64-bit signed integer
pub(crate) fn parse_integer(token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|e| ConstraintError::malformed(token, e.to_string()))
}

fn compile_pattern(source: String) -> Result<Pattern> {
    // Validate on its own first so a stray ')' cannot escape the anchoring group
    Regex::new(&source).map_err(|e| ConstraintError::malformed(&source, e.to_string()))?;
    let regex = Regex::new(&format!("^(?:{})$", source))
        .map_err(|e| ConstraintError::malformed(&source, e.to_string()))?;
    Ok(Pattern::new(source, regex))
}
