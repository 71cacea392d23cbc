//! Entry points for checking values against constraint expressions

use crate::constraint::{self, OperatorKind, ParsedConstraint};
use crate::error::{ConstraintError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Checks values against constraint expressions
///
/// Holds no state; parsed expressions are shared through the process-wide
/// cache, so a checker can be copied freely and used from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintChecker;

impl ConstraintChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check `value` against `constraint` using the current time
    ///
    /// # Errors
    /// `InvalidConstraint` for a blank expression, `MalformedOperand` when a
    /// numeric operand, duration unit or pattern cannot be parsed.
    ///
    /// # Example
    /// ```
    /// use health_constraint::ConstraintChecker;
    ///
    /// let checker = ConstraintChecker::new();
    /// assert!(checker.check(Some(&5), "> 3").unwrap());
    /// assert!(!checker.check(None, "> 3").unwrap());
    /// ```
    pub fn check(&self, value: Option<&dyn fmt::Display>, constraint: &str) -> Result<bool> {
        self.check_at(value, constraint, Utc::now())
    }

    /// Check `value` against `constraint` with an explicit "now"
    pub fn check_at(
        &self,
        value: Option<&dyn fmt::Display>,
        constraint: &str,
        now: DateTime<Utc>,
    ) -> Result<bool> {
        let text = value.map(|v| v.to_string());
        constraint::check_constraint(text.as_deref(), constraint, now)
    }
}

/// A pre-parsed constraint expression
///
/// Serializes as its original text, so it can be embedded directly in
/// caller configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Constraint {
    source: String,
    parsed: Arc<ParsedConstraint>,
}

impl Constraint {
    pub fn parse(constraint: &str) -> Result<Self> {
        Self::try_from(constraint.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_negated(&self) -> bool {
        self.parsed.negated
    }

    pub fn kind(&self) -> &OperatorKind {
        &self.parsed.kind
    }

    pub fn evaluate(&self, value: Option<&dyn fmt::Display>) -> Result<bool> {
        self.evaluate_at(value, Utc::now())
    }

    pub fn evaluate_at(&self, value: Option<&dyn fmt::Display>, now: DateTime<Utc>) -> Result<bool> {
        match value {
            Some(value) => constraint::check(&self.parsed, &value.to_string(), now),
            None => Ok(false),
        }
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Constraint {
    type Error = ConstraintError;

    fn try_from(value: String) -> Result<Self> {
        let parsed = constraint::get_or_parse(&value)?;
        Ok(Self {
            source: value,
            parsed,
        })
    }
}

impl From<Constraint> for String {
    fn from(constraint: Constraint) -> String {
        constraint.source
    }
}
