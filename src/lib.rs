//! Health Constraint - declarative constraint expressions for health checks
//!
//! Decides whether an observed value (a number, a string, a timestamp in
//! epoch milliseconds) satisfies a textual constraint such as `> 10`,
//! `between 5 and 20`, `older_than 5 minutes` or `not contains error`.
//!
//! ```
//! use health_constraint::check;
//!
//! assert!(check(Some(&"hello world"), "contains wor").unwrap());
//! assert!(!check(Some(&5), "not > 3").unwrap());
//! ```
//!
//! With the `python` feature the crate also builds as a Python extension
//! module exposing the same check.

pub mod checker;
pub mod constraint;
pub mod error;

#[cfg(feature = "python")]
mod python;

pub use crate::checker::{Constraint, ConstraintChecker};
pub use crate::constraint::{DurationUnit, OperatorKind, ParsedConstraint};
pub use crate::error::{ConstraintError, Result};

use chrono::{DateTime, Utc};
use std::fmt::Display;

/// Check `value` against `constraint` using the current time
///
/// An absent value never satisfies a constraint.
pub fn check(value: Option<&dyn Display>, constraint: &str) -> Result<bool> {
    ConstraintChecker::new().check(value, constraint)
}

/// Check `value` against `constraint` with an explicit "now" for `older_than`
pub fn check_at(value: Option<&dyn Display>, constraint: &str, now: DateTime<Utc>) -> Result<bool> {
    ConstraintChecker::new().check_at(value, constraint, now)
}
