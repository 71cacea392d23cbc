//! Python bindings

use crate::constraint;
use chrono::Utc;
use pyo3::prelude::*;

/// Check a value against a constraint expression
///
/// `value` may be any object; it is compared through `str(value)`.
/// `None` never matches.
///
/// # Raises
/// ValueError if the constraint is blank or one of its operands is malformed
#[pyfunction]
#[pyo3(signature = (value, constraint))]
fn check(value: Option<&Bound<'_, PyAny>>, constraint: &str) -> PyResult<bool> {
    let text = match value {
        Some(value) => Some(value.str()?.extract::<String>()?),
        None => None,
    };

    Ok(constraint::check_constraint(
        text.as_deref(),
        constraint,
        Utc::now(),
    )?)
}

/// Check whether a constraint expression parses
#[pyfunction]
fn is_valid(constraint: &str) -> bool {
    constraint::get_or_parse(constraint).is_ok()
}

/// Python module definition
#[pymodule]
fn health_constraint(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(check, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid, m)?)?;
    Ok(())
}
