//! Input validation for maintenance optimization.
//!
//! Checks the machine fleet before any search runs. Detects:
//! - Empty fleets
//! - Empty or duplicate machine IDs
//! - Non-finite instrument readings
//! - Health and failure-risk scores outside 0..=100
//!
//! All problems are collected rather than stopping at the first one.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::models::Machine;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// The machine list is empty.
    EmptyFleet,
    /// A machine has an empty ID.
    MissingId,
    /// Two machines share the same ID.
    DuplicateId,
    /// A numeric field is NaN or infinite.
    NonFiniteValue,
    /// A bounded score lies outside its range.
    OutOfRange,
    /// A field could not be read as the expected type.
    MalformedField,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates the machine fleet for optimization.
///
/// Checks:
/// 1. At least one machine
/// 2. Every machine has a non-empty ID
/// 3. No duplicate machine IDs
/// 4. Temperature and vibration are finite
/// 5. Health and failure risk are finite and within 0..=100
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_machines(machines: &[Machine]) -> ValidationResult {
    if machines.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyFleet,
            "Machine list is empty",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (idx, m) in machines.iter().enumerate() {
        if m.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingId,
                format!("Machine at position {idx} has an empty ID"),
            ));
        } else if !ids.insert(m.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate machine ID: {}", m.id),
            ));
        }

        check_score(&mut errors, &m.id, "health", m.health);
        check_score(&mut errors, &m.id, "failureRisk", m.failure_risk);
        check_finite(&mut errors, &m.id, "temp", m.temperature);
        check_finite(&mut errors, &m.id, "vibration", m.vibration);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_finite(errors: &mut Vec<ValidationError>, id: &str, field: &str, value: f64) -> bool {
    if value.is_finite() {
        return true;
    }
    errors.push(ValidationError::new(
        ValidationErrorKind::NonFiniteValue,
        format!("Machine '{id}' has non-finite {field}: {value}"),
    ));
    false
}

fn check_score(errors: &mut Vec<ValidationError>, id: &str, field: &str, value: f64) {
    if check_finite(errors, id, field, value) && !(0.0..=100.0).contains(&value) {
        errors.push(ValidationError::new(
            ValidationErrorKind::OutOfRange,
            format!("Machine '{id}' has {field} {value} outside 0..=100"),
        ));
    }
}
