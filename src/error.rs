//! Optimizer error taxonomy.
//!
//! Errors are raised before any search runs. Once inputs validate, the
//! generation loop cannot fail.

use crate::validation::ValidationError;

/// Convenience alias for optimizer results.
pub type Result<T> = std::result::Result<T, OptimizeError>;

#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    /// The machine list is empty or contains malformed machines.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Population size, generation count, or rates are out of bounds.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl OptimizeError {
    /// Validation errors behind an `InvalidInput`, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            OptimizeError::InvalidInput(errors) => errors,
            OptimizeError::InvalidConfiguration(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for OptimizeError {
    fn from(errors: Vec<ValidationError>) -> Self {
        OptimizeError::InvalidInput(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message() {
        let err = OptimizeError::from(vec![
            ValidationError::new(ValidationErrorKind::EmptyFleet, "Machine list is empty"),
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate machine ID: M1"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: Machine list is empty; Duplicate machine ID: M1"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_invalid_configuration_message() {
        let err = OptimizeError::InvalidConfiguration("population_size must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: population_size must be at least 1"
        );
        assert!(err.validation_errors().is_empty());
    }
}
