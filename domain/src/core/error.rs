//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The estimator itself never fails; these errors only arise when raw user
/// tokens are turned into answer-set values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid answer for {field}: '{value}' (expected one of: {expected})")]
    InvalidAnswer {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl DomainError {
    /// Build an [`DomainError::InvalidAnswer`] listing the accepted tokens
    pub fn invalid_answer(field: &'static str, value: &str, expected: &[&str]) -> Self {
        DomainError::InvalidAnswer {
            field,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }

    /// Name of the answer field that failed to parse, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DomainError::InvalidAnswer { field, .. } => Some(field),
            DomainError::UnknownAction(_) => None,
        }
    }
}
