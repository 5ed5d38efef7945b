//! Submissions - the validated description of a user's symptoms.
//!
//! A [`Submission`] is the immutable value handed to the triage engine.
//! Raw, partially filled intake payloads are modelled by [`SubmissionForm`]
//! and converted with `Submission::try_from(form)`, which reports every
//! offending field at once so the intake side can surface them together.

mod form;
mod types;

pub use form::SubmissionForm;
pub use types::*;

use thiserror::Error;

/// A structural problem with a submission.
///
/// Every variant maps to the form field it concerns via [`ValidationError::field`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please select at least one symptom")]
    NoSymptoms,

    #[error("Symptom #{} is blank", .0 + 1)]
    BlankSymptom(usize),

    #[error("Age must be a whole number between 1 and 120, got {0:?}")]
    InvalidAge(String),

    #[error("Unknown severity: {0:?}")]
    InvalidSeverity(String),

    #[error("Unknown duration: {0:?}")]
    InvalidDuration(String),

    #[error("Unknown gender: {0:?}")]
    InvalidGender(String),

    #[error("Please answer this question ({0})")]
    MissingExtraAnswer(&'static str),
}

impl ValidationError {
    /// Name of the intake form field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field) => field,
            ValidationError::NoSymptoms | ValidationError::BlankSymptom(_) => "symptoms",
            ValidationError::InvalidAge(_) => "age",
            ValidationError::InvalidSeverity(_) => "severity",
            ValidationError::InvalidDuration(_) => "duration",
            ValidationError::InvalidGender(_) => "gender",
            ValidationError::MissingExtraAnswer(field) => field,
        }
    }
}

/// All field errors found while converting a [`SubmissionForm`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission rejected: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// Field-level messages, in the order the errors were found.
    pub fn by_field(&self) -> Vec<(&'static str, String)> {
        self.0.iter().map(|e| (e.field(), e.to_string())).collect()
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
