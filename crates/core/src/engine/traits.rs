//! Traits and errors for the triage engine.

use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::types::ResultKind;
use crate::submission::ValidationError;

/// Errors that can occur during triage.
///
/// There are no transient failures: every variant is a contract violation
/// by the caller and retrying with the same input fails the same way.
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Invalid submission: {0}")]
    InvalidSubmission(#[from] ValidationError),

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// A stored result whose fields contradict its kind.
///
/// Raised when decoding a [`TriageResult`](crate::engine::TriageResult).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResultIntegrityError {
    #[error("emergency results carry no accuracy")]
    AccuracyOnEmergency,

    #[error("{0} result is missing its accuracy")]
    MissingAccuracy(ResultKind),

    #[error("accuracy {0} is not a percentage")]
    AccuracyOutOfRange(f64),

    #[error("advice result is missing its matched solution")]
    MissingMatchedSolution,

    #[error("{0} result cannot name a matched solution")]
    UnexpectedMatchedSolution(ResultKind),
}

/// Provider of the variance term used in accuracy estimation.
///
/// Implementations must be explicit values owned by the caller, so a run can
/// be reproduced by constructing the same source again.
pub trait ConfidenceSource {
    /// Name of this source for logging.
    fn name(&self) -> &str;

    /// Next variance, in accuracy points.
    ///
    /// Expected to lie within `[-spread, +spread]` of the configured band;
    /// the estimator clamps the final accuracy either way.
    fn next_variance(&mut self) -> f64;
}
