//! Accuracy estimation.

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::engine::traits::ConfidenceSource;
use crate::engine::types::AccuracyOutcome;
use crate::submission::Submission;

/// Produces a bounded confidence score and the threshold it must meet.
///
/// The estimator never decides the outcome; the composer compares the two.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyEstimator {
    base_accuracy: f64,
    extra_questions_accuracy: f64,
    min_accuracy: f64,
    max_accuracy: f64,
}

impl AccuracyEstimator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            base_accuracy: config.base_accuracy,
            extra_questions_accuracy: config.extra_questions_accuracy,
            min_accuracy: config.min_accuracy,
            max_accuracy: config.max_accuracy,
        }
    }

    /// Base accuracy for a submission, which is also its threshold.
    pub fn base_for(&self, submission: &Submission) -> f64 {
        if submission.answered_extra_questions {
            self.extra_questions_accuracy
        } else {
            self.base_accuracy
        }
    }

    pub fn estimate<S>(&self, submission: &Submission, source: &mut S) -> AccuracyOutcome
    where
        S: ConfidenceSource + ?Sized,
    {
        let base = self.base_for(submission);

        let mut variance = source.next_variance();
        if !variance.is_finite() {
            warn!(
                "Confidence source {:?} returned {}, treating as zero variance",
                source.name(),
                variance
            );
            variance = 0.0;
        }

        // f64::clamp panics when min > max.
        let accuracy = (base + variance).max(self.min_accuracy).min(self.max_accuracy);
        debug!(
            "Estimated accuracy {:.2} (base {}, variance {:+.2}, source {})",
            accuracy,
            base,
            variance,
            source.name()
        );

        AccuracyOutcome {
            accuracy,
            threshold: base,
        }
    }
}

impl Default for AccuracyEstimator {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
