//! Triage engine - runs escalation, matching, estimation and composition.

use once_cell::sync::Lazy;
use tracing::{debug, info, warn};

use crate::catalog::SolutionCatalog;
use crate::config::{validate_config, validate_engine_config, Config, EngineConfig};
use crate::engine::{
    accuracy::AccuracyEstimator,
    composer::ResultComposer,
    escalation::EscalationClassifier,
    keyword_matcher::KeywordMatcher,
    traits::{ConfidenceSource, TriageError},
    types::{Assessment, ResultKind, TriageResult},
};
use crate::metrics::{
    ACCURACY_ESTIMATES, CLASSIFICATIONS, ESCALATIONS, MATCH_SCORES, VALIDATION_FAILURES,
};
use crate::submission::Submission;

/// The triage engine.
///
/// Holds only immutable policy, so one instance can serve concurrent calls.
/// Each call brings its own catalog snapshot and confidence source.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    config: EngineConfig,
    escalation: EscalationClassifier,
    matcher: KeywordMatcher,
    estimator: AccuracyEstimator,
    composer: ResultComposer,
}

impl TriageEngine {
    /// Build an engine for the given policy, rejecting one that fails
    /// [`validate_engine_config`].
    pub fn new(config: EngineConfig) -> Result<Self, TriageError> {
        validate_engine_config(&config)?;
        Ok(Self::with_checked_config(config))
    }

    /// Build from a full configuration, validating it first.
    pub fn from_config(config: &Config) -> Result<Self, TriageError> {
        validate_config(config)?;
        Ok(Self::with_checked_config(config.engine.clone()))
    }

    fn with_checked_config(config: EngineConfig) -> Self {
        Self {
            escalation: EscalationClassifier::from_config(&config),
            matcher: KeywordMatcher::new(),
            estimator: AccuracyEstimator::new(&config),
            composer: ResultComposer::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the rules without validating or composing.
    ///
    /// Escalation short-circuits: when it fires, the catalog is not scanned
    /// and the confidence source is not consumed.
    pub fn assess<'a, S>(
        &self,
        submission: &Submission,
        catalog: &'a SolutionCatalog,
        source: &mut S,
    ) -> Assessment<'a>
    where
        S: ConfidenceSource + ?Sized,
    {
        if let Some(trigger) = self.escalation.detect(submission) {
            ESCALATIONS.with_label_values(&[trigger.label()]).inc();
            return Assessment::Escalated(self.escalation.escalate(&trigger));
        }

        let matched = self.matcher.best_match(submission, catalog);
        MATCH_SCORES.observe(f64::from(matched.score));

        let accuracy = self.estimator.estimate(submission, source);
        debug!(
            "Assessment: score {}, accuracy {:.2} vs threshold {}",
            matched.score, accuracy.accuracy, accuracy.threshold
        );

        Assessment::Evaluated { matched, accuracy }
    }

    /// Classify a submission against a catalog snapshot.
    ///
    /// Fails fast with [`TriageError::InvalidSubmission`] on structurally
    /// invalid input; every valid submission produces a result.
    pub fn classify<S>(
        &self,
        submission: &Submission,
        catalog: &SolutionCatalog,
        source: &mut S,
    ) -> Result<TriageResult, TriageError>
    where
        S: ConfidenceSource + ?Sized,
    {
        if let Err(e) = submission.validate() {
            VALIDATION_FAILURES.inc();
            warn!("Rejecting submission ({}): {}", e.field(), e);
            return Err(e.into());
        }

        let assessment = self.assess(submission, catalog, source);
        let result = self.composer.compose(assessment);

        CLASSIFICATIONS
            .with_label_values(&[result.kind().as_str()])
            .inc();
        if let Some(accuracy) = result.accuracy() {
            ACCURACY_ESTIMATES
                .with_label_values(&[result.kind().as_str()])
                .observe(accuracy);
        }

        match result.kind() {
            ResultKind::Emergency => info!(
                "Triage result: emergency ({} symptom(s), severity {})",
                submission.symptoms.len(),
                submission.severity
            ),
            kind => info!(
                "Triage result: {} {:?} (accuracy {:.1})",
                kind,
                result.title(),
                result.accuracy().unwrap_or_default()
            ),
        }

        Ok(result)
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        // Default policy is covered by the config validation tests.
        Self::with_checked_config(EngineConfig::default())
    }
}

static DEFAULT_ENGINE: Lazy<TriageEngine> = Lazy::new(TriageEngine::default);

/// Classify with the default policy.
///
/// See [`TriageEngine::classify`].
pub fn classify<S>(
    submission: &Submission,
    catalog: &SolutionCatalog,
    source: &mut S,
) -> Result<TriageResult, TriageError>
where
    S: ConfidenceSource + ?Sized,
{
    DEFAULT_ENGINE.classify(submission, catalog, source)
}
