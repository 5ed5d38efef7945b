//! Emergency short-circuit rules.
//!
//! Runs before any catalog matching. A critical severity or any symptom
//! containing one of the critical phrases yields an emergency result, no
//! matter what the catalog holds.

use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::types::TriageResult;
use crate::submission::{Severity, Submission};

/// Why a submission was escalated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscalationTrigger {
    /// The user rated their condition critical.
    CriticalSeverity,
    /// A symptom contained a critical phrase.
    CriticalPhrase { phrase: String, symptom: String },
}

impl EscalationTrigger {
    /// Short label for metrics and logs.
    pub fn label(&self) -> &'static str {
        match self {
            EscalationTrigger::CriticalSeverity => "severity",
            EscalationTrigger::CriticalPhrase { .. } => "phrase",
        }
    }
}

/// Table-driven detector for life-threatening submissions.
#[derive(Debug, Clone)]
pub struct EscalationClassifier {
    /// Lower-cased, non-blank phrases.
    phrases: Vec<String>,
}

impl EscalationClassifier {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for phrase in phrases {
            let phrase = phrase.as_ref().trim().to_lowercase();
            if !phrase.is_empty() && !normalized.contains(&phrase) {
                normalized.push(phrase);
            }
        }
        Self { phrases: normalized }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(&config.critical_phrases)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Find the first rule that fires, if any.
    ///
    /// Severity is checked first, then symptoms in submission order against
    /// phrases in table order.
    pub fn detect(&self, submission: &Submission) -> Option<EscalationTrigger> {
        if submission.severity == Severity::Critical {
            return Some(EscalationTrigger::CriticalSeverity);
        }

        submission.symptoms.iter().find_map(|symptom| {
            let lowered = symptom.to_lowercase();
            self.phrases
                .iter()
                .find(|phrase| lowered.contains(phrase.as_str()))
                .map(|phrase| EscalationTrigger::CriticalPhrase {
                    phrase: phrase.clone(),
                    symptom: symptom.clone(),
                })
        })
    }

    /// Emergency result when a rule fires, `None` otherwise.
    pub fn classify_escalation(&self, submission: &Submission) -> Option<TriageResult> {
        self.detect(submission).map(|trigger| self.escalate(&trigger))
    }

    /// Emergency result for a trigger that has already fired.
    pub fn escalate(&self, trigger: &EscalationTrigger) -> TriageResult {
        match trigger {
            EscalationTrigger::CriticalSeverity => {
                debug!("Escalating: severity rated critical");
            }
            EscalationTrigger::CriticalPhrase { phrase, symptom } => {
                debug!("Escalating: symptom {:?} matches critical phrase {:?}", symptom, phrase);
            }
        }
        TriageResult::emergency()
    }
}

impl Default for EscalationClassifier {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
