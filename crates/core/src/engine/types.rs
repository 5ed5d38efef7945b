//! Shared types for triage operations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{MedicineEntry, Solution};
use crate::engine::traits::ResultIntegrityError;

/// Final decision of a triage run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// Self-care advice from a matched catalog solution.
    Advice,
    /// Defer to a doctor: no confident match.
    Consult,
    /// Seek emergency care now.
    Emergency,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Advice => "advice",
            ResultKind::Consult => "consult",
            ResultKind::Emergency => "emergency",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the engine.
///
/// `accuracy` is `None` exactly when the kind is [`ResultKind::Emergency`]
/// and otherwise a finite percentage. `matched_solution` is set exactly when
/// the kind is [`ResultKind::Advice`]. The engine only builds results that
/// satisfy this, and decoding rejects stored results that do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTriageResult")]
pub struct TriageResult {
    #[serde(rename = "type")]
    pub(crate) kind: ResultKind,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) instructions: Vec<String>,
    #[serde(default)]
    pub(crate) medicine: Vec<MedicineEntry>,
    pub(crate) accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) matched_solution: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) overridden: bool,
}

/// Wire shape of [`TriageResult`] before its invariants are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTriageResult {
    #[serde(rename = "type")]
    kind: ResultKind,
    title: String,
    description: String,
    instructions: Vec<String>,
    #[serde(default)]
    medicine: Vec<MedicineEntry>,
    accuracy: Option<f64>,
    #[serde(default)]
    matched_solution: Option<String>,
    #[serde(default)]
    overridden: bool,
}

impl TryFrom<RawTriageResult> for TriageResult {
    type Error = ResultIntegrityError;

    fn try_from(raw: RawTriageResult) -> Result<Self, Self::Error> {
        match (raw.kind, raw.accuracy) {
            (ResultKind::Emergency, Some(_)) => {
                return Err(ResultIntegrityError::AccuracyOnEmergency)
            }
            (ResultKind::Emergency, None) => {}
            (kind, None) => return Err(ResultIntegrityError::MissingAccuracy(kind)),
            (_, Some(accuracy)) => {
                if !(0.0..=100.0).contains(&accuracy) {
                    return Err(ResultIntegrityError::AccuracyOutOfRange(accuracy));
                }
            }
        }

        match (raw.kind, &raw.matched_solution) {
            (ResultKind::Advice, None) => {
                return Err(ResultIntegrityError::MissingMatchedSolution)
            }
            (ResultKind::Advice, Some(_)) | (_, None) => {}
            (kind, Some(_)) => {
                return Err(ResultIntegrityError::UnexpectedMatchedSolution(kind))
            }
        }

        Ok(TriageResult {
            kind: raw.kind,
            title: raw.title,
            description: raw.description,
            instructions: raw.instructions,
            medicine: raw.medicine,
            accuracy: raw.accuracy,
            matched_solution: raw.matched_solution,
            overridden: raw.overridden,
        })
    }
}

impl TriageResult {
    pub fn kind(&self) -> ResultKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn medicine(&self) -> &[MedicineEntry] {
        &self.medicine
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    /// Accuracy rounded to a whole percentage, for display.
    pub fn accuracy_percent(&self) -> Option<u32> {
        self.accuracy.map(|a| a.round() as u32)
    }

    /// Name of the catalog solution behind an advice result.
    pub fn matched_solution(&self) -> Option<&str> {
        self.matched_solution.as_deref()
    }

    /// Whether an administrator has edited this result after the fact.
    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// Copy of this result with an administrator's edits applied.
    ///
    /// The decision itself (kind, accuracy, matched solution) never changes;
    /// the engine is not re-run.
    pub fn with_override(&self, edit: &ResultOverride) -> TriageResult {
        let mut result = self.clone();
        if let Some(description) = &edit.description {
            result.description = description.clone();
        }
        if let Some(medicine) = &edit.medicine {
            result.medicine = medicine
                .iter()
                .filter(|m| !m.name.trim().is_empty())
                .cloned()
                .collect();
        }
        result.overridden = result.overridden || !edit.is_empty();
        result
    }
}

/// Post-hoc administrator edit of a stored result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultOverride {
    pub description: Option<String>,
    /// Replacement medicine list. Entries with a blank name are dropped.
    pub medicine: Option<Vec<MedicineEntry>>,
}

impl ResultOverride {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.medicine.is_none()
    }
}

/// Best catalog match for a submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOutcome<'a> {
    pub solution: Option<&'a Solution>,
    /// Number of the solution's keywords that overlapped a symptom.
    pub score: u32,
}

impl MatchOutcome<'_> {
    pub fn none() -> Self {
        Self {
            solution: None,
            score: 0,
        }
    }
}

/// Estimated confidence together with the bar it has to clear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyOutcome {
    pub accuracy: f64,
    pub threshold: f64,
}

/// Everything the composer needs to produce a result.
#[derive(Debug, Clone)]
pub enum Assessment<'a> {
    /// The escalation rules fired; matching and estimation never ran.
    Escalated(TriageResult),
    /// Normal path through matching and estimation.
    Evaluated {
        matched: MatchOutcome<'a>,
        accuracy: AccuracyOutcome,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result() -> TriageResult {
        TriageResult {
            kind: ResultKind::Advice,
            title: "Burn Treatment".to_string(),
            description: "Based on your symptoms, here are the recommended first-aid steps:"
                .to_string(),
            instructions: vec!["Cool the burn.".to_string()],
            medicine: vec![MedicineEntry::new("Aloe vera gel", "Thin layer", "Daily")],
            accuracy: Some(88.4),
            matched_solution: Some("Burn Treatment".to_string()),
            overridden: false,
        }
    }

    #[test]
    fn test_accuracy_percent_rounds() {
        let result = make_result();
        assert_eq!(result.accuracy_percent(), Some(88));

        let mut result = make_result();
        result.accuracy = Some(89.5);
        assert_eq!(result.accuracy_percent(), Some(90));

        result.accuracy = None;
        assert_eq!(result.accuracy_percent(), None);
    }

    #[test]
    fn test_with_override_keeps_decision() {
        let original = make_result();
        let edit = ResultOverride {
            description: Some("Reviewed by Dr. Rahman".to_string()),
            medicine: Some(vec![
                MedicineEntry::new("Paracetamol", "500 mg", "Every 6 hours"),
                MedicineEntry::new(" ", "", ""),
            ]),
        };

        let edited = original.with_override(&edit);
        assert_eq!(edited.description(), "Reviewed by Dr. Rahman");
        assert_eq!(edited.medicine().len(), 1);
        assert_eq!(edited.medicine()[0].name, "Paracetamol");
        assert_eq!(edited.kind(), original.kind());
        assert_eq!(edited.accuracy(), original.accuracy());
        assert_eq!(edited.matched_solution(), Some("Burn Treatment"));
        assert!(edited.is_overridden());

        // The original value is untouched.
        assert!(!original.is_overridden());
        assert_eq!(original.medicine()[0].name, "Aloe vera gel");
    }

    #[test]
    fn test_empty_override_is_noop() {
        let original = make_result();
        let edited = original.with_override(&ResultOverride::default());
        assert_eq!(edited, original);
    }

    #[test]
    fn test_result_serialization_shape() {
        let json = serde_json::to_value(make_result()).unwrap();
        assert_eq!(json["type"], "advice");
        assert_eq!(json["matchedSolution"], "Burn Treatment");
        assert_eq!(json["medicine"][0]["dose"], "Thin layer");
        assert!(json.get("overridden").is_none());

        let mut emergency = make_result();
        emergency.kind = ResultKind::Emergency;
        emergency.accuracy = None;
        emergency.matched_solution = None;
        let json = serde_json::to_value(&emergency).unwrap();
        assert!(json["accuracy"].is_null());
        assert!(json.get("matchedSolution").is_none());

        let parsed: TriageResult = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, emergency);
    }

    #[test]
    fn test_decoding_rejects_inconsistent_results() {
        let valid = serde_json::to_value(make_result()).unwrap();
        let decode = |edit: &dyn Fn(&mut serde_json::Value)| {
            let mut json = valid.clone();
            edit(&mut json);
            serde_json::from_value::<TriageResult>(json)
        };

        assert!(decode(&|_| {}).is_ok());

        let err = decode(&|j| {
            j["type"] = "emergency".into();
            j["accuracy"] = serde_json::json!(250.0);
            j.as_object_mut().unwrap().remove("matchedSolution");
        })
        .unwrap_err();
        assert!(err.to_string().contains("emergency results carry no accuracy"));

        let err = decode(&|j| {
            j.as_object_mut().unwrap().remove("matchedSolution");
        })
        .unwrap_err();
        assert!(err.to_string().contains("missing its matched solution"));

        let err = decode(&|j| j["type"] = "consult".into()).unwrap_err();
        assert!(err.to_string().contains("cannot name a matched solution"));

        let err = decode(&|j| j["accuracy"] = serde_json::Value::Null).unwrap_err();
        assert!(err.to_string().contains("missing its accuracy"));

        let err = decode(&|j| j["accuracy"] = serde_json::json!(250.0)).unwrap_err();
        assert!(err.to_string().contains("not a percentage"));
    }

    #[test]
    fn test_match_outcome_none() {
        let outcome = MatchOutcome::none();
        assert!(outcome.solution.is_none());
        assert_eq!(outcome.score, 0);
    }
}
