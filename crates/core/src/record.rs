//! Records handed to the persistence collaborator.
//!
//! The engine stores nothing. Callers wrap a submission and its result in a
//! [`TriageRecord`] and pass it on; history listings use the lighter
//! [`TriageSummary`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::{ResultKind, ResultOverride, TriageResult};
use crate::submission::{Severity, Submission};

/// A submission together with the result computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageRecord {
    pub id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    /// Fingerprint of the catalog snapshot the result was computed against.
    pub catalog_fingerprint: String,
    pub submission: Submission,
    pub result: TriageResult,
}

impl TriageRecord {
    pub fn new(
        submission: Submission,
        result: TriageResult,
        catalog_fingerprint: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            evaluated_at: Utc::now(),
            catalog_fingerprint: catalog_fingerprint.into(),
            submission,
            result,
        }
    }

    /// Replace the stored result with an administrator-edited copy.
    pub fn apply_override(&mut self, edit: &ResultOverride) {
        self.result = self.result.with_override(edit);
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Lightweight view of a record for history lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageSummary {
    pub id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub kind: ResultKind,
    pub title: String,
    pub severity: Severity,
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<u32>,
}

impl From<&TriageRecord> for TriageSummary {
    fn from(record: &TriageRecord) -> Self {
        Self {
            id: record.id,
            evaluated_at: record.evaluated_at,
            kind: record.result.kind(),
            title: record.result.title().to_string(),
            severity: record.submission.severity,
            symptoms: record.submission.symptoms.clone(),
            accuracy: record.result.accuracy_percent(),
        }
    }
}

/// Most severe first, newest first within a severity.
pub fn sort_by_severity(summaries: &mut [TriageSummary]) {
    summaries.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| b.evaluated_at.cmp(&a.evaluated_at))
    });
}

/// Newest first.
pub fn sort_by_date(summaries: &mut [TriageSummary]) {
    summaries.sort_by(|a, b| b.evaluated_at.cmp(&a.evaluated_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MedicineEntry, SolutionCatalog};
    use crate::engine::{classify, FixedConfidenceSource};
    use crate::testing::fixtures;
    use chrono::Duration;

    fn make_record(symptoms: &[&str], severity: Severity) -> TriageRecord {
        let catalog = SolutionCatalog::builtin();
        let submission = fixtures::submission(symptoms, severity);
        let result = classify(&submission, &catalog, &mut FixedConfidenceSource::new(2.6)).unwrap();
        TriageRecord::new(submission, result, catalog.fingerprint())
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = make_record(&["Headache"], Severity::Mild);
        let json = record.to_json().unwrap();
        assert!(json.contains("\"catalogFingerprint\""));
        assert!(json.contains("\"type\":\"advice\""));

        let parsed = TriageRecord::from_json(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_from_json_rejects_tampered_result() {
        let record = make_record(&["Headache"], Severity::Mild);
        let mut json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        json["result"]["type"] = "emergency".into();
        json["result"]["accuracy"] = serde_json::json!(250.0);

        let err = TriageRecord::from_json(&json.to_string()).unwrap_err();
        assert!(err.to_string().contains("emergency results carry no accuracy"));

        let mut json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        json["result"]
            .as_object_mut()
            .unwrap()
            .remove("matchedSolution");
        assert!(TriageRecord::from_json(&json.to_string()).is_err());
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let a = make_record(&["Headache"], Severity::Mild);
        let b = make_record(&["Headache"], Severity::Mild);
        assert_ne!(a.id, b.id);
        assert_eq!(a.result, b.result);
    }

    #[test]
    fn test_summary_from_record() {
        let record = make_record(&["Headache"], Severity::Mild);
        let summary = TriageSummary::from(&record);
        assert_eq!(summary.id, record.id);
        assert_eq!(summary.kind, ResultKind::Advice);
        assert_eq!(summary.title, "Headache Relief");
        assert_eq!(summary.accuracy, Some(88));

        let emergency = make_record(&["Chest pain"], Severity::Mild);
        assert_eq!(TriageSummary::from(&emergency).accuracy, None);
    }

    #[test]
    fn test_apply_override() {
        let mut record = make_record(&["Burn on arm"], Severity::Moderate);
        record.apply_override(&ResultOverride {
            description: None,
            medicine: Some(vec![MedicineEntry::new("Silver sulfadiazine", "Thin layer", "Daily")]),
        });
        assert!(record.result.is_overridden());
        assert_eq!(record.result.medicine()[0].name, "Silver sulfadiazine");
        assert_eq!(record.result.title(), "Burn Treatment");
    }

    #[test]
    fn test_sort_by_severity_then_date() {
        let now = Utc::now();
        let mut summaries: Vec<TriageSummary> = [
            (Severity::Mild, 0),
            (Severity::Critical, 5),
            (Severity::Mild, 1),
            (Severity::Severe, 2),
        ]
        .into_iter()
        .map(|(severity, minutes_ago)| {
            let mut record = make_record(&["Fever"], severity);
            record.evaluated_at = now - Duration::minutes(minutes_ago);
            TriageSummary::from(&record)
        })
        .collect();

        sort_by_severity(&mut summaries);
        let order: Vec<(Severity, DateTime<Utc>)> =
            summaries.iter().map(|s| (s.severity, s.evaluated_at)).collect();
        assert_eq!(
            order,
            vec![
                (Severity::Critical, now - Duration::minutes(5)),
                (Severity::Severe, now - Duration::minutes(2)),
                (Severity::Mild, now),
                (Severity::Mild, now - Duration::minutes(1)),
            ]
        );

        sort_by_date(&mut summaries);
        assert_eq!(summaries[0].evaluated_at, now);
        assert_eq!(summaries[3].evaluated_at, now - Duration::minutes(5));
    }
}
