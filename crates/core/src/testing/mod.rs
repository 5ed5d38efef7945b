//! Testing utilities: a scripted confidence source and data fixtures.
//!
//! # Example
//!
//! ```rust,ignore
//! use firstaid_triage_core::testing::{fixtures, ScriptedConfidenceSource};
//!
//! let submission = fixtures::submission(&["Headache"], Severity::Mild);
//! let mut source = ScriptedConfidenceSource::targeting(88.0, 85.0);
//! let result = classify(&submission, &SolutionCatalog::builtin(), &mut source)?;
//! ```

mod mock_confidence_source;

pub use mock_confidence_source::ScriptedConfidenceSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::{MedicineEntry, Solution, SolutionCatalog};
    use crate::submission::{DurationCategory, ExtraAnswers, Gender, Severity, Submission};

    /// Create a valid submission with reasonable defaults.
    pub fn submission(symptoms: &[&str], severity: Severity) -> Submission {
        Submission {
            name: "Test Patient".to_string(),
            email: "patient@example.com".to_string(),
            age: 30,
            gender: Gender::PreferNotToSay,
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            severity,
            duration: DurationCategory::OneToSixHours,
            additional_info: String::new(),
            answered_extra_questions: false,
            extra_answers: None,
        }
    }

    /// Mark a submission as having answered both extra questions.
    pub fn with_extra_answers(mut submission: Submission) -> Submission {
        submission.answered_extra_questions = true;
        submission.extra_answers = Some(ExtraAnswers {
            previous_episodes: "No, first time".to_string(),
            medications_and_allergies: "None".to_string(),
        });
        submission
    }

    /// Create a solution with one generic medicine entry.
    pub fn solution(name: &str, keywords: &[&str]) -> Solution {
        Solution {
            name: name.to_string(),
            category: "General Care".to_string(),
            severity: Severity::Mild,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            treatment: format!("Follow the {} steps.", name.to_lowercase()),
            medicine: vec![MedicineEntry::new(
                format!("{} remedy", name),
                "1 dose",
                "Once daily",
            )],
        }
    }

    /// Five solutions sharing no keyword with everyday symptom text.
    pub fn unrelated_catalog() -> SolutionCatalog {
        SolutionCatalog::new(vec![
            solution("Sprain Care", &["sprain", "twisted ankle"]),
            solution("Nosebleed Care", &["nosebleed"]),
            solution("Sunburn Relief", &["sunburn"]),
            solution("Insect Bite Care", &["insect bite", "sting"]),
            solution("Toothache Relief", &["toothache"]),
        ])
        .expect("fixture catalog is valid")
    }
}
