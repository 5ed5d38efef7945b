use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Youngest and oldest accepted ages.
pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 120;

/// How bad the user reports their symptoms to be.
///
/// Variants are declared in increasing order, so `Mild < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str() == wanted)
            .ok_or_else(|| ValidationError::InvalidSeverity(s.to_string()))
    }
}

/// How long the symptoms have been present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DurationCategory {
    #[serde(rename = "less-than-hour")]
    LessThanHour,
    #[serde(rename = "1-6-hours")]
    OneToSixHours,
    #[serde(rename = "6-24-hours")]
    SixToTwentyFourHours,
    #[serde(rename = "1-3-days")]
    OneToThreeDays,
    #[serde(rename = "more-than-3-days")]
    MoreThanThreeDays,
}

impl DurationCategory {
    pub const ALL: [DurationCategory; 5] = [
        DurationCategory::LessThanHour,
        DurationCategory::OneToSixHours,
        DurationCategory::SixToTwentyFourHours,
        DurationCategory::OneToThreeDays,
        DurationCategory::MoreThanThreeDays,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationCategory::LessThanHour => "less-than-hour",
            DurationCategory::OneToSixHours => "1-6-hours",
            DurationCategory::SixToTwentyFourHours => "6-24-hours",
            DurationCategory::OneToThreeDays => "1-3-days",
            DurationCategory::MoreThanThreeDays => "more-than-3-days",
        }
    }
}

impl fmt::Display for DurationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DurationCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        DurationCategory::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| ValidationError::InvalidDuration(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            "prefer-not-to-say" => Ok(Gender::PreferNotToSay),
            _ => Err(ValidationError::InvalidGender(s.to_string())),
        }
    }
}

/// Answers to the two optional follow-up questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraAnswers {
    /// "Have you experienced these symptoms before?"
    pub previous_episodes: String,
    /// "Are you currently taking any medications or have any allergies?"
    pub medications_and_allergies: String,
}

/// A fully formed symptom submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub age: u8,
    pub gender: Gender,
    /// Symptoms in the order the user selected them.
    pub symptoms: Vec<String>,
    pub severity: Severity,
    pub duration: DurationCategory,
    #[serde(default)]
    pub additional_info: String,
    #[serde(default)]
    pub answered_extra_questions: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_answers: Option<ExtraAnswers>,
}

impl Submission {
    /// Check the structural invariants, stopping at the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }

        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ValidationError::InvalidAge(self.age.to_string()));
        }

        if self.symptoms.is_empty() {
            return Err(ValidationError::NoSymptoms);
        }

        if let Some(index) = self.symptoms.iter().position(|s| s.trim().is_empty()) {
            return Err(ValidationError::BlankSymptom(index));
        }

        if self.answered_extra_questions {
            match &self.extra_answers {
                None => return Err(ValidationError::MissingExtraAnswer("extraQuestion1")),
                Some(answers) => {
                    if answers.previous_episodes.trim().is_empty() {
                        return Err(ValidationError::MissingExtraAnswer("extraQuestion1"));
                    }
                    if answers.medications_and_allergies.trim().is_empty() {
                        return Err(ValidationError::MissingExtraAnswer("extraQuestion2"));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_submission() -> Submission {
        Submission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            age: 34,
            gender: Gender::Female,
            symptoms: vec!["Headache".to_string()],
            severity: Severity::Mild,
            duration: DurationCategory::OneToSixHours,
            additional_info: String::new(),
            answered_extra_questions: false,
            extra_answers: None,
        }
    }

    #[test]
    fn test_severity_is_totally_ordered() {
        assert!(Severity::Mild < Severity::Moderate);
        assert!(Severity::Moderate < Severity::Severe);
        assert!(Severity::Severe < Severity::Critical);
        assert_eq!(Severity::ALL.iter().max(), Some(&Severity::Critical));
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("Critical".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!(" mild ".parse::<Severity>().unwrap(), Severity::Mild);
        assert!(matches!(
            "extreme".parse::<Severity>(),
            Err(ValidationError::InvalidSeverity(_))
        ));
    }

    #[test]
    fn test_duration_wire_names() {
        let json = serde_json::to_string(&DurationCategory::OneToSixHours).unwrap();
        assert_eq!(json, "\"1-6-hours\"");
        assert_eq!(
            "more-than-3-days".parse::<DurationCategory>().unwrap(),
            DurationCategory::MoreThanThreeDays
        );
        assert!("forever".parse::<DurationCategory>().is_err());
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("prefer-not-to-say".parse::<Gender>().unwrap(), Gender::PreferNotToSay);
        assert!(matches!(
            "robot".parse::<Gender>(),
            Err(ValidationError::InvalidGender(_))
        ));
    }

    #[test]
    fn test_validate_ok() {
        assert!(make_submission().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_symptoms() {
        let mut submission = make_submission();
        submission.symptoms.clear();
        assert_eq!(submission.validate(), Err(ValidationError::NoSymptoms));
    }

    #[test]
    fn test_validate_rejects_blank_symptom() {
        let mut submission = make_submission();
        submission.symptoms.push("   ".to_string());
        assert_eq!(submission.validate(), Err(ValidationError::BlankSymptom(1)));
    }

    #[test]
    fn test_validate_rejects_age_out_of_range() {
        let mut submission = make_submission();
        submission.age = 0;
        assert!(matches!(
            submission.validate(),
            Err(ValidationError::InvalidAge(_))
        ));
        submission.age = 121;
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_validate_requires_extra_answers_when_flagged() {
        let mut submission = make_submission();
        submission.answered_extra_questions = true;
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingExtraAnswer("extraQuestion1"))
        );

        submission.extra_answers = Some(ExtraAnswers {
            previous_episodes: "Once last year".to_string(),
            medications_and_allergies: " ".to_string(),
        });
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingExtraAnswer("extraQuestion2"))
        );
    }

    #[test]
    fn test_submission_serialization_uses_camel_case() {
        let json = serde_json::to_value(make_submission()).unwrap();
        assert_eq!(json["answeredExtraQuestions"], false);
        assert_eq!(json["severity"], "mild");
        assert_eq!(json["duration"], "1-6-hours");
        assert!(json.get("extraAnswers").is_none());
    }
}
