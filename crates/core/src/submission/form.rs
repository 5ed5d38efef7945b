//! Raw intake payload and its conversion into a [`Submission`].

use serde::{Deserialize, Serialize};

use super::types::{DurationCategory, ExtraAnswers, Gender, Severity, Submission, MAX_AGE, MIN_AGE};
use super::{ValidationError, ValidationErrors};

/// Form state as produced by the intake subsystem.
///
/// Every field may be missing or malformed; nothing here is trusted until it
/// has been converted with `Submission::try_from`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub symptoms: Vec<String>,
    pub severity: Option<String>,
    pub duration: Option<String>,
    pub additional_info: Option<String>,
    pub answer_extra_questions: bool,
    pub extra_question1: Option<String>,
    pub extra_question2: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_age(raw: &str) -> Result<u8, ValidationError> {
    raw.parse::<u8>()
        .ok()
        .filter(|age| (MIN_AGE..=MAX_AGE).contains(age))
        .ok_or_else(|| ValidationError::InvalidAge(raw.to_string()))
}

/// Trim symptoms and drop exact duplicates, keeping first-seen order.
fn collect_symptoms(raw: &[String], errors: &mut Vec<ValidationError>) -> Vec<String> {
    let mut symptoms: Vec<String> = Vec::with_capacity(raw.len());
    for (index, symptom) in raw.iter().enumerate() {
        let trimmed = symptom.trim();
        if trimmed.is_empty() {
            errors.push(ValidationError::BlankSymptom(index));
            continue;
        }
        if !symptoms.iter().any(|s| s == trimmed) {
            symptoms.push(trimmed.to_string());
        }
    }
    if raw.is_empty() {
        errors.push(ValidationError::NoSymptoms);
    }
    symptoms
}

impl TryFrom<SubmissionForm> for Submission {
    type Error = ValidationErrors;

    fn try_from(form: SubmissionForm) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let name = non_blank(&form.name).map(str::to_string);
        if name.is_none() {
            errors.push(ValidationError::MissingField("name"));
        }

        let age = match non_blank(&form.age) {
            None => {
                errors.push(ValidationError::MissingField("age"));
                None
            }
            Some(raw) => parse_age(raw).map_err(|e| errors.push(e)).ok(),
        };

        let gender = match non_blank(&form.gender) {
            None => {
                errors.push(ValidationError::MissingField("gender"));
                None
            }
            Some(raw) => raw.parse::<Gender>().map_err(|e| errors.push(e)).ok(),
        };

        let symptoms = collect_symptoms(&form.symptoms, &mut errors);

        let severity = match non_blank(&form.severity) {
            None => {
                errors.push(ValidationError::MissingField("severity"));
                None
            }
            Some(raw) => raw.parse::<Severity>().map_err(|e| errors.push(e)).ok(),
        };

        let duration = match non_blank(&form.duration) {
            None => {
                errors.push(ValidationError::MissingField("duration"));
                None
            }
            Some(raw) => raw.parse::<DurationCategory>().map_err(|e| errors.push(e)).ok(),
        };

        let extra_answers = if form.answer_extra_questions {
            let first = non_blank(&form.extra_question1);
            let second = non_blank(&form.extra_question2);
            if first.is_none() {
                errors.push(ValidationError::MissingExtraAnswer("extraQuestion1"));
            }
            if second.is_none() {
                errors.push(ValidationError::MissingExtraAnswer("extraQuestion2"));
            }
            first.zip(second).map(|(a, b)| ExtraAnswers {
                previous_episodes: a.to_string(),
                medications_and_allergies: b.to_string(),
            })
        } else {
            None
        };

        match (name, age, gender, severity, duration) {
            (Some(name), Some(age), Some(gender), Some(severity), Some(duration))
                if errors.is_empty() =>
            {
                Ok(Submission {
                    name,
                    email: form.email.map(|e| e.trim().to_string()).unwrap_or_default(),
                    age,
                    gender,
                    symptoms,
                    severity,
                    duration,
                    additional_info: form
                        .additional_info
                        .map(|i| i.trim().to_string())
                        .unwrap_or_default(),
                    answered_extra_questions: form.answer_extra_questions,
                    extra_answers,
                })
            }
            _ => Err(ValidationErrors(errors)),
        }
    }
}
