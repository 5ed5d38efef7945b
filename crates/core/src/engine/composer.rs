//! Result composition: the single exit point of a triage run.

use crate::catalog::Solution;
use crate::engine::types::{Assessment, ResultKind, TriageResult};

pub const EMERGENCY_TITLE: &str = "Seek Immediate Medical Attention";
pub const EMERGENCY_DESCRIPTION: &str =
    "Based on your symptoms, you should consult a doctor or visit an emergency room immediately.";
const EMERGENCY_INSTRUCTIONS: [&str; 4] = [
    "Call emergency services (911) if symptoms are severe",
    "Go to the nearest emergency room",
    "Do not drive yourself - have someone else drive or call an ambulance",
    "Bring a list of your current medications",
];

pub const CONSULT_TITLE: &str = "Please Consult a Doctor";
pub const CONSULT_DESCRIPTION: &str = "We could not find a strong match for your symptoms. It's best to consult with a healthcare professional.";
const CONSULT_INSTRUCTIONS: [&str; 4] = [
    "Schedule an appointment with your primary care physician",
    "Prepare a list of all your symptoms and their duration",
    "Bring any relevant medical history",
    "Consider visiting an urgent care center if symptoms worsen",
];

pub const ADVICE_DESCRIPTION: &str =
    "Based on your symptoms, here are the recommended first-aid steps:";

fn to_owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

impl TriageResult {
    pub(crate) fn emergency() -> Self {
        Self {
            kind: ResultKind::Emergency,
            title: EMERGENCY_TITLE.to_string(),
            description: EMERGENCY_DESCRIPTION.to_string(),
            instructions: to_owned_lines(&EMERGENCY_INSTRUCTIONS),
            medicine: Vec::new(),
            accuracy: None,
            matched_solution: None,
            overridden: false,
        }
    }

    pub(crate) fn consult(accuracy: f64) -> Self {
        Self {
            kind: ResultKind::Consult,
            title: CONSULT_TITLE.to_string(),
            description: CONSULT_DESCRIPTION.to_string(),
            instructions: to_owned_lines(&CONSULT_INSTRUCTIONS),
            medicine: Vec::new(),
            accuracy: Some(accuracy),
            matched_solution: None,
            overridden: false,
        }
    }

    pub(crate) fn advice(solution: &Solution, accuracy: f64) -> Self {
        Self {
            kind: ResultKind::Advice,
            title: solution.name.clone(),
            description: ADVICE_DESCRIPTION.to_string(),
            instructions: vec![solution.treatment.clone()],
            medicine: solution.medicine.clone(),
            accuracy: Some(accuracy),
            matched_solution: Some(solution.name.clone()),
            overridden: false,
        }
    }
}

/// Turns an [`Assessment`] into the final [`TriageResult`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultComposer;

impl ResultComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, assessment: Assessment<'_>) -> TriageResult {
        match assessment {
            Assessment::Escalated(emergency) => emergency,
            Assessment::Evaluated { matched, accuracy } => match matched.solution {
                Some(solution) if accuracy.accuracy >= accuracy.threshold => {
                    TriageResult::advice(solution, accuracy.accuracy)
                }
                _ => TriageResult::consult(accuracy.accuracy),
            },
        }
    }
}
