//! Keyword matcher: ranks catalog solutions against submitted symptoms.

use tracing::debug;

use crate::catalog::{Solution, SolutionCatalog};
use crate::engine::types::MatchOutcome;
use crate::submission::Submission;

/// Symmetric containment scorer.
///
/// A keyword counts once when it contains, or is contained in, any symptom
/// (case-insensitive). Symptom text may be more or less specific than the
/// curated keyword, so both directions are checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordMatcher;

impl KeywordMatcher {
    pub fn new() -> Self {
        Self
    }

    fn lowered_symptoms(submission: &Submission) -> Vec<String> {
        submission
            .symptoms
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Score one solution against pre-lowered symptoms.
    pub fn score(solution: &Solution, lowered_symptoms: &[String]) -> u32 {
        solution
            .keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|keyword| {
                lowered_symptoms.iter().any(|symptom| {
                    symptom.contains(keyword.as_str()) || keyword.contains(symptom.as_str())
                })
            })
            .count() as u32
    }

    /// Every solution with its score, in name order.
    pub fn score_all<'a>(
        &self,
        submission: &Submission,
        catalog: &'a SolutionCatalog,
    ) -> Vec<(&'a Solution, u32)> {
        let symptoms = Self::lowered_symptoms(submission);
        catalog
            .iter_by_name()
            .map(|solution| (solution, Self::score(solution, &symptoms)))
            .collect()
    }

    /// Highest scoring solution.
    ///
    /// Ties go to the name that sorts first. A best score of zero, or an
    /// empty catalog, yields no solution.
    pub fn best_match<'a>(
        &self,
        submission: &Submission,
        catalog: &'a SolutionCatalog,
    ) -> MatchOutcome<'a> {
        let mut best = MatchOutcome::none();
        for (solution, score) in self.score_all(submission, catalog) {
            // Strictly greater keeps the earliest name on ties.
            if score > best.score {
                best = MatchOutcome {
                    solution: Some(solution),
                    score,
                };
            }
        }

        match best.solution {
            Some(solution) => debug!("Best match {:?} with score {}", solution.name, best.score),
            None => debug!("No catalog solution overlaps the submitted symptoms"),
        }
        best
    }
}
