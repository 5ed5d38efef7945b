use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::CatalogError;
use crate::submission::Severity;

/// A single recommended medicine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedicineEntry {
    pub name: String,
    pub dose: String,
    pub duration: String,
}

impl MedicineEntry {
    pub fn new(name: impl Into<String>, dose: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dose: dose.into(),
            duration: duration.into(),
        }
    }
}

/// A curated catalog entry mapping keywords to treatment guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub name: String,
    pub category: String,
    /// Severity the curators associate with this solution.
    pub severity: Severity,
    /// Matching keywords, compared case-insensitively.
    pub keywords: Vec<String>,
    /// Human-readable treatment instructions.
    pub treatment: String,
    #[serde(default)]
    pub medicine: Vec<MedicineEntry>,
}

impl Solution {
    /// Trim the name and keywords and drop blank or case-insensitively repeated keywords.
    fn normalized(mut self) -> Result<Self, CatalogError> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(CatalogError::BlankName);
        }

        let mut seen: Vec<String> = Vec::with_capacity(self.keywords.len());
        let mut keywords = Vec::with_capacity(self.keywords.len());
        for keyword in self.keywords {
            let trimmed = keyword.trim();
            let lowered = trimmed.to_lowercase();
            if trimmed.is_empty() || seen.contains(&lowered) {
                continue;
            }
            seen.push(lowered);
            keywords.push(trimmed.to_string());
        }

        if keywords.is_empty() {
            return Err(CatalogError::NoKeywords(self.name));
        }
        self.keywords = keywords;
        Ok(self)
    }
}

/// TOML/JSON shape of a catalog snapshot file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default, rename = "solution")]
    pub solutions: Vec<Solution>,
}

/// Immutable, validated set of solutions.
///
/// Insertion order is kept for display. Matching walks [`SolutionCatalog::iter_by_name`]
/// so the outcome never depends on how curators ordered the entries.
#[derive(Debug, Clone, Default)]
pub struct SolutionCatalog {
    solutions: Vec<Solution>,
    by_name: Vec<usize>,
}

impl SolutionCatalog {
    pub fn new(solutions: Vec<Solution>) -> Result<Self, CatalogError> {
        let solutions = solutions
            .into_iter()
            .map(Solution::normalized)
            .collect::<Result<Vec<_>, _>>()?;

        let mut by_name: Vec<usize> = (0..solutions.len()).collect();
        by_name.sort_by(|&a, &b| solutions[a].name.cmp(&solutions[b].name));

        if let Some(pair) = by_name
            .windows(2)
            .find(|pair| solutions[pair[0]].name == solutions[pair[1]].name)
        {
            return Err(CatalogError::DuplicateName(solutions[pair[0]].name.clone()));
        }

        Ok(Self { solutions, by_name })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a snapshot from TOML (`[[solution]]` tables).
    pub fn from_toml_str(toml_str: &str) -> Result<Self, CatalogError> {
        let snapshot: CatalogSnapshot =
            toml::from_str(toml_str).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Self::new(snapshot.solutions)
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Solutions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Solution> {
        self.solutions.iter()
    }

    /// Solutions ordered lexicographically by name.
    pub fn iter_by_name(&self) -> impl Iterator<Item = &Solution> {
        self.by_name.iter().map(move |&i| &self.solutions[i])
    }

    pub fn get(&self, name: &str) -> Option<&Solution> {
        self.by_name
            .binary_search_by(|&i| self.solutions[i].name.as_str().cmp(name))
            .ok()
            .map(|pos| &self.solutions[self.by_name[pos]])
    }

    /// Case-insensitive search over name, category and keywords.
    ///
    /// A blank term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Solution> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.solutions.iter().collect();
        }
        self.solutions
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&term)
                    || s.category.to_lowercase().contains(&term)
                    || s.keywords.iter().any(|k| k.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for solution in &self.solutions {
            if !categories.contains(&solution.category.as_str()) {
                categories.push(solution.category.as_str());
            }
        }
        categories
    }

    /// SHA-256 of the snapshot in name order, hex encoded.
    ///
    /// Identifies which catalog version produced a stored result.
    pub fn fingerprint(&self) -> String {
        let ordered: Vec<&Solution> = self.iter_by_name().collect();
        let json = serde_json::to_string(&ordered).unwrap_or_default();
        format!("{:x}", Sha256::digest(json.as_bytes()))
    }

    pub fn to_snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            solutions: self.solutions.clone(),
        }
    }
}
