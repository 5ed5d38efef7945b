use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Triage policy: escalation phrases and the accuracy model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Phrases that force an emergency result when found in any symptom.
    #[serde(default = "default_critical_phrases")]
    pub critical_phrases: Vec<String>,
    /// Base accuracy (and advice threshold) without the extra questions.
    #[serde(default = "default_base_accuracy")]
    pub base_accuracy: f64,
    /// Base accuracy (and advice threshold) when the extra questions were answered.
    #[serde(default = "default_extra_questions_accuracy")]
    pub extra_questions_accuracy: f64,
    #[serde(default = "default_min_accuracy")]
    pub min_accuracy: f64,
    #[serde(default = "default_max_accuracy")]
    pub max_accuracy: f64,
    /// Half-width of the uniform variance band, in accuracy points.
    #[serde(default = "default_variance")]
    pub variance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            critical_phrases: default_critical_phrases(),
            base_accuracy: default_base_accuracy(),
            extra_questions_accuracy: default_extra_questions_accuracy(),
            min_accuracy: default_min_accuracy(),
            max_accuracy: default_max_accuracy(),
            variance: default_variance(),
        }
    }
}

fn default_critical_phrases() -> Vec<String> {
    ["chest pain", "shortness of breath", "severe allergic reaction"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_base_accuracy() -> f64 {
    85.0
}

fn default_extra_questions_accuracy() -> f64 {
    90.0
}

fn default_min_accuracy() -> f64 {
    80.0
}

fn default_max_accuracy() -> f64 {
    95.0
}

fn default_variance() -> f64 {
    5.0
}

/// Where the solution catalog snapshot comes from.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// TOML snapshot file. The built-in seed catalog is used when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,
}
