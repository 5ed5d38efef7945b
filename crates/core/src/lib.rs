pub mod catalog;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod record;
pub mod submission;
pub mod testing;

pub use catalog::{
    load_catalog, load_catalog_for, CatalogError, CatalogSnapshot, MedicineEntry, Solution,
    SolutionCatalog,
};
pub use config::{
    load_config, load_config_from_str, validate_config, validate_engine_config, CatalogConfig,
    Config, ConfigError, EngineConfig,
};
pub use engine::{
    classify, AccuracyEstimator, AccuracyOutcome, Assessment, ConfidenceSource,
    EscalationClassifier, EscalationTrigger, FixedConfidenceSource, KeywordMatcher, MatchOutcome,
    ResultComposer, ResultIntegrityError, ResultKind, ResultOverride, SeededConfidenceSource,
    TriageEngine, TriageError, TriageResult,
};
pub use record::{sort_by_date, sort_by_severity, TriageRecord, TriageSummary};
pub use submission::{
    DurationCategory, ExtraAnswers, Gender, Severity, Submission, SubmissionForm, ValidationError,
    ValidationErrors,
};
