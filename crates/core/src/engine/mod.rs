//! Triage engine - decides between emergency, consult and first-aid advice.
//!
//! # Architecture
//!
//! ```text
//! Submission
//!     │
//!     ▼
//! ┌──────────────────────┐  fires   ┌──────────────────┐
//! │ EscalationClassifier │ ───────▶ │                  │
//! └──────────────────────┘          │                  │
//!     │ no rule fired               │  ResultComposer  │ ──▶ TriageResult
//!     ▼                             │                  │
//! ┌──────────────────────┐          │                  │
//! │ KeywordMatcher       │ ───────▶ │                  │
//! │ AccuracyEstimator  ◀─┼─ ConfidenceSource           │
//! └──────────────────────┘          └──────────────────┘
//! ```
//!
//! The engine is a pure function of the submission, the catalog snapshot and
//! the confidence source. Nothing is stored between calls.
//!
//! # Example
//!
//! ```ignore
//! use firstaid_triage_core::{classify, SeededConfidenceSource, SolutionCatalog};
//!
//! let catalog = SolutionCatalog::builtin();
//! let mut source = SeededConfidenceSource::new(42);
//! let result = classify(&submission, &catalog, &mut source)?;
//! match result.kind() {
//!     ResultKind::Emergency => { /* show the emergency banner */ }
//!     ResultKind::Consult => { /* suggest a doctor */ }
//!     ResultKind::Advice => { /* render result.instructions() */ }
//! }
//! ```

mod accuracy;
mod classifier;
mod composer;
mod confidence;
mod escalation;
mod keyword_matcher;
mod traits;
mod types;

pub use accuracy::AccuracyEstimator;
pub use classifier::{classify, TriageEngine};
pub use composer::{
    ResultComposer, ADVICE_DESCRIPTION, CONSULT_DESCRIPTION, CONSULT_TITLE, EMERGENCY_DESCRIPTION,
    EMERGENCY_TITLE,
};
pub use confidence::{FixedConfidenceSource, SeededConfidenceSource, DEFAULT_SPREAD, MAX_SPREAD};
pub use escalation::{EscalationClassifier, EscalationTrigger};
pub use keyword_matcher::KeywordMatcher;
pub use traits::{ConfidenceSource, ResultIntegrityError, TriageError};
pub use types::{
    AccuracyOutcome, Assessment, MatchOutcome, ResultKind, ResultOverride, TriageResult,
};
