//! Prometheus metrics for the triage engine.
//!
//! Collectors are process-wide; register them with [`all_metrics`].

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

/// Classifications total by outcome.
pub static CLASSIFICATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "triage_classifications_total",
            "Total triage classifications",
        ),
        &["outcome"], // "advice", "consult", "emergency"
    )
    .unwrap()
});

/// Escalations total by trigger.
pub static ESCALATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("triage_escalations_total", "Total emergency escalations"),
        &["trigger"], // "severity", "phrase"
    )
    .unwrap()
});

/// Submissions rejected as structurally invalid.
pub static VALIDATION_FAILURES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "triage_validation_failures_total",
        "Total submissions rejected by validation",
    )
    .unwrap()
});

/// Estimated accuracy by outcome.
pub static ACCURACY_ESTIMATES: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "triage_accuracy",
            "Distribution of estimated accuracy for non-emergency results",
        )
        .buckets(vec![80.0, 82.5, 85.0, 87.5, 90.0, 92.5, 95.0]),
        &["outcome"],
    )
    .unwrap()
});

/// Best keyword match score per evaluated submission.
pub static MATCH_SCORES: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "triage_match_score",
            "Keyword overlap of the best catalog match",
        )
        .buckets(vec![0.0, 1.0, 2.0, 3.0, 5.0, 8.0]),
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CLASSIFICATIONS.clone()),
        Box::new(ESCALATIONS.clone()),
        Box::new(VALIDATION_FAILURES.clone()),
        Box::new(ACCURACY_ESTIMATES.clone()),
        Box::new(MATCH_SCORES.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Registry;

    #[test]
    fn test_all_metrics_register() {
        let registry = Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }
        CLASSIFICATIONS.with_label_values(&["advice"]).inc();
        let families = registry.gather();
        assert!(families
            .iter()
            .any(|f| f.get_name() == "triage_classifications_total"));
    }
}
