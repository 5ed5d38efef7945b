//! Mock confidence source for testing.

use crate::engine::ConfidenceSource;

/// Confidence source that replays a fixed script of variances.
///
/// Provides controllable behavior for testing:
/// - Return a scripted sequence of variances, cycling when exhausted
/// - Count how many variances were drawn, to assert short-circuiting
///
/// # Example
///
/// ```rust,ignore
/// use firstaid_triage_core::testing::ScriptedConfidenceSource;
///
/// let mut source = ScriptedConfidenceSource::new(vec![3.0, -2.0]);
/// engine.classify(&submission, &catalog, &mut source)?;
/// assert_eq!(source.calls(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedConfidenceSource {
    script: Vec<f64>,
    calls: usize,
}

impl ScriptedConfidenceSource {
    pub fn new(script: Vec<f64>) -> Self {
        Self { script, calls: 0 }
    }

    /// Source whose single variance puts accuracy at `target` for the given base.
    pub fn targeting(target: f64, base: f64) -> Self {
        Self::new(vec![target - base])
    }

    /// Number of variances drawn so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl ConfidenceSource for ScriptedConfidenceSource {
    fn name(&self) -> &str {
        "scripted"
    }

    fn next_variance(&mut self) -> f64 {
        let variance = if self.script.is_empty() {
            0.0
        } else {
            self.script[self.calls % self.script.len()]
        };
        self.calls += 1;
        variance
    }
}
