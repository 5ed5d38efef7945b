//! Confidence sources: where the accuracy variance comes from.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::EngineConfig;
use crate::engine::traits::ConfidenceSource;

/// Default half-width of the variance band.
pub const DEFAULT_SPREAD: f64 = 5.0;

/// Widest accepted half-width. Accuracy is a percentage, so anything wider
/// only pins results to the bounds.
pub const MAX_SPREAD: f64 = 100.0;

/// Pseudorandom variance drawn uniformly from `[-spread, +spread]`.
///
/// Two sources built from the same seed yield the same sequence.
#[derive(Debug, Clone)]
pub struct SeededConfidenceSource {
    rng: ChaCha8Rng,
    spread: f64,
    seed: Option<u64>,
}

impl SeededConfidenceSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            spread: DEFAULT_SPREAD,
            seed: Some(seed),
        }
    }

    /// Non-reproducible source seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            spread: DEFAULT_SPREAD,
            seed: None,
        }
    }

    /// Seeded source using the configured variance, capped at the width of
    /// the accuracy band.
    pub fn from_config(seed: u64, config: &EngineConfig) -> Self {
        let band = (config.max_accuracy - config.min_accuracy).max(0.0);
        Self::new(seed).with_spread(config.variance.min(band))
    }

    /// Override the band half-width.
    ///
    /// Negative values are mirrored, non-finite ones disable variance and
    /// anything above [`MAX_SPREAD`] is capped.
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = if spread.is_finite() {
            spread.abs().min(MAX_SPREAD)
        } else {
            0.0
        };
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn spread(&self) -> f64 {
        self.spread
    }
}

impl ConfidenceSource for SeededConfidenceSource {
    fn name(&self) -> &str {
        "seeded"
    }

    fn next_variance(&mut self) -> f64 {
        if self.spread == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-self.spread..=self.spread)
    }
}

/// Always returns the same variance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedConfidenceSource {
    variance: f64,
}

impl FixedConfidenceSource {
    pub fn new(variance: f64) -> Self {
        Self { variance }
    }

    /// No variance: accuracy equals the base accuracy.
    pub fn neutral() -> Self {
        Self::new(0.0)
    }
}

impl ConfidenceSource for FixedConfidenceSource {
    fn name(&self) -> &str {
        "fixed"
    }

    fn next_variance(&mut self) -> f64 {
        self.variance
    }
}
