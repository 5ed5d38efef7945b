use super::{
    types::{Config, EngineConfig},
    ConfigError,
};

/// Validate configuration
/// Currently validates:
/// - At least one non-blank critical phrase
/// - Accuracy bounds are finite percentages and ordered
/// - Both base accuracies sit inside the bounds
/// - Variance is finite, non-negative and no wider than the accuracy band
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    validate_engine_config(&config.engine)
}

/// Validate the `[engine]` section on its own.
pub fn validate_engine_config(engine: &EngineConfig) -> Result<(), ConfigError> {

    if engine.critical_phrases.iter().all(|p| p.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "engine.critical_phrases must contain at least one phrase".to_string(),
        ));
    }

    let values = [
        engine.base_accuracy,
        engine.extra_questions_accuracy,
        engine.min_accuracy,
        engine.max_accuracy,
        engine.variance,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ConfigError::ValidationError(
            "engine accuracy settings must be finite numbers".to_string(),
        ));
    }

    if engine.min_accuracy < 0.0 || engine.max_accuracy > 100.0 {
        return Err(ConfigError::ValidationError(format!(
            "engine accuracy bounds [{}, {}] must lie within [0, 100]",
            engine.min_accuracy, engine.max_accuracy
        )));
    }

    if engine.min_accuracy > engine.max_accuracy {
        return Err(ConfigError::ValidationError(format!(
            "engine.min_accuracy ({}) cannot exceed engine.max_accuracy ({})",
            engine.min_accuracy, engine.max_accuracy
        )));
    }

    for (key, base) in [
        ("base_accuracy", engine.base_accuracy),
        ("extra_questions_accuracy", engine.extra_questions_accuracy),
    ] {
        if base < engine.min_accuracy || base > engine.max_accuracy {
            return Err(ConfigError::ValidationError(format!(
                "engine.{} ({}) must lie within [{}, {}]",
                key, base, engine.min_accuracy, engine.max_accuracy
            )));
        }
    }

    if engine.variance < 0.0 {
        return Err(ConfigError::ValidationError(
            "engine.variance cannot be negative".to_string(),
        ));
    }

    let band = engine.max_accuracy - engine.min_accuracy;
    if engine.variance > band {
        return Err(ConfigError::ValidationError(format!(
            "engine.variance ({}) cannot exceed the accuracy band width ({})",
            engine.variance, band
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_phrases_fails() {
        let mut config = Config::default();
        config.engine.critical_phrases = vec!["  ".to_string()];
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_inverted_bounds_fails() {
        let config = Config {
            engine: EngineConfig {
                min_accuracy: 96.0,
                max_accuracy: 80.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_bounds_must_be_percentages() {
        let mut config = Config::default();
        config.engine.max_accuracy = 120.0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("[0, 100]"));
    }

    #[test]
    fn test_validate_base_outside_bounds_fails() {
        let mut config = Config::default();
        config.engine.extra_questions_accuracy = 99.0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("extra_questions_accuracy"));
    }

    #[test]
    fn test_validate_negative_or_nan_variance_fails() {
        let mut config = Config::default();
        config.engine.variance = -1.0;
        assert!(validate_config(&config).is_err());

        config.engine.variance = f64::NAN;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_variance_wider_than_band_fails() {
        let mut config = load_config_from_str("[engine]\nvariance = 1e308").unwrap();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("band width"));

        config.engine.variance = 15.0;
        assert!(validate_config(&config).is_ok());
        config.engine.variance = 15.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_engine_config_alone() {
        assert!(validate_engine_config(&EngineConfig::default()).is_ok());

        let engine = EngineConfig {
            base_accuracy: 70.0,
            ..EngineConfig::default()
        };
        assert!(validate_engine_config(&engine).is_err());
    }
}
