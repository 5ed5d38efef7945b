use std::path::Path;

use tracing::info;

use super::{CatalogError, SolutionCatalog};
use crate::config::Config;

/// Load a catalog snapshot from a TOML file.
pub fn load_catalog(path: &Path) -> Result<SolutionCatalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound(path.display().to_string()));
    }

    let contents = std::fs::read_to_string(path)?;
    let catalog = SolutionCatalog::from_toml_str(&contents)?;
    info!(
        "Loaded {} solutions from {:?} (fingerprint {})",
        catalog.len(),
        path,
        &catalog.fingerprint()[..16]
    );
    Ok(catalog)
}

/// Resolve the catalog a configuration points at.
///
/// Falls back to the built-in seed catalog when no path is configured.
pub fn load_catalog_for(config: &Config) -> Result<SolutionCatalog, CatalogError> {
    match &config.catalog.path {
        Some(path) => load_catalog(path),
        None => {
            info!("No catalog path configured, using built-in seed catalog");
            Ok(SolutionCatalog::builtin())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog_file_not_found() {
        let result = load_catalog(Path::new("/nonexistent/solutions.toml"));
        assert!(matches!(result, Err(CatalogError::FileNotFound(_))));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[[solution]]
name = "Sprain Care"
category = "Injury"
severity = "mild"
keywords = ["sprain", "twisted ankle"]
treatment = "Rest, ice, compression and elevation."
"#
        )
        .unwrap();

        let catalog = load_catalog(temp_file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Sprain Care").unwrap().medicine.is_empty());
    }

    #[test]
    fn test_load_catalog_for_defaults_to_builtin() {
        let config = Config::default();
        let catalog = load_catalog_for(&config).unwrap();
        assert_eq!(catalog.len(), SolutionCatalog::builtin().len());
    }

    #[test]
    fn test_load_catalog_for_uses_configured_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            "[[solution]]\nname = \"Nosebleed\"\ncategory = \"First Aid\"\nseverity = \"mild\"\nkeywords = [\"nosebleed\"]\ntreatment = \"Lean forward and pinch the nose.\""
        )
        .unwrap();

        let mut config = Config::default();
        config.catalog.path = Some(temp_file.path().to_path_buf());
        let catalog = load_catalog_for(&config).unwrap();
        assert!(catalog.get("Nosebleed").is_some());
    }
}
