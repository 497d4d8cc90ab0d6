//! Extractor configuration loading.

use crate::error::{CliError, Result};
use kfz_extractor::ExtractorConfig;
use std::fs;
use std::path::Path;

/// Load the extractor configuration, or the defaults when no file is given.
pub fn load_extractor_config(path: Option<&Path>) -> Result<ExtractorConfig> {
    let Some(path) = path else {
        return Ok(ExtractorConfig::default());
    };

    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = ExtractorConfig::from_toml(&contents).map_err(CliError::Config)?;
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let config = load_extractor_config(None).unwrap();
        assert_eq!(config, ExtractorConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "brand_weight = 0.4").unwrap();

        let config = load_extractor_config(Some(file.path())).unwrap();
        assert_eq!(config.brand_weight, 0.4);
        assert_eq!(config.base_confidence, 0.5);
    }

    #[test]
    fn test_missing_file() {
        let result = load_extractor_config(Some(Path::new("/nonexistent/kfz.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "base_confidence = 3.0").unwrap();

        let result = load_extractor_config(Some(file.path()));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
