//! Application Configuration
//!
//! Evaluation settings stored in TOML format: engine invocation options and
//! the list of image/reference pairs to score.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// OCR engine settings
    pub engine: EngineConfig,
    /// Image/reference pairs to evaluate
    pub cases: Vec<CaseConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            cases: vec![
                CaseConfig::new(
                    "meme",
                    "ocr_items/test_image.jpeg",
                    "ocr_items/test_image.txt",
                    "results/result_test_image.txt",
                ),
                CaseConfig::new(
                    "OCR 1",
                    "ocr_items/test_ocr_1.jpg",
                    "ocr_items/test_ocr_trad_1.txt",
                    "results/result_test_ocr_1.txt",
                ),
                CaseConfig::new(
                    "OCR 2",
                    "ocr_items/test_ocr_2.jpg",
                    "ocr_items/test_ocr_trad_2.txt",
                    "results/result_test_ocr_2.txt",
                ),
            ],
        }
    }
}

/// OCR engine invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tesseract binary name or full path
    pub binary: String,
    /// Language set passed to the engine (e.g. "eng+fra")
    pub languages: String,
    /// Override for the tessdata directory
    pub tessdata_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary: "tesseract".to_string(),
            languages: "eng+fra".to_string(),
            tessdata_dir: None,
        }
    }
}

/// One image/reference pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseConfig {
    /// Display label used in the report
    pub label: String,
    /// Image to run the engine on
    pub image: PathBuf,
    /// Reference transcription file
    pub reference: PathBuf,
    /// Where the extracted text is written
    pub result: PathBuf,
}

impl CaseConfig {
    /// Convenience constructor for the built-in defaults and tests.
    pub fn new(
        label: impl Into<String>,
        image: impl Into<PathBuf>,
        reference: impl Into<PathBuf>,
        result: impl Into<PathBuf>,
    ) -> Self {
        Self {
            label: label.into(),
            image: image.into(),
            reference: reference.into(),
            result: result.into(),
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();

        // Check engine defaults
        assert_eq!(config.engine.binary, "tesseract");
        assert_eq!(config.engine.languages, "eng+fra");
        assert!(config.engine.tessdata_dir.is_none());

        // Check the built-in case list
        assert_eq!(config.cases.len(), 3);
        assert_eq!(config.cases[0].label, "meme");
        assert_eq!(config.cases[1].label, "OCR 1");
        assert_eq!(config.cases[2].label, "OCR 2");
        assert_eq!(
            config.cases[0].image,
            PathBuf::from("ocr_items/test_image.jpeg")
        );
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = AppConfig::default();

        // Serialize to TOML
        let toml_str = toml::to_string_pretty(&config).unwrap();

        // Deserialize back
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        // Verify values match
        assert_eq!(config.engine.binary, parsed.engine.binary);
        assert_eq!(config.engine.languages, parsed.engine.languages);
        assert_eq!(config.cases.len(), parsed.cases.len());
        assert_eq!(config.cases[0].reference, parsed.cases[0].reference);
    }

    #[test]
    fn test_config_with_custom_values() {
        let mut config = AppConfig::default();
        config.engine.languages = "eng".to_string();
        config.engine.tessdata_dir = Some(PathBuf::from("/usr/share/tessdata"));
        config.cases.truncate(1);

        // Serialize and deserialize
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.engine.languages, "eng");
        assert_eq!(
            parsed.engine.tessdata_dir,
            Some(PathBuf::from("/usr/share/tessdata"))
        );
        assert_eq!(parsed.cases.len(), 1);
    }

    #[test]
    fn test_save_and_load_config() {
        let config = AppConfig::default();

        // Create a temporary file
        let temp_file = NamedTempFile::new().unwrap();

        // Save config
        save_config(&config, temp_file.path()).unwrap();

        // Load config
        let loaded = load_config(temp_file.path()).unwrap();

        // Verify
        assert_eq!(config.engine.binary, loaded.engine.binary);
        assert_eq!(config.cases.len(), loaded.cases.len());
        assert_eq!(config.cases[2].result, loaded.cases[2].result);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "this is not valid toml {{{{").unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
    }
}
