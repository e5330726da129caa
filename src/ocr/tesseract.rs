//! Tesseract CLI backend
//!
//! Invokes the `tesseract` binary with `stdout` as the output target and
//! captures the extracted text. The image is decoded locally first so that
//! an unreadable input surfaces as a decode failure instead of a cryptic
//! engine diagnostic.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use super::{OcrError, TextRecognizer};
use crate::config::EngineConfig;

/// Settings for a Tesseract CLI invocation.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: PathBuf,
    languages: String,
    tessdata_dir: Option<PathBuf>,
}

impl TesseractEngine {
    /// Create an engine for the given binary and language set
    /// (e.g. `"eng+fra"`).
    pub fn new(
        binary: impl Into<PathBuf>,
        languages: impl Into<String>,
        tessdata_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            binary: binary.into(),
            languages: languages.into(),
            tessdata_dir,
        }
    }

    /// Create an engine from the application configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            &config.binary,
            &config.languages,
            config.tessdata_dir.clone(),
        )
    }

    /// List the languages the installed engine supports (`--list-langs`).
    pub fn available_languages(&self) -> Result<Vec<String>, OcrError> {
        let output = Command::new(&self.binary)
            .arg("--list-langs")
            .output()
            .map_err(|e| spawn_failure(&self.binary, e))?;

        if !output.status.success() {
            return Err(exit_failure(&output));
        }

        // First line is a header ("List of available languages (N):").
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .skip(1)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

impl TextRecognizer for TesseractEngine {
    fn recognize(&self, path: &Path) -> Result<String, OcrError> {
        image::open(path).map_err(|source| OcrError::ImageDecodeFailure {
            path: path.display().to_string(),
            source,
        })?;

        let mut cmd = Command::new(&self.binary);
        cmd.arg(path).arg("stdout").args(["-l", &self.languages]);
        if let Some(dir) = &self.tessdata_dir {
            cmd.arg("--tessdata-dir").arg(dir);
        }

        debug!("Invoking OCR engine: {:?}", cmd);
        let output = cmd.output().map_err(|e| spawn_failure(&self.binary, e))?;

        if !output.status.success() {
            return Err(exit_failure(&output));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        info!(
            "Extracted {} characters from {}",
            text.chars().count(),
            path.display()
        );

        Ok(text)
    }
}

fn spawn_failure(binary: &Path, err: std::io::Error) -> OcrError {
    if err.kind() == std::io::ErrorKind::NotFound {
        OcrError::EngineFailure(format!(
            "tesseract binary not found at '{}' (is Tesseract installed?)",
            binary.display()
        ))
    } else {
        OcrError::EngineFailure(format!("failed to run '{}': {}", binary.display(), err))
    }
}

fn exit_failure(output: &std::process::Output) -> OcrError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    OcrError::EngineFailure(format!(
        "tesseract exited with {}: {}",
        output.status,
        stderr.trim()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    fn write_valid_png(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("blank.png");
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(8, 8, Rgb([255, 255, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_missing_binary_is_engine_failure() {
        let dir = TempDir::new().unwrap();
        let image_path = write_valid_png(&dir);

        let engine = TesseractEngine::new("/nonexistent/tesseract-bin", "eng", None);
        let err = engine.recognize(&image_path).unwrap_err();
        match err {
            OcrError::EngineFailure(msg) => assert!(msg.contains("not found"), "msg: {msg}"),
            other => panic!("expected EngineFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_input_is_decode_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let engine = TesseractEngine::new("tesseract", "eng", None);
        let err = engine.recognize(&path).unwrap_err();
        assert!(matches!(err, OcrError::ImageDecodeFailure { .. }));
    }

    #[test]
    fn test_missing_image_is_decode_failure() {
        let engine = TesseractEngine::new("tesseract", "eng", None);
        let err = engine.recognize(Path::new("/nonexistent/image.png")).unwrap_err();
        assert!(matches!(err, OcrError::ImageDecodeFailure { .. }));
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::default();
        let engine = TesseractEngine::from_config(&config);
        assert_eq!(engine.binary, PathBuf::from("tesseract"));
        assert_eq!(engine.languages, "eng+fra");
        assert!(engine.tessdata_dir.is_none());
    }
}
