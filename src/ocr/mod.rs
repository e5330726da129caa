//! OCR Engine Layer
//!
//! Treats character recognition as an external collaborator behind the
//! [`TextRecognizer`] trait. The shipped backend shells out to the
//! Tesseract CLI; the trait boundary keeps the evaluation runner testable
//! without an engine installed.

pub mod tesseract;

pub use tesseract::TesseractEngine;

use std::path::Path;
use thiserror::Error;

/// Failure modes of text recognition.
#[derive(Debug, Error)]
pub enum OcrError {
    /// The input file is missing or does not decode as an image.
    #[error("failed to decode image {path}: {source}")]
    ImageDecodeFailure {
        path: String,
        #[source]
        source: image::ImageError,
    },

    /// The engine binary is missing, crashed, or exited with an error.
    #[error("OCR engine failure: {0}")]
    EngineFailure(String),
}

/// An OCR engine that extracts text from an image file.
pub trait TextRecognizer {
    /// Extract all discernible text from the image at `path`.
    fn recognize(&self, path: &Path) -> Result<String, OcrError>;
}
