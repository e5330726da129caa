//! Evaluation Runner
//!
//! Drives the OCR engine over each configured case, persists the extracted
//! text next to the reference material, and scores it against the
//! reference transcription. Cases are independent: a failing image is
//! logged and reported without blocking the remaining cases.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use strsim::normalized_levenshtein;
use tracing::{error, info};

use crate::config::CaseConfig;
use crate::ocr::TextRecognizer;
use crate::scoring;

/// Outcome of one successfully scored image/reference pair.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    /// Case label
    pub label: String,
    /// TF-IDF cosine similarity percentage (0-100)
    pub similarity_percent: f64,
    /// Normalized Levenshtein similarity between the normalized texts (0-1)
    pub levenshtein: f64,
    /// Characters extracted by the engine
    pub extracted_chars: usize,
}

/// Run every configured case, isolating failures per pair.
pub fn run_all(
    engine: &dyn TextRecognizer,
    cases: &[CaseConfig],
) -> Vec<(String, Result<CaseReport>)> {
    cases
        .iter()
        .map(|case| (case.label.clone(), run_case(engine, case)))
        .collect()
}

/// OCR one image, persist the extracted text, score against the reference.
pub fn run_case(engine: &dyn TextRecognizer, case: &CaseConfig) -> Result<CaseReport> {
    let extracted = engine
        .recognize(&case.image)
        .with_context(|| format!("recognizing {}", case.image.display()))?;

    write_result(&case.result, &extracted)?;

    let reference = fs::read_to_string(&case.reference)
        .with_context(|| format!("reading reference {}", case.reference.display()))?;

    score_pair(&case.label, &reference, &extracted)
}

/// Score an already-extracted candidate text against a reference text.
pub fn score_pair(label: &str, reference: &str, candidate: &str) -> Result<CaseReport> {
    let similarity_percent = scoring::similarity(reference, candidate)
        .with_context(|| format!("scoring case '{label}'"))?;

    let levenshtein = normalized_levenshtein(
        &scoring::normalize(reference),
        &scoring::normalize(candidate),
    );

    Ok(CaseReport {
        label: label.to_string(),
        similarity_percent,
        levenshtein,
        extracted_chars: candidate.chars().count(),
    })
}

/// Write the extracted text to the case's result file, creating parent
/// directories as needed.
fn write_result(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating result directory {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("writing result file {}", path.display()))
}

/// Print the human-readable report. Returns the number of failed cases.
pub fn print_report(results: &[(String, Result<CaseReport>)]) -> usize {
    let mut failures = 0;

    for (label, result) in results {
        match result {
            Ok(report) => {
                info!(
                    "Case '{}': levenshtein {:.3}, {} chars extracted",
                    label, report.levenshtein, report.extracted_chars
                );
                println!(
                    "Similarity between reference and OCR result ({}): {}%",
                    label, report.similarity_percent
                );
            }
            Err(e) => {
                failures += 1;
                error!("Case '{}' failed: {:#}", label, e);
            }
        }
    }

    failures
}

/// Write a machine-readable report alongside the console output.
pub fn write_json_report(path: &Path, results: &[(String, Result<CaseReport>)]) -> Result<()> {
    let entries: Vec<serde_json::Value> = results
        .iter()
        .map(|(label, result)| match result {
            Ok(report) => {
                let mut value = serde_json::to_value(report).unwrap_or_else(|_| json!({}));
                value["status"] = json!("ok");
                value
            }
            Err(e) => json!({
                "label": label,
                "status": "error",
                "error": format!("{e:#}"),
            }),
        })
        .collect();

    let content = serde_json::to_string_pretty(&entries)?;
    fs::write(path, content)
        .with_context(|| format!("writing JSON report {}", path.display()))?;

    info!("Wrote JSON report to {}", path.display());
    Ok(())
}
