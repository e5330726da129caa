//! OCR Scorecard - OCR accuracy evaluation harness
//!
//! Runs an OCR engine over a configured set of images, writes each
//! extraction to a result file, and scores it against a reference
//! transcription using TF-IDF cosine similarity.

mod config;
mod eval;
mod ocr;
mod scoring;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::AppConfig;
use crate::ocr::TesseractEngine;

/// OCR Scorecard - scores OCR output against reference transcriptions
#[derive(Parser, Debug)]
#[command(name = "ocr-scorecard")]
#[command(about = "Scores OCR engine output against reference transcriptions")]
struct Args {
    /// Path to the evaluation config (TOML)
    #[arg(short, long, default_value = "scorecard.toml")]
    config: PathBuf,

    /// Write a machine-readable report to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// List languages available to the OCR engine and exit
    #[arg(long)]
    list_languages: bool,

    /// Write the default config to the given path and exit
    #[arg(long)]
    init_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    // Init-config mode
    if let Some(path) = &args.init_config {
        config::save_config(&AppConfig::default(), path)?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = load_or_default(&args.config);
    let engine = TesseractEngine::from_config(&config.engine);

    // List-languages mode
    if args.list_languages {
        println!("Available OCR languages:");
        for language in engine.available_languages()? {
            println!("  {language}");
        }
        return Ok(());
    }

    info!("OCR Scorecard starting...");
    info!(
        "Evaluating {} cases with languages '{}'",
        config.cases.len(),
        config.engine.languages
    );

    let results = eval::run_all(&engine, &config.cases);

    if let Some(path) = &args.json {
        eval::write_json_report(path, &results)?;
    }

    let failures = eval::print_report(&results);
    if failures > 0 {
        anyhow::bail!("{failures} of {} cases failed", results.len());
    }

    info!("Evaluation complete");
    Ok(())
}

/// Load configuration from file or fall back to the built-in defaults.
fn load_or_default(path: &Path) -> AppConfig {
    if path.exists() {
        match config::load_config(path) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", path);
                return config;
            }
            Err(e) => warn!("Failed to load {:?}: {:#}", path, e),
        }
    }
    info!("Using default configuration");
    AppConfig::default()
}
