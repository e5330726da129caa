//! Similarity Scoring Layer
//!
//! Scores a candidate text (typically OCR output) against a reference
//! transcription: both texts are normalized, turned into TF-IDF feature
//! vectors over the pair's shared vocabulary, and compared by cosine
//! similarity. The whole computation is stateless; every call builds its
//! own vocabulary from just the two documents involved.

pub mod normalize;
pub mod tfidf;

pub use normalize::{normalize, tokenize};

use thiserror::Error;

/// Failure modes of the similarity computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimilarityError {
    /// One or both documents had no terms left after normalization, so a
    /// feature vector with nonzero magnitude cannot be built and the
    /// cosine is undefined.
    #[error("similarity is undefined: document is empty after normalization")]
    DegenerateInput,
}

/// Cosine similarity between two texts as a percentage.
///
/// Returns a value in `[0, 100]`, scaled first and then rounded to two
/// decimals. Symmetric in its arguments and invariant under case and
/// space-run differences that normalize identically.
pub fn similarity(reference: &str, candidate: &str) -> Result<f64, SimilarityError> {
    let reference = normalize(reference);
    let candidate = normalize(candidate);

    let ref_terms = tokenize(&reference);
    let cand_terms = tokenize(&candidate);

    let vocab = tfidf::vocabulary(&ref_terms, &cand_terms);
    let (v1, v2) = tfidf::feature_vectors(&ref_terms, &cand_terms, &vocab);

    let cosine = tfidf::cosine(&v1, &v2).ok_or(SimilarityError::DegenerateInput)?;

    Ok((cosine * 10000.0).round() / 100.0)
}
