//! Text normalization
//!
//! Canonicalizes raw text (whitespace and case) before comparison so that
//! spurious formatting differences between an OCR extraction and its
//! reference transcription do not count against the similarity score.

/// Canonicalize text for comparison.
///
/// Collapses runs of spaces to a single space, strips leading and trailing
/// spaces, and lowercases the result. Splitting happens on the literal
/// space character only: tabs and newlines are not treated as separators,
/// so tokens joined by them stay glued together after the rejoin.
/// Whitespace-only input yields an empty string.
///
/// Pure and idempotent.
pub fn normalize(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    text.split(' ')
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Split normalized text into terms for vocabulary building.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}
