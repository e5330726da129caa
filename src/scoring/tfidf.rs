//! TF-IDF feature vectors and cosine similarity
//!
//! Operates on exactly one document pair: the vocabulary, document
//! frequencies, and feature vectors are built fresh per comparison and
//! discarded afterwards. Nothing is cached across calls.

use std::collections::{BTreeSet, HashMap};

/// Shared vocabulary for a document pair: every distinct term from either
/// document, in lexicographic order.
pub fn vocabulary<'a>(a: &[&'a str], b: &[&'a str]) -> Vec<&'a str> {
    let mut terms: BTreeSet<&str> = BTreeSet::new();
    terms.extend(a.iter().copied());
    terms.extend(b.iter().copied());
    terms.into_iter().collect()
}

/// Build the TF-IDF feature vector pair over a shared vocabulary ordering.
///
/// TF is relative frequency (term count / document length). IDF uses the
/// smoothed variant `ln((N + 1) / (df + 1)) + 1` over the two-document
/// corpus: with only two documents the unsmoothed `ln(N / df)` would zero
/// out every shared term and make identical documents incomparable.
///
/// Both vectors follow the `vocab` ordering, so they are always the same
/// length and directly comparable.
pub fn feature_vectors(a: &[&str], b: &[&str], vocab: &[&str]) -> (Vec<f64>, Vec<f64>) {
    let counts_a = term_counts(a);
    let counts_b = term_counts(b);
    let total_docs = 2.0_f64;

    let mut v1 = Vec::with_capacity(vocab.len());
    let mut v2 = Vec::with_capacity(vocab.len());

    for term in vocab {
        let count_a = counts_a.get(term).copied().unwrap_or(0);
        let count_b = counts_b.get(term).copied().unwrap_or(0);

        let df = (count_a > 0) as u32 + (count_b > 0) as u32;
        let idf = ((total_docs + 1.0) / (df as f64 + 1.0)).ln() + 1.0;

        v1.push(relative_frequency(count_a, a.len()) * idf);
        v2.push(relative_frequency(count_b, b.len()) * idf);
    }

    (v1, v2)
}

fn relative_frequency(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

fn term_counts<'a>(doc: &[&'a str]) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for term in doc {
        *counts.entry(*term).or_insert(0) += 1;
    }
    counts
}

/// Cosine of the angle between two feature vectors.
///
/// Returns `None` when either vector has zero magnitude (a document with no
/// terms); the cosine is undefined there and must not be coerced to 0.
pub fn cosine(v1: &[f64], v2: &[f64]) -> Option<f64> {
    debug_assert_eq!(v1.len(), v2.len());

    let dot: f64 = v1.iter().zip(v2).map(|(x, y)| x * y).sum();
    let mag1 = v1.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag2 = v2.iter().map(|x| x * x).sum::<f64>().sqrt();

    if mag1 == 0.0 || mag2 == 0.0 {
        return None;
    }

    Some(dot / (mag1 * mag2))
}
