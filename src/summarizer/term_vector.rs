//! TF-IDF term vectors for sentences
//!
//! Each sentence of a document is treated as one "document" for IDF
//! purposes; the vocabulary is local to the document being summarized.

use crate::errors::{Result, SummarizeError};
use crate::nlp::tokenizer::Tokenizer;
use crate::types::Document;
use rustc_hash::FxHashMap;

/// A sparse, L2-normalised term vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Non-zero dimensions: term -> normalised weight
    pub dimensions: FxHashMap<String, f64>,
    /// L2 norm before normalisation (0 for the zero vector)
    pub norm: f64,
}

impl TermVector {
    /// The zero vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalise raw weights to unit length, keeping the original norm
    pub fn from_dimensions(mut dimensions: FxHashMap<String, f64>) -> Self {
        dimensions.retain(|_, w| *w > 0.0);
        let norm = dimensions.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions, norm }
    }

    /// Cosine similarity; 0 whenever either side is the zero vector
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }

        // Both sides are unit length, so the dot product is the cosine.
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };
        let dot: f64 = small
            .dimensions
            .iter()
            .filter_map(|(term, w)| large.dimensions.get(term).map(|o| w * o))
            .sum();

        dot.clamp(0.0, 1.0)
    }

    pub fn weight(&self, term: &str) -> f64 {
        self.dimensions.get(term).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

/// Builds one [`TermVector`] per sentence
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
}

impl TfIdfVectorizer {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Vectorize every sentence of `doc`
    ///
    /// Weight = term frequency × smoothed IDF, `ln((1 + n) / (1 + df)) + 1`,
    /// where `df` counts the sentences containing the term.
    pub fn vectorize(&self, doc: &Document) -> Result<Vec<TermVector>> {
        if doc.is_empty() {
            return Err(SummarizeError::invalid_input("document has no sentences"));
        }

        let term_counts: Vec<FxHashMap<String, f64>> = doc
            .iter()
            .map(|s| {
                let mut counts = FxHashMap::default();
                for term in self.tokenizer.terms(&s.text) {
                    *counts.entry(term).or_insert(0.0) += 1.0;
                }
                counts
            })
            .collect();

        let idf = inverse_document_frequency(&term_counts);

        Ok(term_counts
            .into_iter()
            .map(|counts| {
                let weighted = counts
                    .into_iter()
                    .map(|(term, tf)| {
                        let w = tf * idf.get(&term).copied().unwrap_or(0.0);
                        (term, w)
                    })
                    .collect();
                TermVector::from_dimensions(weighted)
            })
            .collect())
    }
}

fn inverse_document_frequency(term_counts: &[FxHashMap<String, f64>]) -> FxHashMap<String, f64> {
    let mut df: FxHashMap<&str, usize> = FxHashMap::default();
    for counts in term_counts {
        for term in counts.keys() {
            *df.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let n = term_counts.len() as f64;
    df.into_iter()
        .map(|(term, df)| {
            let idf = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
            (term.to_string(), idf)
        })
        .collect()
}
