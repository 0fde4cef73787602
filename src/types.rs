//! Core types for rapid_sentrank
//!
//! Sentences, documents, summaries and the summarizer configuration.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence / Document
// ============================================================================

/// A sentence with its stable position in the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Zero-based position in discourse order
    pub index: usize,
    /// Sentence text as produced by the segmenter
    pub text: String,
}

impl Sentence {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

/// An ordered sequence of sentences
///
/// Indices always equal positions: sentence `i` lives at `sentences()[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    sentences: Vec<Sentence>,
}

impl Document {
    /// Build a document from sentence texts, assigning indices in order
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sentences = texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(i, t))
            .collect();
        Self { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn get(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences.iter()
    }
}

// ============================================================================
// Summary
// ============================================================================

/// How selected sentences are ordered before being joined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyOrder {
    /// Re-sort the selection back into original document order
    #[default]
    DocumentOrder,
    /// Emit the selection by descending score (index ascending on ties)
    ScoreOrder,
}

impl std::str::FromStr for AssemblyOrder {
    type Err = SummarizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "document" | "document_order" | "doc" => Ok(AssemblyOrder::DocumentOrder),
            "score" | "score_order" | "rank" => Ok(AssemblyOrder::ScoreOrder),
            other => Err(SummarizeError::invalid_config(format!(
                "unknown assembly order '{other}' (expected 'document' or 'score')"
            ))),
        }
    }
}

/// A selected sentence with its centrality score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    pub index: usize,
    pub text: String,
    pub score: f64,
}

/// Extractive summary: selected sentences in assembly order plus joined text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub sentences: Vec<SelectedSentence>,
    pub text: String,
    pub order: AssemblyOrder,
}

impl Summary {
    /// Indices of the selected sentences, in assembly order
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Summarizer configuration
///
/// Deserialises from JSON with every field optional:
///
/// ```
/// use rapid_sentrank::SummarizerConfig;
///
/// let cfg: SummarizerConfig =
///     serde_json::from_str(r#"{"num_sentences": 2, "assembly_order": "score_order"}"#).unwrap();
/// assert_eq!(cfg.num_sentences, 2);
/// assert!((cfg.damping - 0.85).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
    /// Damping factor for PageRank (strictly between 0 and 1)
    pub damping: f64,
    /// Convergence threshold on the L1 delta between iterations
    pub convergence_threshold: f64,
    /// Iteration cap for PageRank
    pub max_iterations: usize,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Extra stopwords; extends the built-in list
    pub stopwords: Vec<String>,
    /// Ordering of the selected sentences in the output
    pub assembly_order: AssemblyOrder,
    /// Joiner placed between selected sentences
    pub separator: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            num_sentences: 3,
            damping: 0.85,
            convergence_threshold: 1e-6,
            max_iterations: 100,
            language: "en".to_string(),
            stopwords: Vec::new(),
            assembly_order: AssemblyOrder::DocumentOrder,
            separator: " ".to_string(),
        }
    }
}

impl SummarizerConfig {
    /// Check ranker parameters. The sentence count is checked against the
    /// document at selection time.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be strictly between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) {
            return Err(SummarizeError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_assigns_indices_in_order() {
        let doc = Document::from_texts(["First.", "Second.", "Third."]);
        assert_eq!(doc.len(), 3);
        for (i, s) in doc.iter().enumerate() {
            assert_eq!(s.index, i);
        }
        assert_eq!(doc.get(1).map(|s| s.text.as_str()), Some("Second."));
        assert!(doc.get(3).is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SummarizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_damping_bounds_are_exclusive() {
        for damping in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let cfg = SummarizerConfig {
                damping,
                ..Default::default()
            };
            assert!(matches!(
                cfg.validate(),
                Err(SummarizeError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let cfg = SummarizerConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        let cfg = SummarizerConfig {
            convergence_threshold: 0.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_assembly_order_parse() {
        assert_eq!(
            "document".parse::<AssemblyOrder>().unwrap(),
            AssemblyOrder::DocumentOrder
        );
        assert_eq!(
            "Score".parse::<AssemblyOrder>().unwrap(),
            AssemblyOrder::ScoreOrder
        );
        assert!("alphabetical".parse::<AssemblyOrder>().is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let cfg = SummarizerConfig {
            num_sentences: 5,
            assembly_order: AssemblyOrder::ScoreOrder,
            stopwords: vec!["whiskers".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"score_order\""));
        let back: SummarizerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
