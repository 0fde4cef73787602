//! Ranking algorithm identifiers and the common summarizer interface
//!
//! Only [`Algorithm::TfidfPageRank`] is implemented here. TextRank and
//! LexRank summarizers are supplied by callers through [`SummaryAlgorithm`]
//! so they can be compared side by side with the built-in one.

use crate::errors::{Result, SummarizeError};
use crate::nlp::segmenter::SentenceSegmenter;
use crate::summarizer::TfIdfSummarizer;
use crate::types::Summary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "tfidf_pagerank")]
    TfidfPageRank,
    #[serde(rename = "textrank")]
    TextRank,
    #[serde(rename = "lexrank")]
    LexRank,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::TfidfPageRank => "tfidf_pagerank",
            Algorithm::TextRank => "textrank",
            Algorithm::LexRank => "lexrank",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = SummarizeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().replace('-', "_").as_str() {
            "tfidf_pagerank" | "tfidf" | "tf_idf" | "pagerank" => Ok(Algorithm::TfidfPageRank),
            "textrank" | "text_rank" => Ok(Algorithm::TextRank),
            "lexrank" | "lex_rank" => Ok(Algorithm::LexRank),
            other => Err(SummarizeError::invalid_config(format!(
                "unknown algorithm '{other}'"
            ))),
        }
    }
}

/// Any extractive summarizer: `(text, n) -> Summary`
pub trait SummaryAlgorithm {
    fn algorithm(&self) -> Algorithm;

    fn summarize(&self, text: &str, n: usize) -> Result<Summary>;
}

impl<S: SentenceSegmenter> SummaryAlgorithm for TfIdfSummarizer<S> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::TfidfPageRank
    }

    fn summarize(&self, text: &str, n: usize) -> Result<Summary> {
        self.summarize_n(text, n)
    }
}
