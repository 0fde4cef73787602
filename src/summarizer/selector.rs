//! Top-N sentence selection and summary assembly
//!
//! Sentences are ranked by centrality (index ascending on ties), the first
//! `num_sentences` are kept, and the selection is joined either in document
//! order or in score order.

use crate::errors::{Result, SummarizeError};
use crate::pagerank::PageRankResult;
use crate::types::{AssemblyOrder, Document, SelectedSentence, Summary, SummarizerConfig};

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
    /// Output ordering of the selection
    pub order: AssemblyOrder,
    /// Joiner between selected sentences
    pub separator: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            num_sentences: 3,
            order: AssemblyOrder::DocumentOrder,
            separator: " ".to_string(),
        }
    }
}

impl From<&SummarizerConfig> for SelectorConfig {
    fn from(cfg: &SummarizerConfig) -> Self {
        Self {
            num_sentences: cfg.num_sentences,
            order: cfg.assembly_order,
            separator: cfg.separator.clone(),
        }
    }
}

/// Score-based sentence selector
#[derive(Debug, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set the number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Set the assembly order
    pub fn with_order(mut self, order: AssemblyOrder) -> Self {
        self.config.order = order;
        self
    }

    /// Set the joiner between selected sentences
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Select and assemble the summary
    ///
    /// Fails with `OutOfRange` unless `1 <= num_sentences <= doc.len()`.
    pub fn select(&self, doc: &Document, ranks: &PageRankResult) -> Result<Summary> {
        let available = doc.len();
        let requested = self.config.num_sentences;
        if requested == 0 || requested > available {
            return Err(SummarizeError::out_of_range(requested, available));
        }
        if ranks.len() != available {
            return Err(SummarizeError::invalid_input(format!(
                "{} scores for a document of {} sentences",
                ranks.len(),
                available
            )));
        }

        let mut chosen = ranks.ranked();
        chosen.truncate(requested);
        if self.config.order == AssemblyOrder::DocumentOrder {
            chosen.sort_unstable();
        }

        let sentences: Vec<SelectedSentence> = chosen
            .into_iter()
            .filter_map(|i| {
                doc.get(i).map(|s| SelectedSentence {
                    index: s.index,
                    text: s.text.clone(),
                    score: ranks.score(i),
                })
            })
            .collect();

        let text = sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(&self.config.separator);

        Ok(Summary {
            sentences,
            text,
            order: self.config.order,
        })
    }
}
