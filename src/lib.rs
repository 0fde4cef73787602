//! # rapid_sentrank
//!
//! Extractive summarization by sentence centrality.
//!
//! Sentences are turned into TF-IDF vectors over the document's own
//! vocabulary, compared pairwise by cosine similarity, and ranked with
//! PageRank over the resulting similarity graph. The top-ranked sentences
//! form the summary.
//!
//! ```
//! use rapid_sentrank::{SummarizerConfig, TfIdfSummarizer};
//!
//! let summarizer = TfIdfSummarizer::new(SummarizerConfig {
//!     num_sentences: 1,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let summary = summarizer
//!     .summarize("The cat sat. The cat sat on the mat. Dogs bark loudly. The mat was woven from wool.")
//!     .unwrap();
//! assert_eq!(summary.text, "The cat sat on the mat.");
//! ```

pub mod errors;
pub mod evaluate;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;
pub mod variants;

pub use errors::{Result, SummarizeError};
pub use types::{AssemblyOrder, Document, SelectedSentence, Sentence, Summary, SummarizerConfig};

pub use evaluate::{
    compare,
    rouge::{RougeEvaluator, RougeScore, RougeScores},
    AlgorithmReport,
};
pub use graph::{builder::GraphBuilder, csr::CsrGraph, similarity::SimilarityMatrix};
pub use nlp::{
    segmenter::{SentenceSegmenter, UnicodeSegmenter},
    stopwords::StopwordFilter,
    tokenizer::Tokenizer,
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use summarizer::{
    selector::SentenceSelector,
    term_vector::{TermVector, TfIdfVectorizer},
    Analysis, TfIdfSummarizer,
};
pub use variants::{Algorithm, SummaryAlgorithm};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
