//! Extractive summarization
//!
//! [`TfIdfSummarizer`] runs the full ranking pipeline:
//!
//! 1. Segment text into sentences
//! 2. Build TF-IDF term vectors over the document's own vocabulary
//! 3. Compute the pairwise cosine similarity matrix
//! 4. Rank sentences with PageRank over the similarity graph
//! 5. Select the top sentences and assemble the summary text

pub mod selector;
pub mod term_vector;

use crate::errors::{Result, SummarizeError};
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMatrix;
use crate::nlp::segmenter::{SentenceSegmenter, UnicodeSegmenter};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::{AssemblyOrder, Document, Summary, SummarizerConfig};
use selector::{SelectorConfig, SentenceSelector};
use term_vector::{TermVector, TfIdfVectorizer};

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("summarize_stage", stage = $name).entered();
    };
}

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_VECTORIZE: &str = "vectorize";
pub const STAGE_SIMILARITY: &str = "similarity";
pub const STAGE_GRAPH: &str = "graph";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_SELECT: &str = "select";

/// Intermediate artifacts of one ranking run
#[derive(Debug, Clone)]
pub struct Analysis {
    pub vectors: Vec<TermVector>,
    pub similarity: SimilarityMatrix,
    pub ranks: PageRankResult,
}

/// TF-IDF + PageRank sentence-ranking summarizer
#[derive(Debug, Clone)]
pub struct TfIdfSummarizer<S = UnicodeSegmenter> {
    config: SummarizerConfig,
    segmenter: S,
    vectorizer: TfIdfVectorizer,
    ranker: StandardPageRank,
}

impl TfIdfSummarizer {
    /// Build a summarizer, rejecting out-of-range ranker parameters
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::new(StopwordFilter::from_config(&config));
        Ok(Self {
            segmenter: UnicodeSegmenter,
            vectorizer: TfIdfVectorizer::new(tokenizer),
            ranker: StandardPageRank::from_config(&config),
            config,
        })
    }
}

impl Default for TfIdfSummarizer {
    fn default() -> Self {
        let config = SummarizerConfig::default();
        Self {
            segmenter: UnicodeSegmenter,
            vectorizer: TfIdfVectorizer::new(Tokenizer::new(StopwordFilter::from_config(&config))),
            ranker: StandardPageRank::from_config(&config),
            config,
        }
    }
}

impl<S: SentenceSegmenter> TfIdfSummarizer<S> {
    /// Replace the sentence segmenter
    pub fn with_segmenter<T: SentenceSegmenter>(self, segmenter: T) -> TfIdfSummarizer<T> {
        TfIdfSummarizer {
            config: self.config,
            segmenter,
            vectorizer: self.vectorizer,
            ranker: self.ranker,
        }
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.vectorizer = TfIdfVectorizer::new(Tokenizer::new(stopwords));
        self
    }

    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    pub fn with_order(mut self, order: AssemblyOrder) -> Self {
        self.config.assembly_order = order;
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Segment `text` with the configured segmenter
    pub fn segment(&self, text: &str) -> Document {
        trace_stage!(STAGE_SEGMENT);
        self.segmenter.segment(text)
    }

    /// Summarize raw text using the configured sentence count
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        self.summarize_n(text, self.config.num_sentences)
    }

    /// Summarize raw text selecting exactly `n` sentences
    pub fn summarize_n(&self, text: &str, n: usize) -> Result<Summary> {
        let doc = self.segment(text);
        self.summarize_document(&doc, n)
    }

    /// Summarize an already segmented document
    pub fn summarize_document(&self, doc: &Document, n: usize) -> Result<Summary> {
        if doc.is_empty() {
            return Err(SummarizeError::invalid_input("document has no sentences"));
        }
        if n == 0 || n > doc.len() {
            return Err(SummarizeError::out_of_range(n, doc.len()));
        }

        let analysis = self.analyze(doc)?;

        trace_stage!(STAGE_SELECT);
        let selector = SentenceSelector::with_config(SelectorConfig {
            num_sentences: n,
            ..SelectorConfig::from(&self.config)
        });
        selector.select(doc, &analysis.ranks)
    }

    /// Centrality scores for every sentence of `doc`
    pub fn score(&self, doc: &Document) -> Result<PageRankResult> {
        Ok(self.analyze(doc)?.ranks)
    }

    /// Run vectorization, similarity and ranking, keeping every artifact
    pub fn analyze(&self, doc: &Document) -> Result<Analysis> {
        let vectors = {
            trace_stage!(STAGE_VECTORIZE);
            self.vectorizer.vectorize(doc)?
        };

        let similarity = {
            trace_stage!(STAGE_SIMILARITY);
            SimilarityMatrix::compute(&vectors)
        };

        let graph = {
            trace_stage!(STAGE_GRAPH);
            CsrGraph::from_similarity(&similarity)
        };

        let ranks = {
            trace_stage!(STAGE_RANK);
            self.ranker.run(&graph)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = doc.len(),
            edges = graph.num_edges() / 2,
            dangling = graph.dangling_nodes().len(),
            iterations = ranks.iterations,
            converged = ranks.converged,
            "ranked document"
        );

        Ok(Analysis {
            vectors,
            similarity,
            ranks,
        })
    }
}
