//! Sentence similarity and graph construction
//!
//! A [`similarity::SimilarityMatrix`] is turned into a weighted, undirected
//! sentence graph stored in CSR form for the ranker.

pub mod builder;
pub mod csr;
pub mod similarity;
