//! PageRank centrality over the sentence graph

pub mod standard;

use std::cmp::Ordering;

/// Result of a PageRank computation
///
/// `scores[i]` is the centrality of sentence `i`; scores sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by sentence index)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final L1 convergence delta
    pub delta: f64,
    /// Whether the delta fell below the threshold before the iteration cap
    pub converged: bool,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Node indices ordered by score descending, index ascending on ties
    pub fn ranked(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| by_score_then_index(&self.scores, a, b));
        order
    }

    /// Top `n` nodes with their scores
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|i| (i, self.scores[i]))
            .collect()
    }

    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

fn by_score_then_index(scores: &[f64], a: usize, b: usize) -> Ordering {
    scores[b].total_cmp(&scores[a]).then(a.cmp(&b))
}
