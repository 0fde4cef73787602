//! Standard PageRank algorithm
//!
//! Weighted power iteration with uniform redistribution of dangling-node
//! mass. The input graph is only read.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SimilarityMatrix;
use crate::types::SummarizerConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Take damping, threshold and iteration cap from a summarizer config
    pub fn from_config(cfg: &SummarizerConfig) -> Self {
        Self {
            damping: cfg.damping,
            max_iterations: cfg.max_iterations,
            threshold: cfg.convergence_threshold,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Rank the sentences of a similarity matrix
    pub fn rank(&self, matrix: &SimilarityMatrix) -> PageRankResult {
        self.run(&CsrGraph::from_similarity(matrix))
    }

    /// Run PageRank on a graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        match n {
            0 => return PageRankResult::new(vec![], 0, 0.0, true),
            1 => return PageRankResult::new(vec![1.0], 0, 0.0, true),
            _ => {}
        }

        let dangling = graph.dangling_nodes();
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;
            delta = self.step(graph, &dangling, &scores, &mut next);
            std::mem::swap(&mut scores, &mut next);
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        let converged = delta <= self.threshold;
        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = n, iterations, delta, converged, "pagerank finished");

        PageRankResult::new(scores, iterations, delta, converged)
    }

    /// One power-iteration step from `scores` into `next`; returns the L1 delta
    fn step(&self, graph: &CsrGraph, dangling: &[u32], scores: &[f64], next: &mut [f64]) -> f64 {
        let n = scores.len() as f64;
        // Dangling mass is spread as if linked to every node
        let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
        next.fill((1.0 - self.damping) / n + self.damping * dangling_mass / n);

        for (node, &score) in scores.iter().enumerate() {
            let strength = graph.node_total_weight(node as u32);
            if strength <= 0.0 {
                continue;
            }
            let share = self.damping * score / strength;
            for (neighbor, weight) in graph.neighbors(node as u32) {
                next[neighbor as usize] += share * weight;
            }
        }

        scores.iter().zip(next.iter()).map(|(a, b)| (a - b).abs()).sum()
    }
}
