//! Sentence graph in Compressed Sparse Row (CSR) layout
//!
//! Edges of node `i` live at `row_ptr[i]..row_ptr[i + 1]`.

use super::builder::GraphBuilder;
use super::similarity::SimilarityMatrix;

/// A sentence graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes (sentences)
    pub num_nodes: usize,
    pub row_ptr: Vec<usize>,
    /// Neighbor sentence of each edge
    pub col_idx: Vec<u32>,
    /// Cosine similarity of each edge
    pub weights: Vec<f64>,
    /// Total incident weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Freeze a GraphBuilder into CSR format
    ///
    /// Each row is sorted by neighbor index so every pass of the power
    /// iteration sums in the same order.
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let mut graph = Self {
            num_nodes: builder.node_count(),
            ..Self::default()
        };
        graph.total_weight.reserve(graph.num_nodes);

        for (_, edges) in builder.nodes() {
            let mut row: Vec<(u32, f64)> = edges.iter().map(|(&j, &w)| (j, w)).collect();
            row.sort_unstable_by_key(|&(j, _)| j);

            let mut strength = 0.0;
            for (j, w) in row {
                graph.col_idx.push(j);
                graph.weights.push(w);
                strength += w;
            }
            graph.total_weight.push(strength);
            graph.row_ptr.push(graph.col_idx.len());
        }

        graph
    }

    /// Sentence graph of a similarity matrix, diagonal excluded
    pub fn from_similarity(matrix: &SimilarityMatrix) -> Self {
        Self::from_builder(&GraphBuilder::from_similarity(matrix))
    }

    /// Neighbors of `node` with their edge weights, ascending by index
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Directed edge count; every similarity edge is stored in both rows
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Sentences similar to no other sentence
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.total_weight[n as usize] <= 0.0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}
