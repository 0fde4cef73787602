//! Sentence graph builder
//!
//! Nodes are sentence indices; an undirected edge joins two distinct
//! sentences whose similarity is positive. Self-loops are never created.

use super::similarity::SimilarityMatrix;
use rustc_hash::FxHashMap;

/// A mutable adjacency-map graph, converted to CSR before ranking
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    /// Per-node adjacency: neighbour -> edge weight
    adjacency: Vec<FxHashMap<u32, f64>>,
}

impl GraphBuilder {
    /// A graph with `n` isolated nodes
    pub fn with_nodes(n: usize) -> Self {
        Self {
            adjacency: vec![FxHashMap::default(); n],
        }
    }

    /// Set the weight of the undirected edge `a`–`b`
    ///
    /// Ignored for self-loops, non-positive weights and unknown nodes.
    pub fn set_edge(&mut self, a: u32, b: u32, weight: f64) {
        if a == b || !(weight > 0.0) {
            return;
        }
        let n = self.adjacency.len();
        if a as usize >= n || b as usize >= n {
            return;
        }
        self.adjacency[a as usize].insert(b, weight);
        self.adjacency[b as usize].insert(a, weight);
    }

    /// Edges for every off-diagonal positive similarity
    pub fn from_similarity(matrix: &SimilarityMatrix) -> Self {
        let n = matrix.len();
        let mut builder = Self::with_nodes(n);
        for i in 0..n {
            for j in (i + 1)..n {
                if let Some(w) = matrix.edge_weight(i, j) {
                    builder.set_edge(i as u32, j as u32, w);
                }
            }
        }
        builder
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|e| e.len()).sum::<usize>() / 2
    }

    pub fn edges(&self, node: u32) -> Option<&FxHashMap<u32, f64>> {
        self.adjacency.get(node as usize)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (u32, &FxHashMap<u32, f64>)> {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(i, e)| (i as u32, e))
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> SimilarityMatrix {
        SimilarityMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_diagonal_never_becomes_edge() {
        let m = matrix(vec![
            vec![1.0, 0.5, 0.0],
            vec![0.5, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ]);
        let builder = GraphBuilder::from_similarity(&m);

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 1);
        for (node, edges) in builder.nodes() {
            assert!(!edges.contains_key(&node));
        }
        assert!(builder.edges(2).unwrap().is_empty());
    }

    #[test]
    fn test_edges_are_symmetric() {
        let mut builder = GraphBuilder::with_nodes(2);
        builder.set_edge(0, 1, 0.25);

        assert_eq!(builder.edges(0).unwrap().get(&1), Some(&0.25));
        assert_eq!(builder.edges(1).unwrap().get(&0), Some(&0.25));
    }

    #[test]
    fn test_self_loops_and_zero_weights_ignored() {
        let mut builder = GraphBuilder::with_nodes(2);
        builder.set_edge(0, 0, 1.0);
        builder.set_edge(0, 1, 0.0);
        builder.set_edge(0, 7, 1.0);

        assert_eq!(builder.edge_count(), 0);
    }
}
