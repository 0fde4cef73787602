//! Pairwise sentence similarity
//!
//! [`SimilarityMatrix`] is an immutable N×N value. The diagonal records
//! self-similarity for inspection only; graph construction never turns it
//! into an edge.

use crate::summarizer::term_vector::TermVector;
use rayon::prelude::*;

/// Below this many sentences rows are computed sequentially
pub const PARALLEL_THRESHOLD: usize = 64;

/// Symmetric cosine-similarity matrix, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute all pairwise similarities
    ///
    /// Only the upper triangle is evaluated; the lower triangle mirrors it.
    pub fn compute(vectors: &[TermVector]) -> Self {
        let n = vectors.len();
        let upper_row = |i: usize| -> Vec<f64> {
            ((i + 1)..n)
                .map(|j| vectors[i].cosine_similarity(&vectors[j]))
                .collect()
        };

        let rows: Vec<Vec<f64>> = if n < PARALLEL_THRESHOLD {
            (0..n).map(upper_row).collect()
        } else {
            (0..n).into_par_iter().map(upper_row).collect()
        };

        let mut values = vec![0.0; n * n];
        for (i, row) in rows.into_iter().enumerate() {
            values[i * n + i] = if vectors[i].is_empty() { 0.0 } else { 1.0 };
            for (offset, sim) in row.into_iter().enumerate() {
                let j = i + 1 + offset;
                values[i * n + j] = sim;
                values[j * n + i] = sim;
            }
        }

        Self { n, values }
    }

    /// Build from explicit rows
    ///
    /// `None` unless the rows form a square, symmetric matrix with every
    /// value in [0, 1].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let n = rows.len();
        if rows.iter().any(|r| r.len() != n) {
            return None;
        }
        let matrix = Self {
            n,
            values: rows.into_iter().flatten().collect(),
        };
        let in_range = matrix.values.iter().all(|v| (0.0..=1.0).contains(v));
        (in_range && matrix.is_symmetric()).then_some(matrix)
    }

    /// Raw similarity, diagonal included
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Weight of the graph edge between `i` and `j`, if any
    ///
    /// `None` on the diagonal and for non-positive similarity.
    pub fn edge_weight(&self, i: usize, j: usize) -> Option<f64> {
        if i == j {
            return None;
        }
        let w = self.get(i, j);
        (w > 0.0).then_some(w)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Number of sentences (matrix dimension)
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| ((i + 1)..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn vector(terms: &[(&str, f64)]) -> TermVector {
        let dims: FxHashMap<String, f64> =
            terms.iter().map(|(t, w)| (t.to_string(), *w)).collect();
        TermVector::from_dimensions(dims)
    }

    #[test]
    fn test_symmetric_with_unit_diagonal() {
        let vectors = vec![
            vector(&[("cat", 1.0), ("sat", 1.0)]),
            vector(&[("cat", 1.0), ("mat", 2.0)]),
            vector(&[("dog", 1.0)]),
        ];
        let m = SimilarityMatrix::compute(&vectors);

        assert_eq!(m.len(), 3);
        assert!(m.is_symmetric());
        for i in 0..3 {
            assert!((m.get(i, i) - 1.0).abs() < 1e-12);
            assert!(m.edge_weight(i, i).is_none());
        }
        assert!(m.get(0, 1) > 0.0);
        assert_eq!(m.get(0, 2), 0.0);
        assert!(m.edge_weight(0, 2).is_none());
    }

    #[test]
    fn test_zero_vector_has_zero_row() {
        let vectors = vec![vector(&[("cat", 1.0)]), TermVector::new()];
        let m = SimilarityMatrix::compute(&vectors);

        assert_eq!(m.row(1), &[0.0, 0.0]);
    }

    #[test]
    fn test_values_within_unit_interval() {
        let vectors: Vec<_> = (0..10)
            .map(|i| vector(&[("shared", 1.0), (format!("t{i}").as_str(), i as f64)]))
            .collect();
        let m = SimilarityMatrix::compute(&vectors);

        for i in 0..10 {
            for &v in m.row(i) {
                assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_parallel_path_matches_pairwise_cosine() {
        let n = PARALLEL_THRESHOLD + 6;
        let vectors: Vec<_> = (0..n)
            .map(|i| {
                vector(&[
                    (format!("t{}", i % 7).as_str(), 1.0),
                    (format!("u{}", i % 5).as_str(), 2.0),
                ])
            })
            .collect();
        let m = SimilarityMatrix::compute(&vectors);

        assert!(m.is_symmetric());
        for i in 0..n {
            for j in (i + 1)..n {
                assert_eq!(m.get(i, j), vectors[i].cosine_similarity(&vectors[j]));
            }
        }
    }

    #[test]
    fn test_from_rows_requires_square() {
        assert!(SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5]]).is_none());
        assert!(SimilarityMatrix::from_rows(vec![vec![1.0, 0.5], vec![0.5, 1.0]]).is_some());
    }

    #[test]
    fn test_from_rows_rejects_asymmetric() {
        let rows = vec![vec![1.0, 0.9], vec![0.1, 1.0]];
        assert!(SimilarityMatrix::from_rows(rows).is_none());
    }

    #[test]
    fn test_from_rows_rejects_out_of_range() {
        for bad in [-0.2, 1.5, f64::NAN] {
            let rows = vec![vec![1.0, bad], vec![bad, 1.0]];
            assert!(SimilarityMatrix::from_rows(rows).is_none());
        }
        assert!(SimilarityMatrix::from_rows(vec![vec![2.0]]).is_none());
    }
}
