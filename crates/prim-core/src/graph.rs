// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Dense adjacency-matrix graph for the simulator.
//!
//! At the node counts in scope a full matrix beats any sparse structure for
//! clarity: every query is one index, and validation can inspect every cell
//! up front.

use crate::error::{GraphError, Result};

/// Immutable symmetric weight matrix over nodes `0..node_count()`.
///
/// Cells hold [`Graph::NO_EDGE`] where no edge exists; the diagonal is zero
/// and ignored. Validated once at construction, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    /// Row-major n×n cell storage
    weights: Vec<f64>,
}

impl Graph {
    /// Sentinel weight marking the absence of an edge.
    pub const NO_EDGE: f64 = f64::INFINITY;

    /// Builds a graph from a full adjacency matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty or non-square, if any cell is
    /// NaN or negative, if a diagonal cell is non-zero, or if the matrix is
    /// asymmetric.
    pub fn from_matrix(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(GraphError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != n {
                return Err(GraphError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: n,
                });
            }
        }

        // Per-cell validity first, so asymmetry reporting below never
        // compares against a NaN.
        for (i, cells) in rows.iter().enumerate() {
            for (j, &w) in cells.iter().enumerate() {
                if w.is_nan() || w < 0.0 {
                    return Err(GraphError::InvalidWeight { i, j, weight: w });
                }
                if i == j && w != 0.0 {
                    return Err(GraphError::NonZeroDiagonal { i, weight: w });
                }
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if rows[i][j] != rows[j][i] {
                    return Err(GraphError::Asymmetric {
                        i,
                        j,
                        forward: rows[i][j],
                        backward: rows[j][i],
                    });
                }
            }
        }

        let weights = rows.into_iter().flatten().collect();
        Ok(Self { n, weights })
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Raw matrix cell; [`Graph::NO_EDGE`] when the edge is absent.
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    /// Weight of a usable edge between two distinct nodes.
    ///
    /// An edge is usable when its weight is strictly between zero and
    /// infinity, so a zero cell off the diagonal counts as "no edge".
    pub fn edge_weight(&self, i: usize, j: usize) -> Option<f64> {
        if i == j {
            return None;
        }
        let w = self.weight(i, j);
        if w > 0.0 && w < Self::NO_EDGE {
            Some(w)
        } else {
            None
        }
    }

    /// Iterates each undirected edge once, as `(i, j, weight)` with `i < j`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.n).flat_map(move |i| {
            ((i + 1)..self.n).filter_map(move |j| self.edge_weight(i, j).map(|w| (i, j, w)))
        })
    }

    /// The fixed 5-node demo graph shipped with the simulator.
    pub fn example() -> Self {
        const INF: f64 = f64::INFINITY;
        Self::from_matrix(vec![
            vec![0.0, 2.0, INF, 6.0, INF],
            vec![2.0, 0.0, 3.0, 8.0, 5.0],
            vec![INF, 3.0, 0.0, INF, 7.0],
            vec![6.0, 8.0, INF, 0.0, 9.0],
            vec![INF, 5.0, 7.0, 9.0, 0.0],
        ])
        .expect("demo matrix is statically valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn test_rejects_empty_matrix() {
        assert!(matches!(Graph::from_matrix(vec![]), Err(GraphError::Empty)));
    }

    #[test]
    fn test_rejects_non_square_matrix() {
        let result = Graph::from_matrix(vec![vec![0.0, 1.0], vec![1.0]]);
        assert!(matches!(result, Err(GraphError::NotSquare { row: 1, .. })));
    }

    #[test]
    fn test_rejects_asymmetric_matrix() {
        let result = Graph::from_matrix(vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
        assert!(matches!(result, Err(GraphError::Asymmetric { i: 0, j: 1, .. })));
    }

    #[test]
    fn test_rejects_non_zero_diagonal() {
        let result = Graph::from_matrix(vec![vec![1.0, 2.0], vec![2.0, 0.0]]);
        assert!(matches!(result, Err(GraphError::NonZeroDiagonal { i: 0, .. })));
    }

    #[test]
    fn test_rejects_negative_and_nan_weights() {
        let result = Graph::from_matrix(vec![vec![0.0, -1.0], vec![-1.0, 0.0]]);
        assert!(matches!(result, Err(GraphError::InvalidWeight { .. })));

        let result = Graph::from_matrix(vec![vec![0.0, f64::NAN], vec![f64::NAN, 0.0]]);
        assert!(matches!(result, Err(GraphError::InvalidWeight { .. })));
    }

    #[test]
    fn test_edge_weight_bounds() {
        let g = Graph::from_matrix(vec![vec![0.0, 5.0], vec![5.0, 0.0]]).unwrap();
        assert_eq!(g.edge_weight(0, 1), Some(5.0));
        assert_eq!(g.edge_weight(1, 0), Some(5.0));
        // Self-loops are never usable edges
        assert_eq!(g.edge_weight(0, 0), None);

        let g = Graph::from_matrix(vec![vec![0.0, INF], vec![INF, 0.0]]).unwrap();
        assert_eq!(g.edge_weight(0, 1), None);

        // A zero cell off the diagonal is "no edge" under the bounded check
        let g = Graph::from_matrix(vec![vec![0.0, 0.0], vec![0.0, 0.0]]).unwrap();
        assert_eq!(g.edge_weight(0, 1), None);
        assert_eq!(g.edges().count(), 0);
    }

    #[test]
    fn test_example_graph_shape() {
        let g = Graph::example();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edges().count(), 7);
        assert_eq!(g.weight(0, 1), 2.0);
        assert_eq!(g.weight(1, 0), 2.0);
        assert_eq!(g.weight(0, 2), Graph::NO_EDGE);
        assert_eq!(g.edge_weight(3, 4), Some(9.0));
    }
}
