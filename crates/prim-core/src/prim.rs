// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! Incremental Prim's algorithm.
//!
//! The builder owns the classic frontier state (visited / key / parent) and
//! advances one annexation per [`PrimBuilder::step`] call, so drivers can
//! either loop it to completion or pause between steps for display. The
//! linear minimum scan is O(N) per step; at the node counts in scope a heap
//! would only obscure the tie-breaking rule.

use crate::graph::Graph;
use serde::Serialize;

/// Fixed start node. Any node is a valid start; pinning it keeps every run
/// deterministic.
pub const START_NODE: usize = 0;

/// One key/parent update applied to a frontier node during a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Relaxation {
    pub node: usize,
    pub parent: usize,
    pub key: f64,
}

/// A node annexed into the growing tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annexation {
    pub node: usize,
    /// Tree-side endpoint of the annexing edge; `None` only for the start
    /// node.
    pub parent: Option<usize>,
    /// The key that justified the annexation (`0.0` for the start node).
    pub weight: f64,
    /// Frontier updates performed after annexing `node`.
    pub relaxations: Vec<Relaxation>,
}

/// Result of a single [`PrimBuilder::step`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StepOutcome {
    /// A node was annexed into the tree.
    Annexed(Annexation),
    /// Every node is already visited; nothing was mutated.
    Completed,
    /// No unvisited node has a finite key; the remainder is disconnected
    /// from the start node. Nothing was mutated.
    Unreachable,
}

/// Overall algorithm state, derived from the per-node records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Running,
    Completed,
    Unreachable,
}

/// An edge of the (partial) spanning tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreeEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Incremental Prim state over a fixed graph.
///
/// [`PrimBuilder::step`] and [`PrimBuilder::reset`] are the only mutators;
/// everything else is a read-only query for drivers to render from.
#[derive(Debug, Clone)]
pub struct PrimBuilder {
    graph: Graph,
    visited: Vec<bool>,
    key: Vec<f64>,
    parent: Vec<Option<usize>>,
    steps: usize,
}

impl PrimBuilder {
    pub fn new(graph: Graph) -> Self {
        let n = graph.node_count();
        let mut builder = Self {
            graph,
            visited: vec![false; n],
            key: vec![f64::INFINITY; n],
            parent: vec![None; n],
            steps: 0,
        };
        builder.reset();
        builder
    }

    /// Discards all progress and re-arms the start node.
    pub fn reset(&mut self) {
        let n = self.graph.node_count();
        self.visited = vec![false; n];
        self.key = vec![f64::INFINITY; n];
        self.parent = vec![None; n];
        self.key[START_NODE] = 0.0;
        self.steps = 0;
    }

    /// Annexes the cheapest reachable unvisited node and relaxes its
    /// neighbors.
    ///
    /// Safe to call in any state: once [`StepOutcome::Completed`] or
    /// [`StepOutcome::Unreachable`] has been reached, further calls
    /// re-signal the same outcome without mutating anything.
    pub fn step(&mut self) -> StepOutcome {
        let n = self.graph.node_count();

        if self.visited.iter().all(|&v| v) {
            return StepOutcome::Completed;
        }

        // Linear scan for the unvisited node with minimum key. Strict `<`
        // keeps the lowest index on ties.
        let mut selected = None;
        let mut best = f64::INFINITY;
        for v in 0..n {
            if !self.visited[v] && self.key[v] < best {
                best = self.key[v];
                selected = Some(v);
            }
        }

        let Some(u) = selected else {
            return StepOutcome::Unreachable;
        };

        self.visited[u] = true;
        let weight = self.key[u];
        let parent = self.parent[u];

        let mut relaxations = Vec::new();
        for v in 0..n {
            if self.visited[v] {
                continue;
            }
            if let Some(w) = self.graph.edge_weight(u, v) {
                // Strict `<` keeps the earlier-discovered parent on ties
                if w < self.key[v] {
                    self.key[v] = w;
                    self.parent[v] = Some(u);
                    relaxations.push(Relaxation {
                        node: v,
                        parent: u,
                        key: w,
                    });
                }
            }
        }

        self.steps += 1;
        StepOutcome::Annexed(Annexation {
            node: u,
            parent,
            weight,
            relaxations,
        })
    }

    /// Current state machine position, derived from the node records.
    pub fn status(&self) -> Status {
        if self.visited.iter().all(|&v| v) {
            return Status::Completed;
        }
        let reachable = (0..self.graph.node_count())
            .any(|v| !self.visited[v] && self.key[v].is_finite());
        if reachable {
            Status::Running
        } else {
            Status::Unreachable
        }
    }

    /// Sum of the keys of visited non-start nodes: the cost of the tree
    /// built so far, and the MST cost once [`Status::Completed`].
    pub fn total_cost(&self) -> f64 {
        (0..self.graph.node_count())
            .filter(|&i| i != START_NODE && self.visited[i])
            .map(|i| self.key[i])
            .sum()
    }

    /// Current parent edges `(parent, node, key)` in increasing node order.
    ///
    /// Mid-run this includes frontier candidates that may still be improved;
    /// once [`Status::Completed`] it is exactly the spanning tree.
    pub fn tree_edges(&self) -> Vec<TreeEdge> {
        (0..self.graph.node_count())
            .filter(|&i| i != START_NODE)
            .filter_map(|i| {
                self.parent[i].map(|p| TreeEdge {
                    source: p,
                    target: i,
                    weight: self.key[i],
                })
            })
            .collect()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_visited(&self, node: usize) -> bool {
        self.visited[node]
    }

    pub fn key(&self, node: usize) -> f64 {
        self.key[node]
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parent[node]
    }

    /// Number of completed annexation steps.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0-1 (1.0), 1-2 (2.0), 0-2 (10.0)
    fn triangle() -> Graph {
        Graph::from_matrix(vec![
            vec![0.0, 1.0, 10.0],
            vec![1.0, 0.0, 2.0],
            vec![10.0, 2.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_start_node_annexed_first() {
        let mut builder = PrimBuilder::new(triangle());
        match builder.step() {
            StepOutcome::Annexed(a) => {
                assert_eq!(a.node, START_NODE);
                assert_eq!(a.parent, None);
                assert_eq!(a.weight, 0.0);
                // Both neighbors of the start node enter the frontier
                assert_eq!(a.relaxations.len(), 2);
                assert_eq!(
                    a.relaxations[0],
                    Relaxation {
                        node: 1,
                        parent: 0,
                        key: 1.0
                    }
                );
            }
            other => panic!("expected annexation, got {other:?}"),
        }
        assert_eq!(builder.steps(), 1);
    }

    #[test]
    fn test_triangle_tree() {
        let mut builder = PrimBuilder::new(triangle());
        for _ in 0..3 {
            assert!(matches!(builder.step(), StepOutcome::Annexed(_)));
        }
        assert_eq!(builder.status(), Status::Completed);
        assert_eq!(builder.total_cost(), 3.0);

        let edges = builder.tree_edges();
        assert_eq!(edges.len(), 2);
        assert_eq!(
            edges[0],
            TreeEdge {
                source: 0,
                target: 1,
                weight: 1.0
            }
        );
        assert_eq!(
            edges[1],
            TreeEdge {
                source: 1,
                target: 2,
                weight: 2.0
            }
        );
    }

    #[test]
    fn test_completed_re_signals_without_mutation() {
        let mut builder = PrimBuilder::new(triangle());
        for _ in 0..3 {
            builder.step();
        }
        assert_eq!(builder.step(), StepOutcome::Completed);
        assert_eq!(builder.step(), StepOutcome::Completed);
        assert_eq!(builder.steps(), 3);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut builder = PrimBuilder::new(triangle());
        builder.step();
        builder.step();
        builder.reset();

        assert_eq!(builder.steps(), 0);
        assert_eq!(builder.status(), Status::Running);
        for i in 0..3 {
            assert!(!builder.is_visited(i));
            assert_eq!(builder.parent(i), None);
        }
        assert_eq!(builder.key(START_NODE), 0.0);
        assert!(builder.key(1).is_infinite());
        assert!(builder.key(2).is_infinite());
        assert!(builder.tree_edges().is_empty());
    }

    #[test]
    fn test_single_node_graph() {
        let mut builder = PrimBuilder::new(Graph::from_matrix(vec![vec![0.0]]).unwrap());
        assert!(matches!(builder.step(), StepOutcome::Annexed(_)));
        assert_eq!(builder.status(), Status::Completed);
        assert_eq!(builder.total_cost(), 0.0);
        assert!(builder.tree_edges().is_empty());
    }
}
