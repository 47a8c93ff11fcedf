//!
//! Dense weighted digraph
//!
//! * `DenseGraph`: labels of vertices and `n x n` weight matrix
//! * `convert`: conversion from/into `petgraph::DiGraph`
//! * `weight`: weight of paths and cycles
//! * `mocks`: example graphs and random graphs
//!
pub mod convert;
pub mod mocks;
pub mod weight;

use crate::common::{is_valid_weight, rate_to_weight, Vertex, Weight, INF};
use fixedbitset::FixedBitSet;
use std::collections::VecDeque;

///
/// Directed graph stored as an adjacency matrix.
///
/// `matrix[i][j]` is the weight of the edge `i -> j`, or `INF` if there is no such edge.
/// A new vertex has a zero-weight self-loop.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DenseGraph {
    labels: Vec<String>,
    matrix: Vec<Vec<Weight>>,
}

impl DenseGraph {
    /// empty graph
    pub fn new() -> Self {
        DenseGraph::default()
    }
    ///
    /// Construct from labels and a full weight matrix.
    ///
    /// # Panics
    ///
    /// if the matrix is not `labels.len()` square or has invalid weights (see `is_valid_weight`).
    ///
    pub fn from_matrix<S: AsRef<str>>(labels: &[S], matrix: Vec<Vec<Weight>>) -> Self {
        let n = labels.len();
        assert_eq!(matrix.len(), n, "matrix should have {} rows", n);
        for (i, row) in matrix.iter().enumerate() {
            assert_eq!(row.len(), n, "row {} should have {} columns", i, n);
            for (j, &w) in row.iter().enumerate() {
                assert!(is_valid_weight(w), "invalid weight {} on {}->{}", w, i, j);
            }
        }
        DenseGraph {
            labels: labels.iter().map(|s| s.as_ref().to_owned()).collect(),
            matrix,
        }
    }
    ///
    /// Construct from a table of exchange rates `rates[i][j]` (amount of `j` for one `i`).
    ///
    /// Weights are `-ln(rate)` so that a negative cycle is an arbitrage loop.
    /// Diagonal entries are ignored and kept as zero-weight self-loops.
    ///
    pub fn from_exchange_rates<S: AsRef<str>>(labels: &[S], rates: &[Vec<f64>]) -> Self {
        let mut graph = DenseGraph::new();
        for label in labels {
            graph.add_vertex(label.as_ref());
        }
        let n = graph.n_vertices();
        assert_eq!(rates.len(), n, "rate table should have {} rows", n);
        for (i, row) in rates.iter().enumerate() {
            assert_eq!(row.len(), n, "row {} should have {} columns", i, n);
            for (j, &rate) in row.iter().enumerate() {
                if i != j {
                    graph.set_edge(i, j, rate_to_weight(rate));
                }
            }
        }
        graph
    }
    ///
    /// Remove all vertices and edges.
    ///
    pub fn clear(&mut self) {
        self.labels.clear();
        self.matrix.clear();
    }
    ///
    /// Append a vertex and return its index.
    /// It has no edges except the zero-weight self-loop.
    ///
    pub fn add_vertex<S: Into<String>>(&mut self, label: S) -> Vertex {
        let v = self.labels.len();
        self.labels.push(label.into());
        for row in self.matrix.iter_mut() {
            row.push(INF);
        }
        let mut row = vec![INF; v + 1];
        row[v] = 0.0;
        self.matrix.push(row);
        v
    }
    ///
    /// Set the weight of edge `from -> to`. `INF` removes the edge.
    ///
    /// # Panics
    ///
    /// if a vertex is out of range or the weight is invalid (see `is_valid_weight`).
    ///
    pub fn set_edge(&mut self, from: Vertex, to: Vertex, weight: Weight) {
        self.assert_vertex(from);
        self.assert_vertex(to);
        assert!(
            is_valid_weight(weight),
            "invalid weight {} on {}->{}",
            weight,
            from,
            to
        );
        self.matrix[from][to] = weight;
    }
    /// the number of vertices `n`
    pub fn n_vertices(&self) -> usize {
        self.labels.len()
    }
    /// the number of edges, zero-weight self-loops excluded
    pub fn n_edges(&self) -> usize {
        self.edges().count()
    }
    pub fn label(&self, v: Vertex) -> &str {
        self.assert_vertex(v);
        &self.labels[v]
    }
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
    /// index of the first vertex with the label
    pub fn find_vertex(&self, label: &str) -> Option<Vertex> {
        self.labels.iter().position(|l| l == label)
    }
    ///
    /// Weight of edge `from -> to`, `INF` if absent.
    ///
    pub fn weight(&self, from: Vertex, to: Vertex) -> Weight {
        self.matrix[from][to]
    }
    pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.weight(from, to) != INF
    }
    ///
    /// Iterate over edges `(from, to, weight)` in row-major order.
    /// Zero-weight self-loops (the default) are skipped.
    ///
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, Weight)> + '_ {
        self.matrix.iter().enumerate().flat_map(|(from, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(to, &w)| w != INF && !(from == to && w == 0.0))
                .map(move |(to, &w)| (from, to, w))
        })
    }
    ///
    /// Vertices reachable from `source` (including itself) by BFS.
    ///
    pub fn reachable_from(&self, source: Vertex) -> FixedBitSet {
        self.assert_vertex(source);
        let n = self.n_vertices();
        let mut visited = FixedBitSet::with_capacity(n);
        let mut queue = VecDeque::new();
        visited.insert(source);
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            for w in 0..n {
                if self.has_edge(v, w) && !visited.contains(w) {
                    visited.insert(w);
                    queue.push_back(w);
                }
            }
        }
        visited
    }
    fn assert_vertex(&self, v: Vertex) {
        assert!(
            v < self.n_vertices(),
            "vertex {} is out of range (n={})",
            v,
            self.n_vertices()
        );
    }
}

//
// tests
//
