//!
//! Conversion between `DenseGraph` and `petgraph::DiGraph`
//!
use super::DenseGraph;
use crate::common::{Weight, INF};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::fmt::Display;

impl DenseGraph {
    ///
    /// Convert into petgraph `DiGraph` whose node weight is the label.
    ///
    /// Node `i` of the digraph corresponds to vertex `i`.
    /// Zero-weight self-loops are not added.
    ///
    pub fn to_digraph(&self) -> DiGraph<String, Weight> {
        let mut graph = DiGraph::with_capacity(self.n_vertices(), self.n_edges());
        for label in self.labels() {
            graph.add_node(label.clone());
        }
        for (from, to, weight) in self.edges() {
            graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), weight);
        }
        graph
    }
    ///
    /// Convert from petgraph `DiGraph`, using `Display` of node weights as labels.
    ///
    /// Parallel edges are collapsed into the one with minimum weight.
    ///
    pub fn from_digraph<N: Display>(digraph: &DiGraph<N, Weight>) -> DenseGraph {
        let mut graph = DenseGraph::new();
        for node in digraph.node_indices() {
            graph.add_vertex(digraph[node].to_string());
        }
        for edge in digraph.edge_references() {
            let (from, to) = (edge.source().index(), edge.target().index());
            let weight = *edge.weight();
            let current = graph.weight(from, to);
            // a new edge overwrites INF and the default zero self-loop
            let is_default = current == INF || (from == to && current == 0.0);
            if is_default || weight < current {
                graph.set_edge(from, to, weight);
            }
        }
        graph
    }
}

//
// tests
//
