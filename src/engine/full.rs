//!
//! Full relaxation (classic Bellman-Ford)
//!
use super::ShortestPaths;
use crate::graph::DenseGraph;
use log::{debug, warn};

///
/// Relax all ordered pairs for up to `n-1` passes, stopping at the first
/// pass without an update. If the last pass still updated, one detection
/// pass checks whether any edge remains relaxable.
///
/// On a detected negative cycle the state is left unsolved and every
/// path query answers `NotSolved`. Returns `true` if a cycle was detected.
///
pub fn full_relaxation(graph: &DenseGraph, sp: &mut ShortestPaths) -> bool {
    let n = graph.n_vertices();
    // with n=1 the loop is empty and the detection pass must still run
    let mut updated = true;
    for pass in 1..n {
        updated = sp.relax_all(graph);
        sp.passes += 1;
        debug!("full: pass={} updated={}", pass, updated);
        if !updated {
            break;
        }
    }
    if updated && sp.has_relaxable_edge(graph) {
        warn!("full: negative cycle reachable from {}", sp.source);
        sp.has_negative_cycle = true;
        return true;
    }
    sp.solved = true;
    false
}

//
// tests
//
