//!
//! Two-phase relaxation with negative cycle localization
//!
use super::{Predecessor, ShortestPaths};
use crate::common::NEG_INF;
use crate::graph::DenseGraph;
use log::{debug, warn};

///
/// Mark every vertex whose distance can still be lowered as affected by
/// a negative cycle (`NEG_INF` with `Predecessor::NegativeCycle`).
/// Returns the number of newly marked vertices.
///
fn mark_relaxable(graph: &DenseGraph, sp: &mut ShortestPaths) -> usize {
    let n = graph.n_vertices();
    let mut n_marked = 0;
    for from in 0..n {
        for to in 0..n {
            match sp.candidate(graph, from, to) {
                Some(d) if d < sp.dists[to] => {
                    sp.dists[to] = NEG_INF;
                    sp.preds[to] = Predecessor::NegativeCycle;
                    n_marked += 1;
                }
                _ => {}
            }
        }
    }
    n_marked
}

///
/// Phase 1 is full relaxation for up to `n-1` passes with early exit.
///
/// Phase 2 repeats marking passes (up to `n`) until one marks nothing.
/// A marked vertex makes all its successors relaxable in the next pass,
/// so the marks spread over everything reachable from a negative cycle.
/// Vertices left unmarked keep their correct shortest distance.
///
/// The state is always solved. Returns `true` if any vertex was marked.
///
pub fn cycle_localization(graph: &DenseGraph, sp: &mut ShortestPaths) -> bool {
    let n = graph.n_vertices();
    for pass in 1..n {
        let updated = sp.relax_all(graph);
        sp.passes += 1;
        debug!("localize: relax pass={} updated={}", pass, updated);
        if !updated {
            break;
        }
    }
    for pass in 0..n {
        let n_marked = mark_relaxable(graph, sp);
        sp.passes += 1;
        debug!("localize: mark pass={} marked={}", pass, n_marked);
        if n_marked == 0 {
            break;
        }
        sp.has_negative_cycle = true;
    }
    if sp.has_negative_cycle {
        warn!(
            "localize: {} vertices affected by negative cycle",
            sp.cycle_affected().len()
        );
    }
    sp.solved = true;
    sp.has_negative_cycle
}

//
// tests
//
