//!
//! Reachability-gated relaxation
//!
use super::ShortestPaths;
use crate::common::Vertex;
use crate::graph::DenseGraph;
use log::{debug, warn};

///
/// `true` if out-edges of `v` are worth relaxing:
/// the source itself, or a vertex already given a predecessor.
///
fn is_reached(sp: &ShortestPaths, v: Vertex) -> bool {
    v == sp.source || sp.preds[v].is_vertex()
}

///
/// Up to `n` passes, each relaxing only edges leaving reached vertices,
/// stopping at the first pass without an update.
///
/// A negative cycle is reported only if the `n`-th pass still updated.
/// A reachable negative cycle keeps every pass updating, so it is always
/// caught there. The state is then left unsolved.
///
pub fn reachability_gated(graph: &DenseGraph, sp: &mut ShortestPaths) -> bool {
    let n = graph.n_vertices();
    for pass in 0..n {
        let mut updated = false;
        for from in 0..n {
            if !is_reached(sp, from) {
                continue;
            }
            for to in 0..n {
                updated |= sp.relax(graph, from, to);
            }
        }
        sp.passes += 1;
        debug!("gated: pass={} updated={}", pass, updated);
        if pass + 1 == n && updated {
            warn!("gated: negative cycle reachable from {}", sp.source);
            sp.has_negative_cycle = true;
            return true;
        }
        if !updated {
            break;
        }
    }
    sp.solved = true;
    false
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::super::{solve, PathResult, Strategy};
    use super::*;
    use crate::graph::mocks;

    #[test]
    fn sedgewick() {
        let g = mocks::mock_sedgewick();
        let sp = solve(&g, 4, Strategy::ReachabilityGated);
        assert!(sp.is_solved());
        assert_eq!(sp.reconstruct_path(0), PathResult::Path(vec![4, 3, 0]));
        assert_eq!(sp.reconstruct_path(2), PathResult::Path(vec![4, 3, 5, 1, 2]));
        assert_eq!(sp.reconstruct_path(4), PathResult::Path(vec![4]));
        assert_abs_diff_eq!(sp.dist(2), 0.36 - 0.38 - 0.29 + 0.51, epsilon = 1e-12);
    }

    #[test]
    fn gate_skips_unreached_vertices() {
        let g = mocks::mock_negative_cycle();
        let sp = solve(&g, 5, Strategy::ReachabilityGated);
        assert!(!sp.has_negative_cycle());
        for v in 0..5 {
            assert!(!is_reached(&sp, v));
            assert_eq!(sp.reconstruct_path(v), PathResult::Unreachable);
        }
        assert!(is_reached(&sp, 5));
        assert!(is_reached(&sp, 7));
    }

    #[test]
    fn arbitrage() {
        let g = mocks::mock_arbitrage();
        let sp = solve(&g, 0, Strategy::ReachabilityGated);
        assert!(sp.has_negative_cycle());
        assert!(!sp.is_solved());
        assert_eq!(sp.passes(), 5);
        assert_eq!(sp.reconstruct_path(3), PathResult::NotSolved);
    }
}
