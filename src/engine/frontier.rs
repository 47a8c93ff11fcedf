//!
//! Frontier queue relaxation
//!
use super::ShortestPaths;
use crate::graph::DenseGraph;
use log::{debug, warn};
use std::collections::VecDeque;

///
/// Relax out-edges of the vertices improved in the previous round,
/// starting from the source alone.
///
/// Without a negative cycle the frontier drains within `n` rounds.
/// If it is still non-empty after `n` rounds the state is marked as
/// diverged and the loop stops. This strategy never reports a negative
/// cycle: the state is always solved and path queries on a diverged
/// state answer `CycleAffected` when they run into a loop.
///
/// A vertex may be queued more than once in the same round.
///
pub fn frontier_queue(graph: &DenseGraph, sp: &mut ShortestPaths) -> bool {
    let n = graph.n_vertices();
    let mut frontier = VecDeque::new();
    frontier.push_back(sp.source);
    let mut round = 0;
    while !frontier.is_empty() {
        if round == n {
            warn!(
                "queue: frontier of {} vertices left after {} rounds",
                frontier.len(),
                n
            );
            sp.diverged = true;
            break;
        }
        let mut next = VecDeque::new();
        while let Some(from) = frontier.pop_front() {
            for to in 0..n {
                if sp.relax(graph, from, to) {
                    next.push_back(to);
                }
            }
        }
        round += 1;
        sp.passes = round;
        debug!("queue: round={} next={}", round, next.len());
        frontier = next;
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
    use crate::common::NEG_INF;
    use crate::graph::mocks;

    #[test]
    fn currency_needs_all_rounds() {
        let g = mocks::mock_currency();
        let sp = solve(&g, 0, Strategy::FrontierQueue);
        assert!(sp.is_solved());
        assert!(!sp.is_diverged());
        assert_eq!(sp.passes(), 5);
        assert_eq!(sp.dists(), &[0.0, 2.0, 7.0, -2.0, 4.0]);
        assert_eq!(sp.reconstruct_path(3), PathResult::Path(vec![0, 2, 4, 1, 3]));
    }

    #[test]
    fn diverges_on_negative_cycle() {
        let g = mocks::mock_negative_cycle();
        let sp = solve(&g, 0, Strategy::FrontierQueue);
        assert!(sp.is_solved());
        assert!(sp.is_diverged());
        assert!(!sp.has_negative_cycle());
        assert_eq!(sp.passes(), 8);
        assert!(sp.dists().iter().all(|&d| d != NEG_INF));
        assert_eq!(sp.reconstruct_path(1), PathResult::Path(vec![0, 1]));
        for v in 2..5 {
            assert_eq!(sp.reconstruct_path(v), PathResult::CycleAffected);
        }
        assert_eq!(sp.reconstruct_path(7), PathResult::Path(vec![0, 1, 5, 7]));
    }

    #[test]
    fn arbitrage_every_vertex_affected() {
        let g = mocks::mock_triangle();
        let sp = solve(&g, 0, Strategy::FrontierQueue);
        assert!(sp.is_diverged());
        for v in 0..3 {
            assert_eq!(sp.reconstruct_path(v), PathResult::CycleAffected);
        }
    }
}
