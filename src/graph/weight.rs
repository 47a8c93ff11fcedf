//!
//! Weight of paths and cycles
//!
use super::DenseGraph;
use crate::common::{Vertex, Weight, INF};
use itertools::Itertools; // for tuple_windows

///
/// Calculate total weight of path (a list of vertices).
///
/// Weights are summed from the first vertex, the same order as relaxation does,
/// so the result of a path in shortest paths equals its distance exactly.
/// Returns `None` if some consecutive pair has no edge.
///
pub fn total_weight(graph: &DenseGraph, path: &[Vertex]) -> Option<Weight> {
    let mut total = 0.0;
    for (v, w) in path.iter().tuple_windows() {
        let ew = graph.weight(*v, *w);
        if ew == INF {
            return None;
        }
        total += ew;
    }
    Some(total)
}

///
/// Calculate total weight of a cycle `v0 -> v1 -> ... -> vk -> v0`.
///
/// The closing edge `vk -> v0` is added.
///
pub fn cycle_weight(graph: &DenseGraph, cycle: &[Vertex]) -> Option<Weight> {
    match (cycle.first(), cycle.last()) {
        (Some(&head), Some(&tail)) => {
            let w = graph.weight(tail, head);
            if w == INF {
                None
            } else {
                total_weight(graph, cycle).map(|total| total + w)
            }
        }
        _ => None,
    }
}

///
/// Determine if a cycle given by vertices is a negative cycle or not.
///
pub fn is_negative_cycle(graph: &DenseGraph, cycle: &[Vertex]) -> bool {
    match cycle_weight(graph, cycle) {
        Some(w) => w < 0.0,
        None => false,
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::mocks;

    #[test]
    fn total_weight_of_paths() {
        let g = mocks::mock_currency();
        assert_eq!(total_weight(&g, &[0]), Some(0.0));
        assert_eq!(total_weight(&g, &[]), Some(0.0));
        // USD -> YEN -> CNY -> CHF
        assert_eq!(total_weight(&g, &[0, 2, 4, 1]), Some(7.0 - 3.0 - 2.0));
        // USD -> GBP does not exist
        assert_eq!(total_weight(&g, &[0, 3]), None);
    }

    #[test]
    fn negative_cycles() {
        let g = mocks::mock_negative_cycle();
        // YEN -> CNY -> GBP -> YEN
        assert_eq!(cycle_weight(&g, &[2, 4, 3]), Some(-1.0));
        assert!(is_negative_cycle(&g, &[2, 4, 3]));
        // not closed
        assert_eq!(cycle_weight(&g, &[2, 4]), None);
        assert!(!is_negative_cycle(&g, &[]));
        // self-loop of zero weight
        assert_eq!(cycle_weight(&g, &[5]), Some(0.0));
        assert!(!is_negative_cycle(&g, &[5]));
    }
}
