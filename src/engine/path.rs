//!
//! Path reconstruction from predecessors
//!
use super::{Predecessor, ShortestPaths};
use crate::common::{Vertex, INF, NEG_INF};
use serde::{Deserialize, Serialize};

///
/// Answer to a path query
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathResult {
    /// vertices from source to destination, both included
    Path(Vec<Vertex>),
    /// the destination is reachable through a negative cycle,
    /// so no shortest path exists
    CycleAffected,
    /// the destination is not reachable from source
    Unreachable,
    /// the solve did not finish (a negative cycle was detected but not localized)
    NotSolved,
}

impl PathResult {
    pub fn is_path(&self) -> bool {
        matches!(self, PathResult::Path(_))
    }
    pub fn path(&self) -> Option<&[Vertex]> {
        match self {
            PathResult::Path(path) => Some(path),
            _ => None,
        }
    }
}

impl ShortestPaths {
    ///
    /// Shortest path from the source to `destination`.
    ///
    /// Walks predecessors backward from `destination` until the source.
    /// The walk is bounded by `n` vertices: a longer walk is a loop of
    /// predecessors, which only a diverged frontier queue can leave behind.
    ///
    /// # Panics
    ///
    /// if `destination` is out of range, or predecessors form a loop
    /// in a state that is not diverged.
    ///
    pub fn reconstruct_path(&self, destination: Vertex) -> PathResult {
        let n = self.n_vertices();
        assert!(
            destination < n,
            "destination {} is out of range (n={})",
            destination,
            n
        );
        if !self.solved {
            return PathResult::NotSolved;
        }
        if self.dists[destination] == NEG_INF
            || self.preds[destination] == Predecessor::NegativeCycle
        {
            return PathResult::CycleAffected;
        }
        if self.dists[destination] == INF {
            return PathResult::Unreachable;
        }

        let mut path = vec![destination];
        let mut at = destination;
        loop {
            match self.preds[at] {
                Predecessor::Unset => break,
                Predecessor::NegativeCycle => return PathResult::CycleAffected,
                Predecessor::Vertex(prev) => {
                    if path.len() == n {
                        assert!(
                            self.diverged,
                            "predecessors of {} form a loop without divergence",
                            destination
                        );
                        return PathResult::CycleAffected;
                    }
                    path.push(prev);
                    at = prev;
                }
            }
        }
        assert_eq!(
            at, self.source,
            "predecessors of {} end at {} instead of the source",
            destination, at
        );
        path.reverse();
        PathResult::Path(path)
    }
    ///
    /// `reconstruct_path` for every vertex in index order.
    ///
    pub fn reconstruct_all(&self) -> Vec<PathResult> {
        (0..self.n_vertices())
            .map(|v| self.reconstruct_path(v))
            .collect()
    }
}

//
// tests
//
