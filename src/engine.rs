//!
//! Shortest paths with negative weights
//!
//! Four relaxation strategies share one solve state `ShortestPaths`:
//!
//! * `Strategy::FullRelaxation`: Bellman-Ford over all pairs, global cycle check
//! * `Strategy::ReachabilityGated`: relax only from reached vertices, cycle check on the last pass
//! * `Strategy::CycleLocalization`: second phase marks every vertex affected by a negative cycle
//! * `Strategy::FrontierQueue`: FIFO queue of improved vertices, round-bounded
//!
//! ```
//! use negcycle::engine::{solve, PathResult, Strategy};
//! use negcycle::graph::mocks::mock_negative_cycle;
//!
//! let g = mock_negative_cycle();
//! let sp = solve(&g, 0, Strategy::CycleLocalization);
//! assert!(sp.has_negative_cycle());
//! assert_eq!(sp.reconstruct_path(1), PathResult::Path(vec![0, 1]));
//! assert_eq!(sp.reconstruct_path(2), PathResult::CycleAffected);
//! ```
//!
pub mod frontier;
pub mod full;
pub mod gated;
pub mod localize;
pub mod path;

pub use path::PathResult;

use crate::common::{Vertex, Weight, INF, NEG_INF};
use crate::graph::DenseGraph;
use derive_new::new;
use log::info;
use rayon::prelude::*;
use std::str::FromStr;

///
/// Relaxation strategy
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `n-1` passes over all pairs with early exit, then one detection pass.
    /// Detects a cycle but does not tell which vertices it affects.
    FullRelaxation,
    /// passes that relax only from the source or vertices with a predecessor.
    /// A cycle is reported only if the `n`-th pass still updates.
    ReachabilityGated,
    /// `n-1` passes, then passes that mark vertices that can still be relaxed.
    /// The only strategy with per-vertex cycle information.
    CycleLocalization,
    /// relax out-edges of improved vertices round by round.
    /// Assumes no negative cycles; stops after `n` rounds without a verdict.
    FrontierQueue,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::FullRelaxation,
        Strategy::ReachabilityGated,
        Strategy::CycleLocalization,
        Strategy::FrontierQueue,
    ];
    /// short name used in command line and logs
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FullRelaxation => "full",
            Strategy::ReachabilityGated => "gated",
            Strategy::CycleLocalization => "localize",
            Strategy::FrontierQueue => "queue",
        }
    }
    /// `true` if `CycleAffected` can be answered per vertex
    pub fn localizes_cycles(&self) -> bool {
        *self == Strategy::CycleLocalization
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                format!(
                    "unknown strategy `{}` (expected one of full, gated, localize, queue)",
                    s
                )
            })
    }
}

///
/// Predecessor of a vertex on its best known path
///
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Predecessor {
    /// no path found yet, or the vertex is the source
    Unset,
    /// the previous vertex
    Vertex(Vertex),
    /// the vertex is reachable through a negative cycle
    NegativeCycle,
}

impl Predecessor {
    pub fn is_vertex(&self) -> bool {
        matches!(self, Predecessor::Vertex(_))
    }
}

///
/// State of one solve: distances and predecessors from `source`.
///
/// Created by `solve` for a (graph, source, strategy) and never reused.
///
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    strategy: Strategy,
    source: Vertex,
    ///
    /// `dists[v]`: best known distance from source to `v`.
    /// `INF` if not reached, `NEG_INF` if affected by a negative cycle.
    ///
    dists: Vec<Weight>,
    ///
    /// `preds[v]`: last edge of the best known path is `preds[v] -> v`
    ///
    preds: Vec<Predecessor>,
    /// distances are final and paths can be queried
    solved: bool,
    has_negative_cycle: bool,
    /// frontier queue did not drain within `n` rounds
    diverged: bool,
    /// the number of passes (or rounds) performed
    passes: usize,
}

impl ShortestPaths {
    ///
    /// Initial state: `dists[source] = 0` and all others `INF`.
    ///
    /// # Panics
    ///
    /// if `source` is out of range.
    ///
    fn init(n: usize, source: Vertex, strategy: Strategy) -> Self {
        assert!(
            source < n,
            "source {} is out of range (n={})",
            source,
            n
        );
        let mut dists = vec![INF; n];
        dists[source] = 0.0;
        ShortestPaths {
            strategy,
            source,
            dists,
            preds: vec![Predecessor::Unset; n],
            solved: false,
            has_negative_cycle: false,
            diverged: false,
            passes: 0,
        }
    }
    ///
    /// Candidate distance of `to` through the edge `from -> to`.
    ///
    /// `None` if the edge does not exist or `from` is not reached,
    /// so `INF` never takes part in the arithmetic.
    ///
    fn candidate(&self, graph: &DenseGraph, from: Vertex, to: Vertex) -> Option<Weight> {
        let w = graph.weight(from, to);
        if w == INF || self.dists[from] == INF {
            None
        } else {
            let d = self.dists[from] + w;
            debug_assert!(
                d.is_finite() || self.dists[from] == NEG_INF,
                "distance overflow on {}->{}",
                from,
                to
            );
            Some(d)
        }
    }
    ///
    /// Relax the edge `from -> to`. Returns `true` if `to` was updated.
    ///
    fn relax(&mut self, graph: &DenseGraph, from: Vertex, to: Vertex) -> bool {
        match self.candidate(graph, from, to) {
            Some(d) if d < self.dists[to] => {
                self.dists[to] = d;
                self.preds[to] = Predecessor::Vertex(from);
                true
            }
            _ => false,
        }
    }
    ///
    /// One pass over all ordered pairs. Returns `true` if any vertex was updated.
    ///
    fn relax_all(&mut self, graph: &DenseGraph) -> bool {
        let n = self.n_vertices();
        let mut updated = false;
        for from in 0..n {
            for to in 0..n {
                updated |= self.relax(graph, from, to);
            }
        }
        updated
    }
    ///
    /// Check whether any edge can still be relaxed, without modifying the state.
    ///
    fn has_relaxable_edge(&self, graph: &DenseGraph) -> bool {
        let n = self.n_vertices();
        (0..n).any(|from| {
            (0..n).any(|to| match self.candidate(graph, from, to) {
                Some(d) => d < self.dists[to],
                None => false,
            })
        })
    }
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    pub fn source(&self) -> Vertex {
        self.source
    }
    pub fn n_vertices(&self) -> usize {
        self.dists.len()
    }
    pub fn dist(&self, v: Vertex) -> Weight {
        self.dists[v]
    }
    pub fn dists(&self) -> &[Weight] {
        &self.dists
    }
    pub fn pred(&self, v: Vertex) -> Predecessor {
        self.preds[v]
    }
    pub fn preds(&self) -> &[Predecessor] {
        &self.preds
    }
    pub fn is_solved(&self) -> bool {
        self.solved
    }
    pub fn has_negative_cycle(&self) -> bool {
        self.has_negative_cycle
    }
    pub fn is_diverged(&self) -> bool {
        self.diverged
    }
    pub fn passes(&self) -> usize {
        self.passes
    }
    ///
    /// Vertices marked as affected by a negative cycle.
    /// Always empty except for `Strategy::CycleLocalization`.
    ///
    pub fn cycle_affected(&self) -> Vec<Vertex> {
        self.preds
            .iter()
            .enumerate()
            .filter(|(_, p)| **p == Predecessor::NegativeCycle)
            .map(|(v, _)| v)
            .collect()
    }
}

///
/// Compute shortest paths from `source` with the strategy.
///
/// # Panics
///
/// if `source` is out of range.
///
pub fn solve(graph: &DenseGraph, source: Vertex, strategy: Strategy) -> ShortestPaths {
    let mut sp = ShortestPaths::init(graph.n_vertices(), source, strategy);
    let has_negative_cycle = match strategy {
        Strategy::FullRelaxation => full::full_relaxation(graph, &mut sp),
        Strategy::ReachabilityGated => gated::reachability_gated(graph, &mut sp),
        Strategy::CycleLocalization => localize::cycle_localization(graph, &mut sp),
        Strategy::FrontierQueue => frontier::frontier_queue(graph, &mut sp),
    };
    debug_assert_eq!(has_negative_cycle, sp.has_negative_cycle);
    info!(
        "solve: strategy={} source={} n={} passes={} solved={} negative_cycle={}",
        strategy,
        source,
        graph.n_vertices(),
        sp.passes,
        sp.solved,
        has_negative_cycle
    );
    sp
}

///
/// Solve with all strategies on the same graph in parallel.
///
/// The graph is only read, and each solve owns its state.
/// Results are in the order of `Strategy::ALL`.
///
pub fn solve_all(graph: &DenseGraph, source: Vertex) -> Vec<ShortestPaths> {
    let strategies: &[Strategy] = &Strategy::ALL;
    strategies
        .par_iter()
        .map(|&strategy| solve(graph, source, strategy))
        .collect()
}

///
/// Solver with a fixed strategy that keeps the state of the last solve.
///
/// ```
/// use negcycle::engine::{PathFinder, PathResult, Strategy};
/// use negcycle::graph::mocks::mock_currency;
///
/// let g = mock_currency();
/// let mut finder = PathFinder::new(Strategy::FullRelaxation);
/// assert_eq!(finder.reconstruct_path(0, 1), PathResult::NotSolved);
/// assert!(!finder.solve(&g, 0));
/// assert_eq!(finder.reconstruct_path(0, 1), PathResult::Path(vec![0, 2, 4, 1]));
/// ```
///
#[derive(Debug, Clone, new)]
pub struct PathFinder {
    strategy: Strategy,
    #[new(default)]
    state: Option<ShortestPaths>,
}

impl PathFinder {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
    ///
    /// Solve from `source`, discarding the previous state.
    /// Returns `true` if a negative cycle was detected.
    ///
    pub fn solve(&mut self, graph: &DenseGraph, source: Vertex) -> bool {
        let sp = solve(graph, source, self.strategy);
        let has_negative_cycle = sp.has_negative_cycle();
        self.state = Some(sp);
        has_negative_cycle
    }
    ///
    /// Path from `source` to `destination` in the last solve.
    ///
    /// `NotSolved` if `solve` has not been called or did not finish.
    ///
    /// # Panics
    ///
    /// if `source` differs from the source of the last solve.
    ///
    pub fn reconstruct_path(&self, source: Vertex, destination: Vertex) -> PathResult {
        match &self.state {
            Some(sp) => {
                assert_eq!(
                    sp.source(),
                    source,
                    "paths were solved from {}, not from {}",
                    sp.source(),
                    source
                );
                sp.reconstruct_path(destination)
            }
            None => PathResult::NotSolved,
        }
    }
    /// state of the last solve
    pub fn state(&self) -> Option<&ShortestPaths> {
        self.state.as_ref()
    }
}

//
// tests
//
