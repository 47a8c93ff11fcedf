//!
//! Example graphs
//!
//! * currency tables (with and without negative cycles)
//! * random graphs generated from a seed
//!
use super::DenseGraph;
use crate::common::{Vertex, INF};
use derive_new::new;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

const I: f64 = INF;

///
/// Currency graph with negative edges but no negative cycle.
///
/// ```text
///          USD  CHF  YEN  GBP  CNY
///     USD  0.0  6.0  7.0  INF  INF
///     CHF  INF  0.0  8.0 -4.0  5.0
///     YEN  INF  INF  0.0  9.0 -3.0
///     GBP  INF  INF  INF  0.0  7.0
///     CNY  INF -2.0  INF  INF  0.0
/// ```
///
/// From USD, the shortest path to CHF is USD -> YEN -> CNY -> CHF.
///
pub fn mock_currency() -> DenseGraph {
    DenseGraph::from_matrix(
        &["USD", "CHF", "YEN", "GBP", "CNY"],
        vec![
            vec![0.0, 6.0, 7.0, I, I],
            vec![I, 0.0, 8.0, -4.0, 5.0],
            vec![I, I, 0.0, 9.0, -3.0],
            vec![I, I, I, 0.0, 7.0],
            vec![I, -2.0, I, I, 0.0],
        ],
    )
}

///
/// Six vertices with negative edges but no negative cycle.
/// Intended to be solved from CNY (index 4).
///
pub fn mock_sedgewick() -> DenseGraph {
    DenseGraph::from_matrix(
        &["USD", "CHF", "YEN", "GBP", "CNY", "EUR"],
        vec![
            vec![0.0, 0.41, I, I, I, 0.29],
            vec![I, 0.0, 0.51, I, 0.32, I],
            vec![I, I, 0.0, 0.50, I, I],
            vec![0.45, I, I, 0.0, I, -0.38],
            vec![I, I, 0.32, 0.36, 0.0, I],
            vec![I, -0.29, I, I, 0.21, 0.0],
        ],
    )
}

///
/// Eight vertices with a negative cycle YEN -> CNY -> GBP -> YEN (weight -1).
///
/// ```text
/// USD -> CHF            CHF -> EUR, XXX (4.0)
/// CHF -> YEN            EUR -> XXX (5.0), YYY (3.0)
/// YEN -> CNY (1.0)      XXX -> YYY (4.0)
/// CNY -> GBP (-3.0)
/// GBP -> YEN (1.0)
/// ```
///
/// YEN, GBP and CNY are affected by the cycle, the others are not.
///
pub fn mock_negative_cycle() -> DenseGraph {
    DenseGraph::from_matrix(
        &["USD", "CHF", "YEN", "GBP", "CNY", "EUR", "XXX", "YYY"],
        vec![
            vec![0.0, 1.0, I, I, I, I, I, I],
            vec![I, 0.0, 1.0, I, I, 4.0, 4.0, I],
            vec![I, I, 0.0, I, 1.0, I, I, I],
            vec![I, I, 1.0, 0.0, I, I, I, I],
            vec![I, I, I, -3.0, 0.0, I, I, I],
            vec![I, I, I, I, I, 0.0, 5.0, 3.0],
            vec![I, I, I, I, I, I, 0.0, 4.0],
            vec![I, I, I, I, I, I, I, 0.0],
        ],
    )
}

///
/// Complete graph of log-rates of five currencies.
/// Every vertex lies on a negative cycle.
///
pub fn mock_arbitrage() -> DenseGraph {
    DenseGraph::from_matrix(
        &["USD", "CHF", "YEN", "GBP", "CNY"],
        vec![
            vec![0.0, 0.489, -0.402, -4.791, -0.378],
            vec![-0.489, 0.0, -0.891, -5.278, -0.865],
            vec![0.402, 0.89, 0.0, -4.391, 0.027],
            vec![4.791, 5.285, 4.392, 0.0, 4.418],
            vec![0.378, 0.865, -0.027, -4.415, 0.0],
        ],
    )
}

///
/// Complete graph of log-rates of five currencies without negative cycles.
/// Every shortest path from USD goes through YEN.
///
pub fn mock_arbitrage_free() -> DenseGraph {
    DenseGraph::from_matrix(
        &["USD", "CHF", "YEN", "GBP", "CNY"],
        vec![
            vec![0.0, 0.490, -0.402, 0.7, 0.413],
            vec![-0.489, 0.0, -0.891, 0.89, 0.360],
            vec![0.403, 0.891, 0.0, 0.91, 0.581],
            vec![0.340, 0.405, 0.607, 0.0, 0.72],
            vec![0.403, 0.350, 0.571, 0.71, 0.0],
        ],
    )
}

fn triangle(rows: [[f64; 3]; 3]) -> DenseGraph {
    DenseGraph::from_matrix(
        &["USD", "CHF", "YEN"],
        rows.iter().map(|row| row.to_vec()).collect(),
    )
}

///
/// Three currencies with a negative cycle through all of them.
///
pub fn mock_triangle() -> DenseGraph {
    triangle([
        [0.0, 0.489, -0.402],
        [-0.489, 0.0, -0.891],
        [0.402, 0.89, 0.0],
    ])
}

///
/// `mock_triangle` with slightly worse rates: no negative cycle,
/// CHF is reached directly from USD.
///
pub fn mock_triangle_direct() -> DenseGraph {
    triangle([
        [0.0, 0.490, -0.402],
        [-0.489, 0.0, -0.891],
        [0.403, 0.892, 0.0],
    ])
}

///
/// `mock_triangle` with slightly worse rates: no negative cycle,
/// CHF is reached through YEN.
///
pub fn mock_triangle_via_yen() -> DenseGraph {
    triangle([
        [0.0, 0.490, -0.402],
        [-0.489, 0.0, -0.891],
        [0.403, 0.891, 0.0],
    ])
}

///
/// Realistic log-rates with a negative cycle.
///
pub fn mock_real_cycle() -> DenseGraph {
    triangle([[0.0, 0.1, -5.01], [-0.09, 0.0, -5.1], [5.0, 5.09, 0.0]])
}

///
/// Realistic log-rates without a negative cycle.
///
pub fn mock_real() -> DenseGraph {
    triangle([[0.0, 0.12, -5.01], [-0.09, 0.0, -5.1], [5.02, 5.11, 0.0]])
}

///
/// Random graph with `n` vertices.
///
/// Each edge `i -> j` (`i != j`) exists with probability `p_edge`,
/// its weight is uniform in `[-2, 5)` and rounded to 0.01. Negative cycles can appear.
///
pub fn mock_random(n: usize, p_edge: f64, seed: u64) -> DenseGraph {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut graph = DenseGraph::new();
    for i in 0..n {
        graph.add_vertex(format!("v{}", i));
    }
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen_bool(p_edge) {
                let w: f64 = rng.gen_range(-2.0..5.0);
                graph.set_edge(i, j, (w * 100.0).round() / 100.0);
            }
        }
    }
    graph
}

///
/// Random graph with negative edges but without negative cycles.
///
/// Weights are `c + p[i] - p[j]` for random non-negative `c` and potentials `p`,
/// so any cycle has the weight `sum(c) >= 0`.
///
pub fn mock_random_without_negative_cycle(n: usize, p_edge: f64, seed: u64) -> DenseGraph {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let potentials: Vec<f64> = (0..n).map(|_| rng.gen_range(0..8) as f64).collect();
    let mut graph = DenseGraph::new();
    for i in 0..n {
        graph.add_vertex(format!("v{}", i));
    }
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen_bool(p_edge) {
                let c = rng.gen_range(0..5) as f64;
                graph.set_edge(i, j, c + potentials[i] - potentials[j]);
            }
        }
    }
    graph
}

///
/// A named example graph with its source vertex.
///
#[derive(Debug, Clone, new)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub graph: DenseGraph,
    pub source: Vertex,
}

///
/// All example graphs, in the order they are shown by the command line tool.
///
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "currency",
            "simple graph without negative cycles",
            mock_currency(),
            0,
        ),
        Scenario::new(
            "sedgewick",
            "six currencies without negative cycles",
            mock_sedgewick(),
            4,
        ),
        Scenario::new(
            "negative-cycle",
            "graph with negative cycle YEN -> CNY -> GBP",
            mock_negative_cycle(),
            0,
        ),
        Scenario::new(
            "arbitrage",
            "log-rates of five currencies with arbitrage",
            mock_arbitrage(),
            0,
        ),
        Scenario::new(
            "triangle",
            "log-rates of three currencies with arbitrage",
            mock_triangle(),
            0,
        ),
        Scenario::new(
            "triangle-direct",
            "log-rates of three currencies without arbitrage",
            mock_triangle_direct(),
            0,
        ),
        Scenario::new(
            "triangle-via-yen",
            "log-rates of three currencies without arbitrage",
            mock_triangle_via_yen(),
            0,
        ),
        Scenario::new(
            "arbitrage-free",
            "log-rates of five currencies without arbitrage",
            mock_arbitrage_free(),
            0,
        ),
        Scenario::new(
            "real-cycle",
            "realistic log-rates with arbitrage",
            mock_real_cycle(),
            0,
        ),
        Scenario::new(
            "real",
            "realistic log-rates without arbitrage",
            mock_real(),
            0,
        ),
    ]
}

/// find an example by its name
pub fn find_scenario(name: &str) -> Option<Scenario> {
    scenarios().into_iter().find(|s| s.name == name)
}

//
// tests
//
