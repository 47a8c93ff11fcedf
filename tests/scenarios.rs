//!
//! paths of example graphs
//!
#[macro_use]
extern crate approx;

use negcycle::graph::mocks::{self, find_scenario, scenarios};
use negcycle::graph::weight::total_weight;
use negcycle::prelude::*;
use test_case::test_case;

fn paths(v: &[&[usize]]) -> Vec<PathResult> {
    v.iter().map(|p| PathResult::Path(p.to_vec())).collect()
}

fn check_paths(name: &str, strategy: Strategy, expected: Vec<PathResult>) {
    let s = find_scenario(name).unwrap();
    let sp = solve(&s.graph, s.source, strategy);
    assert_eq!(sp.reconstruct_all(), expected, "{} {}", name, strategy);
}

#[test_case(Strategy::FullRelaxation ; "full")]
#[test_case(Strategy::ReachabilityGated ; "gated")]
#[test_case(Strategy::CycleLocalization ; "localize")]
#[test_case(Strategy::FrontierQueue ; "queue")]
fn graphs_without_negative_cycle(strategy: Strategy) {
    check_paths(
        "currency",
        strategy,
        paths(&[&[0], &[0, 2, 4, 1], &[0, 2], &[0, 2, 4, 1, 3], &[0, 2, 4]]),
    );
    check_paths(
        "sedgewick",
        strategy,
        paths(&[
            &[4, 3, 0],
            &[4, 3, 5, 1],
            &[4, 3, 5, 1, 2],
            &[4, 3],
            &[4],
            &[4, 3, 5],
        ]),
    );
    check_paths(
        "triangle-direct",
        strategy,
        paths(&[&[0], &[0, 1], &[0, 2]]),
    );
    check_paths(
        "triangle-via-yen",
        strategy,
        paths(&[&[0], &[0, 2, 1], &[0, 2]]),
    );
    check_paths(
        "arbitrage-free",
        strategy,
        paths(&[&[0], &[0, 2, 1], &[0, 2], &[0, 2, 3], &[0, 2, 4]]),
    );
    check_paths("real", strategy, paths(&[&[0], &[0, 2, 1], &[0, 2]]));
}

#[test_case(Strategy::FullRelaxation ; "full")]
#[test_case(Strategy::ReachabilityGated ; "gated")]
#[test_case(Strategy::CycleLocalization ; "localize")]
#[test_case(Strategy::FrontierQueue ; "queue")]
fn distances_without_negative_cycle(strategy: Strategy) {
    let g = mocks::mock_sedgewick();
    let sp = solve(&g, 4, strategy);
    assert!(sp.is_solved());
    assert!(!sp.has_negative_cycle());
    assert!(!sp.is_diverged());
    let expected = [0.81, -0.31, 0.2, 0.36, 0.0, -0.02];
    for v in 0..6 {
        assert_abs_diff_eq!(sp.dist(v), expected[v], epsilon = 1e-9);
    }
    // weight along the path is the distance
    for v in 0..6 {
        let path = sp.reconstruct_path(v);
        let w = total_weight(&g, path.path().unwrap()).unwrap();
        assert_eq!(w, sp.dist(v));
    }
}

#[test_case("arbitrage")]
#[test_case("triangle")]
#[test_case("real-cycle")]
fn arbitrage_tables(name: &str) {
    let s = find_scenario(name).unwrap();
    let n = s.graph.n_vertices();

    for &strategy in [Strategy::FullRelaxation, Strategy::ReachabilityGated].iter() {
        let sp = solve(&s.graph, s.source, strategy);
        assert!(sp.has_negative_cycle());
        assert!(!sp.is_solved());
        assert_eq!(sp.reconstruct_all(), vec![PathResult::NotSolved; n]);
    }

    // every currency is on an arbitrage loop
    let sp = solve(&s.graph, s.source, Strategy::CycleLocalization);
    assert!(sp.has_negative_cycle());
    assert!(sp.dists().iter().all(|&d| d == NEG_INF));
    assert_eq!(sp.reconstruct_all(), vec![PathResult::CycleAffected; n]);

    let sp = solve(&s.graph, s.source, Strategy::FrontierQueue);
    assert!(sp.is_diverged());
    assert_eq!(sp.reconstruct_all(), vec![PathResult::CycleAffected; n]);
}

#[test]
fn negative_cycle_of_eight_vertices() {
    let g = mocks::mock_negative_cycle();
    let localized = vec![
        PathResult::Path(vec![0]),
        PathResult::Path(vec![0, 1]),
        PathResult::CycleAffected,
        PathResult::CycleAffected,
        PathResult::CycleAffected,
        PathResult::Path(vec![0, 1, 5]),
        PathResult::Path(vec![0, 1, 6]),
        PathResult::Path(vec![0, 1, 5, 7]),
    ];

    let sp = solve(&g, 0, Strategy::FullRelaxation);
    assert!(sp.has_negative_cycle());
    assert_eq!(sp.reconstruct_all(), vec![PathResult::NotSolved; 8]);

    let sp = solve(&g, 0, Strategy::ReachabilityGated);
    assert!(sp.has_negative_cycle());
    assert_eq!(sp.passes(), 8);
    assert_eq!(sp.reconstruct_all(), vec![PathResult::NotSolved; 8]);

    let sp = solve(&g, 0, Strategy::CycleLocalization);
    assert!(sp.has_negative_cycle());
    assert_eq!(sp.reconstruct_all(), localized);

    let sp = solve(&g, 0, Strategy::FrontierQueue);
    assert!(!sp.has_negative_cycle());
    assert!(sp.is_diverged());
    assert_eq!(sp.reconstruct_all(), localized);
}

#[test]
fn every_scenario_runs_with_every_strategy() {
    for s in scenarios() {
        let n = s.graph.n_vertices();
        for &strategy in Strategy::ALL.iter() {
            let sp = solve(&s.graph, s.source, strategy);
            assert_eq!(sp.n_vertices(), n);
            assert_eq!(sp.reconstruct_all().len(), n);
            if sp.is_solved() {
                assert_ne!(sp.reconstruct_path(s.source), PathResult::NotSolved);
            }
        }
    }
}

#[test]
fn path_finder_on_currency() {
    let g = mocks::mock_currency();
    for &strategy in Strategy::ALL.iter() {
        let mut finder = PathFinder::new(strategy);
        assert!(!finder.solve(&g, 0));
        assert_eq!(
            finder.reconstruct_path(0, 1),
            PathResult::Path(vec![0, 2, 4, 1])
        );
    }
}

#[test]
fn graph_built_from_scratch() {
    let mut g = DenseGraph::new();
    let usd = g.add_vertex("USD");
    let eur = g.add_vertex("EUR");
    let jpy = g.add_vertex("JPY");
    g.set_edge(usd, eur, 1.0);
    g.set_edge(eur, jpy, -2.0);
    g.set_edge(usd, jpy, 0.0);
    let sp = solve(&g, usd, Strategy::FullRelaxation);
    assert_eq!(sp.reconstruct_path(jpy), PathResult::Path(vec![0, 1, 2]));
    assert_eq!(sp.dist(jpy), -1.0);

    // clear and rebuild
    g.clear();
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    g.set_edge(b, a, 1.0);
    let sp = solve(&g, a, Strategy::FullRelaxation);
    assert_eq!(sp.reconstruct_path(b), PathResult::Unreachable);
    assert_eq!(sp.dist(b), INF);
}
