//!
//! Text output of solved paths
//!
//! ```text
//! /////// full: full relaxation ///////
//! Path from 0 to 1 is : 0(USD) 2(YEN) 4(CNY) 1(CHF)
//! ```
//!
use crate::common::Vertex;
use crate::engine::{PathResult, ShortestPaths, Strategy};
use crate::graph::DenseGraph;
use itertools::Itertools; // for join
use std::io::{self, Write};

pub fn strategy_title(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::FullRelaxation => "full relaxation",
        Strategy::ReachabilityGated => "reachability-gated relaxation",
        Strategy::CycleLocalization => "negative cycle localization",
        Strategy::FrontierQueue => "frontier queue",
    }
}

///
/// `0(USD) 2(YEN) 4(CNY)`
///
pub fn format_path(graph: &DenseGraph, path: &[Vertex]) -> String {
    path.iter()
        .map(|&v| format!("{}({})", v, graph.label(v)))
        .join(" ")
}

///
/// One line describing the result of a path query.
///
pub fn path_line(
    graph: &DenseGraph,
    source: Vertex,
    destination: Vertex,
    result: &PathResult,
) -> String {
    match result {
        PathResult::Path(path) => format!(
            "Path from {} to {} is : {}",
            source,
            destination,
            format_path(graph, path)
        ),
        PathResult::CycleAffected => format!(
            "Path from {} to {} is : Infinite number of shortest paths (negative cycle).",
            source, destination
        ),
        PathResult::Unreachable => format!(
            "Path from {} to {} is : Unreachable.",
            source, destination
        ),
        PathResult::NotSolved => "Not solved.".to_owned(),
    }
}

///
/// Write the verdict of a solve and a line for every destination.
///
pub fn write_report<W: Write>(
    out: &mut W,
    graph: &DenseGraph,
    sp: &ShortestPaths,
) -> io::Result<()> {
    writeln!(
        out,
        "/////// {}: {} ///////",
        sp.strategy(),
        strategy_title(sp.strategy())
    )?;
    if sp.has_negative_cycle() {
        writeln!(out, "Graph contains negative cycle.")?;
        if !sp.strategy().localizes_cycles() {
            writeln!(out, "Affected vertices are not localized by {}.", sp.strategy())?;
        }
    }
    if sp.is_diverged() {
        writeln!(
            out,
            "Queue did not drain in {} rounds (negative cycle suspected).",
            sp.n_vertices()
        )?;
    }
    let results = sp.reconstruct_all();
    for (destination, result) in results.iter().enumerate() {
        writeln!(
            out,
            "{}",
            path_line(graph, sp.source(), destination, result)
        )?;
    }
    writeln!(
        out,
        "{} of {} destinations have a shortest path.",
        results.iter().filter(|r| r.is_path()).count(),
        results.len()
    )?;
    Ok(())
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::solve;
    use crate::graph::mocks;

    #[test]
    fn lines() {
        let g = mocks::mock_currency();
        assert_eq!(
            path_line(&g, 0, 1, &PathResult::Path(vec![0, 2, 4, 1])),
            "Path from 0 to 1 is : 0(USD) 2(YEN) 4(CNY) 1(CHF)"
        );
        assert_eq!(
            path_line(&g, 0, 0, &PathResult::Path(vec![0])),
            "Path from 0 to 0 is : 0(USD)"
        );
        assert_eq!(
            path_line(&g, 0, 3, &PathResult::CycleAffected),
            "Path from 0 to 3 is : Infinite number of shortest paths (negative cycle)."
        );
        assert_eq!(
            path_line(&g, 2, 0, &PathResult::Unreachable),
            "Path from 2 to 0 is : Unreachable."
        );
        assert_eq!(path_line(&g, 0, 1, &PathResult::NotSolved), "Not solved.");
    }

    #[test]
    fn report_of_negative_cycle() {
        let g = mocks::mock_negative_cycle();
        let sp = solve(&g, 0, Strategy::CycleLocalization);
        let mut out = Vec::new();
        write_report(&mut out, &g, &sp).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2 + 8 + 1);
        assert_eq!(lines[0], "/////// localize: negative cycle localization ///////");
        assert_eq!(lines[1], "Graph contains negative cycle.");
        assert_eq!(lines[3], "Path from 0 to 1 is : 0(USD) 1(CHF)");
        assert_eq!(
            lines[4],
            "Path from 0 to 2 is : Infinite number of shortest paths (negative cycle)."
        );
        assert_eq!(lines[9], "Path from 0 to 7 is : 0(USD) 1(CHF) 5(EUR) 7(YYY)");
        assert_eq!(lines[10], "5 of 8 destinations have a shortest path.");
    }

    #[test]
    fn report_of_unsolved() {
        let g = mocks::mock_triangle();
        let sp = solve(&g, 0, Strategy::FullRelaxation);
        let mut out = Vec::new();
        write_report(&mut out, &g, &sp).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Graph contains negative cycle."));
        assert_eq!(text.matches("Not solved.").count(), 3);
        assert!(text.contains("Affected vertices are not localized by full."));
        assert!(text.contains("0 of 3 destinations have a shortest path."));
        let sp = solve(&g, 0, Strategy::FrontierQueue);
        let mut out = Vec::new();
        write_report(&mut out, &g, &sp).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Queue did not drain in 3 rounds"));
    }
}
