use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use negcycle::engine::{solve, solve_all, Strategy};
use negcycle::graph::mocks::{find_scenario, scenarios, Scenario};
use negcycle::graph::DenseGraph;
use negcycle::io::{from_json_file, resolve_vertex};
use negcycle::report::write_report;
use std::io::Write;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    /// Name of a built-in example graph. All of them are run if neither
    /// a fixture nor a graph file is given.
    #[clap(short, long, conflicts_with = "graph")]
    fixture: Option<String>,
    /// JSON graph file
    #[clap(short, long)]
    graph: Option<std::path::PathBuf>,
    /// Source vertex (label or index) overriding the one of the graph
    #[clap(short, long)]
    source: Option<String>,
    /// full, gated, localize, queue, or all
    #[clap(short, long, default_value = "all")]
    algorithm: String,
    /// Write the graph as JSON into the file (needs a fixture or a graph file)
    #[clap(long)]
    dump_json: Option<std::path::PathBuf>,
    /// List built-in example graphs and exit
    #[clap(short, long)]
    list: bool,
}

fn parse_algorithm(algorithm: &str) -> Result<Vec<Strategy>> {
    if algorithm == "all" {
        Ok(Strategy::ALL.to_vec())
    } else {
        let strategy: Strategy = algorithm.parse().map_err(|e: String| anyhow!(e))?;
        Ok(vec![strategy])
    }
}

///
/// Validate option combinations and return the strategies to run.
///
fn check_opts(opts: &Opts) -> Result<Vec<Strategy>> {
    if opts.dump_json.is_some() && opts.fixture.is_none() && opts.graph.is_none() {
        bail!("--dump-json needs a single graph given by --fixture or --graph");
    }
    parse_algorithm(&opts.algorithm)
}

fn run<W: Write>(
    out: &mut W,
    graph: &DenseGraph,
    source: usize,
    strategies: &[Strategy],
) -> Result<()> {
    let results = if strategies.len() == Strategy::ALL.len() {
        solve_all(graph, source)
    } else {
        strategies
            .iter()
            .map(|&strategy| solve(graph, source, strategy))
            .collect()
    };
    for sp in results.iter() {
        write_report(out, graph, sp)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();
    let strategies = check_opts(&opts)?;

    if opts.list {
        for s in scenarios() {
            println!("{}\t{}", s.name, s.description);
        }
        return Ok(());
    }

    let targets: Vec<Scenario> = match (&opts.fixture, &opts.graph) {
        (Some(name), _) => {
            vec![find_scenario(name).ok_or_else(|| anyhow!("unknown fixture `{}`", name))?]
        }
        (None, Some(path)) => {
            let (graph, source) = from_json_file(path)
                .with_context(|| format!("failed to load graph from {}", path.display()))?;
            vec![Scenario::new("file", "graph from file", graph, source)]
        }
        (None, None) => scenarios(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for target in targets.iter() {
        let source = match &opts.source {
            Some(name) => match resolve_vertex(&target.graph, name) {
                Some(v) => v,
                None => bail!("unknown source vertex `{}` in {}", name, target.name),
            },
            None => target.source,
        };
        if let Some(path) = &opts.dump_json {
            target
                .graph
                .to_json_file(Some(source), path)
                .with_context(|| format!("failed to write graph to {}", path.display()))?;
        }
        writeln!(
            out,
            "####### {} ({}, source={}) #######",
            target.name, target.description, source
        )?;
        run(&mut out, &target.graph, source, &strategies)?;
    }
    Ok(())
}

//
// tests
//
