mod input;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use spanning::algo;
use spanning::report::{self, ComparisonRow};
use spanning::{Algorithm, Edge, Graph, SpanningTree, Vertex};

use crate::input::GraphArgs;

/// Build a weighted graph and compute its minimum spanning tree.
#[derive(Parser)]
#[command(name = "mst", version)]
struct Cli {
    /// Only log warnings and errors (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute a spanning tree with one algorithm.
    Solve {
        #[command(flatten)]
        graph: GraphArgs,
        /// Algorithm: prim, kruskal, boruvka.
        #[arg(short, long, default_value = "kruskal")]
        algorithm: Algorithm,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Also save the text export to this file.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Run every algorithm on the same graph and compare the results.
    Compare {
        #[command(flatten)]
        graph: GraphArgs,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct SolveOutput<'a> {
    algorithm: Algorithm,
    total_weight: f64,
    elapsed_ms: f64,
    complexity: String,
    spans: bool,
    tree: Vec<OutputEdge>,
    vertices: &'a [Vertex],
    edges: &'a [Edge],
}

#[derive(Serialize)]
struct OutputEdge {
    source: u32,
    destination: u32,
    weight: f64,
}

#[derive(Serialize)]
struct CompareOutput {
    vertices: usize,
    edges: usize,
    connected: bool,
    weights_agree: bool,
    results: Vec<ComparisonRow>,
}

/// Tolerance for the cross-algorithm total weight check.
const WEIGHT_TOLERANCE: f64 = 1e-9;

fn init_tracing(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if quiet { "warn" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match cli.command {
        Command::Solve {
            graph,
            algorithm,
            format,
            output,
        } => cmd_solve(&graph, algorithm, format, output),
        Command::Compare { graph, format } => cmd_compare(&graph, format),
    }
}

fn cmd_solve(
    args: &GraphArgs,
    algorithm: Algorithm,
    format: Format,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut graph = args.build()?;
    args.check_solvable(&graph)?;

    let tree = algorithm.find_mst(&graph);
    graph.mark_spanning_tree(&tree);
    tracing::info!(
        %algorithm,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        total_weight = tree.total_weight(),
        "solved"
    );

    match format {
        Format::Text => print!("{}", report::export_text(&tree)),
        Format::Json => {
            let out = solve_output(&graph, &tree);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    if let Some(path) = output {
        report::save_text(&path, &tree)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved result");
    }
    Ok(())
}

fn solve_output<'a>(graph: &'a Graph, tree: &SpanningTree) -> SolveOutput<'a> {
    SolveOutput {
        algorithm: tree.algorithm(),
        total_weight: tree.total_weight(),
        elapsed_ms: tree.elapsed_ms(),
        complexity: tree.algorithm().complexity_formula(graph),
        spans: tree.spans(graph),
        tree: tree
            .edges()
            .iter()
            .map(|e| OutputEdge {
                source: e.source.id,
                destination: e.destination.id,
                weight: e.weight,
            })
            .collect(),
        vertices: graph.vertices(),
        edges: graph.edges(),
    }
}

fn cmd_compare(args: &GraphArgs, format: Format) -> Result<()> {
    let graph = args.build()?;
    args.check_solvable(&graph)?;

    let rows = report::comparison_rows(&algo::compare(&graph), &graph);
    let agree = report::weights_agree(&rows, WEIGHT_TOLERANCE);

    match format {
        Format::Text => report::print_comparison(&rows),
        Format::Json => {
            let out = CompareOutput {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                connected: graph.is_connected(),
                weights_agree: agree,
                results: rows,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }

    if !agree {
        bail!("algorithms disagree on the total weight");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solve() {
        let cli = Cli::try_parse_from([
            "mst", "solve", "--edge", "1-2:1", "--edge", "2-3:2", "-a", "prim", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Command::Solve {
                graph,
                algorithm,
                format,
                output,
            } => {
                assert_eq!(graph.edges.len(), 2);
                assert_eq!(algorithm, Algorithm::Prim);
                assert_eq!(format, Format::Json);
                assert!(output.is_none());
            }
            Command::Compare { .. } => panic!("expected solve"),
        }
    }

    #[test]
    fn solve_defaults_to_kruskal_text() {
        let cli = Cli::try_parse_from(["mst", "solve", "--edge", "1-2:1"]).unwrap();
        let Command::Solve {
            algorithm, format, ..
        } = cli.command
        else {
            panic!("expected solve");
        };
        assert_eq!(algorithm, Algorithm::Kruskal);
        assert_eq!(format, Format::Text);
    }

    #[test]
    fn parse_compare_generated() {
        let cli = Cli::try_parse_from([
            "mst", "-q", "compare", "--generate", "20", "--seed", "3",
        ])
        .unwrap();
        assert!(cli.quiet);
        let Command::Compare { graph, .. } = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(graph.generate, Some(20));
        assert_eq!(graph.seed, Some(3));
    }

    #[test]
    fn reject_bad_arguments() {
        assert!(Cli::try_parse_from(["mst", "solve", "--edge", "1-2"]).is_err());
        assert!(Cli::try_parse_from(["mst", "solve", "-a", "dijkstra"]).is_err());
        assert!(Cli::try_parse_from(["mst", "solve", "--seed", "1"]).is_err());
        assert!(
            Cli::try_parse_from(["mst", "solve", "--generate", "5", "--edge", "1-2:1"]).is_err()
        );
    }

    #[test]
    fn json_output_marks_tree_edges() {
        let cli = Cli::try_parse_from([
            "mst", "solve", "--edge", "1-2:1", "--edge", "2-3:2", "--edge", "1-3:5",
        ])
        .unwrap();
        let Command::Solve { graph: args, .. } = cli.command else {
            panic!("expected solve");
        };
        let mut graph = args.build().unwrap();
        let tree = Algorithm::Boruvka.find_mst(&graph);
        graph.mark_spanning_tree(&tree);
        let json = serde_json::to_value(solve_output(&graph, &tree)).unwrap();
        assert_eq!(json["algorithm"], "boruvka");
        assert_eq!(json["total_weight"], 3.0);
        assert_eq!(json["tree"].as_array().unwrap().len(), 2);
        let marked = json["edges"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|e| e["in_spanning_tree"] == true)
            .count();
        assert_eq!(marked, 2);
    }
}
