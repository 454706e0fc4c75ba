//! Command dispatch for the trellis CLI

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use trellis_core::error::{Result, TrellisError};
use trellis_core::graph::Graph;

use crate::cli::{AnalyzeArgs, Cli, Command, ConvertArgs, OutputFormat, PuzzleKind};
use crate::{reader, report, writer};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Command::Analyze(args)) => analyze(cli, args),
        Some(Command::Convert(args)) => convert(args),
        None => analyze(
            cli,
            &AnalyzeArgs {
                input: None,
                max_vertices: crate::cli::DEFAULT_MAX_VERTICES,
            },
        ),
    }
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|err| TrellisError::UnreadableInput {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn analyze(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let mut graph = reader::read_graph(open_input(args.input.as_deref())?)?;
    graph.analyze()?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        components = graph.component_count(),
        "analysis complete"
    );

    match cli.format {
        OutputFormat::Human => {
            print!("{}", report::render(&graph, args.max_vertices));
            print_traversal_footer(&mut graph);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&graph.summary())?);
        }
    }
    Ok(())
}

/// The shortest path to the last vertex and both traversal orders, in the
/// same trailing format the report has always used.
fn print_traversal_footer(graph: &mut Graph) {
    let last = graph.vertex_count().saturating_sub(1);
    let path = graph
        .get_path(0, last)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("->");
    println!("  shortest path from 0 to {}: {}", last, path);

    let mut order = Vec::new();
    graph.bfs(0, |vertex| {
        order.push(vertex.to_string());
        false
    });
    println!("  BFS traverse order: {}", order.join(" "));

    order.clear();
    graph.dfs(0, |vertex| {
        order.push(vertex.to_string());
        false
    });
    println!("  DFS traverse order: {}", order.join(" "));
}

fn convert(args: &ConvertArgs) -> Result<()> {
    let input = open_input(args.input.as_deref())?;
    let graph = match args.puzzle {
        PuzzleKind::Bender2 => reader::read_bender2(input)?,
        PuzzleKind::PlagueJr => reader::read_plague_jr(input)?,
        PuzzleKind::AStar => reader::read_a_star_exercise(input)?,
    };
    print!("{}", writer::write_graph(&graph));
    Ok(())
}
