use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Default number of vertices shown in report tables
pub const DEFAULT_MAX_VERTICES: usize = 100;

#[derive(Parser, Debug)]
#[command(
    name = "trellis",
    version,
    about = "Graph analysis: degrees, components, shortest paths and traversals"
)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Multi-column report
    Human,
    /// Serialized analysis summary
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a graph description and print the results
    Analyze(AnalyzeArgs),
    /// Convert a puzzle input into the graph description format
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Graph description file (stdin when omitted)
    pub input: Option<PathBuf>,

    /// Maximum vertices shown in report tables
    #[arg(long, default_value_t = DEFAULT_MAX_VERTICES)]
    pub max_vertices: usize,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Puzzle input kind
    #[arg(long, value_enum)]
    pub puzzle: PuzzleKind,

    /// Puzzle input file (stdin when omitted)
    pub input: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum PuzzleKind {
    /// Bender episode 2: weighted rooms with an exit
    Bender2,
    /// Plague Jr: undirected infection tree
    PlagueJr,
    /// A* exercise: weighted undirected graph with heuristic scores
    AStar,
}
