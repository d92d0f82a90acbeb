//! CLI entry point for the `hopg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use hopgraph::cli::commands;
use hopgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "hopg",
    about = "hopgraph CLI — edit graph files and query shortest paths"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph file
    Create {
        /// Path to the graph file to create
        file: PathBuf,
        /// Edges are one-way
        #[arg(long)]
        directed: bool,
        /// Allow self-loop edges
        #[arg(long)]
        loops: bool,
    },
    /// Display information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Add a vertex
    AddVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Remove a vertex and all of its edges
    RemoveVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Add an edge between two existing vertices
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Destination vertex
        destination: String,
    },
    /// Remove an existing edge
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Destination vertex
        destination: String,
    },
    /// List the vertices adjacent to a vertex
    Neighbors {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex name
        vertex: String,
    },
    /// Print the shortest path between two vertices
    Path {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        source: String,
        /// Destination vertex
        destination: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Create {
            file,
            directed,
            loops,
        } => commands::cmd_create(&file, directed, loops),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::AddVertex { file, vertex } => commands::cmd_add_vertex(&file, &vertex, json),
        Commands::RemoveVertex { file, vertex } => {
            commands::cmd_remove_vertex(&file, &vertex, json)
        }
        Commands::AddEdge {
            file,
            source,
            destination,
        } => commands::cmd_add_edge(&file, &source, &destination, json),
        Commands::RemoveEdge {
            file,
            source,
            destination,
        } => commands::cmd_remove_edge(&file, &source, &destination, json),
        Commands::Neighbors { file, vertex } => commands::cmd_neighbors(&file, &vertex, json),
        Commands::Path {
            file,
            source,
            destination,
        } => commands::cmd_path(&file, &source, &destination, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Format(_) => 2,
            GraphError::VertexNotFound(_)
            | GraphError::LoopNotAllowed(_)
            | GraphError::EdgeNotFound { .. } => 4,
        };
        process::exit(code);
    }
}
