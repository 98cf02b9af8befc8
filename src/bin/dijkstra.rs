use std::{error::Error, path::PathBuf};

use clap::Parser;
use relaxed_paths::{
    graphs::{graph_factory::GraphFactory, Vertex},
    logging::init_tracing,
    search::{
        collections::{distance_table::TableKind, frontier::FrontierKind, visited::VisitedKind},
        dijkstra::ShortestPathEngine,
        options::SearchOptions,
    },
};

/// Computes shortest path distances from one source vertex.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.fmi`, `.gr` or `.bincode` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Source vertex
    #[arg(short, long)]
    source: Vertex,
    /// Only print the distance and path to this vertex
    #[arg(short, long)]
    target: Option<Vertex>,
    #[arg(long, value_enum, default_value_t = FrontierKind::default())]
    frontier: FrontierKind,
    #[arg(long, value_enum, default_value_t = TableKind::default())]
    table: TableKind,
    #[arg(long, value_enum, default_value_t = VisitedKind::default())]
    visited: VisitedKind,
    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let graph = GraphFactory::from_file(&args.graph)?;
    let options = SearchOptions::default()
        .with_frontier(args.frontier)
        .with_table(args.table)
        .with_visited(args.visited);
    let engine = ShortestPathEngine::with_options(&graph, options);

    match args.target {
        Some(target) => {
            let tree = engine.run_to(args.source, target);
            match tree.path(target) {
                Some(path) => println!("distance {}, path {:?}", path.distance, path.vertices),
                None => println!("{} is unreachable from {}", target, args.source),
            }
        }
        None => {
            let tree = engine.run(args.source);
            for (vertex, distance) in tree.reachable() {
                println!("{} {}", vertex, distance);
            }
        }
    }

    Ok(())
}
