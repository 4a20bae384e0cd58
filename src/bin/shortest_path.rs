use std::path::PathBuf;

use clap::Parser;
use planar_paths::{
    error::SearchError,
    graphs::{graph_factory::GraphFactory, path::ShortestPathRequest},
    init_logging, pathfinder, HeuristicKind,
};

/// Finds a shortest path between two intersections of a road map.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Road map in `.json` or `.bincode` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Start vertex
    #[arg(short, long)]
    source: u32,
    /// Goal vertex
    #[arg(short, long)]
    target: u32,
    /// Heuristic guiding the search
    #[arg(long, value_enum, default_value = "precomputed")]
    heuristic: HeuristicKind,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let graph = GraphFactory::from_file(&args.graph).unwrap();
    let path_finder = pathfinder(&graph, args.heuristic);

    match path_finder.shortest_path(&ShortestPathRequest::new(args.source, args.target)) {
        Ok(path) => {
            println!("{:?}", path.vertices);
            println!("distance {}", path.distance);
        }
        Err(SearchError::NoPathFound { start, goal }) => {
            println!("no path from {} to {}", start, goal);
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(2);
        }
    }
}
