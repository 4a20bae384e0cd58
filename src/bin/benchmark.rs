use std::path::PathBuf;

use clap::Parser;
use planar_paths::{
    graphs::{graph_factory::GraphFactory, graph_functions::random_request},
    init_logging, pathfinder,
    utility::benchmark,
    HeuristicKind,
};

/// Does a single threaded benchmark on random requests.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.json` or `.bincode` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Heuristic guiding the search
    #[arg(long, value_enum, default_value = "precomputed")]
    heuristic: HeuristicKind,
    /// Number of benchmarks to be run.
    #[arg(short, long, default_value = "100")]
    number_of_benchmarks: u32,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let graph = GraphFactory::from_file(&args.graph).unwrap();
    let path_finder = pathfinder(&graph, args.heuristic);

    let mut rng = rand::thread_rng();
    let requests: Vec<_> = (0..args.number_of_benchmarks)
        .filter_map(|_| random_request(&graph, &mut rng))
        .collect();

    let average_duration = benchmark(&*path_finder, &requests);
    println!("average duration was {:?}", average_duration);
}
