use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
    time::Duration,
};

use clap::Parser;
use planar_paths::{
    graphs::{
        graph_factory::GraphFactory, graph_functions::validate_and_time,
        path::ShortestPathTestCase,
    },
    init_logging, pathfinder, HeuristicKind,
};

/// Answers every test case with the chosen search, validates the paths and
/// reports the average query time.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.json` or `.bincode` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Path of the test cases
    #[arg(short, long)]
    test_cases: PathBuf,
    /// Heuristic guiding the search
    #[arg(long, value_enum, default_value = "precomputed")]
    heuristic: HeuristicKind,
    /// Path where the results shall be saved
    #[arg(short = 'o', long)]
    timing_results: Option<PathBuf>,
}

fn main() {
    init_logging();
    let args = Args::parse();

    println!("Reading test cases");
    let mut reader = BufReader::new(File::open(&args.test_cases).unwrap());
    let test_cases: Vec<ShortestPathTestCase> = serde_json::from_reader(&mut reader).unwrap();

    println!("Reading graph");
    let graph = GraphFactory::from_file(&args.graph).unwrap();
    let path_finder = pathfinder(&graph, args.heuristic);

    println!("Testing & validating");
    let results = validate_and_time(&test_cases, &*path_finder, &graph).unwrap();
    let average: f64 = results
        .iter()
        .map(|result| result.timing_in_seconds)
        .sum::<f64>()
        / results.len().max(1) as f64;
    let average = Duration::from_secs_f64(average);

    println!(
        "All correct. Took {:?} per query averaged over {} queries",
        average,
        test_cases.len()
    );

    if let Some(timing_results) = args.timing_results {
        println!("Writing timing results");
        let writer = BufWriter::new(File::create(timing_results).unwrap());
        serde_json::to_writer(writer, &results).unwrap();
    }
}
