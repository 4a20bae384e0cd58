use std::{fs::File, io::BufWriter, path::PathBuf, time::Instant};

use clap::Parser;
use planar_paths::{
    graphs::{graph_factory::GraphFactory, graph_functions::generate_random_pair_test_cases},
    init_logging,
};

/// Generates `number_of_tests` many random pair test cases for the graph
/// specified at `graph`. The test cases will be saved at `random_tests`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.json` or `.bincode` format
    #[arg(short, long)]
    graph: PathBuf,
    /// Path where the test cases will be saved
    #[arg(short, long)]
    random_tests: PathBuf,
    /// Number of tests to be generated
    #[arg(short, long, default_value = "1000")]
    number_of_tests: u32,
}

fn main() {
    init_logging();
    let args = Args::parse();

    println!("Loading Graph");
    let graph = GraphFactory::from_file(&args.graph).unwrap();

    println!("Generating random pair test cases");
    let start = Instant::now();
    let random_pairs = generate_random_pair_test_cases(&graph, args.number_of_tests);
    println!("took {:?}", start.elapsed());

    println!("Writing test cases to file");
    let mut writer = BufWriter::new(File::create(&args.random_tests).unwrap());
    serde_json::to_writer(&mut writer, &random_pairs).unwrap();
}
