use std::path::PathBuf;

use clap::Parser;
use planar_paths::{
    graphs::{graph_factory::GraphFactory, PlanarGraph},
    init_logging,
};

/// Reading a .bincode file is way faster than a .json map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Road map in `.json` format
    #[arg(short, long)]
    map: PathBuf,
    /// Output in `.bincode` format
    #[arg(short, long)]
    bincode: PathBuf,
}

fn main() {
    init_logging();
    let args = Args::parse();

    let graph = GraphFactory::from_map_file(&args.map).unwrap();
    println!(
        "Read {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    GraphFactory::write_bincode_file(&graph, &args.bincode).unwrap();
}
