use clap::ValueEnum;
use graphs::{path::PathFinding, PlanarGraph};
use search::{
    astar::{AStar, HeuristicStrategy},
    dijkstra::Dijkstra,
};

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

pub use search::astar::find_shortest_path;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    /// Straight-line distances of all vertices before the search
    Precomputed,
    /// Straight-line distances on first use
    Lazy,
    /// No heuristic, i.e. Dijkstra
    None,
}

pub fn pathfinder<G: PlanarGraph + ?Sized>(
    graph: &G,
    heuristic: HeuristicKind,
) -> Box<dyn PathFinding + '_> {
    match heuristic {
        HeuristicKind::Precomputed => {
            Box::new(AStar::with_strategy(graph, HeuristicStrategy::Precomputed))
        }
        HeuristicKind::Lazy => Box::new(AStar::with_strategy(graph, HeuristicStrategy::Lazy)),
        HeuristicKind::None => Box::new(Dijkstra { graph }),
    }
}

/// Installs a `tracing` subscriber that reads its filter from `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
