use tracing::{debug, trace, warn};

use super::{
    frontier::FrontierElement,
    heuristic::{EuclideanHeuristic, Heuristic, LazyEuclideanHeuristic},
    search_data::SearchData,
};
use crate::{
    error::SearchError,
    graphs::{
        path::{Path, PathFinding, ShortestPathRequest},
        PlanarGraph, VertexId,
    },
};

/// How an [`AStar`] evaluates the straight-line lower bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeuristicStrategy {
    /// One pass over all vertices before the search starts.
    #[default]
    Precomputed,
    /// Each vertex on first use.
    Lazy,
}

pub struct AStar<'a, G: ?Sized> {
    pub graph: &'a G,
    pub strategy: HeuristicStrategy,
}

impl<'a, G: PlanarGraph + ?Sized> AStar<'a, G> {
    pub fn new(graph: &'a G) -> AStar<'a, G> {
        AStar {
            graph,
            strategy: HeuristicStrategy::default(),
        }
    }

    pub fn with_strategy(graph: &'a G, strategy: HeuristicStrategy) -> AStar<'a, G> {
        AStar { graph, strategy }
    }
}

impl<'a, G: PlanarGraph + ?Sized> PathFinding for AStar<'a, G> {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Path, SearchError> {
        let (source, target) = (request.source(), request.target());

        match self.strategy {
            HeuristicStrategy::Precomputed => {
                let mut heuristic = EuclideanHeuristic::new(self.graph, target)?;
                best_first_search(self.graph, &mut heuristic, source, target)
            }
            HeuristicStrategy::Lazy => {
                let mut heuristic = LazyEuclideanHeuristic::new(self.graph, target)?;
                best_first_search(self.graph, &mut heuristic, source, target)
            }
        }
    }
}

/// Shortest path from `source` to `target` using A* with the straight-line
/// distance as heuristic.
pub fn find_shortest_path<G: PlanarGraph + ?Sized>(
    graph: &G,
    source: VertexId,
    target: VertexId,
) -> Result<Path, SearchError> {
    AStar::new(graph).shortest_path(&ShortestPathRequest::new(source, target))
}

/// Fails with `InvalidInput` if `source` or `target` is not a vertex of `graph`.
pub fn check_request<G: PlanarGraph + ?Sized>(
    graph: &G,
    source: VertexId,
    target: VertexId,
) -> Result<(), SearchError> {
    for vertex in [source, target] {
        if !graph.contains(vertex) || graph.coordinate(vertex).is_none() {
            return Err(SearchError::InvalidInput { vertex });
        }
    }

    Ok(())
}

/// Expands vertices in order of `distance + heuristic.lower_bound(vertex)`
/// until `target` is popped or the frontier runs empty.
///
/// The path is always read from the predecessor links, so an exhausted
/// frontier and a missing link both end up as `NoPathFound`.
pub fn best_first_search<G, H>(
    graph: &G,
    heuristic: &mut H,
    source: VertexId,
    target: VertexId,
) -> Result<Path, SearchError>
where
    G: PlanarGraph + ?Sized,
    H: Heuristic + ?Sized,
{
    check_request(graph, source, target)?;
    debug!(source, target, "search started");

    let mut data = SearchData::new(source, heuristic.lower_bound(source));

    while let Some(FrontierElement { priority, vertex: tail }) = data.pop() {
        if tail == target {
            break;
        }
        trace!(vertex = tail, priority, "expanding");

        for head in graph.neighbors(tail) {
            let Some(edge_cost) = graph.edge_cost(tail, head) else {
                warn!(tail, head, "neighbor without coordinate, skipping");
                continue;
            };
            data.update(tail, head, edge_cost, heuristic);
        }
    }

    let path = data.get_path(target);
    debug!(
        source,
        target,
        expanded = data.number_of_expanded_vertices(),
        pushes = data.number_of_pushes(),
        length = path.as_ref().map_or(0, |path| path.vertices.len()),
        "search finished"
    );

    path
}
