use super::{
    astar::{best_first_search, check_request},
    frontier::FrontierElement,
    heuristic::ZeroHeuristic,
    search_data::SearchData,
};
use crate::{
    error::SearchError,
    graphs::{
        path::{Path, PathFinding, ShortestPathRequest},
        Distance, PlanarGraph, VertexId,
    },
};

/// Uninformed search, used as ground truth for the informed one.
pub struct Dijkstra<'a, G: ?Sized> {
    pub graph: &'a G,
}

impl<'a, G: PlanarGraph + ?Sized> PathFinding for Dijkstra<'a, G> {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Result<Path, SearchError> {
        best_first_search(
            self.graph,
            &mut ZeroHeuristic,
            request.source(),
            request.target(),
        )
    }
}

/// Distances from `source` to every vertex, `None` for unreachable ones.
pub fn single_source<G: PlanarGraph + ?Sized>(
    graph: &G,
    source: VertexId,
) -> Result<Vec<Option<Distance>>, SearchError> {
    check_request(graph, source, source)?;

    let mut data = SearchData::new(source, 0.0);
    while let Some(FrontierElement { vertex: tail, .. }) = data.pop() {
        for head in graph.neighbors(tail) {
            if let Some(edge_cost) = graph.edge_cost(tail, head) {
                data.update(tail, head, edge_cost, &mut ZeroHeuristic);
            }
        }
    }

    Ok(graph.vertices().map(|vertex| data.distance(vertex)).collect())
}
