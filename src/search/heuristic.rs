use ahash::{HashMap, HashMapExt};
use rayon::prelude::*;

use crate::{
    error::SearchError,
    graphs::{euclidean_distance, Coordinate, Distance, PlanarGraph, VertexId},
};

/// Lower bound on the remaining distance from a vertex to the target of a
/// search. Implementations must never overestimate.
pub trait Heuristic {
    fn lower_bound(&mut self, vertex: VertexId) -> Distance;
}

/// Turns A* into Dijkstra.
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn lower_bound(&mut self, _vertex: VertexId) -> Distance {
        0.0
    }
}

/// Straight-line distance to the target, computed for every vertex upfront.
pub struct EuclideanHeuristic {
    lower_bounds: Vec<Distance>,
}

impl EuclideanHeuristic {
    pub fn new<G: PlanarGraph + ?Sized>(
        graph: &G,
        target: VertexId,
    ) -> Result<EuclideanHeuristic, SearchError> {
        let target_coordinate = target_coordinate(graph, target)?;

        let lower_bounds = (0..graph.number_of_vertices())
            .into_par_iter()
            .map(|vertex| {
                graph
                    .coordinate(vertex)
                    .map(|coordinate| euclidean_distance(&coordinate, &target_coordinate))
                    .unwrap_or(0.0)
            })
            .collect();

        Ok(EuclideanHeuristic { lower_bounds })
    }
}

impl Heuristic for EuclideanHeuristic {
    fn lower_bound(&mut self, vertex: VertexId) -> Distance {
        self.lower_bounds
            .get(vertex as usize)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Straight-line distance to the target, computed on first use and cached.
pub struct LazyEuclideanHeuristic<'a, G: ?Sized> {
    graph: &'a G,
    target_coordinate: Coordinate,
    cache: HashMap<VertexId, Distance>,
}

impl<'a, G: PlanarGraph + ?Sized> LazyEuclideanHeuristic<'a, G> {
    pub fn new(graph: &'a G, target: VertexId) -> Result<Self, SearchError> {
        Ok(LazyEuclideanHeuristic {
            graph,
            target_coordinate: target_coordinate(graph, target)?,
            cache: HashMap::new(),
        })
    }

    pub fn number_of_cached_vertices(&self) -> usize {
        self.cache.len()
    }
}

impl<'a, G: PlanarGraph + ?Sized> Heuristic for LazyEuclideanHeuristic<'a, G> {
    fn lower_bound(&mut self, vertex: VertexId) -> Distance {
        let graph = self.graph;
        let target_coordinate = self.target_coordinate;
        *self.cache.entry(vertex).or_insert_with(|| {
            graph
                .coordinate(vertex)
                .map(|coordinate| euclidean_distance(&coordinate, &target_coordinate))
                .unwrap_or(0.0)
        })
    }
}

fn target_coordinate<G: PlanarGraph + ?Sized>(
    graph: &G,
    target: VertexId,
) -> Result<Coordinate, SearchError> {
    graph
        .coordinate(target)
        .ok_or(SearchError::InvalidInput { vertex: target })
}
