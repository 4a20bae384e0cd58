use serde::{Deserialize, Serialize};

use crate::error::GraphError;

pub mod edge;
pub mod graph_factory;
pub mod graph_functions;
pub mod path;
pub mod vec_graph;

pub type VertexId = u32;
pub type Distance = f64;

/// Position of a vertex in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Result<Coordinate, GraphError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GraphError::NonFiniteCoordinate { x, y });
        }

        Ok(Coordinate { x, y })
    }
}

pub fn euclidean_distance(a: &Coordinate, b: &Coordinate) -> Distance {
    (a.x - b.x).hypot(a.y - b.y)
}

/// An undirected graph embedded in the plane.
///
/// Vertices are dense, i.e. every id in `0..number_of_vertices()` is a vertex.
/// The length of an edge is the straight-line distance between its endpoints.
pub trait PlanarGraph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    /// Coordinate of `vertex`, or `None` if it is not part of the graph.
    fn coordinate(&self, vertex: VertexId) -> Option<Coordinate>;

    /// Adjacent vertices of `vertex`. Empty for unknown vertices.
    fn neighbors(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + Send + '_>;

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + Send + '_> {
        Box::new(0..self.number_of_vertices())
    }

    fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.number_of_vertices()
    }

    /// Straight-line distance between two vertices, if both exist.
    fn edge_cost(&self, tail: VertexId, head: VertexId) -> Option<Distance> {
        Some(euclidean_distance(
            &self.coordinate(tail)?,
            &self.coordinate(head)?,
        ))
    }

    fn is_edge(&self, tail: VertexId, head: VertexId) -> bool {
        self.neighbors(tail).any(|neighbor| neighbor == head)
    }
}
