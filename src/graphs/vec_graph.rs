use serde::{Deserialize, Serialize};

use super::{edge::Edge, Coordinate, PlanarGraph, VertexId};
use crate::error::GraphError;

/// Road map stored as one coordinate and one adjacency list per vertex.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VecGraph {
    coordinates: Vec<Coordinate>,
    adjacency: Vec<Vec<VertexId>>,
}

impl PlanarGraph for VecGraph {
    fn number_of_vertices(&self) -> u32 {
        self.coordinates.len() as u32
    }

    fn coordinate(&self, vertex: VertexId) -> Option<Coordinate> {
        self.coordinates.get(vertex as usize).copied()
    }

    fn neighbors(&self, vertex: VertexId) -> Box<dyn Iterator<Item = VertexId> + Send + '_> {
        let neighbors = if let Some(neighbors) = self.adjacency.get(vertex as usize) {
            neighbors.iter()
        } else {
            [].iter()
        };

        Box::new(neighbors.copied())
    }
}

impl VecGraph {
    pub fn new() -> VecGraph {
        VecGraph::default()
    }

    /// Builds a graph from coordinates and undirected edges. Duplicate edges
    /// are merged.
    pub fn from_edges(coordinates: Vec<Coordinate>, edges: &[Edge]) -> Result<VecGraph, GraphError> {
        let mut graph = VecGraph {
            adjacency: vec![Vec::new(); coordinates.len()],
            coordinates,
        };

        for edge in edges {
            graph.add_edge_bidirectional(edge)?;
        }

        Ok(graph)
    }

    pub fn add_vertex(&mut self, coordinate: Coordinate) -> VertexId {
        self.coordinates.push(coordinate);
        self.adjacency.push(Vec::new());
        (self.coordinates.len() - 1) as VertexId
    }

    /// Inserts `edge` in both directions. Returns `false` if it already existed.
    pub fn add_edge_bidirectional(&mut self, edge: &Edge) -> Result<bool, GraphError> {
        for vertex in [edge.tail(), edge.head()] {
            if !self.contains(vertex) {
                return Err(GraphError::UnknownVertex(vertex));
            }
        }

        if self.adjacency[edge.tail() as usize].contains(&edge.head()) {
            return Ok(false);
        }

        self.adjacency[edge.tail() as usize].push(edge.head());
        self.adjacency[edge.head() as usize].push(edge.tail());
        Ok(true)
    }

    pub fn number_of_edges(&self) -> u32 {
        self.adjacency
            .iter()
            .map(|neighbors| neighbors.len() as u32)
            .sum::<u32>()
            / 2
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(tail, neighbors)| {
                neighbors
                    .iter()
                    .filter_map(move |&head| Edge::new(tail as VertexId, head))
            })
            .filter(|edge| edge.tail() < edge.head())
    }
}

#[cfg(test)]
mod tests {
    use super::VecGraph;
    use crate::graphs::{edge::Edge, Coordinate, PlanarGraph};

    fn line_graph() -> VecGraph {
        let coordinates = (0..3)
            .map(|x| Coordinate::new(x as f64, 0.0).unwrap())
            .collect();
        let edges = [Edge::new(0, 1).unwrap(), Edge::new(1, 2).unwrap()];
        VecGraph::from_edges(coordinates, &edges).unwrap()
    }

    #[test]
    fn edges_are_bidirectional() {
        let graph = line_graph();
        assert!(graph.is_edge(0, 1));
        assert!(graph.is_edge(1, 0));
        assert!(!graph.is_edge(0, 2));
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn duplicate_edges_are_merged() {
        let mut graph = line_graph();
        assert!(!graph.add_edge_bidirectional(&Edge::new(1, 0).unwrap()).unwrap());
        assert_eq!(graph.neighbors(1).count(), 2);
        assert_eq!(graph.edges().count(), 2);
    }

    #[test]
    fn unknown_vertices_are_rejected() {
        let mut graph = line_graph();
        assert!(graph.add_edge_bidirectional(&Edge::new(0, 7).unwrap()).is_err());
        assert_eq!(graph.neighbors(7).count(), 0);
        assert_eq!(graph.coordinate(7), None);
    }
}
