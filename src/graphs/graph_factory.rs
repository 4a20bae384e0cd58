use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};

use super::{edge::Edge, vec_graph::VecGraph, Coordinate, PlanarGraph, VertexId};
use crate::error::GraphError;

/// Road map as stored in `.json` map files.
///
/// `intersections` maps every vertex id to its `[x, y]` position, `roads[i]`
/// lists the vertices adjacent to vertex `i`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoadMap {
    pub intersections: BTreeMap<VertexId, [f64; 2]>,
    pub roads: Vec<Vec<VertexId>>,
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_file(path: &Path) -> Result<VecGraph, GraphError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::from_map_file(path),
            Some("bincode") => Self::from_bincode_file(path),
            _ => Err(GraphError::UnknownFileExtension(path.to_path_buf())),
        }
    }

    pub fn from_map_file(path: &Path) -> Result<VecGraph, GraphError> {
        let reader = BufReader::new(File::open(path)?);
        let road_map: RoadMap = serde_json::from_reader(reader)?;
        Self::from_road_map(&road_map)
    }

    pub fn from_bincode_file(path: &Path) -> Result<VecGraph, GraphError> {
        let reader = BufReader::new(File::open(path)?);
        let graph: VecGraph = bincode::deserialize_from(reader)?;
        Ok(graph)
    }

    pub fn write_bincode_file(graph: &VecGraph, path: &Path) -> Result<(), GraphError> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, graph)?;
        Ok(())
    }

    /// Converts a road map into a graph. Roads are made symmetric, repeated
    /// roads are merged and roads from an intersection to itself are dropped.
    pub fn from_road_map(road_map: &RoadMap) -> Result<VecGraph, GraphError> {
        let mut coordinates = Vec::with_capacity(road_map.intersections.len());
        for (expected, (&vertex, &[x, y])) in road_map.intersections.iter().enumerate() {
            if vertex != expected as VertexId {
                return Err(GraphError::MissingVertex(expected as VertexId));
            }
            coordinates.push(Coordinate::new(x, y)?);
        }

        let mut edges = Vec::new();
        for (tail, heads) in road_map.roads.iter().enumerate() {
            let tail = tail as VertexId;
            if tail as usize >= coordinates.len() && !heads.is_empty() {
                return Err(GraphError::UnknownVertex(tail));
            }
            edges.extend(heads.iter().filter_map(|&head| Edge::new(tail, head)));
        }

        VecGraph::from_edges(coordinates, &edges)
    }

    pub fn to_road_map(graph: &VecGraph) -> RoadMap {
        RoadMap {
            intersections: graph
                .vertices()
                .filter_map(|vertex| {
                    let coordinate = graph.coordinate(vertex)?;
                    Some((vertex, [coordinate.x, coordinate.y]))
                })
                .collect(),
            roads: graph
                .vertices()
                .map(|vertex| graph.neighbors(vertex).collect())
                .collect(),
        }
    }
}
