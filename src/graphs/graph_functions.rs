use std::time::Instant;

use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use rand::prelude::*;
use rayon::prelude::*;

use super::{
    path::{
        Path, PathFinding, ShortestPathRequest, ShortestPathTestCase, ShortestPathTestTimingResult,
    },
    Distance, PlanarGraph, VertexId,
};
use crate::{error::SearchError, search::dijkstra::Dijkstra, utility::get_progressbar};

/// Relative tolerance used when comparing path distances.
pub const DISTANCE_TOLERANCE: f64 = 1e-9;

pub fn distances_match(a: Distance, b: Distance) -> bool {
    (a - b).abs() <= DISTANCE_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Sum of the edge lengths along `vertices`, or `None` if two consecutive
/// vertices are not adjacent.
pub fn path_distance<G: PlanarGraph + ?Sized>(graph: &G, vertices: &[VertexId]) -> Option<Distance> {
    vertices
        .iter()
        .tuple_windows()
        .map(|(&tail, &head)| {
            if !graph.is_edge(tail, head) {
                return None;
            }
            graph.edge_cost(tail, head)
        })
        .sum()
}

/// Check if a path is correct for a given test case.
pub fn validate_path<G: PlanarGraph + ?Sized>(
    graph: &G,
    validation: &ShortestPathTestCase,
    path: &Result<Path, SearchError>,
) -> Result<(), String> {
    let path = match (path, validation.distance) {
        (Ok(path), Some(_)) => path,
        (Ok(_), None) => return Err("a path was found where there should be none".to_string()),
        (Err(SearchError::NoPathFound { .. }), None) => return Ok(()),
        (Err(SearchError::NoPathFound { .. }), Some(_)) => {
            return Err("no path is found but there should be one".to_string())
        }
        (Err(error), _) => return Err(format!("search failed: {}", error)),
    };

    // Ensure fist and last vertex of path are source and target of request.
    if path.vertices.first() != Some(&validation.request.source()) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&validation.request.target()) {
        return Err("last vertex of path is not target of request".to_string());
    }

    // check if there is an edge between consecutive path vertices.
    let Some(true_distance) = path_distance(graph, &path.vertices) else {
        return Err("path contains consecutive vertices that are not adjacent".to_string());
    };

    if !distances_match(true_distance, path.distance) {
        return Err(format!(
            "reported distance {} differs from path length {}",
            path.distance, true_distance
        ));
    }
    if let Some(expected) = validation.distance {
        if !distances_match(expected, path.distance) {
            return Err(format!(
                "wrong path distance, expected {} got {}",
                expected, path.distance
            ));
        }
    }

    Ok(())
}

pub fn random_request<G: PlanarGraph + ?Sized>(
    graph: &G,
    rng: &mut impl Rng,
) -> Option<ShortestPathRequest> {
    if graph.number_of_vertices() <= 1 {
        // not enough vertices to get a request with source != target
        return None;
    }

    // guarantee that source != target
    let source = rng.gen_range(0..graph.number_of_vertices());
    let mut target = rng.gen_range(0..graph.number_of_vertices() - 1);
    if target >= source {
        target += 1;
    }

    Some(ShortestPathRequest::new(source, target))
}

/// Generates random requests and solves them with Dijkstra.
pub fn generate_random_pair_test_cases<G: PlanarGraph + ?Sized>(
    graph: &G,
    number_of_testcases: u32,
) -> Vec<ShortestPathTestCase> {
    let dijkstra = Dijkstra { graph };

    (0..number_of_testcases)
        .into_par_iter()
        .progress_with(get_progressbar(
            "Generating test cases",
            number_of_testcases as u64,
        ))
        .map_init(rand::thread_rng, |rng, _| random_request(graph, rng))
        .flatten()
        .map(|request| ShortestPathTestCase {
            request,
            distance: dijkstra.shortest_path_distance(&request).ok(),
        })
        .collect()
}

/// Runs every test case against `path_finder`, checks the result and
/// measures the time of each query.
pub fn validate_and_time<G: PlanarGraph + ?Sized>(
    test_cases: &[ShortestPathTestCase],
    path_finder: &dyn PathFinding,
    graph: &G,
) -> Result<Vec<ShortestPathTestTimingResult>, String> {
    test_cases
        .iter()
        .map(|test_case| {
            let start = Instant::now();
            let path = path_finder.shortest_path(&test_case.request);
            let timing_in_seconds = start.elapsed().as_secs_f64();

            validate_path(graph, test_case, &path).map_err(|error| {
                format!(
                    "{} -> {}: {}",
                    test_case.request.source(),
                    test_case.request.target(),
                    error
                )
            })?;

            Ok(ShortestPathTestTimingResult {
                test_case: test_case.clone(),
                timing_in_seconds,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{
        generate_random_pair_test_cases, path_distance, random_request, validate_and_time,
        validate_path,
    };
    use crate::{
        error::SearchError,
        graphs::{
            edge::Edge,
            path::{Path, ShortestPathRequest, ShortestPathTestCase},
            vec_graph::VecGraph,
            Coordinate,
        },
        search::astar::AStar,
    };

    fn path_graph() -> VecGraph {
        let coordinates = (0..4)
            .map(|x| Coordinate::new(x as f64, 0.0).unwrap())
            .collect();
        let edges = [(0, 1), (1, 2), (2, 3)]
            .into_iter()
            .map(|(tail, head)| Edge::new(tail, head).unwrap())
            .collect::<Vec<_>>();
        VecGraph::from_edges(coordinates, &edges).unwrap()
    }

    #[test]
    fn path_distance_requires_adjacency() {
        let graph = path_graph();
        assert_eq!(path_distance(&graph, &[0, 1, 2]), Some(2.0));
        assert_eq!(path_distance(&graph, &[0, 2]), None);
        assert_eq!(path_distance(&graph, &[3]), Some(0.0));
    }

    #[test]
    fn validate_path_detects_mistakes() {
        let graph = path_graph();
        let test_case = ShortestPathTestCase {
            request: ShortestPathRequest::new(0, 2),
            distance: Some(2.0),
        };

        let correct = Ok(Path {
            vertices: vec![0, 1, 2],
            distance: 2.0,
        });
        assert!(validate_path(&graph, &test_case, &correct).is_ok());

        let shortcut = Ok(Path {
            vertices: vec![0, 2],
            distance: 2.0,
        });
        assert!(validate_path(&graph, &test_case, &shortcut).is_err());

        let wrong_distance = Ok(Path {
            vertices: vec![0, 1, 2],
            distance: 1.5,
        });
        assert!(validate_path(&graph, &test_case, &wrong_distance).is_err());

        let missing = Err(SearchError::NoPathFound { start: 0, goal: 2 });
        assert!(validate_path(&graph, &test_case, &missing).is_err());
    }

    #[test]
    fn random_requests_have_distinct_endpoints() {
        let graph = path_graph();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let request = random_request(&graph, &mut rng).unwrap();
            assert_ne!(request.source(), request.target());
            assert!(request.target() < 4);
        }
        assert!(random_request(&VecGraph::new(), &mut rng).is_none());
    }

    #[test]
    fn generated_test_cases_validate_against_astar() {
        let graph = path_graph();
        let test_cases = generate_random_pair_test_cases(&graph, 20);
        assert_eq!(test_cases.len(), 20);
        assert!(test_cases.iter().all(|test_case| test_case.distance.is_some()));

        let astar = AStar::new(&graph);
        let results = validate_and_time(&test_cases, &astar, &graph).unwrap();
        assert_eq!(results.len(), 20);
    }
}
