use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};

use super::{
    frontier::{Frontier, FrontierElement},
    heuristic::Heuristic,
};
use crate::{
    error::SearchError,
    graphs::{path::Path, Distance, VertexId},
};

/// State of a single search. Created per query and dropped afterwards.
pub struct SearchData {
    source: VertexId,
    distances: HashMap<VertexId, Distance>,
    predecessors: HashMap<VertexId, Option<VertexId>>,
    expanded: HashSet<VertexId>,
    frontier: Frontier,
    number_of_pushes: u32,
}

impl SearchData {
    pub fn new(source: VertexId, source_lower_bound: Distance) -> SearchData {
        let mut data = SearchData {
            source,
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            expanded: HashSet::new(),
            frontier: Frontier::new(),
            number_of_pushes: 0,
        };

        data.distances.insert(source, 0.0);
        data.predecessors.insert(source, None);
        data.push(FrontierElement::new(source_lower_bound, source));

        data
    }

    /// Pops the frontier element with the smallest priority, skipping stale
    /// entries of vertices that were already expanded.
    pub fn pop(&mut self) -> Option<FrontierElement> {
        while let Some(element) = self.frontier.pop() {
            if self.expanded.insert(element.vertex) {
                return Some(element);
            }
        }

        None
    }

    /// Relaxes the edge `tail -> head`. Returns true if the distance of
    /// `head` improved.
    pub fn update<H: Heuristic + ?Sized>(
        &mut self,
        tail: VertexId,
        head: VertexId,
        edge_cost: Distance,
        heuristic: &mut H,
    ) -> bool {
        let Some(&distance_tail) = self.distances.get(&tail) else {
            return false;
        };
        let alternative_distance = distance_tail + edge_cost;

        let current_distance = self.distances.get(&head).copied().unwrap_or(Distance::INFINITY);
        if alternative_distance >= current_distance {
            return false;
        }

        self.distances.insert(head, alternative_distance);
        self.predecessors.insert(head, Some(tail));
        let priority = alternative_distance + heuristic.lower_bound(head);
        self.push(FrontierElement::new(priority, head));

        true
    }

    fn push(&mut self, element: FrontierElement) {
        self.frontier.push(element);
        self.number_of_pushes += 1;
    }

    pub fn distance(&self, vertex: VertexId) -> Option<Distance> {
        self.distances.get(&vertex).copied()
    }

    pub fn number_of_expanded_vertices(&self) -> u32 {
        self.expanded.len() as u32
    }

    pub fn number_of_pushes(&self) -> u32 {
        self.number_of_pushes
    }

    pub fn get_path(&self, target: VertexId) -> Result<Path, SearchError> {
        let vertices = reconstruct_path(&self.predecessors, self.source, target)?;
        let distance = self
            .distance(target)
            .ok_or(SearchError::NoPathFound {
                start: self.source,
                goal: target,
            })?;

        Ok(Path { vertices, distance })
    }
}

/// Follows the predecessor links from `target` back to `source` and returns
/// the vertices in order from `source` to `target`.
///
/// A target without entry, or a chain ending at a root other than `source`,
/// means there is no path. A link to a vertex without entry or a chain that
/// revisits a vertex is reported as `MalformedPredecessors`.
pub fn reconstruct_path(
    predecessors: &HashMap<VertexId, Option<VertexId>>,
    source: VertexId,
    target: VertexId,
) -> Result<Vec<VertexId>, SearchError> {
    let no_path = SearchError::NoPathFound {
        start: source,
        goal: target,
    };

    let mut vertices = vec![target];
    let mut current = target;
    while current != source {
        match predecessors.get(&current) {
            None if current == target => return Err(no_path),
            None => return Err(SearchError::MalformedPredecessors { vertex: current }),
            Some(None) => return Err(no_path),
            Some(Some(predecessor)) => {
                current = *predecessor;
                vertices.push(current);
            }
        }

        // a simple chain visits every vertex of the map at most once
        if vertices.len() > predecessors.len() {
            return Err(SearchError::MalformedPredecessors { vertex: current });
        }
    }

    vertices.reverse();
    Ok(vertices)
}
