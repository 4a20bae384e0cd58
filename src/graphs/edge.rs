use serde::{Deserialize, Serialize};

use super::VertexId;

/// An undirected road between two distinct vertices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, Debug)]
pub struct Edge {
    tail: VertexId,
    head: VertexId,
}

impl Edge {
    pub fn new(tail: VertexId, head: VertexId) -> Option<Edge> {
        if tail == head {
            return None;
        }

        Some(Edge { tail, head })
    }

    pub fn tail(&self) -> VertexId {
        self.tail
    }

    pub fn head(&self) -> VertexId {
        self.head
    }
}

#[cfg(test)]
mod tests {
    use super::Edge;

    #[test]
    fn self_loops_are_rejected() {
        assert!(Edge::new(3, 3).is_none());
    }
}
