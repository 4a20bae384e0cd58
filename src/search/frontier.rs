use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graphs::{Distance, VertexId};

/// A vertex waiting in the frontier together with its estimated total
/// distance `g + h`.
#[derive(Copy, Clone, Debug)]
pub struct FrontierElement {
    pub priority: Distance,
    pub vertex: VertexId,
}

impl FrontierElement {
    pub fn new(priority: Distance, vertex: VertexId) -> FrontierElement {
        FrontierElement { priority, vertex }
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for FrontierElement {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that the we flip the ordering on priorities.
        // In case of a tie the smaller vertex id wins.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for FrontierElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierElement {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierElement {}

/// Open set of a search. The same vertex may be pushed several times, stale
/// entries stay in the heap until they are popped.
#[derive(Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierElement>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, element: FrontierElement) {
        self.heap.push(element);
    }

    pub fn pop(&mut self) -> Option<FrontierElement> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Frontier, FrontierElement};

    #[test]
    fn pops_smallest_priority_first() {
        let mut frontier = Frontier::new();
        frontier.push(FrontierElement::new(2.5, 1));
        frontier.push(FrontierElement::new(0.5, 2));
        frontier.push(FrontierElement::new(1.5, 3));

        let order: Vec<_> = std::iter::from_fn(|| frontier.pop())
            .map(|element| element.vertex)
            .collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn ties_are_broken_by_vertex_id() {
        let mut frontier = Frontier::new();
        frontier.push(FrontierElement::new(1.0, 7));
        frontier.push(FrontierElement::new(1.0, 3));
        assert_eq!(frontier.pop().map(|element| element.vertex), Some(3));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut frontier = Frontier::new();
        frontier.push(FrontierElement::new(4.0, 1));
        frontier.push(FrontierElement::new(2.0, 1));
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop().map(|element| element.priority), Some(2.0));
        assert_eq!(frontier.pop().map(|element| element.priority), Some(4.0));
        assert!(frontier.is_empty());
    }
}
