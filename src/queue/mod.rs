use std::cmp::Ordering;

use clap::ValueEnum;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Population, VertexId};

pub mod heap_queue;

/// Order in which the frontier hands out vertices.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PriorityPolicy {
    /// Smallest tentative distance first. Classic Dijkstra.
    #[default]
    DistanceFirst,
    /// Largest population first, then smallest tentative distance. Does not
    /// settle vertices in distance order, so a vertex can be expanded again
    /// once a shorter route to it turns up.
    PopulationFirst,
}

impl PriorityPolicy {
    pub fn element(
        &self,
        distance: Distance,
        vertex: VertexId,
        population: Population,
    ) -> FrontierElement {
        let priority = match self {
            PriorityPolicy::DistanceFirst => 0,
            PriorityPolicy::PopulationFirst => population,
        };
        FrontierElement {
            priority,
            distance: OrderedFloat(distance),
            vertex,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FrontierElement {
    pub priority: Population,
    pub distance: OrderedFloat<Distance>,
    pub vertex: VertexId,
}

// The priority queue depends on `Ord`. The queue is a max-heap, so higher
// priorities come first while distances and vertices are flipped to come out
// smallest first. Comparing vertices last keeps `PartialEq` and `Ord`
// consistent and makes ties deterministic.
impl Ord for FrontierElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.distance.cmp(&self.distance))
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for FrontierElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FrontierElement {
    /// Element ordered by distance alone.
    pub fn new(distance: Distance, vertex: VertexId) -> FrontierElement {
        PriorityPolicy::DistanceFirst.element(distance, vertex, 0)
    }

    pub fn distance(&self) -> Distance {
        self.distance.into_inner()
    }
}

pub trait FrontierQueue {
    fn push(&mut self, element: FrontierElement);
    fn pop(&mut self) -> Option<FrontierElement>;
    fn is_empty(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::{heap_queue::HeapQueue, FrontierElement, FrontierQueue, PriorityPolicy};

    fn drain(queue: &mut HeapQueue) -> Vec<u32> {
        std::iter::from_fn(|| queue.pop())
            .map(|element| element.vertex)
            .collect()
    }

    #[test]
    fn distance_first_ignores_population() {
        let policy = PriorityPolicy::DistanceFirst;
        let mut queue = HeapQueue::new();
        queue.push(policy.element(3.0, 0, 500));
        queue.push(policy.element(1.0, 1, 50));
        queue.push(policy.element(2.0, 2, 100));

        assert_eq!(drain(&mut queue), vec![1, 2, 0]);
    }

    #[test]
    fn population_first_breaks_ties_by_distance() {
        let policy = PriorityPolicy::PopulationFirst;
        let mut queue = HeapQueue::new();
        queue.push(policy.element(1.0, 0, 50));
        queue.push(policy.element(9.0, 1, 400));
        queue.push(policy.element(2.0, 2, 400));

        assert_eq!(drain(&mut queue), vec![2, 1, 0]);
    }

    #[test]
    fn equal_keys_pop_smallest_vertex_first() {
        let mut queue = HeapQueue::new();
        queue.push(FrontierElement::new(1.0, 7));
        queue.push(FrontierElement::new(1.0, 3));
        queue.push(FrontierElement::new(1.0, 5));

        assert_eq!(drain(&mut queue), vec![3, 5, 7]);
        assert!(queue.is_empty());
    }
}
